//! Binder trait and the null binder.

use crate::target::AnimTarget;

/// Trait for resolving animation target paths into write handles.
/// Concrete binders own whatever lookup state they need; the contract
/// itself is stateless from the evaluator's point of view.
pub trait AnimBinder {
    /// Resolve `path` into a target that will handle writing the value, or
    /// `None` when no such target exists. Repeated calls with the same path
    /// must be idempotent.
    fn resolve(&mut self, path: &str) -> Option<AnimTarget>;

    /// Called when no curve is driving `path` anymore. Implementations may
    /// release per-path state; doing nothing is valid.
    fn unresolve(&mut self, path: &str) {
        let _ = path;
    }

    /// Called once per frame after that frame's writes have been applied.
    /// `delta_time` is the frame duration in seconds.
    fn update(&mut self, delta_time: f32) {
        let _ = delta_time;
    }
}

/// Binder that never resolves anything. Stand-in before a scene is attached.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullBinder;

impl AnimBinder for NullBinder {
    fn resolve(&mut self, _path: &str) -> Option<AnimTarget> {
        None
    }
}
