//! anima-binder-core: binder contract between curve evaluation and concrete
//! scene targets (engine-agnostic).
//!
//! An evaluator resolves each animated locator string once through an
//! [`AnimBinder`], writes sampled values through the returned
//! [`AnimTarget`]s while playing, and calls `update` once per frame after
//! all writes for that frame have been applied.

pub mod binder;
pub mod blackboard;
pub mod target;

// Re-exports for consumers (adapters)
pub use binder::{AnimBinder, NullBinder};
pub use blackboard::BlackboardBinder;
pub use target::{AnimTarget, BinderError, SetterFn};
pub use anima_api_core::{Locator, LocatorError, Value, ValueKind};
