//! In-memory binder backed by a shared value blackboard.
//!
//! Writes are staged per path while curves evaluate and committed by the
//! per-frame `update` call, so readers observe at most one write per path
//! per frame.

use std::sync::{Arc, Mutex};

use hashbrown::{HashMap, HashSet};
use log::{debug, trace};

use anima_api_core::{Value, ValueKind};

use crate::binder::AnimBinder;
use crate::target::AnimTarget;

/// Binder over a declared set of animatable properties. Each resolved
/// target stages writes into a pending buffer shared with the binder;
/// `update` commits the staged writes to the readable store.
#[derive(Default)]
pub struct BlackboardBinder {
    declared: HashMap<String, ValueKind>,
    bound: HashSet<String>,
    pending: Arc<Mutex<HashMap<String, Value>>>,
    committed: HashMap<String, Value>,
}

impl BlackboardBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an animatable property ahead of resolution. Re-declaring a
    /// path overwrites its kind.
    pub fn declare(&mut self, path: impl Into<String>, kind: ValueKind) {
        self.declared.insert(path.into(), kind);
    }

    /// Committed value for `path`, if any write has been flushed.
    pub fn value(&self, path: &str) -> Option<&Value> {
        self.committed.get(path)
    }

    /// Number of paths currently driven by a resolved target.
    pub fn bound_len(&self) -> usize {
        self.bound.len()
    }
}

impl AnimBinder for BlackboardBinder {
    fn resolve(&mut self, path: &str) -> Option<AnimTarget> {
        let kind = match self.declared.get(path) {
            Some(kind) => *kind,
            None => {
                debug!("no animatable property declared for `{path}`");
                return None;
            }
        };
        self.bound.insert(path.to_string());
        let pending = Arc::clone(&self.pending);
        let key = path.to_string();
        Some(AnimTarget::new(kind, move |value| {
            pending.lock().unwrap().insert(key.clone(), value.clone());
        }))
    }

    fn unresolve(&mut self, path: &str) {
        self.bound.remove(path);
        self.pending.lock().unwrap().remove(path);
    }

    fn update(&mut self, _delta_time: f32) {
        let mut pending = self.pending.lock().unwrap();
        if pending.is_empty() {
            return;
        }
        trace!("committing {} staged writes", pending.len());
        for (path, value) in pending.drain() {
            self.committed.insert(path, value);
        }
    }
}
