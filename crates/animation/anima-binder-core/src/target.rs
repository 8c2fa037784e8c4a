//! Write handles for animated properties.

use std::fmt;

use anima_api_core::{Value, ValueKind};

/// Setter invoked for every animated write to a resolved target.
pub type SetterFn = dyn FnMut(&Value) + Send;

/// Errors produced when writing through an [`AnimTarget`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BinderError {
    /// The written value did not match the kind the target was bound with.
    #[error("value kind mismatch: expected {expected:?}, got {actual:?}")]
    ValueKindMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },
}

/// A mutable handle capable of writing an animated value to one concrete
/// destination. Resolving a locator string to a target is the only dynamic
/// step; the target itself captures a typed setter plus the value kind it
/// expects.
pub struct AnimTarget {
    kind: ValueKind,
    setter: Box<SetterFn>,
}

impl AnimTarget {
    pub fn new<F>(kind: ValueKind, setter: F) -> Self
    where
        F: FnMut(&Value) + Send + 'static,
    {
        Self {
            kind,
            setter: Box::new(setter),
        }
    }

    /// Kind of value this target accepts.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Write a value through the captured setter. A value of any kind other
    /// than the bound one is rejected before the setter runs.
    pub fn set(&mut self, value: &Value) -> Result<(), BinderError> {
        if value.kind() != self.kind {
            return Err(BinderError::ValueKindMismatch {
                expected: self.kind,
                actual: value.kind(),
            });
        }
        (self.setter)(value);
        Ok(())
    }
}

impl fmt::Debug for AnimTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimTarget")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
