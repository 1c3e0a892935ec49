// src/shared/patch.rs
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics for nullable fields)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep current value
// - Null: explicitly null => clear
// - Value(v): replace with v
//
// Omitted fields become Unset through #[serde(default)].
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Resolves against the stored value of an optional field.
    pub fn apply_to(self, current: Option<T>) -> Option<T> {
        match self {
            PatchField::Unset => current,
            PatchField::Null => None,
            PatchField::Value(v) => Some(v),
        }
    }
}

/// What an update does with a field the client omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsentPolicy {
    Keep,
    Clear,
}

impl AbsentPolicy {
    pub fn resolve<T: Default>(self, input: Option<T>, current: T) -> T {
        match (input, self) {
            (Some(value), _) => value,
            (None, AbsentPolicy::Keep) => current,
            (None, AbsentPolicy::Clear) => T::default(),
        }
    }
}
