use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A named permission unit.
///
/// Scopes flagged `is_default` are granted when a request makes no explicit
/// (or no valid) selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    pub name: Cow<'static, str>,
    pub is_default: bool,
}

impl Scope {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            is_default: false,
        }
    }

    pub fn default_scope(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            is_default: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for Scope {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}
