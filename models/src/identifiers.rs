// models/src/identifiers.rs

use core::{borrow::Borrow, ops::Deref};
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ValidationError, ValidationResult};

/// An opaque record identifier. Identifiers are generated server-side and
/// travel unchanged through path segments and JSON bodies.
///
/// Callers must not assume any ordering or format beyond "unique string".
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Generates a fresh identifier from a random (v4) UUID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an externally supplied identifier.
    ///
    /// # Errors
    /// Returns `ValidationError::Empty` if `value` is empty or only whitespace.
    pub fn new(value: String) -> ValidationResult<Self> {
        if value.trim().is_empty() {
            return Err(ValidationError::Empty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets stores keyed by `Identifier` be queried with a raw path segment.
impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::new(s.to_string())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}
