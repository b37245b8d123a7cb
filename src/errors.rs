use itertools::Itertools;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A single violated constraint on a parameter field, naming the field and describing the
/// invalid value that was given for it.
#[derive(Debug, Clone)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}': {}", self.field, self.message)
    }
}

/// The result of a failed validation pass. All violated constraints are collected in a single
/// pass and reported together, rather than failing on the first one encountered.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns true if the given field name appears in any of the violations
    pub fn names_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid parameters: {}",
            self.violations.iter().map(|v| v.to_string()).join("; ")
        )
    }
}

impl Error for ValidationError {}
