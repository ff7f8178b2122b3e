use crate::{model::SchemaError, store::StoreError};
use serde::Serialize;
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error for serializer operations. Validation failures are
/// collected per operation; schema failures only occur at build time;
/// store failures pass through unmodified.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

///
/// ValidationIssue
///
/// One rejected input value, addressed by its payload path
/// (`"title"`, `"author.name"`, `"items[3].id"`).
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Prepend a field segment to the issue path.
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.path = if self.path.is_empty() {
            prefix.to_string()
        } else if self.path.starts_with('[') {
            format!("{prefix}{}", self.path)
        } else {
            format!("{prefix}.{}", self.path)
        };
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

///
/// ValidationError
///
/// All issues collected by one operation, surfaced once. Serializable
/// so callers can hand it back as a structured error response.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    #[must_use]
    pub const fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    /// Single-issue constructor for whole-operation failures.
    #[must_use]
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![ValidationIssue::new(path, message)],
        }
    }

    /// Prepend a field segment to every collected issue path.
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.issues = self
            .issues
            .into_iter()
            .map(|issue| issue.with_prefix(prefix))
            .collect();
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed ({} issue(s))", self.issues.len())?;
        for issue in &self.issues {
            write!(f, "; {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
