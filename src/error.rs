use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// Any failure that cannot be confidently attributed to any other error
    /// category in this enum.
    ///
    /// In particular this means that use of Internal is never a guarantee
    /// the error is not, for example due to a user error - merely that it
    /// cannot be confidently determined by the code.
    Internal,

    /// The user provided invalid input or performed an action that is
    /// unsupported or impossible to complete.
    User,
}

/// Fine-grained condition flags for consumers that want to branch on error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// One or more required inputs were missing or invalid. The offending
    /// fields are available through [`CipherError::fields`].
    MissingInput,
    /// The substitution key was empty when it reached the cipher.
    InvalidKey,
    /// The transposition grid was asked for fewer than two columns.
    InvalidColumnCount,
    /// Input text (file contents or key) was not valid UTF-8.
    InvalidEncoding,
    /// Key could not be obtained from the configured reader.
    KeyUnavailable,
    /// Unexpected state reached within cipher logic.
    InternalInvariant,
    /// Interaction with the filesystem, stdin/stdout, or other I/O failed.
    Io,
}

/// Names of the inputs a caller supplies. The string tags are a stable
/// contract for presentation layers highlighting offending inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    PlainText,
    CipherText,
    Key,
    TransposeKey,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::PlainText => "plainText",
            Field::CipherText => "cipherText",
            Field::Key => "key",
            Field::TransposeKey => "transposeKey",
        }
    }

    /// Identifier of the warning shown next to the encrypt/decrypt buttons
    /// while this field is missing.
    pub fn warning_type(self) -> &'static str {
        match self {
            Field::PlainText => "missing-plaintext",
            Field::CipherText => "missing-ciphertext",
            Field::Key => "missing-key",
            Field::TransposeKey => "missing-transpose-key",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single missing or invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
#[error("{msg}")]
pub struct CipherError {
    /// Broad error category, always provided.
    pub category: ErrorCategory,
    /// Optional specific condition tag for consumers that need to
    /// branch their behavior. Any code consuming errors MUST handle
    /// the absence of a defined kind.
    pub kind: Option<ErrorKind>,
    fields: Vec<FieldError>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    msg: String,
}

impl CipherError {
    /// Creates a new error with a required category and display message.
    pub fn new(category: ErrorCategory, msg: impl Into<String>) -> Self {
        Self {
            category,
            kind: None,
            fields: Vec::new(),
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that also tags the failure with a kind.
    pub fn with_kind(category: ErrorCategory, kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            category,
            kind: Some(kind),
            fields: Vec::new(),
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that carries both a kind tag and the originating source error.
    pub fn with_kind_and_source(
        category: ErrorCategory,
        kind: ErrorKind,
        msg: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            category,
            kind: Some(kind),
            fields: Vec::new(),
            source: Some(Box::new(source)),
            msg: msg.into(),
        }
    }

    /// Creates a validation failure listing every offending field.
    ///
    /// The summary message names the fields in the order given.
    pub fn validation(fields: Vec<FieldError>) -> Self {
        let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
        let msg = format!("missing or invalid input: {}", names.join(", "));
        Self {
            category: ErrorCategory::User,
            kind: Some(ErrorKind::MissingInput),
            fields,
            source: None,
            msg,
        }
    }

    /// The user-facing message carried by the error.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Field-level failures; empty unless the kind is [`ErrorKind::MissingInput`].
    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    /// Returns the first failure recorded against `field`, if any.
    pub fn field_error(&self, field: Field) -> Option<&FieldError> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// Returns the preserved source error if present.
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Wraps the current error with a higher-level message while preserving the original as source.
    ///
    /// Field errors are lifted to the wrapper so callers do not have to walk
    /// the source chain to find them.
    pub fn with_context(mut self, msg: impl Into<String>) -> Self {
        let category = self.category;
        let kind = self.kind;
        let fields = std::mem::take(&mut self.fields);
        Self {
            category,
            kind,
            fields,
            source: Some(Box::new(self)),
            msg: msg.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CipherError>;
