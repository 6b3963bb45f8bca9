//! Errors reported by `cargo xtask`.

use std::fmt::{self, Display, Formatter};
use std::path::Path;

/// What kind of failure stopped a command.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum XtaskErrorCategory {
    /// `tools/*.toml` could not be read, parsed or accepted.
    Config,
    /// The workspace layout is not what xtask expects.
    Environment,
    /// Bad arguments, a stale generated table or a failed audit.
    Validation,
    /// Reading or writing files failed.
    Io,
    /// An SVG asset or the JSON table could not be parsed or serialized.
    Data,
}

/// A command failure plus the context needed to act on it.
///
/// Rendered on one line as `message [operation: ..] [target: ..] [hint: ..]`, omitting absent
/// fields.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct XtaskError {
    /// Failure kind.
    pub category: XtaskErrorCategory,
    /// What went wrong.
    pub message: String,
    /// Command step that failed, e.g. `icons audit`.
    pub operation: Option<String>,
    /// File involved.
    pub target: Option<String>,
    /// Suggested fix.
    pub hint: Option<String>,
}

/// Result alias used throughout xtask.
pub type XtaskResult<T> = Result<T, XtaskError>;

impl XtaskError {
    /// Bare error of `category`.
    pub fn new(category: XtaskErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            operation: None,
            target: None,
            hint: None,
        }
    }

    /// [`XtaskErrorCategory::Config`] error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Config, message)
    }

    /// [`XtaskErrorCategory::Environment`] error.
    pub fn environment(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Environment, message)
    }

    /// [`XtaskErrorCategory::Validation`] error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Validation, message)
    }

    /// [`XtaskErrorCategory::Io`] error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Io, message)
    }

    /// [`XtaskErrorCategory::Data`] error.
    pub fn data(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Data, message)
    }

    /// Names the failing step.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Names the file involved.
    pub fn with_path(mut self, path: &Path) -> Self {
        self.target = Some(path.display().to_string());
        self
    }

    /// Suggests a fix.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for XtaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        let context = [
            ("operation", &self.operation),
            ("target", &self.target),
            ("hint", &self.hint),
        ];
        for (label, value) in context {
            if let Some(value) = value {
                write!(f, " [{label}: {value}]")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for XtaskError {}

impl From<std::io::Error> for XtaskError {
    fn from(value: std::io::Error) -> Self {
        Self::io(value.to_string())
    }
}

impl From<serde_json::Error> for XtaskError {
    fn from(value: serde_json::Error) -> Self {
        Self::data(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_appends_context_fields_in_order() {
        let err = XtaskError::data("bad svg")
            .with_operation("icons generate")
            .with_path(Path::new("public/icons/solid/bell.svg"))
            .with_hint("re-export the asset");
        assert_eq!(
            err.to_string(),
            "bad svg [operation: icons generate] [target: public/icons/solid/bell.svg] [hint: re-export the asset]"
        );
        assert_eq!(err.category, XtaskErrorCategory::Data);
    }

    #[test]
    fn io_errors_convert_to_io_category() {
        let err: XtaskError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category, XtaskErrorCategory::Io);
        assert_eq!(err.message, "gone");
    }
}
