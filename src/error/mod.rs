use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// The unified error type for objkit
///
/// The typed helpers in [`crate::core`] cannot fail on their own; this type is
/// produced by the dynamic [`crate::json`] layer and by configuration parsing.
#[derive(Error, Debug)]
pub enum ObjkitError {
    #[error("[E{code:04}] Expected an object for `{argument}`, found {found}")]
    NotAnObject {
        code: u16,
        argument: String,
        found: &'static str,
    },

    #[error("[E{code:04}] Transform failed for key `{key}`")]
    Transform {
        code: u16,
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ObjkitError {
    /// Create a not-an-object error for a named argument
    pub fn not_an_object(argument: impl Into<String>, found: &'static str) -> Self {
        Self::NotAnObject {
            code: ErrorCode::INPUT_NOT_AN_OBJECT,
            argument: argument.into(),
            found,
        }
    }

    /// Create a not-an-object error for the item at `index` of a sequence
    pub fn sequence_item_not_an_object(index: usize, found: &'static str) -> Self {
        Self::NotAnObject {
            code: ErrorCode::INPUT_SEQUENCE_ITEM_NOT_AN_OBJECT,
            argument: format!("objs[{}]", index),
            found,
        }
    }

    /// Wrap a caller transform failure with the key it failed on
    pub fn transform(
        key: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Transform {
            code: ErrorCode::TRANSFORM_FAILED,
            key: key.into(),
            source: source.into(),
        }
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to a configuration error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        if let Self::Config { source: src, .. } = &mut self {
            *src = Some(source.into());
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::NotAnObject { code, .. }
            | Self::Transform { code, .. }
            | Self::Config { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::NotAnObject {
                argument, found, ..
            } => format!("`{}` must be an object, got {}", argument, found),
            Self::Transform { key, source, .. } => {
                format!("Could not transform `{}`: {}", key, source)
            }
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
        }
    }
}

/// Type alias for Results using ObjkitError
pub type Result<T> = std::result::Result<T, ObjkitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_not_an_object_display() {
        let err = ObjkitError::not_an_object("a", "null");
        assert_eq!(err.code(), ErrorCode::INPUT_NOT_AN_OBJECT);
        assert_eq!(
            err.to_string(),
            "[E1001] Expected an object for `a`, found null"
        );
    }

    #[test]
    fn test_sequence_item_error_names_index() {
        let err = ObjkitError::sequence_item_not_an_object(2, "string");
        assert_eq!(err.code(), ErrorCode::INPUT_SEQUENCE_ITEM_NOT_AN_OBJECT);
        assert!(err.to_string().contains("objs[2]"));
    }

    #[test]
    fn test_transform_keeps_source() {
        let err = ObjkitError::transform("port", "not a number");
        assert_eq!(err.code(), ErrorCode::TRANSFORM_FAILED);
        assert_eq!(err.source().map(|s| s.to_string()), Some("not a number".to_string()));
        assert_eq!(err.user_message(), "Could not transform `port`: not a number");
    }

    #[test]
    fn test_config_with_source() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ObjkitError::config_with_code(ErrorCode::CONFIG_PARSE_ERROR, "bad options")
            .with_source(parse_err);

        assert_eq!(err.code(), ErrorCode::CONFIG_PARSE_ERROR);
        assert!(err.source().is_some());
        assert_eq!(err.user_message(), "Configuration problem: bad options");
    }
}
