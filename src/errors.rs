//! Error types for the tools crate

use thiserror::Error;

/// Main error type for the tools crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolsError {
    /// Component index outside of 0..=2
    #[error("index out of range: {index} > 2")]
    IndexOutOfRange {
        /// The index that was requested
        index: usize,
    },

    /// Free-form message, usually built with [`tools_error!`](crate::tools_error)
    #[error("{0}")]
    Message(String),
}

/// Result type for tools operations
pub type Result<T> = std::result::Result<T, ToolsError>;

impl From<String> for ToolsError {
    fn from(msg: String) -> Self {
        ToolsError::Message(msg)
    }
}

impl From<&str> for ToolsError {
    fn from(msg: &str) -> Self {
        ToolsError::Message(msg.to_string())
    }
}

/// Builds a [`ToolsError::Message`] by concatenating every argument's `Display` output
///
/// ```rust
/// use tools::tools_error;
///
/// let err = tools_error!("error: ", 0, " something failed: ", 42);
/// assert_eq!(err.to_string(), "error: 0 something failed: 42");
/// ```
#[macro_export]
macro_rules! tools_error {
    ($($part:expr),+ $(,)?) => {{
        use ::std::fmt::Write as _;
        let mut msg = ::std::string::String::new();
        $(
            let _ = ::std::write!(msg, "{}", $part);
        )+
        $crate::errors::ToolsError::Message(msg)
    }};
}
