pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("I/O error: {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: String,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("schedule error: {0}")]
    Schedule(String),
    #[error("handler {id} failed: {message}")]
    Handler { id: String, message: String },
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            context: "I/O operation failed".to_string(),
        }
    }
}

impl AppError {
    pub fn io_with_context(source: std::io::Error, context: impl Into<String>) -> Self {
        Self::Io {
            source,
            context: context.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn schedule(message: impl Into<String>) -> Self {
        Self::Schedule(message.into())
    }

    pub fn handler(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Handler {
            id: id.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn handler_error_names_the_failing_handler() {
        let err = AppError::handler("search-results", "index out of range");
        assert!(matches!(err, AppError::Handler { ref id, .. } if id == "search-results"));
        assert_eq!(
            err.to_string(),
            "handler search-results failed: index out of range"
        );
    }

    #[test]
    fn io_error_keeps_context_in_message() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AppError::io_with_context(source, "failed to read schedule");
        assert_eq!(err.to_string(), "I/O error: failed to read schedule");
    }
}
