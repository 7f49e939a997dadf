use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn out_of_range(value: impl ToString) -> Error {
        Error(
            ErrorKind::OutOfRange {
                value: value.to_string(),
            }
            .into(),
        )
    }

    pub fn empty_collection(operation: impl Into<String>) -> Error {
        Error(
            ErrorKind::EmptyCollection {
                operation: operation.into(),
            }
            .into(),
        )
    }

    pub fn key_not_found(key: i64) -> Error {
        Error(ErrorKind::KeyNotFound { key }.into())
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }

    pub fn is_empty_collection(&self) -> bool {
        matches!(self.kind(), ErrorKind::EmptyCollection { .. })
    }

    pub fn is_key_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::KeyNotFound { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("value {value} is outside the representable range")]
    OutOfRange { value: String },

    #[error("{operation}: collection must be non-empty")]
    EmptyCollection { operation: String },

    #[error("key {key} not found")]
    KeyNotFound { key: i64 },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
