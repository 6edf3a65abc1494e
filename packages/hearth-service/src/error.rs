pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Provider error: {message}")]
	Provider { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<hearth_storage::Error> for Error {
	fn from(err: hearth_storage::Error) -> Self {
		match err {
			hearth_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			hearth_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
			hearth_storage::Error::NotFound(message) => Self::Storage { message },
		}
	}
}

impl From<hearth_providers::Error> for Error {
	fn from(err: hearth_providers::Error) -> Self {
		Self::Provider { message: err.to_string() }
	}
}
