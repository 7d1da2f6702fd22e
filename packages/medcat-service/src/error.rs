pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<medcat_storage::Error> for Error {
	fn from(err: medcat_storage::Error) -> Self {
		match err {
			medcat_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			medcat_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
		}
	}
}
