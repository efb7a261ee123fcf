use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChunkError {
	#[error("Invalid negative start offset {start}")]
	InvalidRange { start: i64 },

	#[error("Failed to open \"{}\" for reading: {source}", .path.display())]
	Open {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("Failed to seek to offset {offset}: {source}")]
	Seek {
		offset: u64,
		#[source]
		source: io::Error,
	},

	#[error("Read failed: {0}")]
	Read(#[from] io::Error),
}

impl ChunkError {
	/// The underlying io error kind, `InvalidInput` for a rejected range.
	#[must_use]
	pub fn kind(&self) -> io::ErrorKind {
		match self {
			Self::InvalidRange { .. } => io::ErrorKind::InvalidInput,
			Self::Open { source, .. } | Self::Seek { source, .. } | Self::Read(source) => source.kind(),
		}
	}
}

impl From<ChunkError> for io::Error {
	fn from(err: ChunkError) -> Self {
		match err {
			ChunkError::Read(source) => source,
			other => Self::new(other.kind(), other),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_range_maps_to_invalid_input() {
		let err: io::Error = ChunkError::InvalidRange { start: -1 }.into();
		assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
		assert!(err.to_string().contains("-1"));
	}

	#[test]
	fn open_error_keeps_source_kind() {
		let err = ChunkError::Open {
			path: PathBuf::from("/nope"),
			source: io::Error::from(io::ErrorKind::NotFound),
		};
		assert_eq!(err.kind(), io::ErrorKind::NotFound);

		let io_err: io::Error = err.into();
		assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
	}

	#[test]
	fn read_error_passes_through_unchanged() {
		let err = ChunkError::from(io::Error::new(io::ErrorKind::Interrupted, "signal"));
		let io_err: io::Error = err.into();
		assert_eq!(io_err.kind(), io::ErrorKind::Interrupted);
		assert_eq!(io_err.to_string(), "signal");
	}
}
