use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Clone, Debug, Serialize, Deserialize)]
#[command(author, version, about = "Copy a byte window of a file to stdout", long_about = None)]
pub struct ChunkConfig {
	/// File to read from
	#[arg(long, env = "CHUNK_PATH")]
	pub path: PathBuf,

	/// First byte of the window
	#[arg(long, env = "CHUNK_START", default_value = "0", allow_negative_numbers = true)]
	pub start: i64,

	/// Exclusive end of the window, reads to end of file when omitted
	#[arg(long, env = "CHUNK_END", allow_negative_numbers = true)]
	pub end: Option<i64>,

	/// Size of each read
	#[arg(long, env = "BUFFER_SIZE", default_value = "65536")]
	pub buffer_size: usize,

	/// Use blocking std io instead of tokio
	#[arg(long, env = "CHUNK_BLOCKING")]
	pub blocking: bool,

	/// Use JSON formatting for tracing
	#[arg(long, env = "LOG_JSON", default_value = "false")]
	pub log_json: bool,

	/// Log filter
	#[arg(long, env = "RUST_LOG")]
	pub rust_log: Option<String>,
}

impl ChunkConfig {
	/// Reads `.env` if present, then parses flags with env fallbacks.
	pub fn load() -> Self {
		dotenv::dotenv().ok();
		Self::parse()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_bounded_window() {
		let config = ChunkConfig::parse_from(["file_chunk", "--path", "/tmp/data.bin", "--start", "20", "--end", "80"]);
		assert_eq!(config.path, PathBuf::from("/tmp/data.bin"));
		assert_eq!(config.start, 20);
		assert_eq!(config.end, Some(80));
		assert!(!config.blocking);
	}

	#[test]
	fn end_is_optional() {
		let config = ChunkConfig::parse_from(["file_chunk", "--path", "data.bin", "--start", "50", "--blocking"]);
		assert_eq!(config.end, None);
		assert!(config.blocking);
	}

	#[test]
	fn negative_start_reaches_the_reader() {
		let config = ChunkConfig::parse_from(["file_chunk", "--path", "data.bin", "--start", "-1"]);
		assert_eq!(config.start, -1);
	}
}
