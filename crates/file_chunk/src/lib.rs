//! Bounded reads over a byte range of a file.
//!
//! A [`Chunk`] owns an open file handle and exposes only the `[start, end)`
//! bytes of it as an independent stream, in blocking (`std::io::Read`) and
//! async (`tokio::io::AsyncRead`) flavours. It is meant for serving
//! partial-content responses without loading whole files into memory:
//!
//! ```no_run
//! # async fn serve() -> Result<(), file_chunk::ChunkError> {
//! use file_chunk::{Chunk, DEFAULT_FRAME_SIZE};
//!
//! let chunk = Chunk::open("/path/to/file", 10, Some(20)).await?;
//! let body = chunk.into_stream(DEFAULT_FRAME_SIZE);
//! # drop(body);
//! # Ok(())
//! # }
//! ```
//!
//! Parsing range headers and framing the response is left to the caller.

pub mod config;
pub mod core;

pub use crate::config::{ChunkConfig, ChunkError};
pub use crate::core::{Chunk, Cursor, Step, Window, DEFAULT_FRAME_SIZE};
