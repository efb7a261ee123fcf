use super::chunk::Chunk;
use tokio::io::{AsyncRead, AsyncSeek};
use tokio_util::io::ReaderStream;

/// Default frame size when a chunk is served as a stream of `Bytes`.
pub const DEFAULT_FRAME_SIZE: usize = 64 * 1024;

impl<H: AsyncRead + AsyncSeek + Unpin> Chunk<H> {
	/// Turns the chunk into a stream of frames of at most `capacity` bytes,
	/// ending with the window. Suitable as a partial-content response body.
	pub fn into_stream(self, capacity: usize) -> ReaderStream<Self> {
		ReaderStream::with_capacity(self, capacity.max(1))
	}
}
