use super::chunk::{end_of_stream, Chunk};
use super::window::{Cursor, Step, Window};
use crate::config::ChunkError;
use std::io::{self, SeekFrom};
use std::path::Path;
use std::pin::Pin;
use std::task::{ready, Context, Poll};
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeek, AsyncSeekExt, ReadBuf};
use tracing::{debug, instrument, trace};

impl Chunk<File> {
	/// Opens `path` read-only and binds it to `[start, end)`.
	///
	/// The range is checked before the file is touched.
	///
	/// # Errors
	///
	/// [`ChunkError::InvalidRange`] for a negative `start` and
	/// [`ChunkError::Open`] when the file cannot be opened.
	#[instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
	pub async fn open(path: impl AsRef<Path>, start: i64, end: Option<i64>) -> Result<Self, ChunkError> {
		let path = path.as_ref();
		let window = Window::new(start, end)?;
		let handle = File::open(path).await.map_err(|source| ChunkError::Open {
			path: path.to_path_buf(),
			source,
		})?;
		debug!("opened chunk");
		Ok(Self { handle, window })
	}
}

impl<H: AsyncRead + AsyncSeek + Unpin> Chunk<H> {
	/// Reads the next bytes of the window into `buf`.
	///
	/// Returns `Ok(None)` once the window (or the file) is exhausted.
	///
	/// # Errors
	///
	/// [`ChunkError::Seek`] when the first read cannot position the handle, the
	/// next read retries the seek. [`ChunkError::Read`] carries the handle's
	/// read error unchanged.
	pub async fn read(&mut self, buf: &mut [u8]) -> Result<Option<usize>, ChunkError> {
		if !self.window.is_started() {
			let offset = self.window.start();
			trace!(offset, "seeking to window start");
			self.handle
				.seek(SeekFrom::Start(offset))
				.await
				.map_err(|source| ChunkError::Seek { offset, source })?;
			self.window.seeked();
		}

		let step = self.window.clamp(buf.len());
		let read = match step {
			Step::Done => {
				trace!("window exhausted");
				return Ok(None);
			}
			Step::Delegate(_) => self.handle.read(buf).await?,
			Step::Shrink(remaining) => self.handle.read(&mut buf[..remaining]).await?,
		};
		self.window.advance(step);

		Ok(end_of_stream(read, buf.len()))
	}

	/// Drives the lazy seek to `start` until the handle reports completion.
	fn poll_position(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), ChunkError>> {
		let offset = self.window.start();
		loop {
			match self.window.cursor() {
				Cursor::At(_) => return Poll::Ready(Ok(())),
				Cursor::Unstarted => {
					// an adopted handle may still have an operation in flight
					ready!(Pin::new(&mut self.handle).poll_complete(cx)).map_err(|source| ChunkError::Seek { offset, source })?;
					trace!(offset, "seeking to window start");
					Pin::new(&mut self.handle)
						.start_seek(SeekFrom::Start(offset))
						.map_err(|source| ChunkError::Seek { offset, source })?;
					self.window.begin_seek();
				}
				Cursor::Seeking => {
					if let Err(source) = ready!(Pin::new(&mut self.handle).poll_complete(cx)) {
						self.window.reset();
						return Poll::Ready(Err(ChunkError::Seek { offset, source }));
					}
					self.window.seeked();
				}
			}
		}
	}
}

impl<H: AsyncRead + AsyncSeek + Unpin> AsyncRead for Chunk<H> {
	fn poll_read(self: Pin<&mut Self>, cx: &mut Context<'_>, buf: &mut ReadBuf<'_>) -> Poll<io::Result<()>> {
		let this = self.get_mut();
		ready!(this.poll_position(cx))?;

		let step = this.window.clamp(buf.remaining());
		match step {
			Step::Done => return Poll::Ready(Ok(())),
			Step::Delegate(_) => ready!(Pin::new(&mut this.handle).poll_read(cx, buf))?,
			Step::Shrink(remaining) => {
				let mut scratch = ReadBuf::new(buf.initialize_unfilled_to(remaining));
				ready!(Pin::new(&mut this.handle).poll_read(cx, &mut scratch))?;
				let read = scratch.filled().len();
				buf.advance(read);
			}
		}
		this.window.advance(step);

		Poll::Ready(Ok(()))
	}
}
