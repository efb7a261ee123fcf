use super::window::{Cursor, Step, Window};
use crate::config::ChunkError;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, trace};

/// A read-only view over the `[start, end)` bytes of an owned handle.
///
/// The handle is positioned lazily: nothing touches it until the first read,
/// which seeks to `start` exactly once. Reads never hand out bytes past `end`.
/// With no `end`, reads run to the physical end of the handle.
///
/// ```no_run
/// use file_chunk::Chunk;
/// use std::io::Read;
///
/// // bytes 20..30 of the file
/// let mut chunk = Chunk::open_blocking("/path/to/file", 20, Some(30))?;
/// let mut data = Vec::new();
/// chunk.read_to_end(&mut data)?;
/// chunk.close();
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// An `end` at or before `start` is accepted and simply yields an empty stream.
#[derive(Debug)]
pub struct Chunk<H> {
	pub(crate) handle: H,
	pub(crate) window: Window,
}

impl<H> Chunk<H> {
	/// Adopts an already open handle. No io happens here.
	///
	/// # Errors
	///
	/// Returns [`ChunkError::InvalidRange`] when `start` is negative.
	pub fn new(handle: H, start: i64, end: Option<i64>) -> Result<Self, ChunkError> {
		let window = Window::new(start, end)?;
		Ok(Self { handle, window })
	}

	#[must_use]
	pub const fn start(&self) -> u64 {
		self.window.start()
	}

	#[must_use]
	pub const fn end(&self) -> Option<u64> {
		self.window.end()
	}

	/// Bytes spanned by a bounded window, regardless of how many the file holds.
	#[must_use]
	pub fn len(&self) -> Option<u64> {
		self.window.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.window.is_empty()
	}

	/// Offset of the next read in the underlying handle, `None` before the first read.
	#[must_use]
	pub const fn position(&self) -> Option<u64> {
		match self.window.cursor() {
			Cursor::At(offset) => Some(offset),
			Cursor::Unstarted | Cursor::Seeking => None,
		}
	}

	#[must_use]
	pub fn is_exhausted(&self) -> bool {
		self.window.is_exhausted()
	}

	#[must_use]
	pub const fn window(&self) -> &Window {
		&self.window
	}

	#[must_use]
	pub const fn get_ref(&self) -> &H {
		&self.handle
	}

	#[must_use]
	pub fn into_inner(self) -> H {
		self.handle
	}

	/// Releases the handle.
	pub fn close(self) {
		drop(self.handle);
	}
}

impl Chunk<File> {
	/// Opens `path` read-only and binds it to `[start, end)`.
	///
	/// # Errors
	///
	/// [`ChunkError::InvalidRange`] for a negative `start`, checked before the
	/// file is opened, and [`ChunkError::Open`] when the file cannot be opened.
	pub fn open_blocking(path: impl AsRef<Path>, start: i64, end: Option<i64>) -> Result<Self, ChunkError> {
		let path = path.as_ref();
		let window = Window::new(start, end)?;
		let handle = File::open(path).map_err(|source| ChunkError::Open {
			path: path.to_path_buf(),
			source,
		})?;
		debug!(path = %path.display(), start, ?end, "opened chunk");
		Ok(Self { handle, window })
	}
}

impl<H: Read + Seek> Chunk<H> {
	/// Reads the next bytes of the window into `buf`.
	///
	/// Returns `Ok(None)` once the window (or the file) is exhausted.
	///
	/// # Errors
	///
	/// [`ChunkError::Seek`] when the first read cannot position the handle, the
	/// next read retries the seek. [`ChunkError::Read`] carries the handle's
	/// read error unchanged.
	pub fn read_blocking(&mut self, buf: &mut [u8]) -> Result<Option<usize>, ChunkError> {
		if !self.window.is_started() {
			let offset = self.window.start();
			trace!(offset, "seeking to window start");
			self.handle
				.seek(SeekFrom::Start(offset))
				.map_err(|source| ChunkError::Seek { offset, source })?;
			self.window.seeked();
		}

		let step = self.window.clamp(buf.len());
		let read = match step {
			Step::Done => {
				trace!("window exhausted");
				return Ok(None);
			}
			Step::Delegate(_) => self.handle.read(buf)?,
			Step::Shrink(remaining) => self.handle.read(&mut buf[..remaining])?,
		};
		self.window.advance(step);

		Ok(end_of_stream(read, buf.len()))
	}
}

/// A zero-length read into a non-empty buffer is the handle's end-of-file.
pub(crate) const fn end_of_stream(read: usize, requested: usize) -> Option<usize> {
	if read == 0 && requested > 0 {
		None
	} else {
		Some(read)
	}
}

impl<H: Read + Seek> Read for Chunk<H> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		Ok(self.read_blocking(buf)?.unwrap_or(0))
	}
}
