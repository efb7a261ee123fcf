use crate::config::ChunkError;

/// Where the next read lands relative to the underlying handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
	/// No read has happened yet, the handle has not been positioned.
	Unstarted,
	/// A seek to `start` has been issued but not yet completed (poll path only).
	Seeking,
	At(u64),
}

/// What a read of `requested` bytes is allowed to do at the current cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
	/// Hand the caller's buffer to the handle untouched.
	Delegate(usize),
	/// Only the first `remaining` bytes may be read, then the window is spent.
	Shrink(usize),
	/// Window exhausted, report end-of-stream without touching the handle.
	Done,
}

/// The `[start, end)` byte range a chunk is bound to, plus its cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
	start: u64,
	end: Option<u64>,
	cursor: Cursor,
}

impl Window {
	/// Negative `start` is rejected. A negative `end` can never be reached by the
	/// cursor, so it is stored as zero and behaves like any other inverted range.
	///
	/// # Errors
	///
	/// Returns [`ChunkError::InvalidRange`] when `start` is negative.
	pub fn new(start: i64, end: Option<i64>) -> Result<Self, ChunkError> {
		let start = u64::try_from(start).map_err(|_| ChunkError::InvalidRange { start })?;
		let end = end.map(|e| u64::try_from(e).unwrap_or(0));

		Ok(Self {
			start,
			end,
			cursor: Cursor::Unstarted,
		})
	}

	#[must_use]
	pub const fn start(&self) -> u64 {
		self.start
	}

	#[must_use]
	pub const fn end(&self) -> Option<u64> {
		self.end
	}

	#[must_use]
	pub const fn cursor(&self) -> Cursor {
		self.cursor
	}

	#[must_use]
	pub const fn is_started(&self) -> bool {
		matches!(self.cursor, Cursor::At(_))
	}

	/// Number of bytes the window spans, `None` when unbounded.
	#[must_use]
	pub fn len(&self) -> Option<u64> {
		self.end.map(|end| end.saturating_sub(self.start))
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == Some(0)
	}

	pub(crate) fn begin_seek(&mut self) {
		self.cursor = Cursor::Seeking;
	}

	/// Forgets an interrupted seek so the next read issues it again.
	pub(crate) fn reset(&mut self) {
		self.cursor = Cursor::Unstarted;
	}

	/// Records that the handle now sits at `start`.
	pub(crate) fn seeked(&mut self) {
		self.cursor = Cursor::At(self.start);
	}

	/// Decides how a read of `requested` bytes is clamped.
	///
	/// Must only be called once the cursor has been positioned. An unbounded
	/// window always delegates.
	#[must_use]
	pub fn clamp(&self, requested: usize) -> Step {
		let Some(end) = self.end else {
			return Step::Delegate(requested);
		};
		let cursor = match self.cursor {
			Cursor::At(offset) => offset,
			Cursor::Unstarted | Cursor::Seeking => self.start,
		};

		if cursor >= end {
			return Step::Done;
		}

		let remaining = end - cursor;
		if cursor.saturating_add(requested as u64) < end {
			Step::Delegate(requested)
		} else {
			// remaining <= requested here, so it fits in usize
			Step::Shrink(usize::try_from(remaining).unwrap_or(requested))
		}
	}

	/// Moves the cursor forward after `step` was carried out.
	///
	/// A delegated read advances by the requested size, not by what the handle
	/// actually returned. A shrunk read pins the cursor to `end`.
	pub(crate) fn advance(&mut self, step: Step) {
		let Cursor::At(offset) = self.cursor else {
			return;
		};
		match (step, self.end) {
			(Step::Delegate(len), Some(_)) => self.cursor = Cursor::At(offset.saturating_add(len as u64)),
			(Step::Shrink(_), Some(end)) => self.cursor = Cursor::At(end),
			_ => {}
		}
	}

	#[must_use]
	pub fn is_exhausted(&self) -> bool {
		match (self.cursor, self.end) {
			(Cursor::At(offset), Some(end)) => offset >= end,
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn started(start: i64, end: Option<i64>) -> Window {
		let mut window = Window::new(start, end).unwrap();
		window.seeked();
		window
	}

	#[test]
	fn negative_start_is_rejected() {
		let err = Window::new(-1, None).unwrap_err();
		assert!(matches!(err, ChunkError::InvalidRange { start: -1 }));
	}

	#[test]
	fn cursor_is_lazy() {
		let window = Window::new(20, Some(80)).unwrap();
		assert_eq!(window.cursor(), Cursor::Unstarted);
		assert!(!window.is_started());
	}

	#[test]
	fn unbounded_always_delegates() {
		let window = started(50, None);
		assert_eq!(window.clamp(4096), Step::Delegate(4096));
		assert_eq!(window.len(), None);
		assert!(!window.is_exhausted());
	}

	#[test]
	fn buffer_inside_window_delegates() {
		let window = started(20, Some(80));
		assert_eq!(window.clamp(10), Step::Delegate(10));
	}

	#[test]
	fn buffer_landing_on_end_shrinks() {
		let window = started(20, Some(80));
		assert_eq!(window.clamp(60), Step::Shrink(60));
		assert_eq!(window.clamp(4096), Step::Shrink(60));
	}

	#[test]
	fn delegate_advances_by_requested_size() {
		let mut window = started(20, Some(80));
		window.advance(Step::Delegate(32));
		assert_eq!(window.cursor(), Cursor::At(52));
		assert_eq!(window.clamp(32), Step::Shrink(28));

		window.advance(Step::Shrink(28));
		assert_eq!(window.cursor(), Cursor::At(80));
		assert!(window.is_exhausted());
		assert_eq!(window.clamp(32), Step::Done);
	}

	#[test]
	fn inverted_range_is_done_immediately() {
		let window = started(50, Some(40));
		assert_eq!(window.clamp(16), Step::Done);
		assert_eq!(window.len(), Some(0));
		assert!(window.is_empty());
	}

	#[test]
	fn empty_range_is_done_immediately() {
		let window = started(50, Some(50));
		assert_eq!(window.clamp(16), Step::Done);
	}

	#[test]
	fn negative_end_is_an_empty_window() {
		let window = started(0, Some(-5));
		assert_eq!(window.end(), Some(0));
		assert_eq!(window.clamp(16), Step::Done);
	}

	#[test]
	fn unbounded_cursor_never_moves() {
		let mut window = started(10, None);
		window.advance(Step::Delegate(100));
		assert_eq!(window.cursor(), Cursor::At(10));
	}
}
