//! Open-buffer state for an editing session.
//!
//! A [`Buffer`] owns its text, a dirty flag, and the span sequence the
//! highlighter computed for the current content. Every content mutation
//! recomputes the spans over the whole text; there is no incremental
//! re-lex. A [`Workspace`] keeps the ordered set of open buffers, the
//! active buffer, and the untitled-name pool, and owns the close protocol
//! for unsaved changes. No widgets, dialogs, or file I/O live here; the
//! display layer decides how to render titles and how to prompt.

use std::ops::Range;

use thiserror::Error;
use tinct_primitives::{ByteIdx, StyleSpans, TokenCategory};

mod untitled;

use untitled::UntitledNames;

/// A single open document.
#[derive(Debug, Clone)]
pub struct Buffer {
	title: String,
	text: String,
	modified: bool,
	spans: StyleSpans<TokenCategory>,
}

impl Buffer {
	/// An empty, unmodified buffer.
	pub fn untitled(title: impl Into<String>) -> Buffer {
		Buffer::from_text(title, String::new())
	}

	/// A buffer seeded with content, e.g. read from a file by the caller.
	pub fn from_text(title: impl Into<String>, text: String) -> Buffer {
		let spans = tinct_syntax::highlight(&text);
		Buffer {
			title: title.into(),
			text,
			modified: false,
			spans,
		}
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	/// Highlighting for the current content.
	pub fn spans(&self) -> &StyleSpans<TokenCategory> {
		&self.spans
	}

	pub fn is_modified(&self) -> bool {
		self.modified
	}

	/// The title as a tab would show it, with a `*` marker when modified.
	pub fn display_title(&self) -> String {
		if self.modified {
			format!("{}*", self.title)
		} else {
			self.title.clone()
		}
	}

	/// Replaces the whole content.
	pub fn set_text(&mut self, text: String) {
		if text == self.text {
			return;
		}
		self.text = text;
		self.touch();
	}

	/// Inserts `s` at the given byte position.
	pub fn insert(&mut self, at: ByteIdx, s: &str) {
		self.replace_range(at..at, s);
	}

	/// Deletes the given byte range.
	pub fn delete_range(&mut self, range: Range<ByteIdx>) {
		self.replace_range(range, "");
	}

	/// Replaces the given byte range with `replacement`.
	///
	/// An invalid range (reversed, past the end, or off a char boundary)
	/// is ignored rather than panicking: range validity is the display
	/// layer's responsibility and a stale range must not take the session
	/// down. A replacement identical to what it replaces changes nothing.
	pub fn replace_range(&mut self, range: Range<ByteIdx>, replacement: &str) {
		if range.start > range.end
			|| range.end > self.text.len()
			|| !self.text.is_char_boundary(range.start)
			|| !self.text.is_char_boundary(range.end)
		{
			tracing::debug!(title = %self.title, ?range, "ignoring edit with invalid range");
			return;
		}
		if self.text[range.clone()] == *replacement {
			return;
		}
		self.text.replace_range(range, replacement);
		self.touch();
	}

	/// Clears the dirty flag after the caller persisted the content,
	/// optionally adopting the saved file's name as the new title.
	pub fn mark_saved(&mut self, title: Option<&str>) {
		if let Some(title) = title {
			self.title = title.to_string();
		}
		self.modified = false;
	}

	fn touch(&mut self) {
		self.modified = true;
		self.spans = tinct_syntax::highlight(&self.text);
		tracing::trace!(
			title = %self.title,
			len = self.text.len(),
			spans = self.spans.len(),
			"recomputed highlighting"
		);
	}
}

/// Error from [`Workspace::close`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CloseError {
	#[error("buffer has unsaved changes")]
	UnsavedChanges,
}

/// The ordered set of open buffers and the active selection.
#[derive(Debug, Clone)]
pub struct Workspace {
	buffers: Vec<Buffer>,
	active: Option<usize>,
	untitled: UntitledNames,
}

impl Workspace {
	/// A workspace with one empty `Untitled` buffer, like a fresh editor
	/// window.
	pub fn new() -> Workspace {
		Workspace {
			buffers: vec![Buffer::untitled("Untitled")],
			active: Some(0),
			untitled: UntitledNames::new(),
		}
	}

	pub fn buffers(&self) -> &[Buffer] {
		&self.buffers
	}

	pub fn len(&self) -> usize {
		self.buffers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buffers.is_empty()
	}

	pub fn active_index(&self) -> Option<usize> {
		self.active
	}

	pub fn active(&self) -> Option<&Buffer> {
		self.buffers.get(self.active?)
	}

	pub fn active_mut(&mut self) -> Option<&mut Buffer> {
		self.buffers.get_mut(self.active?)
	}

	/// Opens a fresh untitled buffer and selects it.
	pub fn open_untitled(&mut self) -> usize {
		let title = self.untitled.allocate();
		self.push(Buffer::untitled(title))
	}

	/// Opens a buffer with content and selects it.
	pub fn open(&mut self, title: impl Into<String>, text: String) -> usize {
		self.push(Buffer::from_text(title, text))
	}

	/// Selects the buffer at `idx`; out-of-range indices are ignored.
	pub fn select(&mut self, idx: usize) {
		if idx < self.buffers.len() {
			self.active = Some(idx);
		}
	}

	/// Closes the buffer at `idx`, refusing when it has unsaved changes.
	/// The caller decides whether to save, discard via
	/// [`Workspace::close_forced`], or cancel.
	pub fn close(&mut self, idx: usize) -> Result<(), CloseError> {
		if self.buffers.get(idx).is_some_and(|b| b.modified) {
			return Err(CloseError::UnsavedChanges);
		}
		self.remove(idx);
		Ok(())
	}

	/// Closes the buffer at `idx`, discarding any unsaved changes.
	pub fn close_forced(&mut self, idx: usize) {
		self.remove(idx);
	}

	fn push(&mut self, buffer: Buffer) -> usize {
		self.buffers.push(buffer);
		let idx = self.buffers.len() - 1;
		self.active = Some(idx);
		idx
	}

	fn remove(&mut self, idx: usize) {
		if idx >= self.buffers.len() {
			return;
		}
		let buffer = self.buffers.remove(idx);
		self.untitled.release(buffer.title());

		self.active = match self.active {
			_ if self.buffers.is_empty() => None,
			Some(active) if active > idx => Some(active - 1),
			Some(active) => Some(active.min(self.buffers.len() - 1)),
			None => None,
		};
	}
}

impl Default for Workspace {
	fn default() -> Self {
		Workspace::new()
	}
}
