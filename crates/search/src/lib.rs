//! Literal find/replace over buffer text.
//!
//! A [`SearchSession`] mirrors the search bar's behavior: matches are
//! recollected from scratch whenever the query or the text changes, then
//! the session advances to the first match; Prev/Next wrap around both
//! ends; replacing the current occurrence recollects against the new text
//! before advancing. Matching is literal and case-sensitive.

use std::ops::Range;

use memchr::memmem;
use tinct_primitives::{ByteIdx, StyleSpans};

/// Byte offsets of every non-overlapping occurrence of `query` in `text`,
/// left to right, advancing past each match. An empty query matches
/// nothing.
pub fn find_all(text: &str, query: &str) -> Vec<ByteIdx> {
	if query.is_empty() {
		return Vec::new();
	}
	memmem::find_iter(text.as_bytes(), query.as_bytes()).collect()
}

/// Replaces every occurrence of `query` with `replacement`, literally.
pub fn replace_all(text: &str, query: &str, replacement: &str) -> String {
	if query.is_empty() {
		return text.to_string();
	}
	text.replace(query, replacement)
}

/// Re-tags every occurrence of `query` in `text` with `tag`, on top of an
/// already-resolved span sequence. The base styling underneath is kept for
/// everything between matches.
pub fn overlay_matches<S: Clone + PartialEq>(
	spans: &StyleSpans<S>,
	text: &str,
	query: &str,
	tag: S,
) -> StyleSpans<S> {
	let mut spans = spans.clone();
	for start in find_all(text, query) {
		spans = spans.overlay(start, start + query.len(), Some(tag.clone()));
	}
	spans
}

/// An interactive search over one buffer's text.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
	query: String,
	matches: Vec<ByteIdx>,
	current: Option<usize>,
}

impl SearchSession {
	pub fn new() -> SearchSession {
		SearchSession::default()
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	/// Match start offsets, in text order.
	pub fn matches(&self) -> &[ByteIdx] {
		&self.matches
	}

	/// Index of the current match within [`Self::matches`], if any.
	pub fn current(&self) -> Option<usize> {
		self.current
	}

	/// Recollects matches for a new query or text, then advances to the
	/// first match.
	pub fn update(&mut self, text: &str, query: &str) {
		self.query.clear();
		self.query.push_str(query);
		self.matches = find_all(text, query);
		self.current = None;
		self.advance(1);
	}

	/// Steps forward (`1`) or backward (`-1`) through the matches, wrapping
	/// around both ends. Does nothing when there are no matches.
	pub fn advance(&mut self, direction: isize) {
		if self.matches.is_empty() {
			return;
		}
		let len = self.matches.len() as isize;
		let at = self.current.map(|c| c as isize).unwrap_or(-1) + direction;
		let at = if at < 0 {
			len - 1
		} else if at >= len {
			0
		} else {
			at
		};
		self.current = Some(at as usize);
	}

	/// Byte range of the current match.
	pub fn selection(&self) -> Option<Range<ByteIdx>> {
		let start = self.matches[*self.current.as_ref()?];
		Some(start..start + self.query.len())
	}

	/// `(current 1-based, total)`; `(0, 0)` when nothing matches.
	pub fn counter(&self) -> (usize, usize) {
		match self.current {
			Some(at) => (at + 1, self.matches.len()),
			None => (0, self.matches.len()),
		}
	}

	/// The `n/m` label the search bar displays.
	pub fn counter_label(&self) -> String {
		let (at, total) = self.counter();
		format!("{at}/{total}")
	}

	/// Replaces the current occurrence, recollects matches from the new
	/// text, and advances past the replacement site. Returns the new text,
	/// or `None` when there is no current match.
	pub fn replace_current(&mut self, text: &str, replacement: &str) -> Option<String> {
		let selection = self.selection()?;
		let mut out = String::with_capacity(text.len() - selection.len() + replacement.len());
		out.push_str(&text[..selection.start]);
		out.push_str(replacement);
		out.push_str(&text[selection.end..]);

		let query = self.query.clone();
		self.update(&out, &query);
		self.advance(1);
		Some(out)
	}
}
