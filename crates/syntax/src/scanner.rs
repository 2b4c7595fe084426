//! Left-to-right scan emitting gap-filled category spans.

use tinct_primitives::{ByteIdx, StyleSpans, StyleSpansBuilder, TokenCategory};

use crate::patterns::{CALL_CONTEXT, GROUPS, IMPORT_CONTEXT, TOKEN};

/// Half-width of the period-context window, in chars.
const PERIOD_WINDOW: usize = 40;

/// Computes the highlighting for the entire input.
///
/// Returns an ordered sequence of spans covering every byte of `text`
/// exactly once: an unstyled gap before each match, a single-category span
/// for the match itself, and an unstyled suffix after the last match.
/// Lengths are bytes; match boundaries always lie on char boundaries.
///
/// The scan never fails. Unmatched characters (stray quotes, unterminated
/// literals) simply fall into gaps, and a backtracking-limit error from
/// the engine ends the scan early with the remainder emitted unstyled.
pub fn highlight(text: &str) -> StyleSpans<TokenCategory> {
	let mut builder = StyleSpansBuilder::new();
	let mut last_end = 0;

	for caps in TOKEN.captures_iter(text) {
		let caps = match caps {
			Ok(caps) => caps,
			Err(err) => {
				tracing::warn!(%err, at = last_end, "token scan aborted, emitting remainder unstyled");
				break;
			}
		};
		let Some(m) = caps.get(0) else { break };
		builder.add(None, m.start() - last_end);
		builder.add(Some(classify(&caps, m.start(), text)), m.end() - m.start());
		last_end = m.end();
	}
	builder.add(None, text.len() - last_end);

	let spans = builder.finish();
	tracing::trace!(len = text.len(), spans = spans.len(), "token scan complete");
	spans
}

/// Maps the matched named group to its category. A matched period is not
/// tagged directly; it goes through the context-window classifier.
fn classify(caps: &fancy_regex::Captures<'_>, start: ByteIdx, text: &str) -> TokenCategory {
	for (name, category) in GROUPS {
		if caps.name(name).is_some() {
			return category;
		}
	}
	classify_period(start, text)
}

/// Secondary classification for a matched `.` by inspecting the window of
/// ±40 chars around it: an `import` keyword followed by non-semicolon text
/// wins, then an identifier adjacent to `(` anywhere in the window, then
/// the plain period. A heuristic, kept as-is: periods inside strings or
/// comments near an import statement will be misclassified.
fn classify_period(period_idx: ByteIdx, text: &str) -> TokenCategory {
	let window = context_window(text, period_idx);
	if IMPORT_CONTEXT.is_match(window) {
		TokenCategory::ImportPeriod
	} else if CALL_CONTEXT.is_match(window) {
		TokenCategory::MethodCallPeriod
	} else {
		TokenCategory::Period
	}
}

/// Cuts the window around `idx`, clamped to the text bounds.
fn context_window(text: &str, idx: ByteIdx) -> &str {
	let start = text[..idx]
		.char_indices()
		.rev()
		.nth(PERIOD_WINDOW - 1)
		.map(|(i, _)| i)
		.unwrap_or(0);
	let end = text[idx..]
		.char_indices()
		.nth(PERIOD_WINDOW)
		.map(|(i, _)| idx + i)
		.unwrap_or(text.len());
	&text[start..end]
}
