//! Core value types for span-based syntax styling.

/// Token classification tags.
pub mod category;
/// Gap-filling style span sequences.
pub mod span;
/// Visual style types: colors, modifiers, composed styles.
pub mod style;

pub use category::TokenCategory;
pub use span::{ByteIdx, ByteLen, StyleSpan, StyleSpans, StyleSpansBuilder};
pub use style::{Color, Modifier, ParseColorError, Style};
