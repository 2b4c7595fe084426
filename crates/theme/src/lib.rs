//! Maps token categories to concrete visual styles.
//!
//! A [`Theme`] is the bridge between the scanner's category tags and
//! whatever the consumer renders with: resolve a category span sequence
//! once and hand the styled result to the display layer. Two built-in
//! themes ship, dark and light; custom themes load from TOML files keyed
//! by scope name.

use std::collections::HashMap;
use std::path::Path;

use tinct_primitives::{Color, Style, StyleSpans, TokenCategory};

mod file;

pub use file::ThemeError;

/// A named mapping from token categories to styles.
///
/// Categories without an entry degrade to the theme's default style, never
/// an error: a theme that names only `keyword` and `comment` is valid.
#[derive(Debug, Clone)]
pub struct Theme {
	name: String,
	styles: HashMap<TokenCategory, Style>,
	default_style: Style,
	search_highlight: Style,
}

impl Theme {
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Resolves a category to its style, falling back to the default.
	pub fn style_for(&self, category: TokenCategory) -> Style {
		self.styles.get(&category).copied().unwrap_or(self.default_style)
	}

	/// Style used to emphasize search matches on top of syntax styling.
	pub fn search_highlight(&self) -> Style {
		self.search_highlight
	}

	/// Pre-resolves a whole category span sequence into concrete styles.
	pub fn resolve(&self, spans: &StyleSpans<TokenCategory>) -> StyleSpans<Style> {
		spans.map(|category| self.style_for(*category))
	}

	/// Loads a theme from a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Theme, ThemeError> {
		let text = std::fs::read_to_string(path)?;
		Self::from_toml(&text)
	}

	/// Parses a theme from TOML text.
	pub fn from_toml(text: &str) -> Result<Theme, ThemeError> {
		file::parse(text)
	}

	/// The built-in dark theme.
	pub fn dark() -> Theme {
		let punctuation = Style::new().fg(Color::Gray);
		Theme {
			name: "dark".to_string(),
			styles: HashMap::from([
				(TokenCategory::Keyword, Style::new().fg(Color::Magenta).bold()),
				(TokenCategory::String, Style::new().fg(Color::Green)),
				(TokenCategory::Boolean, Style::new().fg(Color::Yellow)),
				(TokenCategory::Character, Style::new().fg(Color::Green)),
				(TokenCategory::Integer, Style::new().fg(Color::Yellow)),
				(TokenCategory::Float, Style::new().fg(Color::Yellow)),
				(TokenCategory::Double, Style::new().fg(Color::Yellow)),
				(TokenCategory::Long, Style::new().fg(Color::Yellow)),
				(TokenCategory::Paren, punctuation),
				(TokenCategory::Brace, punctuation),
				(TokenCategory::Bracket, punctuation),
				(TokenCategory::Semicolon, punctuation),
				(TokenCategory::Comment, Style::new().fg(Color::DarkGray).italic()),
				(TokenCategory::Function, Style::new().fg(Color::LightBlue)),
				(TokenCategory::Number, Style::new().fg(Color::Yellow)),
				(TokenCategory::Annotation, Style::new().fg(Color::Cyan)),
				(TokenCategory::Variable, Style::new().fg(Color::White)),
				(TokenCategory::Operator, Style::new().fg(Color::LightRed)),
				(TokenCategory::Comma, punctuation),
				(TokenCategory::ImportPeriod, Style::new().fg(Color::Cyan)),
				(TokenCategory::MethodCallPeriod, Style::new().fg(Color::LightBlue)),
				(TokenCategory::Period, punctuation),
			]),
			default_style: Style::new().fg(Color::White),
			search_highlight: Style::new().fg(Color::Black).bg(Color::Yellow),
		}
	}

	/// The built-in light theme.
	pub fn light() -> Theme {
		let punctuation = Style::new().fg(Color::DarkGray);
		Theme {
			name: "light".to_string(),
			styles: HashMap::from([
				(TokenCategory::Keyword, Style::new().fg(Color::Blue).bold()),
				(TokenCategory::String, Style::new().fg(Color::Rgb(0x16, 0x6b, 0x1e))),
				(TokenCategory::Boolean, Style::new().fg(Color::Rgb(0x98, 0x43, 0x00))),
				(TokenCategory::Character, Style::new().fg(Color::Rgb(0x16, 0x6b, 0x1e))),
				(TokenCategory::Integer, Style::new().fg(Color::Rgb(0x98, 0x43, 0x00))),
				(TokenCategory::Float, Style::new().fg(Color::Rgb(0x98, 0x43, 0x00))),
				(TokenCategory::Double, Style::new().fg(Color::Rgb(0x98, 0x43, 0x00))),
				(TokenCategory::Long, Style::new().fg(Color::Rgb(0x98, 0x43, 0x00))),
				(TokenCategory::Paren, punctuation),
				(TokenCategory::Brace, punctuation),
				(TokenCategory::Bracket, punctuation),
				(TokenCategory::Semicolon, punctuation),
				(TokenCategory::Comment, Style::new().fg(Color::Gray).italic()),
				(TokenCategory::Function, Style::new().fg(Color::Rgb(0x6f, 0x42, 0xc1))),
				(TokenCategory::Number, Style::new().fg(Color::Rgb(0x98, 0x43, 0x00))),
				(TokenCategory::Annotation, Style::new().fg(Color::Rgb(0x00, 0x5c, 0xc5))),
				(TokenCategory::Variable, Style::new().fg(Color::Black)),
				(TokenCategory::Operator, Style::new().fg(Color::Red)),
				(TokenCategory::Comma, punctuation),
				(TokenCategory::ImportPeriod, Style::new().fg(Color::Rgb(0x00, 0x5c, 0xc5))),
				(TokenCategory::MethodCallPeriod, Style::new().fg(Color::Rgb(0x6f, 0x42, 0xc1))),
				(TokenCategory::Period, punctuation),
			]),
			default_style: Style::new().fg(Color::Black),
			search_highlight: Style::new().fg(Color::Black).bg(Color::LightYellow),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Theme::dark()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use tinct_primitives::StyleSpansBuilder;

	use super::*;

	#[test]
	fn test_builtins_cover_every_category() {
		for theme in [Theme::dark(), Theme::light()] {
			for category in TokenCategory::ALL {
				assert!(
					theme.styles.contains_key(&category),
					"{} theme missing {category}",
					theme.name()
				);
			}
		}
	}

	#[test]
	fn test_missing_entry_falls_back_to_default() {
		let theme = Theme::from_toml("name = \"bare\"").unwrap();
		assert_eq!(theme.style_for(TokenCategory::Keyword), Style::default());
	}

	#[test]
	fn test_resolve_recoalesces_equal_styles() {
		let mut builder = StyleSpansBuilder::new();
		builder.add(Some(TokenCategory::Integer), 2);
		builder.add(Some(TokenCategory::Float), 3);
		let spans = builder.finish();

		// Dark theme styles integer and float identically, so the two runs
		// collapse into one styled run.
		let resolved = Theme::dark().resolve(&spans);
		assert_eq!(resolved.len(), 1);
		assert_eq!(resolved.total_len(), 5);
	}

	#[test]
	fn test_dark_and_light_differ() {
		let dark = Theme::dark();
		let light = Theme::light();
		assert_ne!(
			dark.style_for(TokenCategory::Keyword),
			light.style_for(TokenCategory::Keyword)
		);
	}
}
