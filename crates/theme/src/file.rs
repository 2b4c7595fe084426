//! TOML theme-file model.
//!
//! ```toml
//! name = "solar"
//! default = { fg = "#839496" }
//! search-highlight = { fg = "black", bg = "yellow" }
//!
//! [styles]
//! keyword = { fg = "#cb4b16", bold = true }
//! comment = { fg = "gray", italic = true }
//! import-period = { fg = "cyan" }
//! ```

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;
use tinct_primitives::{Modifier, ParseColorError, Style, TokenCategory};

use crate::Theme;

/// Errors from loading or parsing a theme file.
#[derive(Error, Debug)]
pub enum ThemeError {
	#[error("failed to read theme file: {0}")]
	Io(#[from] std::io::Error),

	#[error("malformed theme file: {0}")]
	Parse(#[from] toml::de::Error),

	#[error(transparent)]
	Color(#[from] ParseColorError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	default: Option<StyleSpec>,
	#[serde(default, rename = "search-highlight")]
	search_highlight: Option<StyleSpec>,
	#[serde(default)]
	styles: HashMap<TokenCategory, StyleSpec>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleSpec {
	fg: Option<String>,
	bg: Option<String>,
	#[serde(default)]
	bold: bool,
	#[serde(default)]
	italic: bool,
	#[serde(default)]
	underlined: bool,
}

impl StyleSpec {
	fn to_style(&self) -> Result<Style, ThemeError> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(fg.parse()?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(bg.parse()?);
		}
		if self.bold {
			style = style.add_modifier(Modifier::BOLD);
		}
		if self.italic {
			style = style.add_modifier(Modifier::ITALIC);
		}
		if self.underlined {
			style = style.add_modifier(Modifier::UNDERLINED);
		}
		Ok(style)
	}
}

pub(crate) fn parse(text: &str) -> Result<Theme, ThemeError> {
	let file: ThemeFile = toml::from_str(text)?;

	let default_style = match &file.default {
		Some(spec) => spec.to_style()?,
		None => Style::default(),
	};
	let search_highlight = match &file.search_highlight {
		Some(spec) => spec.to_style()?,
		None => Style::default().bg(tinct_primitives::Color::Yellow),
	};
	let mut styles = HashMap::new();
	for (category, spec) in &file.styles {
		styles.insert(*category, spec.to_style()?);
	}

	Ok(Theme {
		name: file.name,
		styles,
		default_style,
		search_highlight,
	})
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use std::io::Write;
	use tinct_primitives::Color;

	use super::*;

	const SOLAR: &str = r##"
name = "solar"
default = { fg = "#839496" }
search-highlight = { fg = "black", bg = "yellow" }

[styles]
keyword = { fg = "#cb4b16", bold = true }
comment = { fg = "gray", italic = true }
import-period = { fg = "cyan" }
"##;

	#[test]
	fn test_parse_full_theme() {
		let theme = Theme::from_toml(SOLAR).unwrap();
		assert_eq!(theme.name(), "solar");
		assert_eq!(
			theme.style_for(TokenCategory::Keyword),
			Style::new().fg(Color::Rgb(0xcb, 0x4b, 0x16)).bold()
		);
		assert_eq!(
			theme.style_for(TokenCategory::Comment),
			Style::new().fg(Color::Gray).italic()
		);
		assert_eq!(
			theme.style_for(TokenCategory::ImportPeriod),
			Style::new().fg(Color::Cyan)
		);
		// Unmapped categories use the default.
		assert_eq!(
			theme.style_for(TokenCategory::Variable),
			Style::new().fg(Color::Rgb(0x83, 0x94, 0x96))
		);
		assert_eq!(
			theme.search_highlight(),
			Style::new().fg(Color::Black).bg(Color::Yellow)
		);
	}

	#[test]
	fn test_unknown_scope_key_is_rejected() {
		let err = Theme::from_toml("name = \"x\"\n[styles]\nkeywrod = { fg = \"red\" }").unwrap_err();
		assert!(matches!(err, ThemeError::Parse(_)));
	}

	#[test]
	fn test_unknown_color_is_rejected() {
		let err = Theme::from_toml("name = \"x\"\n[styles]\nkeyword = { fg = \"mauve\" }").unwrap_err();
		assert!(matches!(err, ThemeError::Color(_)));
	}

	#[test]
	fn test_load_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(SOLAR.as_bytes()).unwrap();
		let theme = Theme::load(file.path()).unwrap();
		assert_eq!(theme.name(), "solar");
	}

	#[test]
	fn test_missing_file_is_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let err = Theme::load(dir.path().join("absent.toml")).unwrap_err();
		assert!(matches!(err, ThemeError::Io(_)));
	}
}
