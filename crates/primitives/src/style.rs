use std::str::FromStr;

use bitflags::bitflags;
use thiserror::Error;

/// A terminal-friendly color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
	/// Resets to the terminal's default.
	Reset,
	Black,
	Red,
	Green,
	Yellow,
	Blue,
	Magenta,
	Cyan,
	Gray,
	DarkGray,
	LightRed,
	LightGreen,
	LightYellow,
	LightBlue,
	LightMagenta,
	LightCyan,
	White,
	/// A 24-bit RGB color.
	Rgb(u8, u8, u8),
	/// An 8-bit 256-color palette index.
	Indexed(u8),
}

impl Color {
	/// Builds an RGB color from a packed `0x00RRGGBB` value.
	pub fn from_u32(value: u32) -> Color {
		Color::Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
	}
}

/// Error returned when parsing a color from a string fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized color: {0:?}")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
	type Err = ParseColorError;

	/// Accepts `#rrggbb` hex notation and lowercase color names.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if let Some(hex) = s.strip_prefix('#') {
			if hex.len() == 6
				&& let Ok(value) = u32::from_str_radix(hex, 16)
			{
				return Ok(Color::from_u32(value));
			}
			return Err(ParseColorError(s.to_string()));
		}
		match s {
			"reset" => Ok(Color::Reset),
			"black" => Ok(Color::Black),
			"red" => Ok(Color::Red),
			"green" => Ok(Color::Green),
			"yellow" => Ok(Color::Yellow),
			"blue" => Ok(Color::Blue),
			"magenta" => Ok(Color::Magenta),
			"cyan" => Ok(Color::Cyan),
			"gray" | "grey" => Ok(Color::Gray),
			"darkgray" | "darkgrey" => Ok(Color::DarkGray),
			"lightred" => Ok(Color::LightRed),
			"lightgreen" => Ok(Color::LightGreen),
			"lightyellow" => Ok(Color::LightYellow),
			"lightblue" => Ok(Color::LightBlue),
			"lightmagenta" => Ok(Color::LightMagenta),
			"lightcyan" => Ok(Color::LightCyan),
			"white" => Ok(Color::White),
			_ => Err(ParseColorError(s.to_string())),
		}
	}
}

bitflags! {
	/// Text attribute flags.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct Modifier: u16 {
		const BOLD = 1 << 0;
		const DIM = 1 << 1;
		const ITALIC = 1 << 2;
		const UNDERLINED = 1 << 3;
		const REVERSED = 1 << 4;
		const CROSSED_OUT = 1 << 5;
	}
}

/// A composed visual style: optional foreground, optional background, and
/// attribute flags. Fields left unset defer to whatever the consumer's
/// default rendering is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
	pub fg: Option<Color>,
	pub bg: Option<Color>,
	pub add_modifier: Modifier,
}

impl Style {
	pub fn new() -> Style {
		Style::default()
	}

	/// Sets the foreground color.
	pub fn fg(mut self, color: Color) -> Style {
		self.fg = Some(color);
		self
	}

	/// Sets the background color.
	pub fn bg(mut self, color: Color) -> Style {
		self.bg = Some(color);
		self
	}

	/// Adds attribute flags.
	pub fn add_modifier(mut self, modifier: Modifier) -> Style {
		self.add_modifier |= modifier;
		self
	}

	pub fn bold(self) -> Style {
		self.add_modifier(Modifier::BOLD)
	}

	pub fn italic(self) -> Style {
		self.add_modifier(Modifier::ITALIC)
	}

	pub fn underlined(self) -> Style {
		self.add_modifier(Modifier::UNDERLINED)
	}

	/// Overlays `other` on top of this style: set fields of `other` win,
	/// modifiers accumulate.
	pub fn patch(mut self, other: Style) -> Style {
		self.fg = other.fg.or(self.fg);
		self.bg = other.bg.or(self.bg);
		self.add_modifier |= other.add_modifier;
		self
	}
}
