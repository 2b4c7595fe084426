//! The composite token pattern and its category dispatch table.
//!
//! One alternation, one named group per category, compiled once and reused
//! across calls. Order matters twice: alternation order decides which
//! category wins a tie at the same start position (keyword beats the
//! generic identifier, the suffixed literals beat the bare number), and
//! the period alternative is deliberately last so every other reading of
//! a `.`-adjacent token is preferred.

use once_cell::sync::Lazy;
use tinct_primitives::TokenCategory;

/// Reserved words recognized by the scanner.
pub(crate) const KEYWORDS: [&str; 50] = [
	"abstract", "assert", "boolean", "break", "byte",
	"case", "catch", "char", "class", "const",
	"continue", "default", "do", "double", "else",
	"enum", "extends", "final", "finally", "float",
	"for", "goto", "if", "implements", "import",
	"instanceof", "int", "interface", "long", "native",
	"new", "package", "private", "protected", "public",
	"return", "short", "static", "strictfp", "super",
	"switch", "synchronized", "this", "throw", "throws",
	"transient", "try", "void", "volatile", "while",
];

const PAREN: &str = r"\(|\)";
const BRACE: &str = r"\{|\}";
const BRACKET: &str = r"\[|\]";
const SEMICOLON: &str = r";";
const COMMA: &str = r",";
const COMMENT: &str = r"//[^\n]*|/\*(?s:.*?)\*/";
const FUNCTION: &str = r"\b[a-zA-Z_][a-zA-Z_0-9]*\s*(?=\()";
const NUMBER: &str = r"\b\d+\b";
const ANNOTATION: &str = r"@[a-zA-Z_][a-zA-Z_0-9]*";
const VARIABLE: &str = r"\b[a-zA-Z_][a-zA-Z_0-9]*\b";
const PERIOD: &str = r"\.";
const OPERATOR: &str = r"[+\-*/%&|^~<>!=]=?|->:|&&|\|\||\?|:";

const STRING: &str = r#""([^"\\]|\\.)*""#;
const BOOLEAN: &str = r"\b(?:true|false)\b";
const CHARACTER: &str = r"'([^'\\]|\\.)*'";
const INTEGER: &str = r"\b\d+(_\d+)*\b|0[xX][0-9a-fA-F]+|0[bB][01]+|0[oO][0-7]+";
const FLOAT: &str = r"\b\d+(_\d+)*\.\d+(_\d+)*(f|F)?\b";
const DOUBLE: &str = r"\b\d+(_\d+)*\.\d+(_\d+)*(d|D)?\b";
const LONG: &str = r"\b\d+(_\d+)*[lL]\b";

/// The composite token pattern. Backtracking engine: the function-name
/// alternative needs lookahead, and leftmost-first alternation preserves
/// the tie-breaking the category order encodes.
pub(crate) static TOKEN: Lazy<fancy_regex::Regex> = Lazy::new(|| {
	let keyword = format!(r"\b(?:{})\b", KEYWORDS.join("|"));
	let pattern = format!(
		"(?P<KEYWORD>{keyword})\
		|(?P<PAREN>{PAREN})\
		|(?P<BRACE>{BRACE})\
		|(?P<BRACKET>{BRACKET})\
		|(?P<SEMICOLON>{SEMICOLON})\
		|(?P<STRING>{STRING})\
		|(?P<BOOLEAN>{BOOLEAN})\
		|(?P<CHARACTER>{CHARACTER})\
		|(?P<INTEGER>{INTEGER})\
		|(?P<FLOAT>{FLOAT})\
		|(?P<DOUBLE>{DOUBLE})\
		|(?P<LONG>{LONG})\
		|(?P<COMMENT>{COMMENT})\
		|(?P<FUNCTION>{FUNCTION})\
		|(?P<NUMBER>{NUMBER})\
		|(?P<ANNOTATION>{ANNOTATION})\
		|(?P<VARIABLE>{VARIABLE})\
		|(?P<OPERATOR>{OPERATOR})\
		|(?P<COMMA>{COMMA})\
		|(?P<PERIOD>{PERIOD})",
	);
	fancy_regex::Regex::new(&pattern).expect("composite token pattern is valid")
});

/// Named groups in dispatch order, excluding PERIOD which routes through
/// the context-window classifier instead.
pub(crate) const GROUPS: [(&str, TokenCategory); 19] = [
	("KEYWORD", TokenCategory::Keyword),
	("STRING", TokenCategory::String),
	("BOOLEAN", TokenCategory::Boolean),
	("CHARACTER", TokenCategory::Character),
	("INTEGER", TokenCategory::Integer),
	("FLOAT", TokenCategory::Float),
	("DOUBLE", TokenCategory::Double),
	("LONG", TokenCategory::Long),
	("PAREN", TokenCategory::Paren),
	("BRACE", TokenCategory::Brace),
	("BRACKET", TokenCategory::Bracket),
	("SEMICOLON", TokenCategory::Semicolon),
	("COMMENT", TokenCategory::Comment),
	("FUNCTION", TokenCategory::Function),
	("NUMBER", TokenCategory::Number),
	("ANNOTATION", TokenCategory::Annotation),
	("VARIABLE", TokenCategory::Variable),
	("OPERATOR", TokenCategory::Operator),
	("COMMA", TokenCategory::Comma),
];

/// Probes run against the ±40-char window around a matched period.
/// Lookahead-free, so these use the non-backtracking engine.
pub(crate) static IMPORT_CONTEXT: Lazy<regex::Regex> =
	Lazy::new(|| regex::Regex::new(r"\bimport\s+[^;]*\b").expect("import context pattern is valid"));

pub(crate) static CALL_CONTEXT: Lazy<regex::Regex> =
	Lazy::new(|| regex::Regex::new(r"\b[a-zA-Z_][a-zA-Z_0-9]*\s*\(").expect("call context pattern is valid"));
