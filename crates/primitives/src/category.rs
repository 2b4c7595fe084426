/// Classification tag applied to a matched token.
///
/// The set is closed: a span carries zero or one of these. The three period
/// variants come from context-sensitive refinement of a matched `.` rather
/// than from their own patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TokenCategory {
	Keyword,
	String,
	Boolean,
	Character,
	Integer,
	Float,
	Double,
	Long,
	Paren,
	Brace,
	Bracket,
	Semicolon,
	Comment,
	Function,
	Number,
	Annotation,
	Variable,
	Operator,
	Comma,
	ImportPeriod,
	MethodCallPeriod,
	Period,
}

impl TokenCategory {
	/// Every category, in dispatch order.
	pub const ALL: [TokenCategory; 22] = [
		TokenCategory::Keyword,
		TokenCategory::String,
		TokenCategory::Boolean,
		TokenCategory::Character,
		TokenCategory::Integer,
		TokenCategory::Float,
		TokenCategory::Double,
		TokenCategory::Long,
		TokenCategory::Paren,
		TokenCategory::Brace,
		TokenCategory::Bracket,
		TokenCategory::Semicolon,
		TokenCategory::Comment,
		TokenCategory::Function,
		TokenCategory::Number,
		TokenCategory::Annotation,
		TokenCategory::Variable,
		TokenCategory::Operator,
		TokenCategory::Comma,
		TokenCategory::ImportPeriod,
		TokenCategory::MethodCallPeriod,
		TokenCategory::Period,
	];

	/// Stable scope name, also used as the key in theme files.
	pub fn as_str(self) -> &'static str {
		match self {
			TokenCategory::Keyword => "keyword",
			TokenCategory::String => "string",
			TokenCategory::Boolean => "boolean",
			TokenCategory::Character => "character",
			TokenCategory::Integer => "integer",
			TokenCategory::Float => "float",
			TokenCategory::Double => "double",
			TokenCategory::Long => "long",
			TokenCategory::Paren => "paren",
			TokenCategory::Brace => "brace",
			TokenCategory::Bracket => "bracket",
			TokenCategory::Semicolon => "semicolon",
			TokenCategory::Comment => "comment",
			TokenCategory::Function => "function",
			TokenCategory::Number => "number",
			TokenCategory::Annotation => "annotation",
			TokenCategory::Variable => "variable",
			TokenCategory::Operator => "operator",
			TokenCategory::Comma => "comma",
			TokenCategory::ImportPeriod => "import-period",
			TokenCategory::MethodCallPeriod => "method-call-period",
			TokenCategory::Period => "period",
		}
	}

	/// Parses a scope name back into a category.
	pub fn from_scope(name: &str) -> Option<TokenCategory> {
		Self::ALL.iter().copied().find(|c| c.as_str() == name)
	}
}

impl std::fmt::Display for TokenCategory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
