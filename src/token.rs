/*!
# Argot: Token Kinds.
*/



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Token Kind.
///
/// Every raw argument is sorted into one of these buckets before the parser
/// decides how to look it up. The rules are intentionally dumb and purely
/// lexical:
/// * Three or more bytes starting with `--` is a [`TokenKind::LongOption`];
/// * Three or more bytes starting with a single `-` is a [`TokenKind::MultiFlag`];
/// * Exactly two bytes starting with `-` is a [`TokenKind::Flag`];
/// * Everything else is [`TokenKind::Positional`].
///
/// The one exception is a dash followed by a single digit, like `-5`, which
/// is treated as a negative number, i.e. positional. Longer dash-prefixed
/// tokens are flags regardless of what follows the dash, so `-12` and `-1.5`
/// are both [`TokenKind::MultiFlag`].
///
/// ## Examples
///
/// ```
/// use argot::TokenKind;
///
/// assert_eq!(TokenKind::from("--paths"), TokenKind::LongOption);
/// assert_eq!(TokenKind::from("-abc"), TokenKind::MultiFlag);
/// assert_eq!(TokenKind::from("-v"), TokenKind::Flag);
/// assert_eq!(TokenKind::from("-5"), TokenKind::Positional);
/// assert_eq!(TokenKind::from("-12"), TokenKind::MultiFlag);
/// assert_eq!(TokenKind::from("commit"), TokenKind::Positional);
/// ```
pub enum TokenKind {
	/// # Long Option (`--name`).
	LongOption,

	/// # Multi-Character Flag (`-name`).
	MultiFlag,

	/// # Single Flag (`-x`).
	Flag,

	/// # Everything Else.
	///
	/// Bare words, (sub)command names, single-digit negatives, `-`, etc.
	Positional,
}

impl From<&str> for TokenKind {
	#[inline]
	fn from(src: &str) -> Self { Self::from_bytes(src.as_bytes()) }
}

impl From<&[u8]> for TokenKind {
	#[inline]
	fn from(src: &[u8]) -> Self { Self::from_bytes(src) }
}

impl TokenKind {
	#[must_use]
	/// # Classify.
	pub const fn from_bytes(src: &[u8]) -> Self {
		match src {
			[b'-', b'-', _, ..] => Self::LongOption,
			[b'-', _, _, ..] => Self::MultiFlag,
			[b'-', b'0'..=b'9'] => Self::Positional,
			[b'-', _] => Self::Flag,
			_ => Self::Positional,
		}
	}

	#[must_use]
	/// # Is Positional?
	pub const fn is_positional(self) -> bool { matches!(self, Self::Positional) }
}



#[must_use]
/// # Valid List Capture?
///
/// List-style arguments greedily swallow the tokens following their key until
/// they hit something that looks like another key. This is that check.
///
/// Anything two or more bytes long starting with a dash is rejected, `--` and
/// negative numbers included, but a lone `-` is allowed through since it is
/// commonly used to mean STDIN.
///
/// ## Examples
///
/// ```
/// assert!(argot::valid_capture("foo.txt"));
/// assert!(argot::valid_capture("-"));
/// assert!(! argot::valid_capture("--"));
/// assert!(! argot::valid_capture("-v"));
/// ```
pub const fn valid_capture(src: &str) -> bool {
	! matches!(src.as_bytes(), [b'-', _, ..])
}
