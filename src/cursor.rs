/*!
# Argot: Cursor.
*/

use crate::TokenKind;



#[derive(Debug, Clone)]
/// # Token Cursor.
///
/// This tracks the parser's progress through the argument stream and is
/// handed to [`Spec::consume`](crate::Spec::consume) so the matched spec can
/// pull however many tokens it needs.
///
/// Each pass of the parse loop starts with a _key_: the token being examined.
/// For dash-prefixed keys the cursor is moved past the key before any spec
/// sees it, so [`Cursor::current`] is the (would-be) value. For positional
/// keys the cursor stays put; the key _is_ the value.
///
/// Indices are zero-based positions within the argument stream, program name
/// excluded.
pub struct Cursor<'t> {
	/// # Tokens.
	tokens: &'t [&'t str],

	/// # Next Unread Index.
	pos: usize,

	/// # Key Index.
	key: usize,

	/// # Key Kind.
	kind: TokenKind,

	/// # Active Context.
	///
	/// The index of the most recent (sub)command marker, if any.
	context: Option<usize>,
}

impl<'t> Cursor<'t> {
	#[must_use]
	/// # New.
	pub(crate) const fn new(tokens: &'t [&'t str]) -> Self {
		Self {
			tokens,
			pos: 0,
			key: 0,
			kind: TokenKind::Positional,
			context: None,
		}
	}

	/// # Begin Next Key.
	///
	/// Classify the next unread token and make it the key, stepping past it if
	/// it is dash-prefixed. Returns `None` once the stream is exhausted.
	pub(crate) fn begin(&mut self) -> Option<&'t str> {
		let key = self.tokens.get(self.pos).copied()?;
		self.key = self.pos;
		self.kind = TokenKind::from(key);
		if ! self.kind.is_positional() { self.pos += 1; }
		Some(key)
	}

	/// # Enter Context.
	///
	/// Make the current key the active (sub)command context and move past it.
	pub(crate) fn enter(&mut self) {
		self.context = Some(self.key);
		self.pos = self.key + 1;
	}

	/// # Skip Key.
	///
	/// Move past a positional key that is being treated as a name rather than
	/// a value.
	pub(crate) fn skip_key(&mut self) { self.pos = self.key + 1; }

	#[must_use]
	/// # Mark.
	pub(crate) const fn mark(&self) -> usize { self.pos }

	/// # Reset to Mark.
	pub(crate) fn reset(&mut self, mark: usize) { self.pos = mark; }
}

impl<'t> Cursor<'t> {
	#[must_use]
	/// # Current Token.
	///
	/// Return the next unread token, if any.
	pub fn current(&self) -> Option<&'t str> { self.tokens.get(self.pos).copied() }

	#[must_use]
	/// # Current Index.
	pub const fn index(&self) -> usize { self.pos }

	/// # Advance.
	///
	/// Mark the current token as read.
	pub fn advance(&mut self) {
		if self.pos < self.tokens.len() { self.pos += 1; }
	}

	#[must_use]
	/// # Exhausted?
	pub const fn is_exhausted(&self) -> bool { self.tokens.len() <= self.pos }

	#[must_use]
	/// # Key.
	pub fn key(&self) -> &'t str { self.tokens.get(self.key).copied().unwrap_or_default() }

	#[must_use]
	/// # Key Index.
	pub const fn key_index(&self) -> usize { self.key }

	#[must_use]
	/// # Key Kind.
	pub const fn kind(&self) -> TokenKind { self.kind }

	#[must_use]
	/// # Active Context.
	///
	/// Return the name of the (sub)command most recently entered, if any.
	pub fn context(&self) -> Option<&'t str> {
		self.context.and_then(|idx| self.tokens.get(idx).copied())
	}

	#[must_use]
	/// # Tokens.
	pub const fn tokens(&self) -> &'t [&'t str] { self.tokens }
}
