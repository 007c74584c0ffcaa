/*!
# Argot: Option.
*/

use crate::{
	ArgotError,
	Cursor,
	FromArg,
	Kind,
	Leaf,
	Spec,
};
use super::{
	capture,
	once,
};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Single-Value Option.
///
/// This binds exactly one value of type `T`.
///
/// Dash-prefixed names like `--threads` take their value from the token that
/// follows the key. Bare names are positional: give them a fixed
/// [`Opt::position`] and the token at that index is the value.
///
/// ## Examples
///
/// ```
/// use argot::{Opt, Parser, Spec};
///
/// let mut threads = Opt::<usize>::new("--threads");
/// let mut level = Opt::<i32>::new("level")
///     .position(2)
///     .choices([1, 2, 3]);
///
/// assert!(
///     Parser::new()
///         .with(&mut threads)
///         .with(&mut level)
///         .try_parse(&["--threads", "4", "2"])
///         .is_ok()
/// );
///
/// assert_eq!(threads.value(), Some(&4));
/// assert_eq!(threads.captured_at(), Some(1));
/// assert_eq!(level.value(), Some(&2));
/// ```
pub struct Opt<T> {
	/// # Name.
	name: String,

	/// # Fixed Position.
	position: Option<usize>,

	/// # Required.
	required: bool,

	/// # Captured Position.
	captured: Option<usize>,

	/// # Description.
	description: String,

	/// # Help Text.
	help: String,

	/// # Value.
	value: Option<T>,

	/// # Allowed Values.
	choices: Vec<T>,
}

impl<T> Opt<T> {
	#[must_use]
	/// # New.
	pub fn new<S: Into<String>>(name: S) -> Self {
		Self {
			name: name.into(),
			position: None,
			required: false,
			captured: None,
			description: String::new(),
			help: String::new(),
			value: None,
			choices: Vec::new(),
		}
	}

	#[must_use]
	/// # Required.
	pub const fn required(mut self) -> Self {
		self.required = true;
		self
	}

	#[must_use]
	/// # Fixed Position.
	pub const fn position(mut self, position: usize) -> Self {
		self.position = Some(position);
		self
	}

	#[must_use]
	/// # Description.
	pub fn desc<S: Into<String>>(mut self, description: S) -> Self {
		self.description = description.into();
		self
	}

	#[must_use]
	/// # Help Text.
	pub fn help_text<S: Into<String>>(mut self, help: S) -> Self {
		self.help = help.into();
		self
	}

	#[must_use]
	/// # Default Value.
	///
	/// Pre-seed the value. A default does not count as "found", so it has no
	/// bearing on required-ness.
	pub fn default_value(mut self, value: T) -> Self {
		self.value = Some(value);
		self
	}

	#[must_use]
	/// # Allowed Values.
	///
	/// If non-empty, captured values must be one of these or the parse will
	/// fail with [`ArgotError::InvalidValue`].
	pub fn choices<I: IntoIterator<Item=T>>(mut self, choices: I) -> Self {
		self.choices = choices.into_iter().collect();
		self
	}

	#[must_use]
	/// # Value.
	pub const fn value(&self) -> Option<&T> { self.value.as_ref() }

	#[must_use]
	/// # Into Value.
	pub fn into_value(self) -> Option<T> { self.value }

	#[must_use]
	/// # Allowed Values.
	pub fn allowed(&self) -> &[T] { &self.choices }
}

impl<T: FromArg + PartialEq> Spec for Opt<T> {
	fn name(&self) -> &str { &self.name }
	fn position(&self) -> Option<usize> { self.position }
	fn is_required(&self) -> bool { self.required }
	fn captured_at(&self) -> Option<usize> { self.captured }
	fn description(&self) -> &str { &self.description }
	fn help_text(&self) -> &str { &self.help }
	fn kind(&self) -> Kind { Kind::Opt }

	fn consume(&mut self, cur: &mut Cursor<'_>) -> Result<bool, ArgotError> {
		once(&self.name, self.captured)?;

		let Some(raw) = cur.current() else {
			return Err(ArgotError::MissingValue { name: self.name.clone(), scope: None });
		};
		let idx = cur.index();
		let value = capture(&self.name, self.position, &self.choices, raw, idx)?;

		self.value = Some(value);
		self.captured = Some(idx);
		cur.advance();
		Ok(true)
	}
}

impl<T: FromArg + PartialEq> Leaf for Opt<T> {}
