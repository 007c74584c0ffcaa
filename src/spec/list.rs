/*!
# Argot: List.
*/

use crate::{
	ArgotError,
	Cursor,
	FromArg,
	Kind,
	Leaf,
	Spec,
	valid_capture,
};
use super::{
	capture,
	once,
};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Multi-Value List.
///
/// This greedily binds up to [`List::max`] values, stopping early at the end
/// of the stream or at the first token that looks like a key (see
/// [`valid_capture`]). That token is then parsed normally.
///
/// If fewer than [`List::min`] values are found, the list declines the
/// match. A list is only considered found once it has bound at least one
/// value; a bare key with nothing after it leaves a required list missing.
///
/// ## Examples
///
/// ```
/// use argot::{Flag, List, Parser};
///
/// let mut paths = List::<String>::new("--paths").max(2);
/// let mut other = Flag::new("--other");
///
/// assert!(
///     Parser::new()
///         .with(&mut paths)
///         .with(&mut other)
///         .try_parse(&["--paths", "a", "b", "--other"])
///         .is_ok()
/// );
///
/// assert_eq!(paths.values(), ["a", "b"]);
/// assert!(other.value());
/// ```
pub struct List<T> {
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

	/// # Values.
	values: Vec<T>,

	/// # Minimum Count (Inclusive).
	min: usize,

	/// # Maximum Count (Inclusive).
	max: usize,
}

impl<T> List<T> {
	/// # Default Maximum.
	pub const MAX: usize = 255;

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
			values: Vec::new(),
			min: 0,
			max: Self::MAX,
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
	///
	/// Note that the position constraint applies to every captured item, so
	/// a positioned list can only ever hold one value.
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
	/// # Minimum Count.
	pub const fn min(mut self, min: usize) -> Self {
		self.min = min;
		self
	}

	#[must_use]
	/// # Maximum Count.
	pub const fn max(mut self, max: usize) -> Self {
		self.max = max;
		self
	}

	#[must_use]
	/// # Bounds.
	///
	/// Return the inclusive minimum and maximum item counts.
	pub const fn bounds(&self) -> (usize, usize) { (self.min, self.max) }

	#[must_use]
	/// # Values.
	pub fn values(&self) -> &[T] { &self.values }

	#[must_use]
	/// # Into Values.
	pub fn into_values(self) -> Vec<T> { self.values }
}

impl<T: FromArg + PartialEq> Spec for List<T> {
	fn name(&self) -> &str { &self.name }
	fn position(&self) -> Option<usize> { self.position }
	fn is_required(&self) -> bool { self.required }
	fn captured_at(&self) -> Option<usize> { self.captured }
	fn description(&self) -> &str { &self.description }
	fn help_text(&self) -> &str { &self.help }
	fn kind(&self) -> Kind { Kind::List }

	fn consume(&mut self, cur: &mut Cursor<'_>) -> Result<bool, ArgotError> {
		once(&self.name, self.captured)?;

		let start = cur.index();
		let mut values = Vec::new();
		while values.len() < self.max {
			let Some(raw) = cur.current() else { break; };
			if ! valid_capture(raw) { break; }

			values.push(capture::<T>(&self.name, self.position, &[], raw, cur.index())?);
			cur.advance();
		}

		if values.len() < self.min { return Ok(false); }

		// Nothing bound, nothing found.
		if values.is_empty() { return Ok(true); }

		self.captured = Some(start);
		self.values = values;
		Ok(true)
	}
}

impl<T: FromArg + PartialEq> Leaf for List<T> {}
