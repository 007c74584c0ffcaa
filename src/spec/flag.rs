/*!
# Argot: Flag.
*/

use crate::{
	ArgotError,
	Cursor,
	Kind,
	Leaf,
	Spec,
};
use super::once;



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Boolean Flag.
///
/// A switch that is either present or not. Unlike [`Opt`](crate::Opt), a
/// flag binds no value token; matching it simply flips it on.
///
/// ## Examples
///
/// ```
/// use argot::{Flag, Parser};
///
/// let mut verbose = Flag::new("-v").desc("Be chatty.");
/// assert!(Parser::new().with(&mut verbose).try_parse(&["-v"]).is_ok());
/// assert!(verbose.value());
/// ```
pub struct Flag {
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
	value: bool,
}

impl Flag {
	#[must_use]
	/// # New.
	pub fn new<S: Into<String>>(name: S) -> Self {
		Self {
			name: name.into(),
			..Self::default()
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
	/// # Value.
	pub const fn value(&self) -> bool { self.value }
}

impl Spec for Flag {
	fn name(&self) -> &str { &self.name }
	fn position(&self) -> Option<usize> { self.position }
	fn is_required(&self) -> bool { self.required }
	fn captured_at(&self) -> Option<usize> { self.captured }
	fn description(&self) -> &str { &self.description }
	fn help_text(&self) -> &str { &self.help }
	fn kind(&self) -> Kind { Kind::Flag }

	fn consume(&mut self, cur: &mut Cursor<'_>) -> Result<bool, ArgotError> {
		once(&self.name, self.captured)?;

		let idx = cur.key_index();
		if self.position.is_some_and(|p| p != idx) {
			return Err(ArgotError::PositionMismatch {
				name: self.name.clone(),
				scope: None,
			});
		}

		// Positional keys haven't been stepped over yet.
		if cur.index() == idx { cur.advance(); }

		self.captured = Some(idx);
		self.value = true;
		Ok(true)
	}
}

impl Leaf for Flag {}
