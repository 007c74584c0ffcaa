/*!
# Argot: (Sub)command.
*/

use crate::{
	ArgotError,
	Cursor,
	dispatch::route,
	Kind,
	Leaf,
	Scope,
	Spec,
};
use std::fmt;



/// # (Sub)command.
///
/// A command binds no value of its own. When its name turns up as a
/// positional token, the parser enters its context, and from then on the
/// command's nested specs are tried first for each subsequent token.
///
/// Nested specs are their own namespace; they may share names with
/// top-level specs or the specs of other commands.
///
/// Commands borrow their nested specs mutably, so read those back once the
/// command (and parser) are done with.
///
/// ## Examples
///
/// ```
/// use argot::{Command, Opt, Parser, Spec};
///
/// let mut test = Opt::<i32>::new("--test");
/// let mut commit = Command::new("commit").with(&mut test);
///
/// assert!(Parser::new().with(&mut commit).try_parse(&["commit", "--test", "9"]).is_ok());
/// assert!(commit.is_found());
/// assert_eq!(test.value(), Some(&9));
/// ```
pub struct Command<'a> {
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

	/// # Nested Specs.
	nested: Vec<&'a mut dyn Spec>,
}

impl fmt::Debug for Command<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Command")
			.field("name", &self.name)
			.field("position", &self.position)
			.field("required", &self.required)
			.field("captured", &self.captured)
			.field("nested", &self.nested.iter().map(|s| s.name()).collect::<Vec<_>>())
			.finish_non_exhaustive()
	}
}

impl<'a> Command<'a> {
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
			nested: Vec::new(),
		}
	}

	#[must_use]
	/// # With Nested Spec.
	///
	/// Nested specs are tried in the order they were added.
	pub fn with<S: Leaf + 'a>(mut self, spec: &'a mut S) -> Self {
		self.nested.push(spec);
		self
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
	/// This is informational only; commands are matched by name.
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
}

impl Spec for Command<'_> {
	fn name(&self) -> &str { &self.name }
	fn position(&self) -> Option<usize> { self.position }
	fn is_required(&self) -> bool { self.required }
	fn captured_at(&self) -> Option<usize> { self.captured }
	fn description(&self) -> &str { &self.description }
	fn help_text(&self) -> &str { &self.help }
	fn kind(&self) -> Kind { Kind::Command }

	fn nested(&self) -> Vec<&dyn Spec> {
		self.nested.iter().map(|s| -> &dyn Spec { &**s }).collect()
	}

	/// # Consume.
	///
	/// Route the token through the nested specs. Errors raised by them are
	/// tagged with this command's name.
	fn consume(&mut self, cur: &mut Cursor<'_>) -> Result<bool, ArgotError> {
		route(self.nested.as_mut_slice(), cur).map_err(|e| e.within(&self.name))
	}
}

impl Scope for Command<'_> {
	fn as_spec(&self) -> &dyn Spec { self }

	fn enter(&mut self, at: usize) -> Result<(), ArgotError> {
		if self.captured.is_some() {
			return Err(ArgotError::Repeated { name: self.name.clone(), scope: None });
		}
		self.captured = Some(at);
		Ok(())
	}
}
