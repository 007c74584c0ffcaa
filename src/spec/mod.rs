/*!
# Argot: Specs.

This module contains the shared contract for argument specifications, along
with the four concrete kinds: [`Flag`], [`Opt`], [`List`], and [`Command`].
*/

mod command;
mod flag;
mod list;
mod opt;

pub use command::Command;
pub use flag::Flag;
pub use list::List;
pub use opt::Opt;

use crate::{
	ArgotError,
	Cursor,
	FromArg,
};



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Spec Kind.
pub enum Kind {
	/// # Boolean Switch.
	Flag,

	/// # Single Value.
	Opt,

	/// # Multiple Values.
	List,

	/// # (Sub)command.
	Command,
}



/// # Argument Specification.
///
/// This is the contract shared by every kind of declared argument. Specs are
/// built up front, mutated exactly once by the parser as it binds a value,
/// and read back by the caller afterwards.
///
/// Spec instances are single-use: re-running a parse over specs that have
/// already been captured is rejected with
/// [`Failure::Reused`](crate::Failure::Reused).
pub trait Spec {
	/// # Name.
	///
	/// The name doubles as the lookup key. Its form implies how it will be
	/// matched: `--name` and `-n` keys are looked up by name, while bare names
	/// are expected to be positional (or (sub)commands).
	fn name(&self) -> &str;

	/// # Fixed Position.
	///
	/// If `Some`, the spec may only be captured at this stream index.
	fn position(&self) -> Option<usize>;

	/// # Required?
	fn is_required(&self) -> bool;

	/// # Captured Position.
	///
	/// Return the stream index where the spec was captured, or `None` if it
	/// wasn't.
	fn captured_at(&self) -> Option<usize>;

	#[inline]
	/// # Found?
	fn is_found(&self) -> bool { self.captured_at().is_some() }

	/// # Description.
	fn description(&self) -> &str;

	/// # Help Text.
	fn help_text(&self) -> &str;

	/// # Kind.
	fn kind(&self) -> Kind;

	#[inline]
	/// # Nested Specs.
	///
	/// Only (sub)commands have any.
	fn nested(&self) -> Vec<&dyn Spec> { Vec::new() }

	/// # Consume.
	///
	/// Bind the value(s) at the cursor, advancing it past whatever was used.
	///
	/// Return `Ok(false)` to decline the match, in which case the parser
	/// rewinds the cursor and moves on to the next candidate. Return an error
	/// to abort the parse.
	///
	/// ## Errors
	///
	/// Implementations should return an error if the token(s) are unusable.
	fn consume(&mut self, cur: &mut Cursor<'_>) -> Result<bool, ArgotError>;
}

/// # Leaf Spec.
///
/// This marks specs that bind values, i.e. anything but a [`Command`]. Only
/// leaves can be nested within a [`Command`].
pub trait Leaf: Spec {}

/// # (Sub)command Scope.
///
/// A spec that establishes a context rather than binding a value.
pub trait Scope: Spec {
	/// # As Spec.
	fn as_spec(&self) -> &dyn Spec;

	/// # Enter.
	///
	/// Record that the command's marker token was seen at `at`.
	///
	/// ## Errors
	///
	/// This should return [`ArgotError::Repeated`] if the command was
	/// already entered.
	fn enter(&mut self, at: usize) -> Result<(), ArgotError>;
}



/// # Declaration.
///
/// This is the tagged union [`Parser::with`](crate::Parser::with) uses to
/// sort declarations into (sub)commands and everything else. References to
/// any of the built-in spec types convert automatically.
pub enum Decl<'d> {
	/// # Value-Binding Spec.
	Leaf(&'d mut dyn Spec),

	/// # (Sub)command.
	Command(&'d mut dyn Scope),
}

impl<'d, S: Leaf + 'd> From<&'d mut S> for Decl<'d> {
	#[inline]
	fn from(src: &'d mut S) -> Self { Self::Leaf(src) }
}

impl<'d, 'a: 'd> From<&'d mut Command<'a>> for Decl<'d> {
	#[inline]
	fn from(src: &'d mut Command<'a>) -> Self { Self::Command(src) }
}



/// # Capture a Value.
///
/// Convert the token at the cursor and run it past the choice and position
/// constraints, in that order.
pub(super) fn capture<T: FromArg + PartialEq>(
	name: &str,
	position: Option<usize>,
	choices: &[T],
	raw: &str,
	idx: usize,
) -> Result<T, ArgotError> {
	let value = T::from_arg(raw).ok_or_else(|| ArgotError::Unparseable {
		name: name.to_owned(),
		value: raw.to_owned(),
		scope: None,
	})?;

	if ! choices.is_empty() && ! choices.contains(&value) {
		return Err(ArgotError::InvalidValue { name: name.to_owned(), scope: None });
	}

	if position.is_some_and(|p| p != idx) {
		return Err(ArgotError::PositionMismatch { name: name.to_owned(), scope: None });
	}

	Ok(value)
}

/// # Repeat Check.
///
/// Specs may only be captured once per parse.
pub(super) fn once(name: &str, captured: Option<usize>) -> Result<(), ArgotError> {
	if captured.is_some() {
		Err(ArgotError::Repeated { name: name.to_owned(), scope: None })
	}
	else { Ok(()) }
}
