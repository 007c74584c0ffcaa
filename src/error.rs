/*!
# Argot: Errors.
*/

use std::{
	error::Error,
	fmt,
};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Error!
///
/// These are the errors that can be raised while scanning the argument
/// stream. The first one encountered aborts the parse.
///
/// Where relevant, `name` is the name of the spec that raised the error, and
/// `scope` is the name of the (sub)command it belongs to, if any.
pub enum ArgotError {
	/// # Unmatched Token.
	///
	/// The token matched nothing in the active (sub)command context, nor any
	/// top-level spec.
	Context {
		/// # Offending Token.
		token: String,

		/// # Active Context.
		context: Option<String>,
	},

	/// # Value Not Allowed.
	///
	/// The value is not one of the spec's declared choices.
	InvalidValue {
		/// # Spec Name.
		name: String,

		/// # Enclosing Command.
		scope: Option<String>,
	},

	/// # Missing Value.
	///
	/// An option key was the last thing in the stream.
	MissingValue {
		/// # Spec Name.
		name: String,

		/// # Enclosing Command.
		scope: Option<String>,
	},

	/// # Wrong Position.
	///
	/// The spec declares a fixed position, and the token is somewhere else.
	PositionMismatch {
		/// # Spec Name.
		name: String,

		/// # Enclosing Command.
		scope: Option<String>,
	},

	/// # Repeated.
	///
	/// The spec was already captured earlier in the stream.
	Repeated {
		/// # Spec Name.
		name: String,

		/// # Enclosing Command.
		scope: Option<String>,
	},

	/// # Conversion Failed.
	///
	/// The token could not be converted to the spec's value type.
	Unparseable {
		/// # Spec Name.
		name: String,

		/// # Raw Value.
		value: String,

		/// # Enclosing Command.
		scope: Option<String>,
	},
}

impl Error for ArgotError {}

impl fmt::Display for ArgotError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Context { token, context } => write!(
				f,
				"{} @ {token} in {}",
				self.as_str(),
				context.as_deref().unwrap_or("none"),
			),
			Self::Unparseable { name, value, scope } => {
				write!(f, "{} @ {name}", self.as_str())?;
				if let Some(scope) = scope { write!(f, " in {scope}")?; }
				write!(f, " ({value:?})")
			},
			Self::InvalidValue { name, scope } |
			Self::MissingValue { name, scope } |
			Self::PositionMismatch { name, scope } |
			Self::Repeated { name, scope } => {
				write!(f, "{} @ {name}", self.as_str())?;
				if let Some(scope) = scope { write!(f, " in {scope}") }
				else { Ok(()) }
			},
		}
	}
}

impl ArgotError {
	#[must_use]
	/// # As String Slice.
	///
	/// Return a short description of the error, sans particulars.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Context { .. } => "Invalid option detected in context",
			Self::InvalidValue { .. } => "Value must be one of the declared choices",
			Self::MissingValue { .. } => "Missing value",
			Self::PositionMismatch { .. } => "Invalid capture position",
			Self::Repeated { .. } => "Argument specified more than once",
			Self::Unparseable { .. } => "Invalid value",
		}
	}

	#[must_use]
	/// # Spec Name.
	///
	/// Return the name of the spec that raised the error, or in the case of
	/// [`ArgotError::Context`], the offending token.
	pub fn name(&self) -> &str {
		match self {
			Self::Context { token, .. } => token,
			Self::InvalidValue { name, .. } |
			Self::MissingValue { name, .. } |
			Self::PositionMismatch { name, .. } |
			Self::Repeated { name, .. } |
			Self::Unparseable { name, .. } => name,
		}
	}

	#[must_use]
	/// # Scope.
	///
	/// Return the (sub)command context the error was raised in, if any.
	pub fn scope(&self) -> Option<&str> {
		match self {
			Self::Context { context, .. } => context.as_deref(),
			Self::InvalidValue { scope, .. } |
			Self::MissingValue { scope, .. } |
			Self::PositionMismatch { scope, .. } |
			Self::Repeated { scope, .. } |
			Self::Unparseable { scope, .. } => scope.as_deref(),
		}
	}

	#[must_use]
	/// # Within Scope.
	///
	/// Tag a spec-level error with the enclosing command's name, unless it
	/// already has one.
	pub(crate) fn within(mut self, command: &str) -> Self {
		match &mut self {
			Self::Context { .. } => {},
			Self::InvalidValue { scope, .. } |
			Self::MissingValue { scope, .. } |
			Self::PositionMismatch { scope, .. } |
			Self::Repeated { scope, .. } |
			Self::Unparseable { scope, .. } => if scope.is_none() {
				*scope = Some(command.to_owned());
			},
		}
		self
	}
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Missing Required Arguments.
///
/// Required specs that were never captured are not treated as errors during
/// the scan; they are collected after the fact so that _all_ of them can be
/// reported together.
///
/// Names of specs nested under a (sub)command are prefixed with the command
/// name, e.g. `commit --message`.
pub struct Missing {
	/// # Names.
	names: Vec<String>,
}

impl Error for Missing {}

impl fmt::Display for Missing {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Missing args: ")?;
		f.write_str(&self.names.join(", "))
	}
}

impl Missing {
	#[must_use]
	/// # Names.
	pub fn names(&self) -> &[String] { &self.names }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.names.is_empty() }

	#[must_use]
	/// # Length.
	pub fn len(&self) -> usize { self.names.len() }

	/// # Push.
	pub(crate) fn push(&mut self, name: String) { self.names.push(name); }
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Parse Failure.
///
/// This is what [`Parser::try_parse`](crate::Parser::try_parse) returns when
/// things don't work out.
pub enum Failure {
	/// # Scan Aborted.
	///
	/// An error was raised while processing the token at `index`.
	Invalid {
		/// # Token Index.
		index: usize,

		/// # Error.
		error: ArgotError,
	},

	/// # Required Arguments Missing.
	Missing(Missing),

	/// # Spec Reused.
	///
	/// The named spec was already captured by an earlier parse. Spec instances
	/// are single-use.
	Reused(String),
}

impl Error for Failure {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::Invalid { error, .. } => Some(error),
			Self::Missing(m) => Some(m),
			Self::Reused(_) => None,
		}
	}
}

impl fmt::Display for Failure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Invalid { error, .. } => fmt::Display::fmt(error, f),
			Self::Missing(m) => fmt::Display::fmt(m, f),
			Self::Reused(name) => write!(f, "Argument already parsed: {name}"),
		}
	}
}

impl From<Missing> for Failure {
	#[inline]
	fn from(src: Missing) -> Self { Self::Missing(src) }
}

impl Failure {
	#[must_use]
	/// # Error.
	///
	/// Return the scan error, if that's what this is.
	pub const fn error(&self) -> Option<&ArgotError> {
		if let Self::Invalid { error, .. } = self { Some(error) }
		else { None }
	}

	#[must_use]
	/// # Missing.
	///
	/// Return the missing-argument report, if that's what this is.
	pub const fn missing(&self) -> Option<&Missing> {
		if let Self::Missing(m) = self { Some(m) }
		else { None }
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_display() {
		let err = ArgotError::Context {
			token: "--bogus".to_owned(),
			context: Some("commit".to_owned()),
		};
		assert_eq!(err.to_string(), "Invalid option detected in context @ --bogus in commit");
		assert_eq!(err.name(), "--bogus");
		assert_eq!(err.scope(), Some("commit"));

		let err = ArgotError::Context { token: "nope".to_owned(), context: None };
		assert_eq!(err.to_string(), "Invalid option detected in context @ nope in none");

		let err = ArgotError::InvalidValue { name: "num".to_owned(), scope: None };
		assert_eq!(err.to_string(), "Value must be one of the declared choices @ num");

		let err = ArgotError::Unparseable {
			name: "--test".to_owned(),
			value: "x".to_owned(),
			scope: None,
		}.within("commit");
		assert_eq!(err.to_string(), r#"Invalid value @ --test in commit ("x")"#);
	}

	#[test]
	fn t_within() {
		// Scope is only set once.
		let err = ArgotError::Repeated { name: "--a".to_owned(), scope: None }
			.within("inner")
			.within("outer");
		assert_eq!(err.scope(), Some("inner"));

		// Context errors already carry their context.
		let err = ArgotError::Context { token: "x".to_owned(), context: None }
			.within("commit");
		assert_eq!(err.scope(), None);
	}

	#[test]
	fn t_missing() {
		let mut missing = Missing::default();
		assert!(missing.is_empty());
		missing.push("--a".to_owned());
		missing.push("commit --b".to_owned());
		assert_eq!(missing.len(), 2);
		assert_eq!(missing.to_string(), "Missing args: --a, commit --b");

		let failure = Failure::from(missing.clone());
		assert_eq!(failure.missing(), Some(&missing));
		assert!(failure.error().is_none());
	}
}
