/*!
# Argot: Parser.
*/

use crate::{
	ArgotError,
	CaretPointer,
	Cursor,
	Decl,
	dispatch::{
		dispatch,
		route,
		Strategy,
	},
	ErrorHandler,
	Failure,
	HelpFormatter,
	Missing,
	PlainHelp,
	Scope,
	Spec,
};



#[derive(Default)]
/// # Parser.
///
/// The parser holds mutable references to a fixed set of declared specs and
/// binds values into them in a single pass over the argument stream.
///
/// Declarations are split into two ordered collections as they are added:
/// (sub)commands and everything else. Order matters; when more than one spec
/// could claim a token, the one declared first wins.
///
/// For each token, the parser:
/// 1. Enters the context of a (sub)command if the token is positional and
///    matches a command name;
/// 2. Otherwise, if a context is active, tries that command's nested specs;
/// 3. Otherwise tries the top-level specs, by name for dash-prefixed tokens,
///    or by position (then name) for positional ones;
/// 4. Otherwise gives up with [`ArgotError::Context`].
///
/// Once the stream is exhausted, every required spec, nested ones included,
/// is checked, and any that were not found are reported together.
///
/// ## Examples
///
/// ```
/// use argot::{Command, List, Opt, Parser, Spec};
///
/// let mut paths = List::<String>::new("--paths").max(2);
/// let mut num = Opt::<i32>::new("num").position(0).required();
/// let mut test = Opt::<i32>::new("--test");
/// let mut commit = Command::new("commit").with(&mut test);
///
/// let res = Parser::new()
///     .with(&mut commit)
///     .with(&mut paths)
///     .with(&mut num)
///     .try_parse(&["12", "commit", "--test", "9"]);
/// assert!(res.is_ok());
///
/// assert!(commit.is_found());
/// assert_eq!(num.value(), Some(&12));
/// assert_eq!(test.value(), Some(&9));
/// assert!(paths.values().is_empty());
/// ```
pub struct Parser<'d> {
	/// # Top-Level Leaf Specs.
	leaves: Vec<&'d mut dyn Spec>,

	/// # (Sub)commands.
	commands: Vec<&'d mut dyn Scope>,
}

impl<'d> Parser<'d> {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # With Spec.
	///
	/// Register a declaration. Any of the built-in spec types can be passed
	/// by mutable reference.
	pub fn with<D: Into<Decl<'d>>>(mut self, decl: D) -> Self {
		match decl.into() {
			Decl::Leaf(s) => { self.leaves.push(s); },
			Decl::Command(s) => { self.commands.push(s); },
		}
		self
	}

	#[must_use]
	/// # Help.
	///
	/// Render help for all declared specs using [`PlainHelp`].
	pub fn help(&self) -> String { self.help_with(&mut PlainHelp) }

	/// # Help With.
	///
	/// Render help for all declared specs using a custom formatter.
	pub fn help_with<F: HelpFormatter + ?Sized>(&self, formatter: &mut F) -> String {
		let mut out = String::new();
		for spec in &self.leaves { formatter.write_spec(&**spec, 0, &mut out); }
		for spec in &self.commands { formatter.write_spec(spec.as_spec(), 0, &mut out); }
		out
	}
}

impl Parser<'_> {
	/// # Parse.
	///
	/// Parse the arguments, reporting any failure to STDERR with the default
	/// [`CaretPointer`] handler. Returns `true` on success.
	///
	/// Note that `args` should _not_ include the program name; see
	/// [`env_args`](crate::env_args).
	pub fn parse<S: AsRef<str>>(&mut self, args: &[S]) -> bool {
		self.parse_with(args, &mut CaretPointer::default())
	}

	/// # Parse With Handler.
	///
	/// Same as [`Parser::parse`], but with a custom [`ErrorHandler`].
	pub fn parse_with<S, H>(&mut self, args: &[S], handler: &mut H) -> bool
	where S: AsRef<str>, H: ErrorHandler + ?Sized {
		let tokens: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
		match self.run(&tokens) {
			Ok(()) => true,
			Err(e) => {
				handler.handle(&tokens, &e);
				false
			},
		}
	}

	/// # Try Parse.
	///
	/// Parse the arguments, returning the details of any failure rather than
	/// reporting it.
	///
	/// ## Errors
	///
	/// This returns [`Failure::Invalid`] if a token could not be handled,
	/// [`Failure::Missing`] if any required specs were not found, or
	/// [`Failure::Reused`] if any of the specs were already captured by an
	/// earlier parse.
	pub fn try_parse<S: AsRef<str>>(&mut self, args: &[S]) -> Result<(), Failure> {
		let tokens: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
		self.run(&tokens)
	}

	/// # Run.
	fn run(&mut self, tokens: &[&str]) -> Result<(), Failure> {
		if let Some(name) = self.reused() { return Err(Failure::Reused(name)); }

		let mut cur = Cursor::new(tokens);
		if let Err(error) = self.scan(&mut cur) {
			log::debug!("Parse aborted at {}: {error}", cur.key_index());
			return Err(Failure::Invalid { index: cur.key_index(), error });
		}

		let missing = self.missing();
		if missing.is_empty() { Ok(()) }
		else {
			log::debug!("{missing}");
			Err(Failure::Missing(missing))
		}
	}

	/// # Scan.
	///
	/// Run through the tokens, binding whatever can be bound.
	fn scan(&mut self, cur: &mut Cursor<'_>) -> Result<(), ArgotError> {
		while let Some(key) = cur.begin() {
			log::trace!("Token {}: {key:?} ({:?}).", cur.key_index(), cur.kind());

			// Are we entering a new context?
			if cur.kind().is_positional() {
				if let Some(cmd) = self.commands.iter_mut().find(|c| c.name() == key) {
					log::debug!("Entering {key:?} context.");
					cmd.enter(cur.key_index())?;
					cur.enter();
					continue;
				}
			}

			// The active context gets first dibs.
			if
				cur.context().is_some() &&
				dispatch(&mut self.commands, cur, Strategy::ByContext)?
			{
				continue;
			}

			// Then everything else.
			if route(&mut self.leaves, cur)? { continue; }

			return Err(ArgotError::Context {
				token: key.to_owned(),
				context: cur.context().map(str::to_owned),
			});
		}

		Ok(())
	}

	/// # Reused?
	///
	/// Return the name of the first spec already captured, if any.
	fn reused(&self) -> Option<String> {
		/// # Walk.
		fn walk(spec: &dyn Spec) -> Option<String> {
			if spec.is_found() { Some(spec.name().to_owned()) }
			else { spec.nested().into_iter().find_map(walk) }
		}

		self.leaves.iter()
			.find_map(|s| walk(&**s))
			.or_else(|| self.commands.iter().find_map(|s| walk(s.as_spec())))
	}

	/// # Missing Required Specs.
	fn missing(&self) -> Missing {
		/// # Walk.
		fn walk(spec: &dyn Spec, prefix: Option<&str>, out: &mut Missing) {
			if spec.is_required() && ! spec.is_found() {
				out.push(prefix.map_or_else(
					|| spec.name().to_owned(),
					|p| format!("{p} {}", spec.name()),
				));
			}
			for nested in spec.nested() { walk(nested, Some(spec.name()), out); }
		}

		let mut out = Missing::default();
		for spec in &self.leaves { walk(&**spec, None, &mut out); }
		for spec in &self.commands { walk(spec.as_spec(), None, &mut out); }
		out
	}
}



#[must_use]
/// # Environment Arguments.
///
/// Return the process arguments, minus the leading program name. Invalid
/// UTF-8 is replaced lossily.
pub fn env_args() -> Vec<String> {
	std::env::args_os()
		.skip(1)
		.map(|a| a.to_string_lossy().into_owned())
		.collect()
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		Command,
		Flag,
		List,
		Opt,
	};

	#[test]
	fn t_empty() {
		// Nothing required, nothing needed.
		let mut a = Opt::<i32>::new("--a");
		let mut b = List::<String>::new("--b");
		let mut c = Flag::new("-c");
		let none: [&str; 0] = [];
		assert_eq!(
			Parser::new().with(&mut a).with(&mut b).with(&mut c).try_parse(&none),
			Ok(()),
		);

		// Something required, something missing.
		let mut a = Opt::<i32>::new("--a").required();
		let mut b = List::<String>::new("--b").required();
		let mut c = Flag::new("-c");
		let res = Parser::new().with(&mut a).with(&mut b).with(&mut c).try_parse(&none);
		let Err(Failure::Missing(m)) = res else { panic!("Expected missing failure.") };
		assert_eq!(m.names(), ["--a", "--b"]);
	}

	#[test]
	fn t_option() {
		let mut test = Opt::<i32>::new("--test");
		assert!(Parser::new().with(&mut test).try_parse(&["--test", "7"]).is_ok());
		assert_eq!(test.value(), Some(&7));
		assert_eq!(test.captured_at(), Some(1));
	}

	#[test]
	fn t_choice() {
		let mut num = Opt::<i32>::new("num").position(1).choices([3, 12, 24]);
		let res = Parser::new().with(&mut num).try_parse(&["num", "5"]);
		assert_eq!(
			res,
			Err(Failure::Invalid {
				index: 0,
				error: ArgotError::InvalidValue { name: "num".to_owned(), scope: None },
			}),
		);

		let mut num = Opt::<i32>::new("num").position(1).choices([3, 12, 24]);
		assert!(Parser::new().with(&mut num).try_parse(&["num", "12"]).is_ok());
		assert_eq!(num.value(), Some(&12));
	}

	#[test]
	fn t_position_mismatch() {
		let mut num = Opt::<i32>::new("--num").position(3);
		let res = Parser::new().with(&mut num).try_parse(&["--num", "5"]);
		assert!(matches!(
			res,
			Err(Failure::Invalid { error: ArgotError::PositionMismatch { .. }, .. }),
		));
	}

	#[test]
	fn t_list() {
		let mut paths = List::<String>::new("--paths").max(2);
		let mut other = Flag::new("--other");
		assert!(
			Parser::new()
				.with(&mut paths)
				.with(&mut other)
				.try_parse(&["--paths", "a", "b", "--other"])
				.is_ok()
		);
		assert_eq!(paths.values(), ["a", "b"]);
		assert_eq!(paths.captured_at(), Some(1));
		assert!(other.is_found());

		// Overflow spills into the next lookup.
		let mut paths = List::<String>::new("--paths").max(2);
		let res = Parser::new().with(&mut paths).try_parse(&["--paths", "a", "b", "c"]);
		assert_eq!(
			res,
			Err(Failure::Invalid {
				index: 3,
				error: ArgotError::Context { token: "c".to_owned(), context: None },
			}),
		);

		// Too few.
		let mut paths = List::<String>::new("--paths").min(2);
		let res = Parser::new().with(&mut paths).try_parse(&["--paths", "a"]);
		assert!(matches!(
			res,
			Err(Failure::Invalid { index: 0, error: ArgotError::Context { .. } }),
		));
		assert!(paths.values().is_empty());
	}

	#[test]
	fn t_command() {
		let mut test = Opt::<i32>::new("--test");
		let mut commit = Command::new("commit").with(&mut test);
		assert!(Parser::new().with(&mut commit).try_parse(&["commit", "--test", "9"]).is_ok());
		assert_eq!(commit.captured_at(), Some(0));
		assert_eq!(test.value(), Some(&9));

		let mut test = Opt::<i32>::new("--test");
		let mut commit = Command::new("commit").with(&mut test);
		let res = Parser::new().with(&mut commit).try_parse(&["commit", "--bogus", "9"]);
		assert_eq!(
			res,
			Err(Failure::Invalid {
				index: 1,
				error: ArgotError::Context {
					token: "--bogus".to_owned(),
					context: Some("commit".to_owned()),
				},
			}),
		);
	}

	#[test]
	fn t_scopes() {
		// The same name in different scopes.
		let mut c_test = Opt::<i32>::new("--test");
		let mut p_test = Opt::<f32>::new("--test");
		let mut top = Opt::<String>::new("--test");
		let mut verbose = Flag::new("-v");
		let mut commit = Command::new("commit").with(&mut c_test);
		let mut push = Command::new("push").with(&mut p_test);

		let res = Parser::new()
			.with(&mut commit)
			.with(&mut push)
			.with(&mut top)
			.with(&mut verbose)
			.try_parse(&["--test", "top", "push", "-v", "--test", "1.5", "commit", "--test", "3"]);
		assert_eq!(res, Ok(()));

		// Not entered in this order, but that doesn't matter.
		assert_eq!(commit.captured_at(), Some(6));
		assert_eq!(push.captured_at(), Some(2));
		assert_eq!(top.value().map(String::as_str), Some("top"));
		assert!(verbose.value(), "Top-level specs remain reachable within a context.");
		assert_eq!(p_test.value(), Some(&1.5));
		assert_eq!(c_test.value(), Some(&3));
	}

	#[test]
	fn t_scope_shadows() {
		// Within a context, the command's own spec claims a shared name; the
		// top-level one is only reachable outside it.
		let mut nested = Opt::<i32>::new("--test");
		let mut top = Opt::<i32>::new("--test");
		let mut commit = Command::new("commit").with(&mut nested);
		let res = Parser::new()
			.with(&mut commit)
			.with(&mut top)
			.try_parse(&["--test", "1", "commit", "--test", "9"]);
		assert_eq!(res, Ok(()));
		assert_eq!(commit.captured_at(), Some(2));
		assert_eq!(top.value(), Some(&1));
		assert_eq!(nested.value(), Some(&9));

		// Without the top-level value first, the nested spec still wins.
		let mut nested = Opt::<i32>::new("--test");
		let mut top = Opt::<i32>::new("--test");
		let mut commit = Command::new("commit").with(&mut nested);
		let res = Parser::new()
			.with(&mut commit)
			.with(&mut top)
			.try_parse(&["commit", "--test", "9"]);
		assert_eq!(res, Ok(()));
		assert!(commit.is_found());
		assert!(top.value().is_none(), "Top-level spec should be shadowed.");
		assert_eq!(nested.value(), Some(&9));
	}

	#[test]
	fn t_scoped_errors() {
		let mut test = Opt::<i32>::new("--test").choices([1, 2]);
		let mut commit = Command::new("commit").with(&mut test);
		let res = Parser::new().with(&mut commit).try_parse(&["commit", "--test", "9"]);
		let Err(Failure::Invalid { index, error }) = res else { panic!("Expected error.") };
		assert_eq!(index, 1);
		assert_eq!(error.name(), "--test");
		assert_eq!(error.scope(), Some("commit"));
	}

	#[test]
	fn t_missing_nested() {
		let mut msg = Opt::<String>::new("--message").required();
		let mut commit = Command::new("commit").with(&mut msg);
		let mut out = Opt::<String>::new("--out").required();
		let mut push = Command::new("push").required();
		let res = Parser::new()
			.with(&mut commit)
			.with(&mut out)
			.with(&mut push)
			.try_parse(&["commit"]);

		let Err(Failure::Missing(m)) = res else { panic!("Expected missing failure.") };
		assert_eq!(m.names(), ["--out", "commit --message", "push"]);
	}

	#[test]
	fn t_unmatched() {
		let mut a = Opt::<i32>::new("--a");
		let res = Parser::new().with(&mut a).try_parse(&["--a", "1", "stray"]);
		assert_eq!(
			res,
			Err(Failure::Invalid {
				index: 2,
				error: ArgotError::Context { token: "stray".to_owned(), context: None },
			}),
		);
	}

	#[test]
	fn t_repeated() {
		let mut a = Opt::<i32>::new("--a");
		let res = Parser::new().with(&mut a).try_parse(&["--a", "1", "--a", "2"]);
		assert!(matches!(
			res,
			Err(Failure::Invalid { index: 2, error: ArgotError::Repeated { .. } }),
		));
		assert_eq!(a.value(), Some(&1));

		let mut commit = Command::new("commit");
		let res = Parser::new().with(&mut commit).try_parse(&["commit", "commit"]);
		assert!(matches!(
			res,
			Err(Failure::Invalid { index: 1, error: ArgotError::Repeated { .. } }),
		));
	}

	#[test]
	fn t_reused() {
		let mut a = Opt::<i32>::new("--a");
		assert!(Parser::new().with(&mut a).try_parse(&["--a", "1"]).is_ok());

		// Specs are single-use.
		let res = Parser::new().with(&mut a).try_parse(&["--a", "2"]);
		assert_eq!(res, Err(Failure::Reused("--a".to_owned())));
		assert_eq!(a.value(), Some(&1));
	}

	#[test]
	fn t_first_declared_wins() {
		// Two specs compete for position zero. The first one declared wins,
		// and the second never sees the token.
		let mut first = Opt::<String>::new("first").position(0);
		let mut second = Opt::<String>::new("second").position(0);
		assert!(
			Parser::new()
				.with(&mut first)
				.with(&mut second)
				.try_parse(&["x"])
				.is_ok()
		);
		assert!(first.is_found());
		assert!(! second.is_found());
	}

	#[test]
	fn t_negative() {
		// Option values are taken as-are, whatever they look like.
		let mut offset = Opt::<i32>::new("--offset");
		let mut n = Opt::<f64>::new("n").position(2);
		assert!(
			Parser::new()
				.with(&mut offset)
				.with(&mut n)
				.try_parse(&["--offset", "-12", "-5"])
				.is_ok()
		);
		assert_eq!(offset.value(), Some(&-12));
		assert_eq!(n.value(), Some(&-5.0));

		// Longer dash-prefixed tokens are flags, even if numeric.
		let mut n = Opt::<f64>::new("n").position(0);
		let res = Parser::new().with(&mut n).try_parse(&["-1.5"]);
		assert_eq!(
			res,
			Err(Failure::Invalid {
				index: 0,
				error: ArgotError::Context { token: "-1.5".to_owned(), context: None },
			}),
		);
		assert!(n.value().is_none());
	}

	#[test]
	fn t_parse_with() {
		/// # Collecting Handler.
		struct Collect(Vec<(usize, String)>);
		impl ErrorHandler for Collect {
			fn handle(&mut self, args: &[&str], failure: &Failure) {
				if let Failure::Invalid { index, .. } = failure {
					self.0.push((*index, args[*index].to_owned()));
				}
			}
		}

		let mut a = Opt::<i32>::new("--a");
		let mut handler = Collect(Vec::new());
		assert!(! Parser::new().with(&mut a).parse_with(&["--a", "x"], &mut handler));
		assert_eq!(handler.0, [(0, "--a".to_owned())]);
	}

	#[test]
	fn t_help() {
		let mut test = Opt::<i32>::new("--test").desc("A test.");
		let mut commit = Command::new("commit").desc("Commit things.").with(&mut test);
		let mut verbose = Flag::new("-v").required();
		let help = Parser::new().with(&mut commit).with(&mut verbose).help();
		assert!(help.contains("-v"));
		assert!(help.contains("commit"));
		assert!(help.contains("Commit things."));
		assert!(help.contains("--test <VALUE>"));
		assert!(help.find("-v").unwrap() < help.find("commit").unwrap());
	}
}
