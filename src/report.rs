/*!
# Argot: Reporting.

Parse failures are handed to an [`ErrorHandler`]. The default,
[`CaretPointer`], prints the argument line with a caret under the offending
token.
*/

use crate::{
	ArgotError,
	Failure,
};
use std::{
	fmt,
	io::{
		Stderr,
		Write,
	},
};



/// # Window Width.
///
/// The echoed argument line is clipped to this many characters.
const WINDOW: usize = 80;



/// # Error Handler.
///
/// This is called once, with the full argument list, when a parse fails.
pub trait ErrorHandler {
	/// # Handle.
	fn handle(&mut self, args: &[&str], failure: &Failure);
}



#[derive(Debug)]
/// # Caret Pointer.
///
/// This is the default [`ErrorHandler`]. Invalid tokens are reported with a
/// [`Caret`]; everything else is printed as-is.
///
/// Write errors are ignored; there's nowhere left to report them.
///
/// ## Examples
///
/// ```
/// use argot::{CaretPointer, Opt, Parser};
///
/// let mut num = Opt::<u8>::new("--num");
/// let mut handler = CaretPointer::new(Vec::new());
/// assert!(! Parser::new().with(&mut num).parse_with(&["--num", "x"], &mut handler));
///
/// let out = String::from_utf8(handler.into_inner()).unwrap();
/// assert!(out.starts_with("Error: "));
/// ```
pub struct CaretPointer<W: Write> {
	/// # Writer.
	out: W,
}

impl Default for CaretPointer<Stderr> {
	fn default() -> Self { Self::new(std::io::stderr()) }
}

impl<W: Write> CaretPointer<W> {
	#[must_use]
	/// # New.
	pub const fn new(out: W) -> Self { Self { out } }

	#[must_use]
	/// # Into Inner.
	pub fn into_inner(self) -> W { self.out }
}

impl<W: Write> ErrorHandler for CaretPointer<W> {
	fn handle(&mut self, args: &[&str], failure: &Failure) {
		let _res = match failure {
			Failure::Invalid { index, error } =>
				writeln!(self.out, "{}", Caret::new(args, *index, error)),
			_ => writeln!(self.out, "{failure}"),
		};
		let _res = self.out.flush();
	}
}



#[derive(Debug, Clone, Copy)]
/// # Caret Diagnostic.
///
/// This renders an error as three lines: the message, the argument line
/// (clipped to 80 characters around the offending token), and a caret
/// pointing at the token.
///
/// ```text
/// Error: Invalid option detected in context @ --bogus in commit
/// commit --bogus 9
///        ^ Error occurred here
/// ```
pub struct Caret<'a> {
	/// # Arguments.
	args: &'a [&'a str],

	/// # Offending Index.
	index: usize,

	/// # Error.
	error: &'a ArgotError,
}

impl fmt::Display for Caret<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (line, caret) = self.window();
		writeln!(f, "Error: {}", self.error)?;
		writeln!(f, "{line}")?;
		write!(f, "{:caret$}^ Error occurred here", "")
	}
}

impl<'a> Caret<'a> {
	#[must_use]
	/// # New.
	pub const fn new(args: &'a [&'a str], index: usize, error: &'a ArgotError)
	-> Self {
		Self { args, index, error }
	}

	#[must_use]
	/// # Window.
	///
	/// Return the clipped argument line along with the caret's column within
	/// it. All measurements are in characters.
	///
	/// If the whole line fits, or the token ends within the first 80
	/// characters, the window starts at the beginning. Otherwise it is
	/// centered on the token, clamped so as not to run past the end of the
	/// line or start after the token itself.
	pub fn window(&self) -> (String, usize) {
		let mut col = 0;
		let mut width = 0;
		for (idx, arg) in self.args.iter().enumerate() {
			let len = arg.chars().count();
			if idx < self.index { col += len + 1; }
			else {
				if idx == self.index { width = len; }
				break;
			}
		}

		let line = self.args.join(" ");
		let total = line.chars().count();
		col = col.min(total);

		let start =
			if total <= WINDOW || col + width <= WINDOW { 0 }
			else {
				(col + width / 2).saturating_sub(WINDOW / 2)
					.min(total - WINDOW)
					.min(col)
			};

		(line.chars().skip(start).take(WINDOW).collect(), col - start)
	}
}
