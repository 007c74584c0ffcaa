/*!
# Argot: Help.
*/

use crate::{
	Kind,
	Spec,
};
use std::fmt::Write;



/// # Help Formatter.
///
/// Formatters are handed each top-level spec in declaration order, leaves
/// first, then (sub)commands. They are responsible for any recursion into
/// [`Spec::nested`].
pub trait HelpFormatter {
	/// # Write Spec.
	///
	/// Append the help entry for `spec` to `out`. The `depth` is zero for
	/// top-level specs and increases by one for each level of nesting.
	fn write_spec(&mut self, spec: &dyn Spec, depth: usize, out: &mut String);
}



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Plain Help.
///
/// This is the default [`HelpFormatter`], producing one entry per spec:
///
/// ```text
/// --test <VALUE>
///     Test value. (required)
///     Some help text.
/// ```
///
/// Nested specs are indented beneath their command.
pub struct PlainHelp;

impl HelpFormatter for PlainHelp {
	fn write_spec(&mut self, spec: &dyn Spec, depth: usize, out: &mut String) {
		let indent = depth * 4;
		let _res = match spec.kind() {
			Kind::Flag | Kind::Command => writeln!(out, "{:indent$}{}", "", spec.name()),
			Kind::Opt => writeln!(out, "{:indent$}{} <VALUE>", "", spec.name()),
			Kind::List => writeln!(out, "{:indent$}{} <VALUE>...", "", spec.name()),
		};

		let inner = indent + 4;
		let desc = spec.description();
		match (desc.is_empty(), spec.is_required()) {
			(false, true) => { let _res = writeln!(out, "{:inner$}{desc} (required)", ""); },
			(false, false) => { let _res = writeln!(out, "{:inner$}{desc}", ""); },
			(true, true) => { let _res = writeln!(out, "{:inner$}(required)", ""); },
			(true, false) => {},
		}

		let help = spec.help_text();
		if ! help.is_empty() {
			for line in help.lines() {
				let _res = writeln!(out, "{:inner$}{line}", "");
			}
		}

		for nested in spec.nested() { self.write_spec(nested, depth + 1, out); }
	}
}
