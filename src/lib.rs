/*!
# Argot

[![license](https://img.shields.io/badge/license-wtfpl-ff1493?style=flat-square)](https://en.wikipedia.org/wiki/WTFPL)

This crate provides a small declarative CLI argument parser. Describe the
arguments your program accepts up front (switches, single-value options,
multi-value lists, and (sub)commands with arguments of their own), hand them
to a [`Parser`], and read the typed values back out once it's done.

There are no macros and no derives. Specs are plain structs, borrowed
mutably by the parser for the duration of a single pass over the arguments.



## Matching

Each token in the stream is classified (see [`TokenKind`]), then:

* Positional tokens naming a [`Command`] enter that command's context;
* Inside a context, the command's nested specs get the first look;
* Dash-prefixed tokens are otherwise matched against spec names;
* Positional tokens are matched against spec positions, or failing that,
  treated as bare-word keys (`num 5`);
* Anything left over aborts the parse with [`ArgotError::Context`].

When more than one spec could claim a token, the one declared first wins.

Once the stream is exhausted, all required specs that went unfound are
reported together.



## Example

```
use argot::{Command, Flag, List, Opt, Parser, Spec};

let mut verbose = Flag::new("-v").desc("Print more.");
let mut paths = List::<String>::new("--paths").max(2);
let mut level = Opt::<i32>::new("level")
    .position(0)
    .choices([1, 2, 3])
    .default_value(1);
let mut message = Opt::<String>::new("--message").required();
let mut commit = Command::new("commit").with(&mut message);

let args = ["2", "-v", "commit", "--message", "Hello"];
// Typically: let args = argot::env_args();

let mut parser = Parser::new()
    .with(&mut verbose)
    .with(&mut paths)
    .with(&mut level)
    .with(&mut commit);

if ! parser.parse(&args) {
    eprintln!("{}", parser.help());
    return;
}

assert!(verbose.value());
assert!(paths.values().is_empty());
assert_eq!(level.value(), Some(&2));
assert!(commit.is_found());
assert_eq!(message.value().map(String::as_str), Some("Hello"));
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod cursor;
mod dispatch;
mod error;
mod help;
mod parse;
mod report;
mod spec;
mod token;
mod value;

pub use cursor::Cursor;
pub use error::{
	ArgotError,
	Failure,
	Missing,
};
pub use help::{
	HelpFormatter,
	PlainHelp,
};
pub use parse::{
	env_args,
	Parser,
};
pub use report::{
	Caret,
	CaretPointer,
	ErrorHandler,
};
pub use spec::{
	Command,
	Decl,
	Flag,
	Kind,
	Leaf,
	List,
	Opt,
	Scope,
	Spec,
};
pub use token::{
	TokenKind,
	valid_capture,
};
pub use value::FromArg;

#[cfg(test)] use brunch as _;
#[cfg(test)] use env_logger as _;
