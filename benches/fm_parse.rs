/*!
# Benchmark: `argot::Parser`
*/

use brunch::{
	Bench,
	benches,
};
use argot::{
	Command,
	Flag,
	List,
	Opt,
	Parser,
};

/// # Arguments.
const ARGS: [&str; 10] = [
	"12", "-v", "--paths", "/foo/bar", "/bar/baz",
	"commit", "--test", "9", "--ding", "1.5",
];

/// # Parse.
///
/// Specs are single-use, so each run declares a fresh set.
fn parse(args: &[&str]) -> bool {
	let mut num = Opt::<i32>::new("num").position(0).choices([3, 12, 24]);
	let mut verbose = Flag::new("-v");
	let mut paths = List::<String>::new("--paths").max(2);
	let mut test = Opt::<i32>::new("--test").required();
	let mut ding = Opt::<f32>::new("--ding");
	let mut commit = Command::new("commit")
		.with(&mut test)
		.with(&mut ding);

	Parser::new()
		.with(&mut num)
		.with(&mut verbose)
		.with(&mut paths)
		.with(&mut commit)
		.try_parse(args)
		.is_ok()
}

benches!(
	Bench::new("argot::Parser::try_parse(0)")
		.run(|| parse(&[])),

	Bench::new("argot::Parser::try_parse(10)")
		.run(|| parse(&ARGS)),
);
