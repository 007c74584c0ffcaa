/*!
# Argot: Commit Demo

Try it with something like:
cargo run --example commit -- num 12 --paths a b commit --test 9
*/

use argot::{
	Command,
	List,
	Opt,
	Parser,
	Spec,
};
use std::process::ExitCode;

fn main() -> ExitCode {
	env_logger::init();

	let mut c_test = Opt::<i32>::new("--test");
	let mut ding = Opt::<f32>::new("--ding");
	let mut commit = Command::new("commit")
		.desc("Commit things.")
		.with(&mut c_test)
		.with(&mut ding);

	let mut p_test = Opt::<f32>::new("--test");
	let mut dong = Opt::<f32>::new("--dong");
	let mut push = Command::new("push")
		.desc("Push things.")
		.with(&mut p_test)
		.with(&mut dong);

	let mut paths = List::<String>::new("--paths").max(2);
	let mut num = Opt::<i32>::new("num")
		.position(1)
		.desc("This is great")
		.default_value(3)
		.choices([3, 12, 24]);
	let mut fl = Opt::<f32>::new("--fl")
		.desc("This is great")
		.default_value(5.14);
	let mut flz = Opt::<f32>::new("--flz")
		.desc("This is not great")
		.default_value(5.14);

	let args = argot::env_args();
	let mut parser = Parser::new()
		.with(&mut commit)
		.with(&mut push)
		.with(&mut paths)
		.with(&mut num)
		.with(&mut fl)
		.with(&mut flz);

	if ! parser.parse(&args) {
		println!("{}", parser.help());
		return ExitCode::FAILURE;
	}

	if commit.is_found() { println!("Committing."); }
	if push.is_found() { println!("Pushing."); }
	if num.value() == Some(&12) { println!("Found the value"); }

	ExitCode::SUCCESS
}
