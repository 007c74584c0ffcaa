/*!
# Benchmark: `argot::TokenKind`
*/

use brunch::{
	Bench,
	benches,
};
use argot::{
	TokenKind,
	valid_capture,
};

benches!(
	Bench::new("argot::TokenKind::from(Hello World)")
		.run(|| TokenKind::from("Hello World")),

	Bench::new("argot::TokenKind::from(-p)")
		.run(|| TokenKind::from("-p")),

	Bench::new("argot::TokenKind::from(-5)")
		.run(|| TokenKind::from("-5")),

	Bench::new("argot::TokenKind::from(--prefix-color)")
		.run(|| TokenKind::from("--prefix-color")),

	Bench::spacer(),

	Bench::new("argot::valid_capture(-)")
		.run(|| valid_capture("-")),

	Bench::new("argot::valid_capture(--other)")
		.run(|| valid_capture("--other")),
);
