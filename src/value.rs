/*!
# Argot: Value Conversion.
*/

use std::path::PathBuf;



/// # From Argument.
///
/// This trait converts a raw token into a typed value. It is implemented for
/// the integer and floating-point primitives, [`String`], and [`PathBuf`];
/// specs can only be declared for types implementing it, so asking for an
/// unsupported type is a compile-time error rather than a runtime one.
///
/// Returning `None` signals the token could not be converted, which the parser
/// reports as [`ArgotError::Unparseable`](crate::ArgotError::Unparseable).
///
/// ## Examples
///
/// ```
/// use argot::FromArg;
///
/// assert_eq!(i32::from_arg("-7"), Some(-7));
/// assert_eq!(f32::from_arg("5.14"), Some(5.14));
/// assert_eq!(u8::from_arg("300"), None);
/// ```
pub trait FromArg: Sized {
	/// # From Argument.
	fn from_arg(raw: &str) -> Option<Self>;
}

/// # Helper: `FromStr`-backed Implementations.
macro_rules! from_arg {
	($($ty:ty),+ $(,)?) => ($(
		impl FromArg for $ty {
			#[inline]
			fn from_arg(raw: &str) -> Option<Self> { raw.parse().ok() }
		}
	)+);
}

from_arg!(
	i8, i16, i32, i64, i128, isize,
	u8, u16, u32, u64, u128, usize,
	f32, f64,
);

impl FromArg for String {
	#[inline]
	fn from_arg(raw: &str) -> Option<Self> { Some(raw.to_owned()) }
}

impl FromArg for PathBuf {
	#[inline]
	fn from_arg(raw: &str) -> Option<Self> { Some(Self::from(raw)) }
}
