/*!
# Argot: Dispatch.

This module holds the matching strategies used to find the spec a token
belongs to.
*/

use crate::{
	ArgotError,
	Cursor,
	Spec,
};



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Matching Strategy.
pub(crate) enum Strategy {
	/// # Spec Position Equals the Key Index.
	ByPosition,

	/// # Spec Name Equals the Key.
	ByName,

	/// # Spec Name Equals the Active Context.
	ByContext,
}

impl Strategy {
	/// # Matches?
	fn matches<S: Spec + ?Sized>(self, spec: &S, cur: &Cursor<'_>) -> bool {
		match self {
			Self::ByPosition => spec.position() == Some(cur.key_index()),
			Self::ByName => spec.name() == cur.key(),
			Self::ByContext => cur.context().is_some_and(|c| spec.name() == c),
		}
	}
}



/// # Dispatch.
///
/// Try each spec in declaration order, stopping at the first one that both
/// matches and consumes. A spec declining the match has its cursor
/// movements undone.
///
/// Overlapping declarations are not an error; the earlier one simply wins.
///
/// ## Errors
///
/// Errors raised by a spec's `consume` are passed through as-are.
pub(crate) fn dispatch<S: Spec + ?Sized>(
	specs: &mut [&mut S],
	cur: &mut Cursor<'_>,
	strategy: Strategy,
) -> Result<bool, ArgotError> {
	for spec in specs.iter_mut() {
		if strategy.matches(&**spec, cur) {
			let mark = cur.mark();
			if spec.consume(cur)? {
				log::trace!("{:?} matched {:?}.", cur.key(), spec.name());
				return Ok(true);
			}
			cur.reset(mark);
		}
	}

	Ok(false)
}

/// # Route.
///
/// Dispatch the current key through a set of specs using whichever strategy
/// suits it: dash-prefixed keys are matched by name, positional ones by
/// position.
///
/// Positional keys matching no position are given a second chance by name,
/// allowing bare words to act as keys for the token that follows.
///
/// ## Errors
///
/// Errors raised by a spec's `consume` are passed through as-are.
pub(crate) fn route<S: Spec + ?Sized>(specs: &mut [&mut S], cur: &mut Cursor<'_>)
-> Result<bool, ArgotError> {
	if ! cur.kind().is_positional() {
		return dispatch(specs, cur, Strategy::ByName);
	}

	if dispatch(specs, cur, Strategy::ByPosition)? { return Ok(true); }

	let mark = cur.mark();
	cur.skip_key();
	if dispatch(specs, cur, Strategy::ByName)? { Ok(true) }
	else {
		cur.reset(mark);
		Ok(false)
	}
}
