//! Attribute closure computation, the workhorse every other algorithm
//! builds on.

use tracing::trace;

use crate::construct::{AttributeSet, Fd};

/// The closure of `attrs` under `fds`: the smallest superset of `attrs`
/// such that whenever a dependency's lhs lies inside the set, its rhs does
/// too.
///
/// Computed by iterative augmentation to a fixpoint: scan all dependencies,
/// union in the rhs of every dependency whose lhs is already covered, and
/// stop once a full scan adds nothing. The result is extensive
/// (`attrs ⊆ closure(attrs)`), monotone and idempotent.
pub fn attribute_closure(attrs: AttributeSet, fds: &[Fd]) -> AttributeSet {
    let mut closure = attrs;
    loop {
        let mut grown = false;
        for fd in fds {
            if closure.contains(fd.lhs()) && !closure.contains(fd.rhs()) {
                closure |= fd.rhs();
                grown = true;
            }
        }
        if !grown {
            break;
        }
        trace!(?closure, "closure grew, rescanning");
    }
    closure
}
