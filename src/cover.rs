//! Minimal cover construction.

use tracing::debug;

use crate::closure::attribute_closure;
use crate::construct::{Fd, simplify};

/// Reduce `fds` to an equivalent minimal cover: a closure-equivalent list
/// in which every lhs has been left-reduced and no dependency follows from
/// the others.
///
/// Left-reduction runs a single pass per simplified dependency: every lhs
/// attribute whose removal keeps the rhs derivable (closure taken against
/// the full original list) yields one reduced dependency in place of the
/// original, in ascending bit order. Reduced sides are not reduced again,
/// so attributes that are only jointly removable stay in place.
///
/// Redundancy elimination then walks the reduced list in order and drops
/// every dependency whose rhs is already derivable from its lhs using the
/// not-yet-processed remainder plus the dependencies accepted so far. The
/// outcome is *a* minimal cover; a different input order may yield a
/// different, equally minimal one.
pub fn minimal_cover(fds: &[Fd]) -> Vec<Fd> {
    let simplified = simplify(fds);

    let mut reduced: Vec<Fd> = Vec::with_capacity(simplified.len());
    for fd in &simplified {
        let mut shrunk = false;
        for attr in fd.lhs().singles() {
            let rest = fd.lhs() - attr;
            if fd.rhs().is_subset_of(attribute_closure(rest, fds)) {
                shrunk = true;
                reduced.push(Fd::new(rest, fd.rhs()));
            }
        }
        if !shrunk {
            reduced.push(*fd);
        }
    }

    let mut cover: Vec<Fd> = Vec::new();
    for position in 0..reduced.len() {
        let current = reduced[position];
        let others: Vec<Fd> = reduced[position + 1..]
            .iter()
            .chain(cover.iter())
            .copied()
            .collect();
        if !current
            .rhs()
            .is_subset_of(attribute_closure(current.lhs(), &others))
        {
            cover.push(current);
        }
    }
    debug!(
        input = fds.len(),
        reduced = reduced.len(),
        cover = cover.len(),
        "minimal cover built"
    );
    cover
}
