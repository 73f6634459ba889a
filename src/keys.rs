//! Candidate key search.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::construct::{AttributeSet, Fd, SetHasher, simplify};

/// All candidate keys of `universe` under `fds`: the inclusion-minimal
/// attribute sets whose closure is the full universe.
///
/// Breadth-first worklist search starting from the full universe, over the
/// simplified (single-attribute rhs) dependency list. For a set `S` under
/// consideration, any dependency `lhs -> a` with `lhs ⊆ S`, `a ∈ S` and
/// `a ∉ lhs` marks `a` as redundant in `S` (it stays derivable after
/// removal), so `S - a` joins the worklist. A set with no applicable
/// reduction is a minimal generator and is offered to the result antichain.
/// Terminates because every reduction strictly shrinks the set.
pub fn candidate_keys(universe: AttributeSet, fds: &[Fd]) -> Vec<AttributeSet> {
    let simplified = simplify(fds);
    let mut worklist: VecDeque<AttributeSet> = VecDeque::from([universe]);
    let mut seen: HashSet<AttributeSet, SetHasher> = HashSet::default();
    seen.insert(universe);
    let mut antichain: Vec<AttributeSet> = Vec::new();
    while let Some(current) = worklist.pop_front() {
        let mut reduced = false;
        for fd in &simplified {
            if fd.lhs().is_subset_of(current)
                && fd.rhs().is_subset_of(current)
                && !fd.rhs().is_subset_of(fd.lhs())
            {
                reduced = true;
                let shrunk = current - fd.rhs();
                if seen.insert(shrunk) {
                    worklist.push_back(shrunk);
                }
            }
        }
        if !reduced {
            offer_minimal(&mut antichain, current);
        }
    }
    debug!(keys = antichain.len(), "candidate key search finished");
    antichain
}

/// Antichain insertion with dominance check: discard `candidate` when a kept
/// set is already a subset of it, otherwise evict every kept superset of
/// `candidate` and append it. Keeps the collection restricted to
/// inclusion-minimal members at all times.
fn offer_minimal(antichain: &mut Vec<AttributeSet>, candidate: AttributeSet) {
    if antichain.iter().any(|kept| kept.is_subset_of(candidate)) {
        return;
    }
    antichain.retain(|kept| !candidate.is_subset_of(*kept));
    antichain.push(candidate);
}
