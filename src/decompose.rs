//! Lossless 3NF decomposition.

use tracing::debug;

use crate::construct::{AttributeSet, Fd};
use crate::cover::minimal_cover;
use crate::keys::candidate_keys;

/// Decompose `universe` into 3NF relation schemas, one attribute set per
/// decomposed relation.
///
/// Minimal-cover dependencies sharing an lhs are grouped into a single
/// schema `lhs ∪ rhs₁ ∪ rhs₂ ∪ …`, in first-occurrence order; identical
/// schemas collapse into one. When no schema contains a whole candidate
/// key, the first key is appended as its own schema, so the natural join
/// over the result reconstructs the original relation. Every minimal-cover
/// dependency lives entirely inside its own group, which makes the
/// decomposition dependency-preserving.
pub fn decompose_3nf(universe: AttributeSet, fds: &[Fd]) -> Vec<AttributeSet> {
    let cover = minimal_cover(fds);

    let mut groups: Vec<(AttributeSet, AttributeSet)> = Vec::new();
    for fd in &cover {
        match groups.iter_mut().find(|(lhs, _)| *lhs == fd.lhs()) {
            Some((_, schema)) => *schema |= fd.rhs(),
            None => groups.push((fd.lhs(), fd.lhs() | fd.rhs())),
        }
    }

    let mut decomposition: Vec<AttributeSet> = Vec::new();
    for (_, schema) in groups {
        if !decomposition.contains(&schema) {
            decomposition.push(schema);
        }
    }

    if let Some(&key) = candidate_keys(universe, fds).first() {
        if !decomposition.iter().any(|&schema| schema.contains(key)) {
            decomposition.push(key);
        }
    }
    debug!(schemas = decomposition.len(), "3NF decomposition built");
    decomposition
}
