//! Relnorm – relational schema design checks over a fixed attribute universe.
//!
//! Relnorm reasons about a relation schema given as a set of attributes and
//! the functional dependencies (FDs) that hold among them:
//! * A [`construct::Universe`] assigns every attribute name a bit position,
//!   so that a [`construct::AttributeSet`] is a plain `u32` bitmask and set
//!   algebra collapses into bitwise operations.
//! * A [`construct::Fd`] is a pair of attribute sets read "lhs determines
//!   rhs".
//! * A [`construct::Schema`] couples a universe with its FD list and offers
//!   every operation below as a method.
//!
//! On top of these the crate computes:
//! * attribute closures ([`closure::attribute_closure`]),
//! * candidate keys ([`keys::candidate_keys`]),
//! * a minimal cover ([`cover::minimal_cover`]),
//! * 2NF / 3NF / BCNF verdicts with diagnostics
//!   ([`normal::check_normal_forms`]),
//! * a lossless, dependency-preserving 3NF decomposition
//!   ([`decompose::decompose_3nf`]).
//!
//! ## Modules
//! * [`construct`] – Fundamental constructs: attribute sets, dependencies,
//!   the universe and the schema facade.
//! * [`closure`] – Fixpoint closure computation.
//! * [`cover`] – Minimal cover construction.
//! * [`keys`] – Candidate key search.
//! * [`normal`] – Normal form checks and their serializable results.
//! * [`decompose`] – 3NF decomposition.
//! * [`notation`] – The textual boundary: parsing input, rendering results.
//! * [`error`] – Boundary errors and the crate-wide `Result`.
//!
//! ## Quick Start
//! ```
//! use relnorm::construct::Schema;
//!
//! let schema = Schema::parse(
//!     "A, B, C, D, E, G",
//!     "A -> B\nB -> C\nB -> D\nB -> E",
//! ).unwrap();
//! let keys = schema.candidate_keys();
//! assert_eq!(schema.stringify_attrs(keys[0]), "{A, G}");
//! let verdicts = schema.check_normal_forms();
//! assert!(verdicts.iter().all(|check| !check.satisfied));
//! ```
//!
//! Everything is computed by pure functions over immutable values; no
//! operation holds state across calls, so schemas can be shared between
//! threads as they are.
//!
//! ## Scope
//! Multi-valued dependencies, 4NF/5NF, the enumeration of *all* minimal
//! covers and BCNF decomposition are out of scope. The universe is capped
//! at [`construct::MAX_ATTRS`] attributes so sets stay inside their mask.

pub mod closure;
pub mod construct;
pub mod cover;
pub mod decompose;
pub mod error;
pub mod keys;
pub mod normal;
pub mod notation;
