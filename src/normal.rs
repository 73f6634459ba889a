//! Normal form checks: 2NF, 3NF and BCNF classification with diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::closure::attribute_closure;
use crate::construct::{Fd, Universe};
use crate::keys::candidate_keys;
use crate::notation::{stringify_attrs, stringify_fds};

/// The normal forms the checker can classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalForm {
    #[serde(rename = "2NF")]
    Second,
    #[serde(rename = "3NF")]
    Third,
    #[serde(rename = "BCNF")]
    BoyceCodd,
}

impl fmt::Display for NormalForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NormalForm::Second => write!(f, "2NF"),
            NormalForm::Third => write!(f, "3NF"),
            NormalForm::BoyceCodd => write!(f, "BCNF"),
        }
    }
}

/// Outcome of a single normal form check: pass, or fail with a diagnostic
/// naming the offending attributes or dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NfCheck {
    pub form: NormalForm,
    pub satisfied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub violation: Option<String>,
}

impl NfCheck {
    fn pass(form: NormalForm) -> Self {
        Self {
            form,
            satisfied: true,
            violation: None,
        }
    }
    fn fail(form: NormalForm, violation: String) -> Self {
        Self {
            form,
            satisfied: false,
            violation: Some(violation),
        }
    }
}

/// 2NF: no attribute outside the key may depend on a proper part of the key.
///
/// Checked against the first candidate key the searcher yields; with several
/// keys of differing prime attributes only that one is consulted. For every
/// single attribute of the key, the rest of the key must be closed: anything
/// extra in its closure depends on that part alone rather than on the whole
/// key.
pub fn check_2nf(universe: &Universe, fds: &[Fd]) -> NfCheck {
    let Some(&key) = candidate_keys(universe.all(), fds).first() else {
        return NfCheck::pass(NormalForm::Second);
    };
    for attr in key.singles() {
        let rest = key - attr;
        let closure = attribute_closure(rest, fds);
        if closure != rest {
            return NfCheck::fail(
                NormalForm::Second,
                format!(
                    "non-prime attributes {} can be inferred from {} instead of the whole key {}",
                    stringify_attrs(closure - rest, universe),
                    stringify_attrs(rest, universe),
                    stringify_attrs(key, universe),
                ),
            );
        }
    }
    NfCheck::pass(NormalForm::Second)
}

/// 3NF: every non-trivial dependency must have a superkey lhs or an
/// all-prime rhs (the rhs fits inside some candidate key).
pub fn check_3nf(universe: &Universe, fds: &[Fd]) -> NfCheck {
    let keys = candidate_keys(universe.all(), fds);
    for fd in fds {
        if fd.is_trivial() {
            continue;
        }
        let lhs_is_superkey = keys.iter().any(|key| key.is_subset_of(fd.lhs()));
        let rhs_is_prime = keys.iter().any(|key| key.contains(fd.rhs()));
        if !lhs_is_superkey && !rhs_is_prime {
            return NfCheck::fail(
                NormalForm::Third,
                format!(
                    "in non-trivial dependency {}, {} is not a superkey and {} is not made of prime attributes",
                    stringify_fds(&[*fd], universe, "\n"),
                    stringify_attrs(fd.lhs(), universe),
                    stringify_attrs(fd.rhs(), universe),
                ),
            );
        }
    }
    NfCheck::pass(NormalForm::Third)
}

/// BCNF: every non-trivial dependency must have a superkey lhs, with no
/// exception for prime right hand sides.
pub fn check_bcnf(universe: &Universe, fds: &[Fd]) -> NfCheck {
    let keys = candidate_keys(universe.all(), fds);
    for fd in fds {
        if fd.is_trivial() {
            continue;
        }
        if !keys.iter().any(|key| key.is_subset_of(fd.lhs())) {
            return NfCheck::fail(
                NormalForm::BoyceCodd,
                format!(
                    "in non-trivial dependency {}, {} is not a superkey",
                    stringify_fds(&[*fd], universe, "\n"),
                    stringify_attrs(fd.lhs(), universe),
                ),
            );
        }
    }
    NfCheck::pass(NormalForm::BoyceCodd)
}

/// Run all three checks, in 2NF, 3NF, BCNF order.
pub fn check_normal_forms(universe: &Universe, fds: &[Fd]) -> [NfCheck; 3] {
    [
        check_2nf(universe, fds),
        check_3nf(universe, fds),
        check_bcnf(universe, fds),
    ]
}
