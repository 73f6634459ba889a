use core::hash::BuildHasherDefault;
use std::collections::HashMap;
use std::fmt;
use std::ops;

// we will use a fast hashing algo for hashmaps and hashsets where keys are
// attribute names or bitsets
use seahash::SeaHasher;

use crate::closure::attribute_closure;
use crate::cover::minimal_cover;
use crate::decompose::decompose_3nf;
use crate::error::{RelnormError, Result};
use crate::keys::candidate_keys;
use crate::normal::{NfCheck, check_normal_forms};
use crate::notation::{parse_attributes, parse_fds, stringify_attrs, stringify_fds};

pub type NameHasher = BuildHasherDefault<SeaHasher>;
pub type SetHasher = BuildHasherDefault<SeaHasher>;

// hard bound on the universe, so every attribute set fits a u32 mask
pub const MAX_ATTRS: usize = 30;

// ------------- AttributeSet -------------
// A set of attributes over a fixed universe: bit i is set exactly when the
// i:th attribute of the universe is a member. The parsing boundary
// guarantees that no set carries a bit at or above the universe size, and
// set algebra collapses into bitwise operations.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AttributeSet(u32);

impl AttributeSet {
    pub const EMPTY: AttributeSet = AttributeSet(0);

    pub fn single(index: usize) -> Self {
        debug_assert!(index < u32::BITS as usize);
        AttributeSet(1 << index)
    }
    pub fn full(count: usize) -> Self {
        debug_assert!(count <= MAX_ATTRS);
        AttributeSet(((1u64 << count) - 1) as u32)
    }
    pub fn from_bits(bits: u32) -> Self {
        AttributeSet(bits)
    }
    pub fn bits(&self) -> u32 {
        self.0
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_subset_of(&self, other: AttributeSet) -> bool {
        self.0 | other.0 == other.0
    }
    pub fn contains(&self, other: AttributeSet) -> bool {
        other.is_subset_of(*self)
    }
    // the members one by one, in ascending bit order, for algorithms that
    // remove or test attributes individually
    pub fn singles(&self) -> Vec<AttributeSet> {
        let mut singles = Vec::with_capacity(self.len());
        let mut rest = self.0;
        while rest != 0 {
            let lowest = rest & rest.wrapping_neg();
            singles.push(AttributeSet(lowest));
            rest ^= lowest;
        }
        singles
    }
}

impl ops::BitOr for AttributeSet {
    type Output = AttributeSet;
    fn bitor(self, other: AttributeSet) -> AttributeSet {
        AttributeSet(self.0 | other.0)
    }
}
impl ops::BitOrAssign for AttributeSet {
    fn bitor_assign(&mut self, other: AttributeSet) {
        self.0 |= other.0;
    }
}
impl ops::BitAnd for AttributeSet {
    type Output = AttributeSet;
    fn bitand(self, other: AttributeSet) -> AttributeSet {
        AttributeSet(self.0 & other.0)
    }
}
// set difference: members of self that are not members of other
impl ops::Sub for AttributeSet {
    type Output = AttributeSet;
    fn sub(self, other: AttributeSet) -> AttributeSet {
        AttributeSet(self.0 & !other.0)
    }
}

impl fmt::Debug for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AttributeSet({:#b})", self.0)
    }
}

// ------------- FunctionalDependency -------------
// A pair read "lhs determines rhs". Both sides are non-empty for every
// dependency the parsing boundary produces.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Fd {
    lhs: AttributeSet,
    rhs: AttributeSet,
}

impl Fd {
    pub fn new(lhs: AttributeSet, rhs: AttributeSet) -> Self {
        Self { lhs, rhs }
    }
    pub fn lhs(&self) -> AttributeSet {
        self.lhs
    }
    pub fn rhs(&self) -> AttributeSet {
        self.rhs
    }
    // a dependency that cannot add anything: rhs inside lhs
    pub fn is_trivial(&self) -> bool {
        self.rhs.is_subset_of(self.lhs)
    }
}

// split every dependency into one dependency per attribute of its right
// hand side; the result is closure-equivalent and single-attribute-rhs
pub fn simplify(fds: &[Fd]) -> Vec<Fd> {
    let mut simplified = Vec::new();
    for fd in fds {
        for attr in fd.rhs().singles() {
            simplified.push(Fd::new(fd.lhs(), attr));
        }
    }
    simplified
}

// ------------- Universe -------------
// The ordered attribute universe. Every attribute name gets the bit
// position matching its position in the input, and lookups work both from
// name to bit and from bit to name.
#[derive(Debug, Clone)]
pub struct Universe {
    names: Vec<String>,
    index: HashMap<String, usize, NameHasher>,
    all: AttributeSet,
}

impl Universe {
    pub fn new(names: Vec<String>) -> Result<Self> {
        let mut index: HashMap<String, usize, NameHasher> = HashMap::default();
        for (position, name) in names.iter().enumerate() {
            if index.insert(name.clone(), position).is_some() {
                return Err(RelnormError::DuplicateAttribute(name.clone()));
            }
        }
        if names.len() > MAX_ATTRS {
            return Err(RelnormError::TooManyAttributes {
                count: names.len(),
                limit: MAX_ATTRS,
            });
        }
        let all = AttributeSet::full(names.len());
        Ok(Self { names, index, all })
    }
    pub fn all(&self) -> AttributeSet {
        self.all
    }
    pub fn names(&self) -> &[String] {
        &self.names
    }
    pub fn len(&self) -> usize {
        self.names.len()
    }
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
    pub fn get(&self, name: &str) -> Option<AttributeSet> {
        self.index
            .get(name)
            .map(|&position| AttributeSet::single(position))
    }
    pub fn name_at(&self, index: usize) -> &str {
        &self.names[index]
    }
}

// ------------- Schema -------------
// A universe paired with the dependencies that hold over it. Immutable once
// constructed; every operation is a pure function of the pair, so a schema
// can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Schema {
    universe: Universe,
    fds: Vec<Fd>,
}

impl Schema {
    pub fn new(universe: Universe, fds: Vec<Fd>) -> Self {
        Self { universe, fds }
    }
    // parse both boundary inputs in one call: a comma-separated attribute
    // list and one "lhs -> rhs" dependency per line
    pub fn parse(attributes: &str, dependencies: &str) -> Result<Self> {
        let universe = parse_attributes(attributes, ',')?;
        let fds = parse_fds(dependencies, &universe)?;
        Ok(Self::new(universe, fds))
    }
    pub fn universe(&self) -> &Universe {
        &self.universe
    }
    pub fn fds(&self) -> &[Fd] {
        &self.fds
    }
    // functions that delegate to the algorithm modules
    pub fn closure(&self, attrs: AttributeSet) -> AttributeSet {
        attribute_closure(attrs, &self.fds)
    }
    pub fn candidate_keys(&self) -> Vec<AttributeSet> {
        candidate_keys(self.universe.all(), &self.fds)
    }
    pub fn minimal_cover(&self) -> Vec<Fd> {
        minimal_cover(&self.fds)
    }
    pub fn check_normal_forms(&self) -> [NfCheck; 3] {
        check_normal_forms(&self.universe, &self.fds)
    }
    pub fn decompose_3nf(&self) -> Vec<AttributeSet> {
        decompose_3nf(self.universe.all(), &self.fds)
    }
    // render results with this schema's attribute names
    pub fn stringify_attrs(&self, attrs: AttributeSet) -> String {
        stringify_attrs(attrs, &self.universe)
    }
    pub fn stringify_fds(&self, fds: &[Fd]) -> String {
        stringify_fds(fds, &self.universe, "\n")
    }
}
