
use thiserror::Error;

// Errors only arise at the textual boundary; the algorithm modules are
// total over validated input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelnormError {
    #[error("attribute parsing error: duplicate attribute '{0}'")]
    DuplicateAttribute(String),
    #[error("attribute parsing error: too many attributes ({count}), at most {limit} are supported")]
    TooManyAttributes { count: usize, limit: usize },
    #[error("dependency parsing error: unknown attribute '{name}' in '{line}'")]
    UnknownAttribute { name: String, line: String },
    #[error("dependency parsing error: cannot parse '{0}', expected 'lhs -> rhs'")]
    MalformedDependency(String),
}

pub type Result<T> = std::result::Result<T, RelnormError>;
