use thiserror::Error;

/// Errors raised by key arithmetic, node mutation and the split strategies.
///
/// Every variant describes a contract violation on the input of a single
/// call; none of them leaves the receiver in a modified state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("empty input: at least one spatial key is required")]
    EmptyInput,

    #[error("invalid target group count {target}: expected 1..={available}")]
    InvalidTarget { target: usize, available: usize },

    #[error("incompatible dimensions: expected {expected}, found {found}")]
    IncompatibleDimension { expected: usize, found: usize },

    #[error("comparator used before a node to insert was set")]
    NotPrimed,

    #[error("division does not partition the {keys} input keys")]
    InvalidDivision { keys: usize },

    #[error("invalid bound [{min}, {max}]")]
    InvalidBound { min: f64, max: f64 },

    #[error("invalid fanout {0}: must be at least 4")]
    InvalidFanout(usize),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_dimensions(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(Error::IncompatibleDimension { expected, found })
    }
}
