//! Error types for magic-square construction.

use crate::square::MAX_ORDER;
use thiserror::Error;

/// Result type for magic-square operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building a magic square.
///
/// Validation ([`crate::is_magic`]) never errors; malformed candidate
/// grids are reported as `false` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested order cannot produce an odd-order magic square.
    #[error("invalid magic square order {0}: must be a positive odd integer no greater than {max}", max = MAX_ORDER)]
    InvalidSize(usize),
}
