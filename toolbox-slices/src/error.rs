use thiserror::Error;

/// Failures detected by this crate itself.
///
/// Errors produced by caller-supplied functions are never wrapped in this
/// type; the fallible operations hand them back unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// Two sequences that must be paired one to one differ in length.
    #[error("sequences differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
