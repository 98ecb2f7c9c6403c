pub mod bitio;
pub mod canonical;
pub mod codec;
pub mod frequency;
pub mod tree;

#[cfg(test)]
mod validation;

/// Error types for huffpack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HuffError {
    /// The encoded stream is truncated, inconsistent, or corrupt.
    InvalidFormat,
    /// A code length exceeds what the header's nibble table can represent.
    LengthOverflow,
}

impl std::fmt::Display for HuffError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "invalid or corrupt stream"),
            Self::LengthOverflow => write!(f, "code length exceeds header capacity"),
        }
    }
}

impl std::error::Error for HuffError {}

pub type HuffResult<T> = Result<T, HuffError>;
