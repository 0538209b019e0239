use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarintError {
    /// Fewer bytes available than the tag byte declares
    Truncated { needed: usize, available: usize },
}

impl fmt::Display for VarintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarintError::Truncated { needed, available } =>
                write!(f, "truncated varint: need {} bytes, have {}", needed, available),
        }
    }
}

impl std::error::Error for VarintError {}
