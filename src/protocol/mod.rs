pub mod constants;
pub mod error;

pub use constants::{Tier, MAX_VARINT_LEN, TIERS};
pub use error::VarintError;
