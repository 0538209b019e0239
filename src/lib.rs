//! SQLite4 varuint codec: 64-bit unsigned integers in 1 to 9 bytes, with the
//! total length determined by the first byte.
//!
//! ```
//! use varuint::{decode_varint, encode_varint, MAX_VARINT_LEN};
//!
//! let mut buf = [0u8; MAX_VARINT_LEN];
//! let n = encode_varint(67824, &mut buf);
//! assert_eq!(&buf[..n], &[0xFA, 0x01, 0x08, 0xF0]);
//! assert_eq!(decode_varint(&buf[..n]).unwrap(), (67824, 4));
//! ```

pub mod protocol;
pub mod utils;

pub use protocol::{Tier, VarintError, MAX_VARINT_LEN, TIERS};
pub use utils::varint::{append_varint, decode_all, decode_varint, encode_varint, tag_len, varint_len};
