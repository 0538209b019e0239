pub mod varint;

pub use varint::{append_varint, decode_all, decode_varint, encode_varint, tag_len, varint_len};
