use crate::protocol::constants::{
    MAX_VARINT_LEN, ONE_BYTE_MAX, TAG_BIG_ENDIAN_FIRST, TAG_THREE_BYTE, TAG_TWO_BYTE_FIRST,
    TAG_TWO_BYTE_LAST, THREE_BYTE_BASE, THREE_BYTE_MAX, TWO_BYTE_BASE, TWO_BYTE_MAX,
};
use crate::protocol::error::VarintError;
use tracing::debug;

/// Number of bytes `encode_varint` writes for `value`
pub fn varint_len(value: u64) -> usize {
    if value <= ONE_BYTE_MAX {
        1
    } else if value <= TWO_BYTE_MAX {
        2
    } else if value <= THREE_BYTE_MAX {
        3
    } else {
        // 4..=9: one tag byte plus the significant big-endian bytes, never fewer than 3
        let significant = 8 - (value.leading_zeros() as usize / 8);
        1 + significant.max(3)
    }
}

/// Total encoded length declared by a tag byte
pub fn tag_len(tag: u8) -> usize {
    match tag {
        0..=0xF0 => 1,
        TAG_TWO_BYTE_FIRST..=TAG_TWO_BYTE_LAST => 2,
        TAG_THREE_BYTE => 3,
        _ => tag as usize - 246,
    }
}

/// Encode `value` into `out`, returning the number of bytes written.
/// Bytes past the returned length are left untouched.
pub fn encode_varint(value: u64, out: &mut [u8; MAX_VARINT_LEN]) -> usize {
    let len = varint_len(value);
    match len {
        1 => out[0] = value as u8,
        2 => {
            let v = value - TWO_BYTE_BASE;
            out[0] = TAG_TWO_BYTE_FIRST + (v / 256) as u8;
            out[1] = (v % 256) as u8;
        }
        3 => {
            let v = value - THREE_BYTE_BASE;
            out[0] = TAG_THREE_BYTE;
            out[1] = (v / 256) as u8;
            out[2] = (v % 256) as u8;
        }
        _ => {
            out[0] = TAG_BIG_ENDIAN_FIRST + (len - 4) as u8;
            let be = value.to_be_bytes();
            out[1..len].copy_from_slice(&be[MAX_VARINT_LEN - len..]);
        }
    }
    len
}

/// Append the encoding of `value` to `out`
pub fn append_varint(value: u64, out: &mut Vec<u8>) -> usize {
    let mut buf = [0u8; MAX_VARINT_LEN];
    let len = encode_varint(value, &mut buf);
    out.extend_from_slice(&buf[..len]);
    len
}

/// Decode the varint at the start of `buf`, returning the value and bytes consumed
pub fn decode_varint(buf: &[u8]) -> Result<(u64, usize), VarintError> {
    let Some(&tag) = buf.first() else {
        debug!("Varint decode on empty buffer");
        return Err(VarintError::Truncated { needed: 1, available: 0 });
    };

    let needed = tag_len(tag);
    if buf.len() < needed {
        debug!("Varint truncated: tag={:#04x}, needed={}, available={}", tag, needed, buf.len());
        return Err(VarintError::Truncated { needed, available: buf.len() });
    }

    let value = match needed {
        1 => tag as u64,
        2 => TWO_BYTE_BASE + 256 * (tag - TAG_TWO_BYTE_FIRST) as u64 + buf[1] as u64,
        3 => THREE_BYTE_BASE + 256 * buf[1] as u64 + buf[2] as u64,
        _ => buf[1..needed]
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | b as u64),
    };

    Ok((value, needed))
}

/// Decode a back-to-back run of varints that fills `buf` exactly
pub fn decode_all(mut buf: &[u8]) -> Result<Vec<u64>, VarintError> {
    let mut values = Vec::new();
    while !buf.is_empty() {
        let (value, used) = decode_varint(buf)?;
        values.push(value);
        buf = &buf[used..];
    }
    Ok(values)
}
