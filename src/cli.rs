use anyhow::{bail, Context, Result};
use serde_json::json;
use tracing::{debug, info};

use varuint::{decode_all, decode_varint, encode_varint, Tier, MAX_VARINT_LEN, TIERS};

use crate::config::CliConfig;

/// Parse a decimal or `0x`-prefixed hex u64
pub fn parse_value(input: &str) -> Result<u64> {
    let trimmed = input.trim().replace('_', "");
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(digits) => u64::from_str_radix(digits, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.with_context(|| format!("invalid u64 value: {:?}", input))
}

/// Parse hex bytes, ignoring whitespace and `:`/`,` separators
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let digits: String = input
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != ',')
        .collect();
    if digits.is_empty() {
        bail!("no hex bytes given");
    }
    hex::decode(&digits).with_context(|| format!("invalid hex input: {:?}", input))
}

pub fn encode(values: &[String], config: &CliConfig) -> Result<String> {
    let mut lines = Vec::with_capacity(values.len());
    let mut records = Vec::with_capacity(values.len());

    for raw in values {
        let value = parse_value(raw)?;
        let mut buf = [0u8; MAX_VARINT_LEN];
        let len = encode_varint(value, &mut buf);
        let hex = config.format_hex(&buf[..len]);
        debug!("Encoded {} into {} bytes", value, len);

        if config.json {
            records.push(json!({ "value": value, "len": len, "hex": hex }));
        } else {
            lines.push(format!("{}\t{}\t({} bytes)", value, hex, len));
        }
    }

    if config.json {
        Ok(serde_json::to_string_pretty(&records)?)
    } else {
        Ok(lines.join("\n"))
    }
}

pub fn decode(input: &str, config: &CliConfig) -> Result<String> {
    let bytes = parse_hex(input)?;
    let values = decode_all(&bytes).context("decoding varint sequence")?;
    info!("Decoded {} values from {} bytes", values.len(), bytes.len());

    if config.json {
        Ok(serde_json::to_string_pretty(&json!({ "values": values, "bytes": bytes.len() }))?)
    } else {
        Ok(values.iter().map(u64::to_string).collect::<Vec<_>>().join("\n"))
    }
}

pub fn inspect(input: &str, config: &CliConfig) -> Result<String> {
    let bytes = parse_hex(input)?;
    let tag = bytes[0];
    let tier = Tier::for_tag(tag);
    let (value, used) = decode_varint(&bytes).context("decoding varint")?;
    let trailing = &bytes[used..];

    if config.json {
        return Ok(serde_json::to_string_pretty(&json!({
            "tag": tag,
            "tier": tier,
            "value": value,
            "consumed": used,
            "trailing": config.format_hex(trailing),
        }))?);
    }

    let mut out = vec![
        format!("tag:      {:#04x}", tag),
        format!("tier:     {} bytes ({}..={})", tier.len, tier.min, tier.max),
        format!("value:    {}", value),
        format!("consumed: {}", config.format_hex(&bytes[..used])),
    ];
    if !trailing.is_empty() {
        out.push(format!("trailing: {}", config.format_hex(trailing)));
    }
    Ok(out.join("\n"))
}

pub fn table(config: &CliConfig) -> Result<String> {
    if config.json {
        return Ok(serde_json::to_string_pretty(&TIERS)?);
    }

    let mut out = vec![format!("{:<5} {:<11} {:>20} {:>20}", "bytes", "tags", "min", "max")];
    for tier in &TIERS {
        let tags = if tier.first_tag == tier.last_tag {
            format!("{:#04x}", tier.first_tag)
        } else {
            format!("{:#04x}-{:#04x}", tier.first_tag, tier.last_tag)
        };
        out.push(format!("{:<5} {:<11} {:>20} {:>20}", tier.len, tags, tier.min, tier.max));
    }
    Ok(out.join("\n"))
}
