//! Uint64 hex encoding shared with the node's REST DTOs.
//!
//! Node ids (mosaics, namespaces) are unsigned 64-bit values, while some
//! companion SDKs hand them around as signed longs. Whatever the sign or width
//! of the input, it is folded into `u64` by two's-complement wrapping before
//! formatting, so `-8884663987180930485` and `9562080086528621131` encode the
//! same way.

use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

use crate::{constant::UINT64_HEX_WIDTH, error::SdkError};

/// Parse a base-10 literal (optional sign, surrounding whitespace ignored)
pub fn parse_big_integer(literal: &str) -> Result<BigInt, SdkError> {
    let trimmed = literal.trim();
    let digits =
        trimmed.strip_prefix('+').or_else(|| trimmed.strip_prefix('-')).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SdkError::InvalidLiteral(literal.to_string()));
    }

    BigInt::parse_bytes(trimmed.as_bytes(), 10)
        .ok_or_else(|| SdkError::InvalidLiteral(literal.to_string()))
}

/// Reduce `value` modulo 2^64
pub fn to_uint64(value: &BigInt) -> u64 {
    let modulus = BigInt::from(1u8) << 64u32;
    let mut reduced = value % &modulus;
    if reduced.sign() == Sign::Minus {
        reduced += &modulus;
    }
    // reduced is now in [0, 2^64)
    reduced.to_u64().unwrap_or_default()
}

/// Fixed-width (16 digit) lower-case hex of `value` viewed as a `u64`
pub fn big_integer_to_hex(value: &BigInt) -> String {
    uint64_to_hex(to_uint64(value))
}

pub fn uint64_to_hex(value: u64) -> String {
    format!("{value:0width$x}", width = UINT64_HEX_WIDTH)
}

/// `parse_big_integer` followed by `big_integer_to_hex`
pub fn decimal_to_hex(literal: &str) -> Result<String, SdkError> {
    let value = parse_big_integer(literal)?;
    if value.sign() == Sign::Minus {
        log::debug!("Folding negative literal {literal} into uint64");
    }
    Ok(big_integer_to_hex(&value))
}
