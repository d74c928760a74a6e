/// Size specification parsing.
///
/// A specification is `<number><unit>`:
/// - `<number>` is a non-negative decimal, integer or with a fractional part.
/// - `<unit>` is `B`, `KB`, `MB` or `GB` in any case, 1024-based. It may be
///   omitted, in which case megabytes are assumed.
/// - Whitespace may separate number and unit.
///
/// The number goes through `f64` before it is scaled, so very large inputs
/// (beyond 2^53) do not produce the exact mathematical product.
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static SIZE_SPEC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([0-9]+(?:\.[0-9]+)?)\s*([KMG]?B)?$").expect("size grammar is a valid regex")
});

/// 2^128, the first float that no longer fits a `u128` byte count.
const U128_LIMIT: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

/// Unit token of a size specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeUnit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
}

impl SizeUnit {
    /// Unit used when a specification has no suffix, and for every numeric input.
    pub const DEFAULT: Self = Self::Megabytes;

    /// Look up a unit token, ignoring case.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "B" => Some(Self::Bytes),
            "KB" => Some(Self::Kilobytes),
            "MB" => Some(Self::Megabytes),
            "GB" => Some(Self::Gigabytes),
            _ => None,
        }
    }

    /// Bytes per one of this unit.
    pub const fn multiplier(self) -> u64 {
        match self {
            Self::Bytes => 1,
            Self::Kilobytes => 1 << 10,
            Self::Megabytes => 1 << 20,
            Self::Gigabytes => 1 << 30,
        }
    }
}

/// A raw size threshold as supplied by a caller.
///
/// Text goes through the grammar above. Numbers are always megabytes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizeInput<'a> {
    Text(&'a str),
    Number(f64),
    Integer(u128),
}

impl<'a> From<&'a str> for SizeInput<'a> {
    fn from(spec: &'a str) -> Self {
        Self::Text(spec)
    }
}

impl<'a> From<&'a String> for SizeInput<'a> {
    fn from(spec: &'a String) -> Self {
        Self::Text(spec.as_str())
    }
}

impl From<f64> for SizeInput<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for SizeInput<'_> {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for SizeInput<'_> {
    fn from(value: u32) -> Self {
        Self::Integer(u128::from(value))
    }
}

impl From<u64> for SizeInput<'_> {
    fn from(value: u64) -> Self {
        Self::Integer(u128::from(value))
    }
}

impl From<u128> for SizeInput<'_> {
    fn from(value: u128) -> Self {
        Self::Integer(value)
    }
}

/// Parse a size specification into an exact byte count.
///
/// The scaled value is truncated toward zero, never rounded.
pub fn parse_size<'a>(input: impl Into<SizeInput<'a>>) -> Result<u128> {
    match input.into() {
        SizeInput::Text(spec) => parse_text(spec),
        SizeInput::Number(value) => to_bytes(value, SizeUnit::DEFAULT, &value.to_string()),
        SizeInput::Integer(value) => {
            to_bytes(value as f64, SizeUnit::DEFAULT, &value.to_string())
        }
    }
}

fn parse_text(spec: &str) -> Result<u128> {
    let caps = SIZE_SPEC
        .captures(spec)
        .ok_or_else(|| Error::invalid_spec(spec, "expected <number>[B|KB|MB|GB]"))?;

    let value: f64 = caps[1]
        .parse()
        .map_err(|_| Error::invalid_spec(spec, "number is out of range"))?;

    let unit = match caps.get(2) {
        Some(token) => SizeUnit::from_token(token.as_str())
            .ok_or_else(|| Error::invalid_spec(spec, "size unit is not supported"))?,
        None => SizeUnit::DEFAULT,
    };

    to_bytes(value, unit, spec)
}

fn to_bytes(value: f64, unit: SizeUnit, spec: &str) -> Result<u128> {
    if value.is_nan() || value.is_sign_negative() {
        return Err(Error::invalid_spec(spec, "size must be a non-negative number"));
    }
    if value.is_infinite() {
        return Err(Error::invalid_spec(spec, "size is not finite"));
    }

    let bytes = value * unit.multiplier() as f64;
    if !bytes.is_finite() {
        return Err(Error::invalid_spec(spec, "size is not finite"));
    }
    // `as` would saturate; 2^128 and up is not a byte count.
    if bytes >= U128_LIMIT {
        return Err(Error::invalid_spec(spec, "size is out of range"));
    }
    Ok(bytes.trunc() as u128)
}
