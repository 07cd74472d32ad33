use crate::core::{Number, Value};
use crate::utils::error::{DrillError, Result, NOT_CONVERTIBLE, NOT_VALID_INPUT};
use num_bigint::BigInt;
use regex::Regex;
use std::sync::LazyLock;

static INT_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<sign>[+-]?)(?:0[xX](?P<hex>[0-9a-fA-F](?:_?[0-9a-fA-F])*)|0[bB](?P<bin>[01](?:_?[01])*)|0[oO]?(?P<oct>[0-7](?:_?[0-7])*)|(?P<dec>0|[1-9](?:_?[0-9])*))$",
    )
    .expect("integer literal pattern")
});

static FLOAT_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[+-]?(?:[0-9](?:_?[0-9])*(?:\.[0-9](?:_?[0-9])*)?|\.[0-9](?:_?[0-9])*)(?:[eE][+-]?[0-9](?:_?[0-9])*)?$",
    )
    .expect("float literal pattern")
});

type LiteralParser = fn(&str) -> Option<Number>;

/// 依序嘗試，第一個成功的結果為準
const LITERAL_PARSERS: [(&str, LiteralParser); 2] = [
    ("integer", parse_int_literal),
    ("float", parse_float_literal),
];

/// 將整數、浮點數或數字字串轉成 Number
pub fn to_num(value: &Value) -> Result<Number> {
    match value {
        Value::Int(n) => Ok(Number::Int(n.clone())),
        Value::Float(f) => Ok(Number::Float(*f)),
        Value::Str(s) => parse_str(s),
        other => {
            tracing::debug!("to_num rejected {} input", other.type_name());
            Err(DrillError::type_mismatch(NOT_VALID_INPUT))
        }
    }
}

pub fn parse_str(input: &str) -> Result<Number> {
    let trimmed = input.trim();
    for (name, parser) in LITERAL_PARSERS {
        if let Some(number) = parser(trimmed) {
            tracing::debug!("'{}' parsed as {} literal", trimmed, name);
            return Ok(number);
        }
    }
    Err(DrillError::invalid_format(NOT_CONVERTIBLE))
}

pub fn parse_int_literal(input: &str) -> Option<Number> {
    let caps = INT_LITERAL.captures(input)?;
    let (digits, radix) = [("hex", 16), ("bin", 2), ("oct", 8), ("dec", 10)]
        .into_iter()
        .find_map(|(group, radix)| caps.name(group).map(|m| (m.as_str(), radix)))?;

    let digits = digits.replace('_', "");
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix)?;
    let number = if &caps["sign"] == "-" { -magnitude } else { magnitude };
    Some(Number::Int(number))
}

pub fn parse_float_literal(input: &str) -> Option<Number> {
    if !FLOAT_LITERAL.is_match(input) {
        return None;
    }
    input.replace('_', "").parse::<f64>().ok().map(Number::Float)
}
