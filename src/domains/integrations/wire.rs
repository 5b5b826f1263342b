// 외부 API 응답 파싱 도우미
// 플랫폼마다 숫자를 문자열("123") 또는 숫자(123)로 보내므로 둘 다 허용합니다.
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;

/// 문자열/숫자/null → i64 (null은 0)
pub fn flexible_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .ok_or_else(|| D::Error::custom(format!("number out of range: {}", n))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(0),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .or_else(|_| s.trim().parse::<f64>().map(|f| f.round() as i64))
            .map_err(|_| D::Error::custom(format!("not a number: {}", s))),
        Some(other) => Err(D::Error::custom(format!("expected number, got {}", other))),
    }
}

/// 문자열/숫자/null → Decimal (null은 0)
pub fn flexible_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(Decimal::ZERO),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(Decimal::ZERO),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => return Err(D::Error::custom(format!("expected number, got {}", other))),
    };

    parse_decimal(&raw).ok_or_else(|| D::Error::custom(format!("not a decimal: {}", raw)))
}

/// "12.5", "1e3" 등 숫자 문자열 → Decimal
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}
