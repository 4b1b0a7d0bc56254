use serde::Deserialize;
use serde_json::Value;

/// Accepts a JSON number or a numeric string; decimal fields may arrive either way.
pub fn lenient_f64<'de, D: serde::Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    match Value::deserialize(d)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("number out of range")),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("not a number: {}", s))),
        Value::Null => Ok(0.0),
        other => Err(serde::de::Error::custom(format!(
            "expected number, got {}",
            other
        ))),
    }
}

pub fn lenient_u32<'de, D: serde::Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let value = lenient_f64(d)?;
    if value < 0.0 || value > u32::MAX as f64 {
        return Err(serde::de::Error::custom(format!(
            "value out of range: {}",
            value
        )));
    }
    Ok(value as u32)
}
