//! Loosely-typed scalar fields as the host stores them.
//!
//! The host keeps character data as untyped documents: the same field may
//! arrive as `3`, `"3"`, `""`, `true` or `null` depending on how the sheet was
//! edited. [`LooseValue`] keeps the raw value and offers the coercions the
//! menu builders need, so a malformed field never becomes a build failure.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// A scalar field kept verbatim from the host document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LooseValue(pub Value);

impl LooseValue {
    /// Coerce to a finite number, `0` when the value has no numeric reading.
    pub fn number(&self) -> f64 {
        coerce_number(&self.0)
    }

    /// Whether the value counts as "set" under the host's truthiness rules.
    pub fn is_truthy(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Render the raw value as display text.
    pub fn text(&self) -> String {
        match &self.0 {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Number(n) => n.as_f64().map(format_number).unwrap_or_default(),
            other => other.to_string(),
        }
    }
}

impl From<Value> for LooseValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Field decoder: any value, rendered as text. `null` becomes `""`.
pub(crate) fn loose_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(LooseValue::deserialize(deserializer)?.text())
}

/// Field decoder: any value rendered as text, `null` kept as `None`.
pub(crate) fn loose_opt_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = LooseValue::deserialize(deserializer)?;
    Ok((!value.0.is_null()).then(|| value.text()))
}

/// Field decoder: `T` when the value has the expected shape, `T::default()`
/// otherwise.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_else(|e| {
        debug!("T20 HUD: defaulting malformed field: {e}");
        T::default()
    }))
}

/// Field decoder for keyed tables: `None` unless the value is an object, and
/// each malformed entry replaced by `T::default()`.
pub(crate) fn lenient_map<'de, D, T>(
    deserializer: D,
) -> Result<Option<IndexMap<String, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    let table = entries
        .into_iter()
        .map(|(key, value)| {
            let entry = T::deserialize(value).unwrap_or_else(|e| {
                debug!("T20 HUD: defaulting malformed entry `{key}`: {e}");
                T::default()
            });
            (key, entry)
        })
        .collect();
    Ok(Some(table))
}

/// Number of an optional field, `0` when the field is missing.
pub fn number_or_zero(value: Option<&LooseValue>) -> f64 {
    value.map(LooseValue::number).unwrap_or(0.0)
}

/// Host-style numeric coercion: numbers pass through, strings are trimmed and
/// parsed (empty means zero), booleans become `1`/`0`. Anything that does not
/// produce a finite number yields `0`.
pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(_) | Value::Object(_) => f64::NAN,
    };
    if n.is_finite() { n } else { 0.0 }
}

fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN);
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Format a number the way the host prints it: integral values without a
/// fractional part, everything else in shortest form.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Signed modifier text, with an explicit `+` for values `>= 0`.
pub fn signed(n: f64) -> String {
    let sign = if n >= 0.0 { "+" } else { "" };
    format!("{sign}{}", format_number(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(3)), 3.0);
        assert_eq!(coerce_number(&json!(-1.5)), -1.5);
        assert_eq!(coerce_number(&json!(" 12 ")), 12.0);
        assert_eq!(coerce_number(&json!("")), 0.0);
        assert_eq!(coerce_number(&json!("abc")), 0.0);
        assert_eq!(coerce_number(&json!("0x10")), 16.0);
        assert_eq!(coerce_number(&json!(true)), 1.0);
        assert_eq!(coerce_number(&json!(null)), 0.0);
        assert_eq!(coerce_number(&json!({"value": 2})), 0.0);
        // 非有限值统一归零
        assert_eq!(coerce_number(&json!("Infinity")), 0.0);
        assert_eq!(coerce_number(&json!("NaN")), 0.0);
    }

    #[derive(Debug, Default, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "loose_text")]
        name: String,
        #[serde(default, deserialize_with = "loose_opt_text")]
        label: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "lenient_map")]
        scores: Option<IndexMap<String, f64>>,
    }

    #[test]
    fn test_lenient_fields() {
        let row: Row = serde_json::from_value(json!({
            "name": null,
            "label": 7,
            "tags": "not a list",
            "scores": {"a": 1.5, "b": "x"}
        }))
        .unwrap();
        assert_eq!(row.name, "");
        assert_eq!(row.label.as_deref(), Some("7"));
        assert!(row.tags.is_empty());
        let scores = row.scores.unwrap();
        assert_eq!(scores["a"], 1.5);
        assert_eq!(scores["b"], 0.0);

        let row: Row = serde_json::from_value(json!({"label": null, "scores": 3})).unwrap();
        assert!(row.label.is_none());
        assert!(row.scores.is_none());
    }

    #[test]
    fn test_truthiness() {
        assert!(!LooseValue(json!(0)).is_truthy());
        assert!(!LooseValue(json!("")).is_truthy());
        assert!(!LooseValue(json!(false)).is_truthy());
        assert!(!LooseValue(json!(null)).is_truthy());
        assert!(LooseValue(json!("0")).is_truthy());
        assert!(LooseValue(json!(2)).is_truthy());
        assert!(LooseValue(json!(true)).is_truthy());
    }

    #[test]
    fn test_signed_formatting() {
        assert_eq!(signed(3.0), "+3");
        assert_eq!(signed(0.0), "+0");
        assert_eq!(signed(-0.0), "+0");
        assert_eq!(signed(-1.0), "-1");
        assert_eq!(signed(2.5), "+2.5");
        assert_eq!(LooseValue(json!(4)).text(), "4");
        assert_eq!(LooseValue(json!("1d8")).text(), "1d8");
    }
}
