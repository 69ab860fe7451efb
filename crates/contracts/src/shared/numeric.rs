//! Tolerant numeric deserialization for the loosely typed backend.
//!
//! The ERP API is served by PHP and is not strict about numeric JSON types:
//! currency values arrive either as numbers (`12.5`) or as numeric strings
//! (`"12.50"`). Contract types accept both and always serialize as numbers.

/// Serde adapter for `f64` fields that may arrive as JSON strings.
///
/// Use with `#[serde(with = "flexible_f64")]`.
pub mod flexible_f64 {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumberOrText::deserialize(deserializer)? {
            NumberOrText::Number(n) => Ok(n),
            NumberOrText::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| serde::de::Error::custom(format!("invalid numeric string: {s:?}"))),
        }
    }

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(with = "super::flexible_f64")]
        value: f64,
    }

    #[test]
    fn accepts_json_number() {
        let h: Holder = serde_json::from_str(r#"{"value": 12.5}"#).unwrap();
        assert_eq!(h.value, 12.5);
    }

    #[test]
    fn accepts_numeric_string() {
        let h: Holder = serde_json::from_str(r#"{"value": "12.50"}"#).unwrap();
        assert_eq!(h.value, 12.5);
        let h: Holder = serde_json::from_str(r#"{"value": " 7 "}"#).unwrap();
        assert_eq!(h.value, 7.0);
    }

    #[test]
    fn rejects_garbage_string() {
        assert!(serde_json::from_str::<Holder>(r#"{"value": "abc"}"#).is_err());
    }
}
