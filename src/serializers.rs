use serde::{Deserialize, Deserializer};
use serde::de;
use serde_json::Value;

/// Deserializes a `u64` that may arrive as either a number or a numeric string.
pub fn from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => {
            s.trim().parse::<u64>().map_err(de::Error::custom)
        },
        Value::Number(num) => {
            num.as_u64().ok_or_else(|| de::Error::custom("invalid number"))
        },
        _ => Err(de::Error::custom("not a number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(deserialize_with = "from_number_or_string")]
        value: u64,
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let number = serde_json::from_str::<Body>(r#"{"value":86399}"#).unwrap();
        let string = serde_json::from_str::<Body>(r#"{"value":"86399"}"#).unwrap();

        assert_eq!(number.value, 86399);
        assert_eq!(string.value, 86399);
    }

    #[test]
    fn rejects_other_values() {
        assert!(serde_json::from_str::<Body>(r#"{"value":true}"#).is_err());
        assert!(serde_json::from_str::<Body>(r#"{"value":-5}"#).is_err());
    }
}
