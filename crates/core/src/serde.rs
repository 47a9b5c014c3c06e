//! Serde helper functions for request deserialization.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty or blank strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Manager {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        manager: Option<String>,
    }

    #[test]
    fn test_optional_string_present() {
        let parsed: Manager = serde_json::from_str(r#"{"manager": "bsmith"}"#).unwrap();
        assert_eq!(parsed.manager, Some("bsmith".to_string()));
    }

    #[test]
    fn test_optional_string_blank_is_none() {
        let parsed: Manager = serde_json::from_str(r#"{"manager": "   "}"#).unwrap();
        assert_eq!(parsed.manager, None);
    }

    #[test]
    fn test_optional_string_null_is_none() {
        let parsed: Manager = serde_json::from_str(r#"{"manager": null}"#).unwrap();
        assert_eq!(parsed.manager, None);
    }

    #[test]
    fn test_optional_string_missing_is_none() {
        let parsed: Manager = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.manager, None);
    }
}
