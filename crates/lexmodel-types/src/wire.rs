//! Serde adapters for members whose JSON form differs from the Rust type.
//!
//! Use with `#[serde(default, with = "...")]` on `Option` members.

/// Timestamps travel as epoch seconds with a millisecond fraction.
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_f64(dt.timestamp_millis() as f64 / 1000.0),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(seconds) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let millis = (seconds * 1000.0).round() as i64;
        DateTime::from_timestamp_millis(millis)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {seconds}")))
    }
}

/// Blob members travel as standard base64 strings.
pub mod blob {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        let Some(encoded) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        STANDARD
            .decode(encoded.as_bytes())
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Stamped {
        #[serde(default, skip_serializing_if = "Option::is_none", with = "super::epoch_seconds")]
        at: Option<DateTime<Utc>>,
        #[serde(default, skip_serializing_if = "Option::is_none", with = "super::blob")]
        data: Option<Vec<u8>>,
    }

    #[test]
    fn test_epoch_seconds_accepts_fractional_and_integral() {
        let fractional: Stamped = serde_json::from_str(r#"{"at": 1588291200.125}"#).unwrap();
        let at = fractional.at.unwrap();
        assert_eq!(at.timestamp(), 1_588_291_200);
        assert_eq!(at.timestamp_subsec_millis(), 125);

        let integral: Stamped = serde_json::from_str(r#"{"at": 1588291200}"#).unwrap();
        assert_eq!(integral.at.unwrap(), Utc.timestamp_opt(1_588_291_200, 0).unwrap());
    }

    #[test]
    fn test_missing_members_stay_unset() {
        let empty: Stamped = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Stamped { at: None, data: None });
        assert_eq!(serde_json::to_string(&empty).unwrap(), "{}");
    }

    #[test]
    fn test_blob_is_base64() {
        let value = Stamped { at: None, data: Some(b"PK\x03\x04".to_vec()) };
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["data"], "UEsDBA==");

        let bad = serde_json::from_str::<Stamped>(r#"{"data": "not base64!"}"#);
        assert!(bad.is_err());
    }
}
