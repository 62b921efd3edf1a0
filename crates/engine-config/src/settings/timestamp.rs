use crate::error::SettingsError;
use serde::Deserialize;

/// Immutable configuration for the timestamp transform. Built once at step
/// initialization and shared read-only across every record the step
/// processes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimestampSettings {
    /// Never overwrite a `timestamp` header that is already present.
    pub preserve_existing: bool,
    /// Field separator, matched byte-for-byte against the record body.
    pub delimiter: String,
    /// chrono pattern the extracted field is parsed against.
    pub date_format: String,
    /// Zero-based position of the field holding the timestamp.
    pub date_index: usize,
}

impl Default for TimestampSettings {
    fn default() -> Self {
        TimestampSettings {
            preserve_existing: false,
            delimiter: "|".to_string(),
            date_format: "%Y-%m-%d %H:%M:%S".to_string(),
            date_index: 0,
        }
    }
}

impl TimestampSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.delimiter.is_empty() {
            return Err(SettingsError::EmptyDelimiter);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = TimestampSettings::default();
        assert!(!settings.preserve_existing);
        assert_eq!(settings.delimiter, "|");
        assert_eq!(settings.date_format, "%Y-%m-%d %H:%M:%S");
        assert_eq!(settings.date_index, 0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_deserialize_camel_case_keys() {
        let settings: TimestampSettings = serde_json::from_str(
            r####"{
                "preserveExisting": true,
                "delimiter": "||",
                "dateFormat": "###[%Y-%m-%d %H:%M:%S]",
                "dateIndex": 2
            }"####,
        )
        .expect("deserialize settings");

        assert!(settings.preserve_existing);
        assert_eq!(settings.delimiter, "||");
        assert_eq!(settings.date_format, "###[%Y-%m-%d %H:%M:%S]");
        assert_eq!(settings.date_index, 2);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let settings: TimestampSettings =
            serde_json::from_str(r#"{"dateIndex": 1}"#).expect("deserialize settings");
        assert_eq!(settings.date_index, 1);
        assert_eq!(settings.delimiter, "|");
        assert!(!settings.preserve_existing);
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        let settings = TimestampSettings {
            delimiter: String::new(),
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::EmptyDelimiter));
    }
}
