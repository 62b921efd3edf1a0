use engine_config::settings::TimestampSettings;
use engine_processing::transform::timestamp::TIMESTAMP_HEADER;
use model::records::record::Record;

/// Build settings from the documented JSON key names.
pub fn settings_from_json(json: &str) -> TimestampSettings {
    serde_json::from_str(json).expect("settings JSON")
}

pub fn record_with_body(body: &str) -> Record {
    Record::new(body.as_bytes())
}

/// Read the `timestamp` header as epoch milliseconds.
pub fn header_millis(record: &Record) -> i64 {
    record
        .header(TIMESTAMP_HEADER)
        .expect("timestamp header present")
        .parse()
        .expect("numeric timestamp header")
}

/// Render epoch milliseconds back through a chrono pattern, in UTC.
pub fn reformat_millis(millis: i64, format: &str) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .expect("valid epoch millis")
        .naive_utc()
        .format(format)
        .to_string()
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
