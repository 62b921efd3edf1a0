use crate::extract::extract_field;
use crate::transform::error::{DateParseError, ResolveError};
use crate::transform::pipeline::Transform;
use chrono::format::ParseErrorKind;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use engine_config::error::SettingsError;
use engine_config::settings::TimestampSettings;
use model::records::record::Record;
use std::sync::Arc;
use tracing::warn;

/// Header key carrying the record timestamp: the base-10 string form of a
/// signed count of milliseconds since the Unix epoch.
pub const TIMESTAMP_HEADER: &str = "timestamp";

/// Wall-clock source. Injected so resolution stays deterministic under test.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// System wall clock in UTC.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Stamps records with a `timestamp` header derived from a delimited field
/// of the body, falling back to the current wall-clock time when the field
/// cannot be extracted or parsed.
///
/// Holds no mutable state between records: one instance may serve multiple
/// worker threads as long as no two threads mutate the same record.
pub struct TimestampTransform {
    preserve_existing: bool,
    delimiter: Vec<u8>,
    date_format: String,
    date_index: usize,
    clock: Arc<dyn Clock>,
}

impl TimestampTransform {
    pub fn new(settings: &TimestampSettings) -> Result<Self, SettingsError> {
        Self::with_clock(settings, Arc::new(SystemClock))
    }

    pub fn with_clock(
        settings: &TimestampSettings,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(TimestampTransform {
            preserve_existing: settings.preserve_existing,
            delimiter: settings.delimiter.as_bytes().to_vec(),
            date_format: settings.date_format.clone(),
            date_index: settings.date_index,
            clock,
        })
    }

    /// Derive and write the `timestamp` header in place. Never fails: any
    /// extraction or parse error degrades to the wall-clock fallback, so
    /// every record exits with a syntactically valid timestamp header.
    ///
    /// This is the only writer of the `timestamp` key.
    pub fn resolve(&self, record: &mut Record) {
        if self.preserve_existing && record.has_header(TIMESTAMP_HEADER) {
            return;
        }
        let millis = match self.derive_millis(record.body()) {
            Ok(millis) => millis,
            Err(err) => {
                warn!("Falling back to system time for timestamp header: {err}");
                self.clock.now_millis()
            }
        };
        record.set_header(TIMESTAMP_HEADER, millis.to_string());
    }

    fn derive_millis(&self, body: &[u8]) -> Result<i64, ResolveError> {
        let field = extract_field(body, self.date_index, &self.delimiter)?;
        let text = std::str::from_utf8(field)?;
        let parsed = parse_datetime(text, &self.date_format)?;
        Ok(parsed.and_utc().timestamp_millis())
    }
}

impl Transform for TimestampTransform {
    fn apply(&self, record: &mut Record) {
        self.resolve(record);
    }
}

/// Parse `value` against a chrono pattern, interpreted as UTC. A pattern
/// carrying only a date resolves to midnight.
fn parse_datetime(value: &str, format: &str) -> Result<NaiveDateTime, DateParseError> {
    match NaiveDateTime::parse_from_str(value, format) {
        Ok(parsed) => Ok(parsed),
        Err(err) if err.kind() == ParseErrorKind::BadFormat => Err(DateParseError::InvalidPattern {
            format: format.to_string(),
            source: err,
        }),
        Err(err) if err.kind() == ParseErrorKind::NotEnough => {
            NaiveDate::parse_from_str(value, format)
                .map(|date| date.and_time(NaiveTime::MIN))
                .map_err(|_| mismatch(value, format, err))
        }
        Err(err) => Err(mismatch(value, format, err)),
    }
}

fn mismatch(value: &str, format: &str, source: chrono::ParseError) -> DateParseError {
    DateParseError::FormatMismatch {
        value: value.to_string(),
        format: format.to_string(),
        source,
    }
}
