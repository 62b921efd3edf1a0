pub mod timestamp;

pub use timestamp::TimestampSettings;
