//! Transaction records as served by the finance API and their period bucketing.

mod bucketer;
mod period;
mod preview;
mod range;
mod record;

pub use bucketer::{bucket, bucket_value, Bucketer};
pub use period::Period;
pub use preview::{preview, Preview, DEFAULT_PREVIEW_LIMIT};
pub use range::DateRange;
pub use record::{BucketedRecord, TransactionKind, TransactionRecord};
