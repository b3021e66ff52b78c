use serde::Serialize;

use super::BucketedRecord;

/// How many records the dashboard list shows before offering "view more".
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

/// The head of a bucketed list plus whether anything was cut off.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview<'a> {
    pub shown: &'a [BucketedRecord],
    pub has_more: bool,
}

pub fn preview(records: &[BucketedRecord], limit: usize) -> Preview<'_> {
    let cut = records.len().min(limit);
    Preview {
        shown: &records[..cut],
        has_more: records.len() > limit,
    }
}
