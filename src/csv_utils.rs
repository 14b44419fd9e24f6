//! CSV deserialization utilities.

use serde::de::DeserializeOwned;
use std::path::Path;

/// Creates an iterator that reads CSV records from a file with a header row.
/// Each record is deserialized into type T.
///
/// Fields and headers are trimmed and ragged rows are tolerated, so a short row
/// surfaces as a deserialization error for that row only.
pub fn read_csv<T, P>(path: P) -> csv::Result<impl Iterator<Item = csv::Result<T>>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?
        .into_deserialize())
}

/// Whether a CSV error concerns only the current record.
/// A record with invalid UTF-8 is a row problem; the reader resumes at the next one.
/// Everything else (I/O, seeking) means the stream itself is unusable.
pub fn is_row_error(err: &csv::Error) -> bool {
    matches!(
        err.kind(),
        csv::ErrorKind::Deserialize { .. }
            | csv::ErrorKind::UnequalLengths { .. }
            | csv::ErrorKind::Utf8 { .. }
    )
}
