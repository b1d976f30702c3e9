//! CSV import.

use crate::error::{TransferError, TransferResult};
use crate::models::ContactDraft;
use crate::services::{ContactStore, ImportSummary};
use csv::StringRecord;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::info;

/// Parse CSV rows into drafts.
///
/// The first row is a header and its contents are ignored. Columns
/// are taken as Name, Phone, Email, Address; short rows are padded with
/// empty strings and extra columns are ignored. Fields are returned as read
/// (untrimmed).
///
/// # Errors
///
/// `ImportFailure` when the source cannot be read, is not valid UTF-8
/// (header row included), or has an unterminated quoted field.
pub fn read_drafts<R: Read>(mut reader: R) -> TransferResult<Vec<ContactDraft>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| TransferError::ImportFailure(csv::Error::from(e)))?;

    // Every quote in well-formed text is one of an opening/closing pair or a doubled escape
    if text.bytes().filter(|&b| b == b'"').count() % 2 != 0 {
        return Err(TransferError::ImportFailure(csv::Error::from(io::Error::new(
            io::ErrorKind::InvalidData,
            "unterminated quoted field",
        ))));
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut drafts = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(TransferError::ImportFailure)?;
        drafts.push(draft_from_record(&record));
    }
    Ok(drafts)
}

/// Import CSV rows from `reader` into `store`.
///
/// The whole source is parsed before anything is inserted, so a parse error
/// commits nothing. Rows with a blank name are skipped, as are rows whose
/// (name, phone, email) matches an existing contact. The store saves once
/// after the batch.
pub fn import_from<R: Read>(store: &mut ContactStore, reader: R) -> TransferResult<ImportSummary> {
    let drafts = read_drafts(reader)?;
    let summary = store.import_drafts(drafts)?;
    Ok(summary)
}

/// Import a CSV file into `store`.
pub fn import_from_path(
    store: &mut ContactStore,
    path: impl AsRef<Path>,
) -> TransferResult<ImportSummary> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TransferError::ImportFailure(csv::Error::from(e)))?;
    let summary = import_from(store, file)?;

    info!(path = %path.display(), added = summary.added, "CSV file imported");
    Ok(summary)
}

fn draft_from_record(record: &StringRecord) -> ContactDraft {
    let field = |index: usize| record.get(index).unwrap_or_default().to_string();
    ContactDraft {
        name: field(0),
        phone: field(1),
        email: field(2),
        address: field(3),
    }
}
