//! CSV export.

use crate::error::{TransferError, TransferResult};
use crate::models::Contact;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Header row written before the contact rows.
pub const HEADER: [&str; 4] = ["Name", "Phone", "Email", "Address"];

/// Write `contacts` as CSV to `writer`.
///
/// Rows follow the order of `contacts`. Fields that contain a comma, a quote
/// or a line break are quoted, and embedded quotes are doubled. Records end
/// with CRLF.
///
/// # Errors
///
/// `NothingToExport` for an empty slice (nothing is written), otherwise
/// `ExportFailure` with the underlying I/O error.
pub fn export_to<W: Write>(writer: W, contacts: &[Contact]) -> TransferResult<()> {
    if contacts.is_empty() {
        return Err(TransferError::NothingToExport);
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(HEADER).map_err(export_failure)?;
    for contact in contacts {
        csv_writer
            .write_record([
                &contact.name,
                &contact.phone,
                &contact.email,
                &contact.address,
            ])
            .map_err(export_failure)?;
    }
    csv_writer.flush().map_err(TransferError::ExportFailure)?;

    Ok(())
}

/// Export `contacts` to a file, creating or truncating it.
///
/// Returns the number of contact rows written.
pub fn export_to_path(path: impl AsRef<Path>, contacts: &[Contact]) -> TransferResult<usize> {
    let path = path.as_ref();
    if contacts.is_empty() {
        return Err(TransferError::NothingToExport);
    }

    let file = File::create(path).map_err(TransferError::ExportFailure)?;
    export_to(BufWriter::new(file), contacts)?;

    info!(path = %path.display(), count = contacts.len(), "Contacts exported");
    Ok(contacts.len())
}

fn export_failure(err: csv::Error) -> TransferError {
    TransferError::ExportFailure(io::Error::from(err))
}
