use core_types::VersionRecord;
use std::fmt::{self, Write};

/// Width of the `=` banner lines.
pub const BANNER_WIDTH: usize = 100;

/// Renders the full report: banner, title, banner, one block per record,
/// closing banner. Every line ends in `\n`.
///
/// Records are emitted in the order given; the fetch already sorts by `id`.
pub fn render_report(title: &str, records: &[VersionRecord]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, title, records);
    out
}

fn write_report<W: Write>(out: &mut W, title: &str, records: &[VersionRecord]) -> fmt::Result {
    let banner = "=".repeat(BANNER_WIDTH);

    writeln!(out, "{banner}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{banner}")?;
    for record in records {
        writeln!(out)?;
        writeln!(out, "ID: {}", record.id)?;
        for (name, value) in record.labelled_values() {
            writeln!(out, "  {name}: {value}")?;
        }
    }
    writeln!(out, "{banner}")
}
