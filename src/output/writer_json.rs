use std::collections::BTreeSet;
use std::io;

/// JSON layout: a top-level array of canonical subdomain strings in
/// lexicographic order, so identical result sets serialize byte-identically.
pub fn write_json<W: io::Write>(mut writer: W, subdomains: &BTreeSet<String>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, subdomains)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writeln!(writer)?;
    writer.flush()
}
