use std::collections::BTreeSet;
use std::io;

use csv::Writer;

/// CSV layout: a `subdomain` header row, then one canonical subdomain per
/// row in sorted order.
pub fn write_csv<W: io::Write>(writer: W, subdomains: &BTreeSet<String>) -> io::Result<()> {
    let mut w = Writer::from_writer(writer);
    w.write_record(["subdomain"]).map_err(csv_to_io)?;
    for sub in subdomains {
        w.write_record([sub.as_str()]).map_err(csv_to_io)?;
    }
    w.flush()?;
    Ok(())
}

fn csv_to_io(err: csv::Error) -> io::Error {
    match err.into_kind() {
        csv::ErrorKind::Io(e) => e,
        other => io::Error::new(io::ErrorKind::Other, format!("{other:?}")),
    }
}
