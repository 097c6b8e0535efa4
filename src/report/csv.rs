use std::io;

use crate::{compare::aggregate::PairResult, error::Result, metrics::Metric};

/// Header row, same keys as the JSON results
pub fn header() -> Vec<&'static str> {
    let mut cols = vec!["Doc 1", "Doc 2"];
    cols.extend(Metric::ALL.iter().map(|m| m.column_name()));
    cols.push("Average Similarity (%)");
    cols
}

/// Write results as CSV, one row per pair
///
/// The header comes from the serde names of [`PairResult`]; it is written
/// explicitly when there are no rows.
pub fn write<W: io::Write>(results: &[PairResult], out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(out);
    if results.is_empty() {
        writer.write_record(header())?;
    }
    for result in results {
        writer.serialize(result)?;
    }
    writer.flush()?;
    Ok(())
}
