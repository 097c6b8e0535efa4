//! Serialization of a result table for downstream consumers.
//!
//! JSON mirrors the API response shape, CSV and HTML are the downloadable
//! reports, and CBOR is a compact binary form of the JSON shape.

pub mod csv;
pub mod html;

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::{
    compare::aggregate::{PairResult, ResultTable},
    error::Result,
};

/// Output format of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Json,
    Csv,
    Html,
    Cbor,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
            ReportFormat::Html => "html",
            ReportFormat::Cbor => "cbor",
        }
    }

    /// Binary formats must not go to a terminal
    pub fn is_binary(self) -> bool {
        matches!(self, ReportFormat::Cbor)
    }
}

/// API response shape: file names plus the ordered pair results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub file_names: Vec<String>,
    pub file_count: usize,
    pub results: Vec<PairResult>,
}

impl ComparisonReport {
    pub fn new(file_names: Vec<String>, table: ResultTable) -> Self {
        Self {
            file_count: file_names.len(),
            file_names,
            results: table.into_vec(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        Ok(serde_cbor::to_vec(self)?)
    }

    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        Ok(serde_cbor::from_slice(bytes)?)
    }

    /// Write the report in the given format
    pub fn write<W: Write>(&self, format: ReportFormat, mut out: W) -> Result<()> {
        match format {
            ReportFormat::Json => {
                out.write_all(self.to_json_pretty()?.as_bytes())?;
                out.write_all(b"\n")?;
            }
            ReportFormat::Csv => self::csv::write(&self.results, &mut out)?,
            ReportFormat::Html => {
                let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
                out.write_all(self::html::render(&self.results, &self.file_names, &generated_at).as_bytes())?;
            }
            ReportFormat::Cbor => out.write_all(&self.to_cbor()?)?,
        }
        out.flush()?;
        Ok(())
    }
}

/// `similarity_report_<YYYYmmdd_HHMMSS>.<ext>`
pub fn default_file_name(format: ReportFormat) -> String {
    format!(
        "similarity_report_{}.{}",
        chrono::Local::now().format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compare::compare_texts, config::SimilarityConfig};

    fn report() -> ComparisonReport {
        let texts = ["the cat sat", "the cat sat", "a dog ran"];
        let table = compare_texts(&texts, None, &SimilarityConfig::default()).unwrap();
        ComparisonReport::new(vec!["Doc_1".into(), "Doc_2".into(), "Doc_3".into()], table)
    }

    #[test]
    fn json_has_api_shape() {
        let value: serde_json::Value = serde_json::from_str(&report().to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["fileNames"].as_array().unwrap().len(), 3);
        assert_eq!(value["fileCount"], 3);
        assert_eq!(value["results"].as_array().unwrap().len(), 3);
        assert_eq!(value["results"][0]["Doc 1"], "Doc_1");
        assert_eq!(value["results"][0]["Average Similarity (%)"], 100.0);
    }

    #[test]
    fn cbor_decodes_to_same_report() {
        let r = report();
        let bytes = r.to_cbor().unwrap();
        assert_eq!(ComparisonReport::from_cbor(&bytes).unwrap(), r);
    }

    #[test]
    fn write_csv_to_buffer() {
        let mut buf = Vec::new();
        report().write(ReportFormat::Csv, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn default_file_name_has_extension() {
        let name = default_file_name(ReportFormat::Html);
        assert!(name.starts_with("similarity_report_"));
        assert!(name.ends_with(".html"));
    }
}
