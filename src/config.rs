//! Tuning parameters and runtime configuration for a comparison run.
//!
//! Compile-time defaults are the constants below; `SimilarityConfig` carries the
//! runtime values, loadable from a JSON file and overridable from the CLI.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimilarityError};

/// Number of concurrent document loads.
pub const DEFAULT_LOADER_WORKERS: usize = 10;

/// Token n-gram size for the n-gram overlap metric.
pub const DEFAULT_NGRAM_SIZE: usize = 3;

/// Token shingle size for MinHash.
pub const DEFAULT_SHINGLE_SIZE: usize = 3;

/// Number of MinHash permutations.
///
/// The estimate's standard error is roughly `1 / sqrt(permutations)`.
pub const DEFAULT_MINHASH_PERMUTATIONS: usize = 128;

/// Upper bound on LCS dynamic-programming cells (`n * m`) per pair.
pub const DEFAULT_LCS_MAX_CELLS: u64 = 100_000_000;

/// What to do when a single document cannot be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionPolicy {
    /// Abort the whole batch with the extraction error.
    #[default]
    FailFast,
    /// Replace the document with empty text and keep going.
    Degrade,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Pair evaluation workers. `None` uses available parallelism.
    pub workers: Option<usize>,
    pub loader_workers: usize,
    pub ngram_size: usize,
    pub shingle_size: usize,
    pub minhash_permutations: usize,
    pub lcs_max_cells: u64,
    pub extraction_policy: ExtractionPolicy,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            workers: None,
            loader_workers: DEFAULT_LOADER_WORKERS,
            ngram_size: DEFAULT_NGRAM_SIZE,
            shingle_size: DEFAULT_SHINGLE_SIZE,
            minhash_permutations: DEFAULT_MINHASH_PERMUTATIONS,
            lcs_max_cells: DEFAULT_LCS_MAX_CELLS,
            extraction_policy: ExtractionPolicy::FailFast,
        }
    }
}

impl SimilarityConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SimilarityError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| SimilarityError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn with_extraction_policy(mut self, policy: ExtractionPolicy) -> Self {
        self.extraction_policy = policy;
        self
    }

    /// Reject values no run can work with
    pub fn validate(&self) -> Result<()> {
        if self.workers == Some(0) {
            return Err(SimilarityError::InvalidConfig("workers must be > 0".into()));
        }
        let positive = [
            ("loader_workers", self.loader_workers),
            ("ngram_size", self.ngram_size),
            ("shingle_size", self.shingle_size),
            ("minhash_permutations", self.minhash_permutations),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(SimilarityError::InvalidConfig(format!("{name} must be > 0")));
            }
        }
        if self.lcs_max_cells == 0 {
            return Err(SimilarityError::InvalidConfig("lcs_max_cells must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        assert!(SimilarityConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_workers_rejected() {
        let config = SimilarityConfig::default().with_workers(0);
        assert!(matches!(config.validate(), Err(SimilarityError::InvalidConfig(_))));
    }

    #[test]
    fn zero_ngram_size_rejected() {
        let config = SimilarityConfig { ngram_size: 0, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ngram_size"));
    }

    #[test]
    fn partial_json_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"workers": 4, "extraction_policy": "degrade"}}"#).unwrap();

        let config = SimilarityConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.workers, Some(4));
        assert_eq!(config.extraction_policy, ExtractionPolicy::Degrade);
        assert_eq!(config.ngram_size, DEFAULT_NGRAM_SIZE);
        assert_eq!(config.loader_workers, DEFAULT_LOADER_WORKERS);
    }

    #[test]
    fn malformed_json_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            SimilarityConfig::from_json_file(file.path()),
            Err(SimilarityError::ConfigParse { .. })
        ));
    }

    #[test]
    fn missing_json_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            SimilarityConfig::from_json_file(dir.path().join("absent.json")),
            Err(SimilarityError::ConfigRead { .. })
        ));
    }
}
