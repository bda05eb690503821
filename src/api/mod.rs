use crate::filings::{FilingCategory, FilingRecord};
use anyhow::Result;

/// The three OpenDART capabilities the pipeline needs. Implemented over
/// HTTP by `client::OpenDartClient`; `mock::MockDartApi` serves canned
/// data for tests.
pub trait DartApi: Send + Sync {
    /// Full corporation index as served by the registry: a zip wrapping
    /// CORPCODE.xml.
    fn fetch_corp_index(&self) -> Result<Vec<u8>>;

    fn search_filings(
        &self,
        corp_code: &str,
        bgn_de: &str,
        category: FilingCategory,
    ) -> Result<Vec<FilingRecord>>;

    /// Document archive for one filing receipt, as raw zip bytes.
    fn fetch_document(&self, rcept_no: &str) -> Result<Vec<u8>>;
}

pub mod client;
pub mod mock;
