use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::api::DartApi;
use crate::filings::{FilingCategory, FilingRecord};

/// Canned API for tests. Filings are keyed by corp code, documents by
/// receipt number; `fail_search` makes every search error out.
pub struct MockDartApi {
    corp_index: Mutex<Vec<u8>>,
    filings: Mutex<HashMap<String, Vec<FilingRecord>>>,
    documents: Mutex<HashMap<String, Vec<u8>>>,
    fail_search: Mutex<bool>,
}

impl MockDartApi {
    pub fn new() -> Self {
        MockDartApi {
            corp_index: Mutex::new(Vec::new()),
            filings: Mutex::new(HashMap::new()),
            documents: Mutex::new(HashMap::new()),
            fail_search: Mutex::new(false),
        }
    }

    pub fn with_corp_index(index: Vec<u8>) -> Self {
        let api = MockDartApi::new();
        api.set_corp_index(index);
        api
    }

    pub fn set_corp_index(&self, index: Vec<u8>) {
        let mut guard = self.corp_index.lock().unwrap();
        *guard = index;
    }

    pub fn add_filing(&self, corp_code: &str, record: FilingRecord) {
        let mut guard = self.filings.lock().unwrap();
        guard.entry(corp_code.to_string()).or_default().push(record);
    }

    pub fn add_document(&self, rcept_no: &str, bytes: Vec<u8>) {
        let mut guard = self.documents.lock().unwrap();
        guard.insert(rcept_no.to_string(), bytes);
    }

    pub fn set_fail_search(&self, fail: bool) {
        let mut guard = self.fail_search.lock().unwrap();
        *guard = fail;
    }
}

impl DartApi for MockDartApi {
    fn fetch_corp_index(&self) -> Result<Vec<u8>> {
        Ok(self.corp_index.lock().unwrap().clone())
    }

    fn search_filings(
        &self,
        corp_code: &str,
        _bgn_de: &str,
        _category: FilingCategory,
    ) -> Result<Vec<FilingRecord>> {
        if *self.fail_search.lock().unwrap() {
            return Err(anyhow!("Mock filing search failure"));
        }
        let guard = self.filings.lock().unwrap();
        Ok(guard.get(corp_code).cloned().unwrap_or_default())
    }

    fn fetch_document(&self, rcept_no: &str) -> Result<Vec<u8>> {
        let guard = self.documents.lock().unwrap();
        guard
            .get(rcept_no)
            .cloned()
            .ok_or_else(|| anyhow!("No document for receipt {}", rcept_no))
    }
}
