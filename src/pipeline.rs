use anyhow::Result;
use log::{error, info, warn};
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::DartApi;
use crate::archive::extract_primary_document;
use crate::filings::{select_annual_report, FilingCategory};
use crate::registry::CorpList;

/// Filings filed on or after this date are searched.
pub const SEARCH_BGN_DE: &str = "20240101";

pub const SEARCH_CATEGORY: FilingCategory = FilingCategory::Periodic;

/// Name-keyed results of one end-to-end run.
///
/// Names that never resolved in the registry are absent from every map.
/// Resolved names with no annual report keep a `None` receipt and are
/// skipped by the document stage.
#[derive(Debug, Default)]
pub struct RunReport {
    pub stock_codes: HashMap<String, String>,
    pub corp_codes: HashMap<String, String>,
    pub receipts: HashMap<String, Option<String>>,
    pub documents: HashMap<String, Vec<u8>>,
}

pub struct Pipeline {
    api: Arc<dyn DartApi>,
    corp_list: CorpList,
}

impl Pipeline {
    /// Downloads and parses the corporation index once up front; every
    /// name lookup afterwards is in-memory.
    pub fn new(api: Arc<dyn DartApi>) -> Result<Self> {
        let index = api.fetch_corp_index()?;
        let corp_list = CorpList::from_index_archive(&index)?;
        info!("Loaded corp index with {} entries", corp_list.len());
        Ok(Pipeline { api, corp_list })
    }

    /// Builds a pipeline over an already-parsed registry.
    pub fn with_corp_list(api: Arc<dyn DartApi>, corp_list: CorpList) -> Self {
        Pipeline { api, corp_list }
    }

    pub fn corp_list(&self) -> &CorpList {
        &self.corp_list
    }

    /// Stock codes for the listed corporations among `names`. Unresolved
    /// and unlisted names are left out.
    pub fn stock_codes(&self, names: &[&str]) -> HashMap<String, String> {
        let mut codes = HashMap::new();
        for name in names {
            if let Some(corp) = self.corp_list.resolve(name) {
                if let Some(stock_code) = &corp.stock_code {
                    codes.insert(corp.corp_name.clone(), stock_code.clone());
                }
            }
        }
        codes
    }

    /// Internal corp codes for the resolvable names among `names`.
    pub fn corp_codes(&self, names: &[&str]) -> HashMap<String, String> {
        let mut codes = HashMap::new();
        for name in names {
            if let Some(corp) = self.corp_list.resolve(name) {
                codes.insert(corp.corp_name.clone(), corp.corp_code.clone());
            }
        }
        codes
    }

    /// Receipt number of the most recent annual report, if any.
    ///
    /// A failed search is logged against the corporation and mapped to
    /// `None` so one corporation cannot take the rest of the batch down.
    pub fn annual_report_receipt(&self, corp_name: &str, corp_code: &str) -> Option<String> {
        match self
            .api
            .search_filings(corp_code, SEARCH_BGN_DE, SEARCH_CATEGORY)
        {
            Ok(records) => {
                let report = select_annual_report(&records)?;
                if let Some(date) = report.filing_date() {
                    info!("[{}] {} filed {}", corp_name, report.report_nm, date);
                }
                Some(report.rcept_no.clone())
            }
            Err(e) => {
                error!("[{}] filing search failed: {}", corp_name, e);
                None
            }
        }
    }

    /// Annual report receipts for every corp code in the map, keyed by
    /// corporation name. Failed lookups are recorded as `None`.
    pub fn receipts(&self, corp_codes: &HashMap<String, String>) -> HashMap<String, Option<String>> {
        corp_codes
            .iter()
            .map(|(name, code)| (name.clone(), self.annual_report_receipt(name, code)))
            .collect()
    }

    /// Downloads and unpacks the primary document for every resolved
    /// receipt. Download and extraction errors propagate and end the run.
    pub fn documents(
        &self,
        receipts: &HashMap<String, Option<String>>,
    ) -> Result<HashMap<String, Vec<u8>>> {
        let mut documents = HashMap::new();
        for (name, receipt) in receipts {
            let rcept_no = match receipt {
                Some(r) => r,
                None => {
                    warn!("[{}] no annual report receipt, skipping download", name);
                    continue;
                }
            };

            let archive = self.api.fetch_document(rcept_no)?;
            let content = extract_primary_document(&archive)?;
            info!(
                "[{}] extracted {} bytes from receipt {}",
                name,
                content.len(),
                rcept_no
            );
            documents.insert(name.clone(), content);
        }
        Ok(documents)
    }

    /// Runs all four stages over `names` and returns the per-stage maps.
    pub fn run(&self, names: &[&str]) -> Result<RunReport> {
        let stock_codes = self.stock_codes(names);
        let corp_codes = self.corp_codes(names);
        let receipts = self.receipts(&corp_codes);
        let documents = self.documents(&receipts)?;

        Ok(RunReport {
            stock_codes,
            corp_codes,
            receipts,
            documents,
        })
    }
}
