use anyhow::{anyhow, Result};
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::api::DartApi;
use crate::config::DartConfig;
use crate::filings::{FilingCategory, FilingRecord};

const STATUS_OK: &str = "000";
const STATUS_NO_DATA: &str = "013";

// One page covers a year of periodic disclosures many times over.
const PAGE_COUNT: &str = "100";

#[derive(Debug, Deserialize)]
struct FilingSearchResponse {
    status: String,
    message: String,
    #[serde(default)]
    list: Vec<FilingRecord>,
}

pub struct OpenDartClient {
    config: DartConfig,
    client: Client,
}

impl OpenDartClient {
    pub fn new(config: DartConfig) -> Self {
        OpenDartClient {
            config,
            client: Client::new(),
        }
    }
}

impl DartApi for OpenDartClient {
    fn fetch_corp_index(&self) -> Result<Vec<u8>> {
        let url = format!("{}/corpCode.xml", self.config.base_url);
        debug!("Fetching corp index from {}", url);

        let resp = self
            .client
            .get(&url)
            .query(&[("crtfc_key", self.config.api_key.as_str())])
            .send()
            .map_err(|e| anyhow!("Corp index request failed: {}", e))?;

        if !resp.status().is_success() {
            return Err(anyhow!("Corp index request error: {}", resp.status()));
        }

        let bytes = resp
            .bytes()
            .map_err(|e| anyhow!("Failed to read corp index body: {}", e))?;
        Ok(bytes.to_vec())
    }

    fn search_filings(
        &self,
        corp_code: &str,
        bgn_de: &str,
        category: FilingCategory,
    ) -> Result<Vec<FilingRecord>> {
        let url = format!("{}/list.json", self.config.base_url);
        let params = [
            ("crtfc_key", self.config.api_key.as_str()),
            ("corp_code", corp_code),
            ("bgn_de", bgn_de),
            ("pblntf_ty", category.code()),
            ("page_count", PAGE_COUNT),
        ];

        let resp = self.client.get(&url).query(&params).send()?;
        if !resp.status().is_success() {
            return Err(anyhow!("Filing search failed: {}", resp.status()));
        }

        let data: FilingSearchResponse = resp
            .json()
            .map_err(|e| anyhow!("Failed to parse filing search response: {}", e))?;

        match data.status.as_str() {
            STATUS_OK => Ok(data.list),
            STATUS_NO_DATA => Ok(Vec::new()),
            _ => Err(anyhow!(
                "Filing search API error {}: {}",
                data.status,
                data.message
            )),
        }
    }

    fn fetch_document(&self, rcept_no: &str) -> Result<Vec<u8>> {
        let url = format!("{}/document.xml", self.config.base_url);
        let params = [
            ("crtfc_key", self.config.api_key.as_str()),
            ("rcept_no", rcept_no),
        ];

        // This endpoint reports failures inside the body rather than the
        // status line; a bad key or receipt shows up downstream as an
        // unreadable archive.
        let resp = self.client.get(&url).query(&params).send()?;
        let bytes = resp.bytes()?;
        Ok(bytes.to_vec())
    }
}
