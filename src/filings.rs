use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Substring of `report_nm` that marks an annual report (사업보고서).
pub const ANNUAL_REPORT_MARKER: &str = "사업보고서";

/// Disclosure categories accepted by the filing search (`pblntf_ty`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingCategory {
    /// A: 정기공시 (periodic disclosures: annual, half-year, quarterly reports)
    Periodic,
    /// B: 주요사항보고
    MajorEvent,
    /// C: 발행공시
    Issuance,
    /// D: 지분공시
    Ownership,
    /// E: 기타공시
    Other,
    /// F: 외부감사관련
    ExternalAudit,
    /// G: 펀드공시
    Fund,
    /// H: 자산유동화
    AssetSecuritization,
    /// I: 거래소공시
    Exchange,
    /// J: 공정위공시
    FairTrade,
}

impl FilingCategory {
    pub fn code(&self) -> &'static str {
        match self {
            FilingCategory::Periodic => "A",
            FilingCategory::MajorEvent => "B",
            FilingCategory::Issuance => "C",
            FilingCategory::Ownership => "D",
            FilingCategory::Other => "E",
            FilingCategory::ExternalAudit => "F",
            FilingCategory::Fund => "G",
            FilingCategory::AssetSecuritization => "H",
            FilingCategory::Exchange => "I",
            FilingCategory::FairTrade => "J",
        }
    }
}

/// One row of a filing search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingRecord {
    pub corp_code: String,
    #[serde(default)]
    pub corp_name: String,
    pub rcept_no: String,
    pub report_nm: String,
    pub rcept_dt: String,
}

impl FilingRecord {
    /// Filing date parsed from the registry's YYYYMMDD form.
    pub fn filing_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.rcept_dt, "%Y%m%d").ok()
    }
}

/// First record naming an annual report, in the order the search returned
/// them. The search lists newest filings first, so the first match is the
/// most recent one.
pub fn select_annual_report(records: &[FilingRecord]) -> Option<&FilingRecord> {
    records
        .iter()
        .find(|r| r.report_nm.contains(ANNUAL_REPORT_MARKER))
}
