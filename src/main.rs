use anyhow::Result;
use log::info;
use std::sync::Arc;

use opendart::api::client::OpenDartClient;
use opendart::config::DartConfig;
use opendart::pipeline::Pipeline;

/// Corporations to pull annual reports for, by display name.
const CORP_NAMES: [&str; 50] = [
    "삼성전자",
    "LG에너지솔루션",
    "SK하이닉스",
    "NAVER",
    "삼성바이오로직스",
    "삼성전자우",
    "카카오",
    "삼성SDI",
    "현대차",
    "LG화학",
    "기아",
    "POSCO홀딩스",
    "KB금융",
    "카카오뱅크",
    "셀트리온",
    "신한지주",
    "삼성물산",
    "현대모비스",
    "SK이노베이션",
    "LG전자",
    "카카오페이",
    "SK",
    "한국전력",
    "크래프톤",
    "하나금융지주",
    "LG생활건강",
    "HMM",
    "삼성생명",
    "하이브",
    "두산중공업",
    "SK텔레콤",
    "삼성전기",
    "SK바이오사이언스",
    "LG",
    "S-Oil",
    "고려아연",
    "KT&G",
    "우리금융지주",
    "대한항공",
    "삼성에스디에스",
    "현대중공업",
    "엔씨소프트",
    "삼성화재",
    "아모레퍼시픽",
    "KT",
    "포스코케미칼",
    "넷마블",
    "SK아이이테크놀로지",
    "LG이노텍",
    "기업은행",
];

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = DartConfig::from_env()?;
    let api = Arc::new(OpenDartClient::new(config));
    let pipeline = Pipeline::new(api)?;

    let report = pipeline.run(&CORP_NAMES)?;
    info!(
        "Resolved {} listed corporations, {} corp codes, {} documents",
        report.stock_codes.len(),
        report.corp_codes.len(),
        report.documents.len()
    );

    println!("{:?}", report.documents);
    Ok(())
}
