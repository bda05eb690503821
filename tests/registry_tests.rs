use opendart::registry::CorpList;
use std::io::{Cursor, Write};
use zip::write::{FileOptions, ZipWriter};

fn index_xml(rows: &[(&str, &str, &str)]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<result>\n");
    for (code, name, stock) in rows {
        xml.push_str(&format!(
            "<list><corp_code>{}</corp_code><corp_name>{}</corp_name><stock_code>{}</stock_code><modify_date>20240101</modify_date></list>\n",
            code, name, stock
        ));
    }
    xml.push_str("</result>\n");
    xml
}

fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, bytes) in entries {
        writer.start_file(*name, FileOptions::default()).unwrap();
        writer.write_all(bytes).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

#[test]
fn test_parse_index_xml() {
    let xml = index_xml(&[
        ("00126380", "삼성전자", "005930"),
        ("00434003", "다코", " "),
    ]);
    let list = CorpList::from_index_xml(&xml).unwrap();

    assert_eq!(list.len(), 2);
    let samsung = &list.entries()[0];
    assert_eq!(samsung.corp_code, "00126380");
    assert_eq!(samsung.corp_name, "삼성전자");
    assert_eq!(samsung.stock_code.as_deref(), Some("005930"));

    // Blank stock code means the entity is unlisted
    assert_eq!(list.entries()[1].stock_code, None);
}

#[test]
fn test_parse_empty_index() {
    let list = CorpList::from_index_xml(&index_xml(&[])).unwrap();
    assert!(list.is_empty());
}

#[test]
fn test_resolve_unknown_name() {
    let list = CorpList::from_index_xml(&index_xml(&[("00126380", "삼성전자", "005930")])).unwrap();
    assert!(list.resolve("UnknownCorp").is_none());
    assert!(list.find_by_name("UnknownCorp").is_empty());
}

#[test]
fn test_duplicate_names_resolve_to_first() {
    // Display names are not unique in the registry; the first entry in
    // index order wins.
    let xml = index_xml(&[
        ("00000001", "두산", " "),
        ("00000002", "두산", "000150"),
    ]);
    let list = CorpList::from_index_xml(&xml).unwrap();

    assert_eq!(list.find_by_name("두산").len(), 2);
    let first = list.resolve("두산").unwrap();
    assert_eq!(first.corp_code, "00000001");
    assert_eq!(first.stock_code, None);
}

#[test]
fn test_lookup_by_codes() {
    let xml = index_xml(&[
        ("00126380", "삼성전자", "005930"),
        ("00164742", "현대자동차", "005380"),
    ]);
    let list = CorpList::from_index_xml(&xml).unwrap();

    assert_eq!(
        list.find_by_corp_code("00164742").unwrap().corp_name,
        "현대자동차"
    );
    assert_eq!(
        list.find_by_stock_code("005930").unwrap().corp_name,
        "삼성전자"
    );
    assert!(list.find_by_corp_code("99999999").is_none());
    assert!(list.find_by_stock_code("999999").is_none());
}

#[test]
fn test_from_index_archive() {
    let xml = index_xml(&[("00126380", "삼성전자", "005930")]);
    let archive = build_zip(&[("CORPCODE.xml", xml.as_bytes())]);

    let list = CorpList::from_index_archive(&archive).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.resolve("삼성전자").unwrap().corp_code, "00126380");
}

#[test]
fn test_index_archive_missing_payload() {
    let archive = build_zip(&[("SOMETHING_ELSE.xml", b"<result></result>")]);
    let err = CorpList::from_index_archive(&archive).unwrap_err();
    assert!(err.to_string().contains("CORPCODE.xml"));
}

#[test]
fn test_index_archive_not_a_zip() {
    assert!(CorpList::from_index_archive(b"this is not a zip").is_err());
}
