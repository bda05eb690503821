use anyhow::{anyhow, Result};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

const INDEX_FILE_NAME: &str = "CORPCODE.xml";

/// One corporation in the registry index. `stock_code` is `None` for
/// unlisted entities (the index carries blanks there).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpEntry {
    pub corp_code: String,
    pub corp_name: String,
    pub stock_code: Option<String>,
}

/// In-memory corporation registry, kept in the order the index lists the
/// entries.
#[derive(Debug, Clone)]
pub struct CorpList {
    entries: Vec<CorpEntry>,
}

impl CorpList {
    pub fn new(entries: Vec<CorpEntry>) -> Self {
        CorpList { entries }
    }

    /// Parses the registry index archive (a zip wrapping CORPCODE.xml).
    pub fn from_index_archive(bytes: &[u8]) -> Result<Self> {
        // 1. Unzip
        let mut zip = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| anyhow!("Failed to open corp index archive: {}", e))?;
        let mut file = zip
            .by_name(INDEX_FILE_NAME)
            .map_err(|e| anyhow!("{} not found in corp index archive: {}", INDEX_FILE_NAME, e))?;

        let mut xml = String::new();
        file.read_to_string(&mut xml)
            .map_err(|e| anyhow!("Failed to read {}: {}", INDEX_FILE_NAME, e))?;

        // 2. Parse
        Self::from_index_xml(&xml)
    }

    /// Parses the CORPCODE.xml payload: a `<result>` root holding one
    /// `<list>` element per corporation.
    pub fn from_index_xml(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_reader(xml.as_bytes());
        let mut buf = Vec::new();

        let mut entries = Vec::new();
        let mut in_entry = false;
        let mut current_tag: Vec<u8> = Vec::new();
        let mut corp_code = String::new();
        let mut corp_name = String::new();
        let mut stock_code = String::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => match e.name().as_ref() {
                    b"list" => {
                        in_entry = true;
                        corp_code.clear();
                        corp_name.clear();
                        stock_code.clear();
                    }
                    tag if in_entry => current_tag = tag.to_vec(),
                    _ => {}
                },
                Ok(Event::Text(ref e)) if in_entry => {
                    let text = e
                        .unescape()
                        .map_err(|e| anyhow!("Invalid corp index XML: {}", e))?;
                    match current_tag.as_slice() {
                        b"corp_code" => corp_code.push_str(&text),
                        b"corp_name" => corp_name.push_str(&text),
                        b"stock_code" => stock_code.push_str(&text),
                        _ => {}
                    }
                }
                Ok(Event::End(ref e)) => {
                    if e.name().as_ref() == b"list" {
                        in_entry = false;
                        let code = corp_code.trim();
                        let name = corp_name.trim();
                        if !code.is_empty() && !name.is_empty() {
                            let stock = stock_code.trim();
                            entries.push(CorpEntry {
                                corp_code: code.to_string(),
                                corp_name: name.to_string(),
                                stock_code: if stock.is_empty() {
                                    None
                                } else {
                                    Some(stock.to_string())
                                },
                            });
                        }
                    }
                    current_tag.clear();
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(anyhow!("Invalid corp index XML: {}", e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(CorpList { entries })
    }

    /// All entries carrying exactly this display name, in index order.
    /// Display names are not unique in the registry.
    pub fn find_by_name(&self, name: &str) -> Vec<&CorpEntry> {
        self.entries.iter().filter(|e| e.corp_name == name).collect()
    }

    /// First entry with the given name. Taking the first keeps resolution
    /// deterministic when duplicates exist, at the cost of an occasional
    /// code mismatch for the later duplicates.
    pub fn resolve(&self, name: &str) -> Option<&CorpEntry> {
        self.entries.iter().find(|e| e.corp_name == name)
    }

    pub fn find_by_corp_code(&self, corp_code: &str) -> Option<&CorpEntry> {
        self.entries.iter().find(|e| e.corp_code == corp_code)
    }

    pub fn find_by_stock_code(&self, stock_code: &str) -> Option<&CorpEntry> {
        self.entries
            .iter()
            .find(|e| e.stock_code.as_deref() == Some(stock_code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CorpEntry] {
        &self.entries
    }
}
