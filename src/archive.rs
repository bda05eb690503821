use anyhow::{anyhow, Result};
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Extracts the primary document from a filing archive.
///
/// The registry's archive convention puts the top-level document at the
/// shortest entry name; attachments sit deeper with longer, nested names.
/// Ties keep archive order.
pub fn extract_primary_document(bytes: &[u8]) -> Result<Vec<u8>> {
    // 1. Open
    let mut zip = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| anyhow!("Failed to open filing archive: {}", e))?;

    // 2. Pick the shortest entry name
    let mut names = Vec::with_capacity(zip.len());
    for i in 0..zip.len() {
        let entry = zip
            .by_index(i)
            .map_err(|e| anyhow!("Failed to read archive entry {}: {}", i, e))?;
        names.push(entry.name().to_string());
    }
    let primary = names
        .iter()
        .min_by_key(|name| name.chars().count())
        .ok_or_else(|| anyhow!("Filing archive has no entries"))?
        .clone();

    // 3. Read it fully
    let mut file = zip
        .by_name(&primary)
        .map_err(|e| anyhow!("Failed to open archive entry {}: {}", primary, e))?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)
        .map_err(|e| anyhow!("Failed to read archive entry {}: {}", primary, e))?;

    Ok(content)
}
