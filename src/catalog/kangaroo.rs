/// JSON kangaroo catalog
///
/// Accepts either a bare array of records or an object wrapping the
/// array under "kangaroos". Records are ordered by id, and ids must
/// run 1..=N so that deep links can address them by position.

use serde::Deserialize;
use std::path::Path;

use crate::error::CatalogError;
use crate::state::data::{ImageSource, Item};

#[derive(Debug, Deserialize)]
struct KangarooRecord {
    id: u32,
    #[serde(default, alias = "title")]
    name: Option<String>,
    #[serde(alias = "url", alias = "imageUrl")]
    image: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    List(Vec<KangarooRecord>),
    Wrapped { kangaroos: Vec<KangarooRecord> },
}

/// Read and parse a catalog file
pub async fn load_file(path: &Path) -> Result<Vec<Item>, CatalogError> {
    let json = tokio::fs::read_to_string(path).await?;
    parse(&json)
}

/// Parse a catalog payload into items ordered by id
pub fn parse(json: &str) -> Result<Vec<Item>, CatalogError> {
    let mut records = match serde_json::from_str(json)? {
        Payload::List(records) => records,
        Payload::Wrapped { kangaroos } => kangaroos,
    };
    records.sort_by_key(|record| record.id);

    for (index, record) in records.iter().enumerate() {
        let expected = index as u32 + 1;
        if record.id == 0 {
            return Err(CatalogError::ZeroId);
        }
        if index > 0 && records[index - 1].id == record.id {
            return Err(CatalogError::DuplicateId(record.id));
        }
        if record.id != expected {
            return Err(CatalogError::NonContiguous {
                expected,
                found: record.id,
            });
        }
    }

    Ok(records
        .into_iter()
        .map(|record| {
            let name = record
                .name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| format!("Kangaroo #{}", record.id));
            Item::new(record.id, name, ImageSource::Supplied(record.image))
        })
        .collect())
}
