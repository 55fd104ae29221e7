use std::collections::BTreeSet;
use std::fmt;
use serde::{Deserialize, Deserializer};
use serde::de::{MapAccess, Visitor};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryError, LibraryResult};

const BUILTIN_CATALOG: &str = include_str!("catalog.json");

// load_catalog reads the catalog document at path, or the built-in catalog when no path is set
pub(crate) async fn load_catalog(path: Option<&str>) -> LibraryResult<Vec<BookEntity>> {
    match path {
        Some(path) => {
            let json = tokio::fs::read_to_string(path).await?;
            parse_catalog(json.as_str())
        }
        None => parse_catalog(BUILTIN_CATALOG),
    }
}

// CatalogDocument keeps every entry of the catalog object in document order, repeated keys included,
// so that a duplicate isbn is reported instead of silently replacing the earlier record.
struct CatalogDocument(Vec<(String, BookDto)>);

impl<'de> Deserialize<'de> for CatalogDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = CatalogDocument;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of books keyed by isbn")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
                where A: MapAccess<'de> {
                let mut records = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, record)) = map.next_entry::<String, BookDto>()? {
                    records.push((key, record));
                }
                Ok(CatalogDocument(records))
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

// parse_catalog accepts an object keyed by isbn. A record's own isbn, when present, must match its key,
// and no isbn may appear twice.
pub(crate) fn parse_catalog(json: &str) -> LibraryResult<Vec<BookEntity>> {
    let CatalogDocument(records) = serde_json::from_str(json)?;
    let mut seen = BTreeSet::new();
    let mut books = Vec::with_capacity(records.len());
    for (key, record) in records {
        if !seen.insert(key.clone()) {
            return Err(LibraryError::duplicate_key(
                format!("catalog has more than one record for isbn {:?}", key).as_str()));
        }
        if key.is_empty() {
            return Err(LibraryError::validation("catalog record has an empty isbn key", None));
        }
        if !record.isbn.is_empty() && record.isbn != key {
            return Err(LibraryError::validation(
                format!("catalog record {:?} has mismatched isbn {:?}", key, record.isbn).as_str(), None));
        }
        books.push(BookEntity::from(&record.keyed(key.as_str())));
    }
    Ok(books)
}
