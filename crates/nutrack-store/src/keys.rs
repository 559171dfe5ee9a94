//! Key encoding for the `RocksDB` backend.
//!
//! Every document lives in one column family under
//! `collection-path \0 document-id`. Path segments and document ids never
//! contain NUL, so the separator is unambiguous and a prefix scan over
//! `collection-path \0` visits exactly one collection.

use crate::paths::CollectionPath;

/// Key for one document.
#[must_use]
pub fn document_key(collection: &CollectionPath, id: &str) -> Vec<u8> {
    let path = collection.as_str().as_bytes();
    let mut key = Vec::with_capacity(path.len() + 1 + id.len());
    key.extend_from_slice(path);
    key.push(0);
    key.extend_from_slice(id.as_bytes());
    key
}

/// Prefix covering every document of one collection.
#[must_use]
pub fn collection_prefix(collection: &CollectionPath) -> Vec<u8> {
    let path = collection.as_str().as_bytes();
    let mut prefix = Vec::with_capacity(path.len() + 1);
    prefix.extend_from_slice(path);
    prefix.push(0);
    prefix
}

/// Extract the document id from a key, given its collection prefix.
///
/// Returns `None` for keys outside the prefix or ids that are not UTF-8.
#[must_use]
pub fn document_id_from_key<'a>(key: &'a [u8], prefix: &[u8]) -> Option<&'a str> {
    let rest = key.strip_prefix(prefix)?;
    std::str::from_utf8(rest).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> CollectionPath {
        CollectionPath::parse(s).unwrap()
    }

    #[test]
    fn key_round_trip() {
        let collection = path("usuarios/u1/historial_busqueda");
        let key = document_key(&collection, "doc-1");
        let prefix = collection_prefix(&collection);

        assert!(key.starts_with(&prefix));
        assert_eq!(document_id_from_key(&key, &prefix), Some("doc-1"));
    }

    #[test]
    fn sibling_collections_do_not_share_prefixes() {
        // "usuarios/u1" must not swallow "usuarios/u10".
        let short = collection_prefix(&path("usuarios/u1/historial_busqueda"));
        let long = document_key(&path("usuarios/u10/historial_busqueda"), "d");
        assert!(!long.starts_with(&short));
    }

    #[test]
    fn foreign_keys_yield_no_id() {
        let prefix = collection_prefix(&path("usuarios"));
        let other = document_key(&path("otros"), "d");
        assert_eq!(document_id_from_key(&other, &prefix), None);
    }
}
