//! Collection paths in the hierarchical document namespace.

use std::fmt;

use crate::error::StoreError;

/// A validated path addressing one collection.
///
/// Paths alternate collection and document segments, so a collection path
/// always has an odd number of segments: `usuarios` is a root collection,
/// `usuarios/u1/historial_busqueda` is a subcollection of document `u1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionPath(String);

impl CollectionPath {
    /// Build a path from its segments.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPath`] if the segment count is even or
    /// zero, or any segment is empty or contains `/` or NUL.
    pub fn new<I, S>(segments: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        let mut count = 0usize;
        for segment in segments {
            let segment = segment.as_ref();
            if segment.is_empty() {
                return Err(StoreError::InvalidPath("empty path segment".into()));
            }
            if segment.contains('/') || segment.contains('\0') {
                return Err(StoreError::InvalidPath(format!(
                    "segment contains a reserved character: {segment:?}"
                )));
            }
            if count > 0 {
                joined.push('/');
            }
            joined.push_str(segment);
            count += 1;
        }
        if count == 0 || count % 2 == 0 {
            return Err(StoreError::InvalidPath(format!(
                "collection paths need an odd number of segments, got {count}"
            )));
        }
        Ok(Self(joined))
    }

    /// Parse a `/`-separated path string.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPath`] under the same rules as
    /// [`CollectionPath::new`].
    pub fn parse(path: &str) -> Result<Self, StoreError> {
        Self::new(path.split('/'))
    }

    /// The path as a `/`-joined string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_subcollection_paths_parse() {
        assert_eq!(CollectionPath::parse("usuarios").unwrap().as_str(), "usuarios");
        assert_eq!(
            CollectionPath::parse("usuarios/u1/historial_busqueda")
                .unwrap()
                .as_str(),
            "usuarios/u1/historial_busqueda"
        );
    }

    #[test]
    fn even_segment_counts_are_rejected() {
        // Two segments address a document, not a collection.
        assert!(CollectionPath::parse("usuarios/u1").is_err());
        assert!(CollectionPath::new(Vec::<&str>::new()).is_err());
    }

    #[test]
    fn reserved_characters_are_rejected() {
        assert!(CollectionPath::new(["usuarios", "u/1", "historial_busqueda"]).is_err());
        assert!(CollectionPath::new(["usuarios", "u\01", "historial_busqueda"]).is_err());
        assert!(CollectionPath::new(["usuarios", "", "historial_busqueda"]).is_err());
    }
}
