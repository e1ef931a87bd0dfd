//! Topical (Insight) document index.
//!
//! The index is read from the first usable JSON source on first access and
//! stays immutable for the lifetime of the [`TopicIndex`]. Loading is
//! at-most-once even under concurrent first access; later reads take no
//! lock. A missing or malformed source never surfaces as an error, the index
//! simply ends up empty.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::models::TopicDocument;

pub struct TopicIndex {
    sources: Vec<PathBuf>,
    entries: OnceLock<Vec<TopicDocument>>,
}

impl TopicIndex {
    /// Index that loads lazily from `sources`, tried in order.
    pub fn new(sources: Vec<PathBuf>) -> Self {
        Self {
            sources,
            entries: OnceLock::new(),
        }
    }

    /// Index over an already-decoded document list.
    pub fn from_documents(documents: Vec<TopicDocument>) -> Self {
        Self {
            sources: Vec::new(),
            entries: OnceLock::from(documents),
        }
    }

    /// Index that never matches.
    pub fn empty() -> Self {
        Self::from_documents(Vec::new())
    }

    /// Loaded documents, in source order. Triggers the load on first call.
    pub fn documents(&self) -> &[TopicDocument] {
        self.entries.get_or_init(|| load_first(&self.sources))
    }

    pub fn len(&self) -> usize {
        self.documents().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents().is_empty()
    }

    /// Find the document for a term.
    ///
    /// Tiers, each short-circuiting: title starts with the term, title
    /// contains the term, table-of-contents title contains the term.
    pub fn lookup(&self, term: &str) -> Option<&TopicDocument> {
        let q = term.trim().to_lowercase();
        if q.is_empty() {
            return None;
        }
        let docs = self.documents();

        docs.iter()
            .find(|d| d.title.to_lowercase().starts_with(&q))
            .or_else(|| docs.iter().find(|d| d.title.to_lowercase().contains(&q)))
            .or_else(|| {
                docs.iter().find(|d| {
                    d.toc_title
                        .as_deref()
                        .is_some_and(|toc| toc.to_lowercase().contains(&q))
                })
            })
    }

    pub fn lookup_id(&self, term: &str) -> Option<i64> {
        self.lookup(term).map(|d| d.document_id)
    }
}

fn load_first(sources: &[PathBuf]) -> Vec<TopicDocument> {
    for path in sources {
        if !path.exists() {
            continue;
        }
        match read_documents(path) {
            Ok(docs) => {
                debug!(path = %path.display(), count = docs.len(), "loaded topic index");
                return docs;
            }
            Err(e) => {
                warn!(path = %path.display(), "topic index unusable: {:#}", e);
            }
        }
    }
    Vec::new()
}

/// Decode a JSON array of topic documents.
pub fn read_documents(path: &Path) -> Result<Vec<TopicDocument>> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read topic index: {}", path.display()))?;
    serde_json::from_slice(&data)
        .with_context(|| format!("Failed to decode topic index: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn doc(id: i64, title: &str, toc: Option<&str>) -> TopicDocument {
        TopicDocument {
            document_id: id,
            title: title.to_string(),
            toc_title: toc.map(str::to_string),
        }
    }

    fn sample() -> TopicIndex {
        TopicIndex::from_documents(vec![
            doc(1, "Self-Respect", None),
            doc(2, "Respect", Some("Honor")),
            doc(3, "Abraham", Some("Friend of God")),
            doc(4, "Grace", None),
        ])
    }

    #[test]
    fn test_prefix_beats_contains() {
        // "Self-Respect" comes first but only contains the term
        assert_eq!(sample().lookup_id("respect"), Some(2));
    }

    #[test]
    fn test_contains_when_no_prefix() {
        assert_eq!(sample().lookup_id("spec"), Some(1));
    }

    #[test]
    fn test_toc_title_last() {
        assert_eq!(sample().lookup_id("friend"), Some(3));
        assert_eq!(sample().lookup_id("honor"), Some(2));
    }

    #[test]
    fn test_case_folded_and_trimmed() {
        assert_eq!(sample().lookup_id("  GRACE "), Some(4));
    }

    #[test]
    fn test_empty_term_never_matches() {
        assert_eq!(sample().lookup_id(""), None);
        assert_eq!(sample().lookup_id("   "), None);
    }

    #[test]
    fn test_miss() {
        assert_eq!(sample().lookup_id("zebra"), None);
    }

    #[test]
    fn test_load_falls_back_to_second_source() {
        let tmp = TempDir::new().unwrap();
        let bundled = tmp.path().join("missing.json");
        let fallback = tmp.path().join("Insight.json");
        fs::write(
            &fallback,
            r#"[{"MepsDocumentId": 1200000001, "Title": "Respect", "TocTitle": null},
                {"MepsDocumentId": 1200000002, "Title": "Faith"}]"#,
        )
        .unwrap();

        let index = TopicIndex::new(vec![bundled, fallback]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup_id("faith"), Some(1200000002));
    }

    #[test]
    fn test_malformed_source_skipped() {
        let tmp = TempDir::new().unwrap();
        let broken = tmp.path().join("broken.json");
        let good = tmp.path().join("good.json");
        fs::write(&broken, "{ not json").unwrap();
        fs::write(&good, r#"[{"MepsDocumentId": 7, "Title": "Love"}]"#).unwrap();

        let index = TopicIndex::new(vec![broken, good]);
        assert_eq!(index.lookup_id("love"), Some(7));
    }

    #[test]
    fn test_no_sources_is_empty() {
        let tmp = TempDir::new().unwrap();
        let index = TopicIndex::new(vec![tmp.path().join("nope.json")]);
        assert!(index.is_empty());
        assert_eq!(index.lookup_id("respect"), None);
    }

    #[test]
    fn test_load_happens_once() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Insight.json");
        fs::write(&path, r#"[{"MepsDocumentId": 1, "Title": "Hope"}]"#).unwrap();

        let index = TopicIndex::new(vec![path.clone()]);
        assert_eq!(index.lookup_id("hope"), Some(1));

        // later changes on disk are not observed
        fs::write(&path, "[]").unwrap();
        assert_eq!(index.lookup_id("hope"), Some(1));
    }

    #[test]
    fn test_concurrent_first_access() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Insight.json");
        fs::write(&path, r#"[{"MepsDocumentId": 9, "Title": "Peace"}]"#).unwrap();
        let index = TopicIndex::new(vec![path]);

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8).map(|_| s.spawn(|| index.lookup_id("peace"))).collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), Some(9));
            }
        });
    }
}
