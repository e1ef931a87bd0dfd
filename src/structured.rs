//! Structured requests from front-ends that already know the book.
//!
//! These bypass the text grammar but are clamped before rendering:
//! chapter to `0..=chapters(book)`, verse to `0..=MAX_VERSE`.

use serde::Deserialize;
use url::Url;

use crate::books::BibleBook;
use crate::links;
use crate::models::ParsedReference;

/// Upper bound for verses; no per-chapter verse counts are kept.
pub const MAX_VERSE: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Bible,
    Watchtower,
    Insight,
    Wol,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StructuredRequest {
    #[serde(default)]
    pub source: Source,
    /// Book ordinal, 1..=66.
    pub book: Option<u8>,
    pub chapter: Option<i64>,
    pub verse: Option<i64>,
}

impl StructuredRequest {
    pub fn bible(book: u8, chapter: Option<i64>, verse: Option<i64>) -> Self {
        Self {
            source: Source::Bible,
            book: Some(book),
            chapter,
            verse,
        }
    }

    /// Only bible requests with a known book resolve.
    pub fn resolve(&self) -> Option<ParsedReference> {
        match self.source {
            Source::Bible => {}
            Source::Watchtower | Source::Insight | Source::Wol => return None,
        }
        let book = BibleBook::from_ordinal(self.book?)?;
        Some(ParsedReference::BibleVerse {
            book: book.ordinal,
            chapter: clamp(self.chapter.unwrap_or(0), book.chapters),
            verse: clamp(self.verse.unwrap_or(0), MAX_VERSE),
        })
    }

    pub fn build(&self) -> Option<Url> {
        links::build(&self.resolve()?)
    }
}

fn clamp(value: i64, max: u32) -> u32 {
    // the clamp keeps the value within u32
    value.clamp(0, i64::from(max)) as u32
}
