//! Core data types produced and consumed by the decoder.
//!
//! A [`ParsedReference`] is built transiently for each decode call and is
//! handed straight to [`crate::links::build`]; nothing here is persisted.

use serde::Deserialize;

/// One topical document from the Insight index.
///
/// Field names follow the exported JSON (`MepsDocumentId`, `Title`,
/// `TocTitle`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopicDocument {
    #[serde(rename = "MepsDocumentId")]
    pub document_id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "TocTitle", default)]
    pub toc_title: Option<String>,
}

/// The structured intent recognised from a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedReference {
    Help,
    Topic {
        document_id: i64,
    },
    /// `iso_date` is `YYYYMMDD`.
    DailyText {
        iso_date: String,
    },
    /// `year` is four digits, `month_code` is `01`..`12`.
    WatchtowerIssue {
        year: String,
        month_code: &'static str,
    },
    FullTextSearch {
        term: String,
    },
    /// Chapter and verse use `0` for "unspecified".
    BibleVerse {
        book: u8,
        chapter: u32,
        verse: u32,
    },
}
