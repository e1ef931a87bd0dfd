//! Deep-link rendering.
//!
//! Every [`ParsedReference`] variant maps to one fixed template. All
//! JW Library links share the `srcid=jwlshare&wtlocale=E&prefer=lang`
//! parameter set.

use url::Url;

use crate::models::ParsedReference;

pub const APP_SCHEME: &str = "jwlibrary";
pub const HELP_URL: &str = "https://judes.club/app/scripture-spotlight";
pub const SEARCH_BASE: &str = "https://wol.jw.org/en/search/s/r1/lp-e";
pub const CONTENT_BASE: &str = "https://www.jw.org";

const SHARE_PARAMS: &str = "srcid=jwlshare&wtlocale=E&prefer=lang";

/// Render a reference as its link text.
pub fn render(reference: &ParsedReference) -> String {
    match reference {
        ParsedReference::Help => HELP_URL.to_string(),
        ParsedReference::Topic { document_id } => {
            format!("{APP_SCHEME}:///finder?{SHARE_PARAMS}&docid={document_id}")
        }
        ParsedReference::DailyText { iso_date } => format!(
            "{CONTENT_BASE}/finder?{SHARE_PARAMS}&alias=daily-text&date={iso_date}"
        ),
        ParsedReference::WatchtowerIssue { year, month_code } => {
            let yy = &year[year.len().saturating_sub(2)..];
            format!("{APP_SCHEME}:///finder?{SHARE_PARAMS}&pub=wp{yy}&issue={year}{month_code}")
        }
        ParsedReference::FullTextSearch { term } => format!(
            "{SEARCH_BASE}?q={}&p=par&r=occ&st=a",
            term.replace('#', "%23")
        ),
        ParsedReference::BibleVerse {
            book,
            chapter,
            verse,
        } => format!(
            "{APP_SCHEME}:///finder?{SHARE_PARAMS}&bible={book:02}{chapter:03}{verse:03}&pub=nwtsty"
        ),
    }
}

/// Render and parse a reference into a [`Url`].
///
/// Returns `None` only if the rendered text is not a valid URL.
pub fn build(reference: &ParsedReference) -> Option<Url> {
    Url::parse(&render(reference)).ok()
}
