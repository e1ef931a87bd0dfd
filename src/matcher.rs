//! Ordered recognizer chain.
//!
//! Each rule inspects the normalized command and either passes, resolves it
//! to a [`ParsedReference`], or claims it without being able to resolve it.
//! Rules run in a fixed priority order and the first rule that does not pass
//! ends the chain:
//!
//! | # | Rule | Syntax |
//! |---|------|--------|
//! | 1 | help | `help` |
//! | 2 | topic | `i <term>` |
//! | 3 | daily text | `dt`, `daily`, `daily text`, `dailytext` |
//! | 4 | watchtower | `wt <month> <yyyy>` |
//! | 5 | search | `wol <term>` |
//! | 6 | bible | `<book> [<chapter>[:<verse>]]` |

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::books;
use crate::models::ParsedReference;
use crate::topics::TopicIndex;

static TOPIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^i\s+(.+)$").unwrap());

static WATCHTOWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^wt\s+([a-z]{2,})\s+([0-9]{4})$").unwrap());

static SEARCH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^wol\s+(.+)$").unwrap());

static BIBLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([1-3]?\s?[a-z\s]+)(?:\s+([0-9]+)(?::([0-9]+))?)?$").unwrap()
});

const DAILY_TEXT_TOKENS: [&str; 4] = ["dt", "daily", "daily text", "dailytext"];

/// Outcome of a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleResult {
    /// Syntax not recognised; try the next rule.
    Pass,
    /// Syntax recognised but the book, month or topic could not be
    /// resolved. Stops the chain with no result.
    Unresolved,
    Resolved(ParsedReference),
}

/// Read-only inputs shared by every rule.
#[derive(Clone, Copy)]
pub struct MatchContext<'a> {
    pub topics: &'a TopicIndex,
    pub today: NaiveDate,
}

type Rule = fn(&str, &MatchContext<'_>) -> RuleResult;

const RULES: [(&str, Rule); 6] = [
    ("help", match_help),
    ("topic", match_topic),
    ("daily-text", match_daily_text),
    ("watchtower", match_watchtower),
    ("search", match_search),
    ("bible", match_bible),
];

/// Trim surrounding whitespace and lowercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Run the chain over already-normalized input.
pub fn resolve(input: &str, ctx: &MatchContext<'_>) -> Option<ParsedReference> {
    if input.is_empty() {
        return None;
    }
    for (name, rule) in RULES {
        match rule(input, ctx) {
            RuleResult::Pass => continue,
            RuleResult::Unresolved => {
                debug!(rule = name, input, "recognised but unresolved");
                return None;
            }
            RuleResult::Resolved(reference) => {
                debug!(rule = name, input, ?reference, "resolved");
                return Some(reference);
            }
        }
    }
    None
}

fn match_help(input: &str, _ctx: &MatchContext<'_>) -> RuleResult {
    if input == "help" {
        RuleResult::Resolved(ParsedReference::Help)
    } else {
        RuleResult::Pass
    }
}

fn match_topic(input: &str, ctx: &MatchContext<'_>) -> RuleResult {
    let Some(caps) = TOPIC_RE.captures(input) else {
        return RuleResult::Pass;
    };
    match ctx.topics.lookup_id(&caps[1]) {
        Some(document_id) => RuleResult::Resolved(ParsedReference::Topic { document_id }),
        None => RuleResult::Unresolved,
    }
}

fn match_daily_text(input: &str, ctx: &MatchContext<'_>) -> RuleResult {
    if !DAILY_TEXT_TOKENS.contains(&input) {
        return RuleResult::Pass;
    }
    RuleResult::Resolved(ParsedReference::DailyText {
        iso_date: ctx.today.format("%Y%m%d").to_string(),
    })
}

fn match_watchtower(input: &str, _ctx: &MatchContext<'_>) -> RuleResult {
    let Some(caps) = WATCHTOWER_RE.captures(input) else {
        return RuleResult::Pass;
    };
    match books::resolve_month(&caps[1]) {
        Some(month_code) => RuleResult::Resolved(ParsedReference::WatchtowerIssue {
            year: caps[2].to_string(),
            month_code,
        }),
        None => RuleResult::Unresolved,
    }
}

fn match_search(input: &str, _ctx: &MatchContext<'_>) -> RuleResult {
    let Some(caps) = SEARCH_RE.captures(input) else {
        return RuleResult::Pass;
    };
    RuleResult::Resolved(ParsedReference::FullTextSearch {
        term: caps[1].trim().to_string(),
    })
}

fn match_bible(input: &str, _ctx: &MatchContext<'_>) -> RuleResult {
    let Some(caps) = BIBLE_RE.captures(input) else {
        return RuleResult::Pass;
    };
    let fragment = caps[1].trim().replace('.', "");
    let Some(book) = books::resolve_book(&fragment) else {
        return RuleResult::Unresolved;
    };
    // Overlong digit runs count as unspecified.
    let number = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(0)
    };
    RuleResult::Resolved(ParsedReference::BibleVerse {
        book: book.ordinal,
        chapter: number(2),
        verse: number(3),
    })
}
