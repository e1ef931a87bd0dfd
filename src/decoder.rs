//! Free-text command decoding: normalize, match, render.

use chrono::{Local, NaiveDate};
use std::sync::Arc;
use url::Url;

use crate::links;
use crate::matcher::{self, MatchContext};
use crate::models::ParsedReference;
use crate::topics::TopicIndex;

/// Turns raw commands into deep links.
///
/// Holds a shared handle to the topic index so one index, loaded at most
/// once, can back any number of decoders.
#[derive(Clone)]
pub struct Decoder {
    topics: Arc<TopicIndex>,
}

impl Decoder {
    pub fn new(topics: Arc<TopicIndex>) -> Self {
        Self { topics }
    }

    pub fn topics(&self) -> &TopicIndex {
        &self.topics
    }

    /// Decode using today's local date for the daily text.
    pub fn decode(&self, raw: &str) -> Option<Url> {
        self.decode_on(raw, Local::now().date_naive())
    }

    pub fn decode_on(&self, raw: &str, today: NaiveDate) -> Option<Url> {
        let reference = self.parse_on(raw, today)?;
        links::build(&reference)
    }

    /// The structured reference for `raw`, without rendering it.
    pub fn parse_on(&self, raw: &str, today: NaiveDate) -> Option<ParsedReference> {
        let ctx = MatchContext {
            topics: self.topics.as_ref(),
            today,
        };
        matcher::resolve(&matcher::normalize(raw), &ctx)
    }
}
