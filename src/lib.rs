//! # Scripture Spotlight
//!
//! Resolves short free-form commands into JW Library deep links.
//!
//! A command such as `John 3:16`, `wt sep 2025` or `i respect` is trimmed,
//! lowercased and run through an ordered chain of recognizers. The first
//! recognizer that claims the command produces a single
//! [`models::ParsedReference`], which is rendered into one fixed link
//! template.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌─────────────┐   ┌──────────┐   ┌──────────┐
//! │  raw     │──▶│ normalize + │──▶│  links   │──▶│  Opener  │
//! │  text    │   │ rule chain  │   │ (Url)    │   │ (OS)     │
//! └──────────┘   └──────┬──────┘   └──────────┘   └──────────┘
//!                       │
//!              ┌────────┴────────┐
//!              ▼                 ▼
//!        ┌──────────┐      ┌──────────┐
//!        │  books   │      │  topics  │
//!        │ (static) │      │ (lazy)   │
//!        └──────────┘      └──────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use scripture_spotlight::{decoder::Decoder, topics::TopicIndex};
//!
//! let decoder = Decoder::new(Arc::new(TopicIndex::empty()));
//! let url = decoder.decode("John 3:16").unwrap();
//! assert!(url.as_str().contains("bible=43003016"));
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`books`] | Canonical book and month tables |
//! | [`config`] | TOML configuration parsing |
//! | [`decoder`] | Normalize, match and render in one call |
//! | [`links`] | Link templates |
//! | [`matcher`] | Ordered recognizer chain |
//! | [`models`] | Core data types |
//! | [`open`] | Opening links with the OS |
//! | [`structured`] | Pre-parsed book/chapter/verse requests |
//! | [`topics`] | Insight topic index |

pub mod books;
pub mod config;
pub mod decoder;
pub mod links;
pub mod matcher;
pub mod models;
pub mod open;
pub mod structured;
pub mod topics;
