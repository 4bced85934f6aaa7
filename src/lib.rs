// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Signature Scrubber
//!
//! A single-pass line classifier that removes trailing signature blocks and
//! contact-card clutter from plaintext email bodies while preserving
//! conversational content, quoted threads, and blank-line structure.
//!
//! # Features
//!
//! - Byte-exact line splitting, terminators included
//! - Two-mode scanner with a quote/forward delimiter override
//! - Data-driven heuristics for salutations, contact lines, and quoted threads
//! - Injectable part-of-speech signal for ambiguous short lines
//! - Plain-text body extraction from raw RFC 5322 messages
//!
//! # Example
//!
//! ```rust
//! use email_scrub::{LexiconTagger, scrub_body};
//!
//! let body = "See you tomorrow.\n\nBest,\nJane Doe\n555-0100 | jane@example.org\n";
//! let cleaned = scrub_body(body, 0.9, &LexiconTagger).unwrap();
//!
//! assert_eq!(cleaned, "See you tomorrow.\n\nBest,\n");
//! ```

mod body;
mod classifier;
mod convert;
mod error;
mod line;
mod rules;
mod tagger;

pub use body::extract_body;
pub use classifier::{ClassificationResult, Reason, classify, scrub_body};
pub use convert::scrub_file;
pub use error::{Result, ScrubError, TaggerUnavailable};
pub use line::{Line, split_lines};
pub use rules::{
    is_contact_pattern, is_embedded_header, is_quote_delimiter, is_short, is_signature_opening,
    looks_like_contact_info,
};
pub use tagger::{LexiconTagger, PosLabel, PosTag, PosTagger};
