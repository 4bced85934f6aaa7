//! Part-of-speech signal for ambiguous short lines

use crate::error::TaggerUnavailable;
use serde::{Deserialize, Serialize};

/// Coarse grammatical role of a short line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PosLabel {
    /// Greeting or closing salutation
    SalutationLike,
    /// Proper-noun dominant, contact-card flavored
    ContactLike,
    /// Ordinary sentence fragment
    Ordinary,
}

/// Label plus confidence in [0, 1]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PosTag {
    pub label: PosLabel,
    pub confidence: f64,
}

/// Capability consumed by the classifier for borderline short lines.
///
/// Injected rather than baked in so the backing model is swappable and
/// tests can script deterministic outputs.
pub trait PosTagger {
    fn tag(&self, text: &str) -> Result<PosTag, TaggerUnavailable>;
}

/// Verbs and auxiliaries common in conversational English; lines made of
/// anything else score as non-prose
const VERB_LEXICON: &[&str] = &[
    "am", "are", "is", "was", "were", "be", "been", "being", "do", "does", "did", "have", "has",
    "had", "will", "would", "can", "could", "shall", "should", "may", "might", "must", "need",
    "want", "know", "think", "see", "get", "got", "make", "made", "let", "call", "send", "sent",
    "please", "attached", "find", "works", "looks",
];

const GREETING_WORDS: &[&str] = &["hi", "hello", "hey", "dear", "greetings", "morning"];

/// Lexicon-backed default tagger.
///
/// Confidence is the fraction of tokens outside a small verb lexicon, so a
/// verbless "Jane Doe" scores 1.0 and "That works for me" scores low.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl PosTagger for LexiconTagger {
    #[allow(clippy::cast_precision_loss)]
    fn tag(&self, text: &str) -> Result<PosTag, TaggerUnavailable> {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|token| {
                token
                    .trim_matches(|c: char| c.is_ascii_punctuation())
                    .to_lowercase()
            })
            .filter(|token| !token.is_empty())
            .collect();

        if tokens.is_empty() {
            return Ok(PosTag {
                label: PosLabel::Ordinary,
                confidence: 0.0,
            });
        }

        let verbless = tokens
            .iter()
            .filter(|token| !VERB_LEXICON.contains(&token.as_str()))
            .count() as f64
            / tokens.len() as f64;

        let capitalized = text
            .split_whitespace()
            .filter(|token| token.chars().next().is_some_and(char::is_uppercase))
            .count();

        let tag = if GREETING_WORDS.contains(&tokens[0].as_str()) {
            // Greetings open a message as often as they close one, so the
            // signal alone can never clear a conservative threshold.
            PosTag {
                label: PosLabel::SalutationLike,
                confidence: verbless.min(0.5),
            }
        } else if capitalized >= 2 && tokens.len() <= 4 {
            PosTag {
                label: PosLabel::ContactLike,
                confidence: verbless,
            }
        } else {
            PosTag {
                label: PosLabel::Ordinary,
                confidence: 1.0 - verbless,
            }
        };

        Ok(tag)
    }
}
