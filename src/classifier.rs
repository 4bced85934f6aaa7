//! Signature detection state machine
//!
//! A single forward pass over the line sequence: no line's classification
//! depends on anything after it, and earlier decisions are never rewritten.

use crate::error::{Result, ScrubError};
use crate::line::{Line, split_lines};
use crate::rules;
use crate::tagger::{PosLabel, PosTagger};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Scanner mode; starts in conversation, never terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Conversation,
    Signature,
}

/// Why a line was kept or dropped.
///
/// Diagnostic only; downstream behavior depends on `keep` alone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Reason {
    /// Quoted-reply or forwarded-message marker, always preserved
    QuoteDelimiter,
    /// Closing salutation or auto-signature marker
    SignatureOpening,
    /// Structural contact-card line
    ContactPattern,
    /// Dropped while signature mode was active
    SignatureContinuation,
    /// Plain conversational content
    Ordinary,
}

/// Per-line keep/drop decision
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassificationResult {
    pub line_index: usize,
    pub keep: bool,
    pub reason: Reason,
}

impl ClassificationResult {
    const fn kept(line_index: usize, reason: Reason) -> Self {
        Self {
            line_index,
            keep: true,
            reason,
        }
    }

    const fn dropped(line_index: usize, reason: Reason) -> Self {
        Self {
            line_index,
            keep: false,
            reason,
        }
    }
}

/// One conversation-mode opening cue: pattern, tag, and whether the cue
/// line itself survives
struct OpeningCue {
    reason: Reason,
    keep: bool,
    matches: fn(&Line<'_>) -> bool,
}

fn salutation_cue(line: &Line<'_>) -> bool {
    rules::is_signature_opening(line.trimmed())
}

fn contact_cue(line: &Line<'_>) -> bool {
    line.word_count() <= rules::CONTACT_MAX_WORDS && rules::is_contact_pattern(line.trimmed())
}

/// Ordered cue table consulted in conversation mode; first match wins. The
/// salutation line is part of the message, a contact line is pure noise.
const OPENING_CUES: &[OpeningCue] = &[
    OpeningCue {
        reason: Reason::SignatureOpening,
        keep: true,
        matches: salutation_cue,
    },
    OpeningCue {
        reason: Reason::ContactPattern,
        keep: false,
        matches: contact_cue,
    },
];

/// Mutable scan state, owned by one [`classify`] call and discarded at the
/// end of it
struct ScanState {
    mode: Mode,
    lines_since_signature_start: usize,
}

impl ScanState {
    const fn new() -> Self {
        Self {
            mode: Mode::Conversation,
            lines_since_signature_start: 0,
        }
    }

    fn enter_signature(&mut self) {
        self.mode = Mode::Signature;
        self.lines_since_signature_start = 0;
    }

    fn leave_signature(&mut self, index: usize) {
        if self.mode == Mode::Signature {
            debug!(
                "Signature block closed at line {index} after {} dropped lines",
                self.lines_since_signature_start
            );
        }
        self.mode = Mode::Conversation;
    }

    fn step(
        &mut self,
        index: usize,
        line: &Line<'_>,
        threshold: f64,
        tagger: &dyn PosTagger,
    ) -> ClassificationResult {
        let text = line.trimmed();

        // Quoted threads restart scanning regardless of mode
        if rules::is_quote_delimiter(text) || rules::is_embedded_header(text) {
            self.leave_signature(index);
            return ClassificationResult::kept(index, Reason::QuoteDelimiter);
        }

        if self.mode == Mode::Signature {
            if line.word_count() >= rules::REQUALIFY_MIN_WORDS
                && !rules::looks_like_contact_info(text)
            {
                self.leave_signature(index);
                return ClassificationResult::kept(index, Reason::Ordinary);
            }
            self.lines_since_signature_start += 1;
            return ClassificationResult::dropped(index, Reason::SignatureContinuation);
        }

        // Blank lines alone never start or end a signature block
        if line.is_blank() {
            return ClassificationResult::kept(index, Reason::Ordinary);
        }

        for cue in OPENING_CUES {
            if (cue.matches)(line) {
                self.enter_signature();
                return ClassificationResult {
                    line_index: index,
                    keep: cue.keep,
                    reason: cue.reason,
                };
            }
        }

        if rules::is_short(text) {
            match tagger.tag(text) {
                Ok(tag)
                    if matches!(tag.label, PosLabel::SalutationLike | PosLabel::ContactLike)
                        && tag.confidence >= threshold =>
                {
                    self.enter_signature();
                    return ClassificationResult::dropped(index, Reason::SignatureOpening);
                }
                Ok(_) => {}
                // Fail open toward preserving content
                Err(err) => warn!("Keeping line {index}, no POS signal: {err}"),
            }
        }

        ClassificationResult::kept(index, Reason::Ordinary)
    }
}

/// Classify every line of a body, in order.
///
/// Pure in its inputs plus the tagger's outputs; deterministic given a
/// deterministic tagger. `threshold` is the minimum tagger confidence at
/// which an ambiguous short line is treated as signature content — higher
/// keeps more, lower drops more.
pub fn classify(
    lines: &[Line<'_>],
    threshold: f64,
    tagger: &dyn PosTagger,
) -> Result<Vec<ClassificationResult>> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ScrubError::InvalidThreshold(threshold));
    }

    let mut state = ScanState::new();
    let results: Vec<ClassificationResult> = lines
        .iter()
        .enumerate()
        .map(|(index, line)| state.step(index, line, threshold, tagger))
        .collect();

    let dropped = results.iter().filter(|result| !result.keep).count();
    debug!("Classified {} lines, dropped {dropped}", results.len());

    Ok(results)
}

/// Split a body, classify it, and reassemble the kept lines.
///
/// Terminators come through untouched, so the output is a strict
/// sub-sequence of the input's lines.
pub fn scrub_body(body: &str, threshold: f64, tagger: &dyn PosTagger) -> Result<String> {
    let lines = split_lines(body);
    let results = classify(&lines, threshold, tagger)?;

    Ok(results
        .iter()
        .filter(|result| result.keep)
        .map(|result| lines[result.line_index].raw())
        .collect())
}
