//! Heuristic rules for signature, contact, and quote detection

use regex::Regex;

/// Word bound for the short-line rules; salutations and contact lines are
/// characteristically terse.
pub const SHORT_LINE_MAX_WORDS: usize = 4;

/// Character bound paired with [`SHORT_LINE_MAX_WORDS`]
pub const SHORT_LINE_MAX_CHARS: usize = 60;

/// Word bound for the structural contact cue
pub const CONTACT_MAX_WORDS: usize = 5;

/// Minimum words for a line inside a signature block to requalify as prose
pub const REQUALIFY_MIN_WORDS: usize = 7;

/// Closing salutations matched against the whole line, lowercased and
/// stripped of surrounding punctuation
const SIGNATURE_CLOSINGS: &[&str] = &[
    "best",
    "best regards",
    "best wishes",
    "thanks",
    "thank you",
    "thanks a lot",
    "regards",
    "kind regards",
    "warm regards",
    "cheers",
    "sincerely",
    "yours truly",
    "yours sincerely",
    "many thanks",
];

/// Prefixes of auto-appended mobile and webmail signatures
const SIGNATURE_MARKER_PREFIXES: &[&str] = &[
    "sent from my",
    "sent from mail for",
    "sent from outlook for",
    "sent from windows",
    "get outlook for",
    "sent with my",
];

const CONTACT_KEYWORDS: &[&str] = &[
    "tel", "phone", "mobile", "cell", "fax", "email", "www", "http", "linkedin",
];

const QUOTE_KEYWORDS: &[&str] = &["original message", "forwarded message", "forwarded by"];

/// Header prefixes that show up inside forwarded or quoted threads
const EMAIL_HEADER_PREFIXES: &[&str] = &[
    "from ",
    "from:",
    "to:",
    "subject:",
    "date:",
    "message-id",
    "in-reply-to",
    "references:",
    "mime-version",
    "content-type",
];

static EMAIL_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap()
});

static PHONE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\+?\d[\d\s().-]{6,}\d").unwrap());

/// Lowercase a line and strip surrounding punctuation, so "Best," and
/// "best" compare equal
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
        .to_lowercase()
}

/// Whether the line is terse enough for the probabilistic short-line rule
#[must_use]
pub fn is_short(text: &str) -> bool {
    text.split_whitespace().count() <= SHORT_LINE_MAX_WORDS
        && text.chars().count() <= SHORT_LINE_MAX_CHARS
}

/// Closing salutation or auto-signature marker
#[must_use]
pub fn is_signature_opening(text: &str) -> bool {
    let normalized = normalize(text);
    if SIGNATURE_CLOSINGS.contains(&normalized.as_str()) {
        return true;
    }
    SIGNATURE_MARKER_PREFIXES
        .iter()
        .any(|prefix| normalized.starts_with(prefix))
}

/// Structural contact-card shape: phone number, email address, or a
/// pipe-delimited name/title layout
#[must_use]
pub fn is_contact_pattern(text: &str) -> bool {
    if EMAIL_REGEX.is_match(text) || PHONE_REGEX.is_match(text) {
        return true;
    }
    text.contains('|') && text.chars().count() <= 120
}

/// Broader contact test used when deciding whether a line inside a
/// signature block requalifies as prose. Adds the keyword heuristic, which
/// is too aggressive to open signature mode on its own.
#[must_use]
pub fn looks_like_contact_info(text: &str) -> bool {
    if is_contact_pattern(text) {
        return true;
    }
    let lower = text.to_lowercase();
    text.chars().count() <= 80 && CONTACT_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Quote marker, separator run, "On <date>, <name> wrote:" header, or a
/// forwarded-message marker
#[must_use]
pub fn is_quote_delimiter(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    if trimmed.starts_with('>') || trimmed == "--" || trimmed == "---" {
        return true;
    }
    let lower = trimmed.to_lowercase();
    if QUOTE_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
        return true;
    }
    if lower.starts_with("on ") && lower.contains(" wrote:") {
        return true;
    }
    is_separator_run(trimmed)
}

/// Header line embedded in the body, as left behind by forwards and replies
#[must_use]
pub fn is_embedded_header(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    EMAIL_HEADER_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}

/// Three or more repeats of a single separator character
fn is_separator_run(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    matches!(first, '-' | '_' | '·' | '=' | '*' | '#')
        && text.chars().count() >= 3
        && chars.all(|c| c == first)
}
