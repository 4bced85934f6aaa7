//! Plain-text body extraction from raw email bytes

use regex::Regex;
use tracing::debug;

static TAG_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static LINE_BREAK_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

static PARAGRAPH_END_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?i)</p>").unwrap());

static DIV_END_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?i)</div>").unwrap());

static BLANK_RUN_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Best-effort plain text from a raw RFC 5322 message.
///
/// Prefers the first `text/plain` part, flattens the first `text/html` part
/// when no plain text exists, and falls back to the raw bytes themselves
/// when structure parsing yields nothing. The result is normalized for the
/// classifier: Unix line endings, outer whitespace trimmed, a single pair
/// of wrapping double quotes removed.
#[must_use]
pub fn extract_body(raw: &[u8]) -> String {
    let mut body = mime_text(raw);

    if body.trim().is_empty() {
        debug!("No usable MIME part, treating raw input as the body");
        body = String::from_utf8_lossy(raw).into_owned();
    }

    if TAG_REGEX.is_match(&body) {
        body = html_to_text(&body);
    }

    let mut body = body.trim();
    if body.len() >= 2 && body.starts_with('"') && body.ends_with('"') {
        body = body[1..body.len() - 1].trim();
    }

    body.replace("\r\n", "\n")
}

/// First text/plain part, or the first text/html part flattened
fn mime_text(raw: &[u8]) -> String {
    let Ok(parsed) = mailparse::parse_mail(raw) else {
        return String::new();
    };

    let mut text = String::new();
    let mut html: Option<String> = None;
    collect_parts(&parsed, &mut text, &mut html);

    if text.trim().is_empty() {
        html.map_or_else(String::new, |markup| html_to_text(&markup))
    } else {
        text
    }
}

fn collect_parts(part: &mailparse::ParsedMail, text: &mut String, html: &mut Option<String>) {
    if part.subparts.is_empty() {
        let content_type = part.ctype.mimetype.to_lowercase();
        if let Ok(body) = part.get_body() {
            if content_type.contains("text/html") {
                if html.is_none() {
                    *html = Some(body);
                }
            } else if content_type.contains("text/plain") && text.is_empty() {
                *text = body;
            }
        }
        return;
    }

    for sub in &part.subparts {
        collect_parts(sub, text, html);
    }
}

/// Flatten markup to text, keeping the line structure block elements imply
fn html_to_text(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let text = html.replace("\r\n", "\n");
    let text = LINE_BREAK_REGEX.replace_all(&text, "\n");
    let text = PARAGRAPH_END_REGEX.replace_all(&text, "\n\n");
    let text = DIV_END_REGEX.replace_all(&text, "\n");
    let text = TAG_REGEX.replace_all(&text, "");

    // Decode HTML entities
    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace('\r', "\n");

    BLANK_RUN_REGEX.replace_all(&text, "\n\n").trim().to_string()
}
