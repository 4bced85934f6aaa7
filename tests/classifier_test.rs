use email_scrub::{
    ClassificationResult, LexiconTagger, PosLabel, PosTag, PosTagger, Reason, ScrubError,
    TaggerUnavailable, classify, scrub_body, split_lines,
};

/// Returns the same label and confidence for every line it is asked about
struct ScriptedTagger {
    label: PosLabel,
    confidence: f64,
}

impl PosTagger for ScriptedTagger {
    fn tag(&self, _text: &str) -> Result<PosTag, TaggerUnavailable> {
        Ok(PosTag {
            label: self.label,
            confidence: self.confidence,
        })
    }
}

struct OfflineTagger;

impl PosTagger for OfflineTagger {
    fn tag(&self, _text: &str) -> Result<PosTag, TaggerUnavailable> {
        Err(TaggerUnavailable("model not loaded".into()))
    }
}

#[test]
fn test_signature_block_removed() {
    let body = "Hi there,\n\
                \n\
                Body text here.\n\
                \n\
                Best,\n\
                Jane Doe\n\
                Jane Doe | Example Org\n\
                555-0100 | jane@example.org\n";

    let cleaned = scrub_body(body, 0.9, &LexiconTagger).unwrap();

    assert_eq!(cleaned, "Hi there,\n\nBody text here.\n\nBest,\n");
}

#[test]
fn test_reason_tags_for_signature_block() {
    let lines = split_lines(
        "Hi there,\n\nBody text here.\n\nBest,\nJane Doe\nJane Doe | Example Org\n555-0100 | jane@example.org\n",
    );
    let results = classify(&lines, 0.9, &LexiconTagger).unwrap();

    let expected = [
        (true, Reason::Ordinary),
        (true, Reason::Ordinary),
        (true, Reason::Ordinary),
        (true, Reason::Ordinary),
        (true, Reason::SignatureOpening),
        (false, Reason::SignatureContinuation),
        (false, Reason::SignatureContinuation),
        (false, Reason::SignatureContinuation),
    ];
    for (index, (keep, reason)) in expected.into_iter().enumerate() {
        assert_eq!(results[index].line_index, index);
        assert_eq!(results[index].keep, keep, "keep mismatch at line {index}");
        assert_eq!(results[index].reason, reason, "reason mismatch at line {index}");
    }
}

#[test]
fn test_quote_header_reopens_conversation() {
    let body = "Best,\n\
                Jane\n\
                On Mon, Jan 1, 2024, Jane Doe wrote:\n\
                > The quoted thread stays untouched.\n";

    let lines = split_lines(body);
    let results = classify(&lines, 0.9, &LexiconTagger).unwrap();

    assert_eq!(results[2].reason, Reason::QuoteDelimiter);
    assert!(results[2].keep);
    assert_eq!(results[3].reason, Reason::QuoteDelimiter);
    assert!(results[3].keep);

    let cleaned = scrub_body(body, 0.9, &LexiconTagger).unwrap();
    assert_eq!(
        cleaned,
        "Best,\nOn Mon, Jan 1, 2024, Jane Doe wrote:\n> The quoted thread stays untouched.\n"
    );
}

#[test]
fn test_clean_input_passes_through() {
    let body = "The deployment finished without errors last night.\n\
                \n\
                We should review the rollout plan before Friday.\n\
                Let me know if the staging numbers look right.\n";

    let cleaned = scrub_body(body, 0.9, &LexiconTagger).unwrap();
    assert_eq!(cleaned, body);

    let results = classify(&split_lines(body), 0.9, &LexiconTagger).unwrap();
    assert!(results.iter().all(|result| result.keep));
}

#[test]
fn test_mobile_marker_opens_signature() {
    let body = "Call me when free.\n\
                Sent from my iPhone\n\
                Jane Doe\n";

    let lines = split_lines(body);
    let results = classify(&lines, 0.9, &LexiconTagger).unwrap();

    assert!(results[1].keep);
    assert_eq!(results[1].reason, Reason::SignatureOpening);
    assert!(!results[2].keep);

    let cleaned = scrub_body(body, 0.9, &LexiconTagger).unwrap();
    assert_eq!(cleaned, "Call me when free.\nSent from my iPhone\n");
}

#[test]
fn test_threshold_extremes() {
    let body = "Met with the team about launch timing today.\nAcme Corp\n";
    let tagger = ScriptedTagger {
        label: PosLabel::ContactLike,
        confidence: 0.6,
    };

    let aggressive = classify(&split_lines(body), 0.0, &tagger).unwrap();
    assert!(!aggressive[1].keep);
    assert_eq!(aggressive[1].reason, Reason::SignatureOpening);

    let conservative = classify(&split_lines(body), 1.0, &tagger).unwrap();
    assert!(conservative[1].keep);
    assert_eq!(conservative[1].reason, Reason::Ordinary);
}

#[test]
fn test_threshold_monotonicity() {
    let body = "Met with the team about launch timing today.\nAcme Corp\n";
    let tagger = ScriptedTagger {
        label: PosLabel::ContactLike,
        confidence: 0.7,
    };

    // Above the tagger's confidence the line survives; at or below it drops
    assert!(classify(&split_lines(body), 0.9, &tagger).unwrap()[1].keep);
    assert!(!classify(&split_lines(body), 0.7, &tagger).unwrap()[1].keep);
    assert!(!classify(&split_lines(body), 0.5, &tagger).unwrap()[1].keep);
}

#[test]
fn test_ordinary_label_never_consults_threshold() {
    let body = "Running late today.\n";
    let tagger = ScriptedTagger {
        label: PosLabel::Ordinary,
        confidence: 0.99,
    };

    let results = classify(&split_lines(body), 0.0, &tagger).unwrap();
    assert!(results[0].keep);
}

#[test]
fn test_invalid_threshold_rejected() {
    let lines = split_lines("anything\n");

    assert!(matches!(
        classify(&lines, 1.5, &LexiconTagger),
        Err(ScrubError::InvalidThreshold(_))
    ));
    assert!(matches!(
        classify(&lines, -0.1, &LexiconTagger),
        Err(ScrubError::InvalidThreshold(_))
    ));
    assert!(scrub_body("anything\n", 2.0, &LexiconTagger).is_err());
}

#[test]
fn test_tagger_failure_keeps_line() {
    // "Jane Doe" would drop under a working contact-like signal
    let body = "Jane Doe\n";

    let results = classify(&split_lines(body), 0.9, &OfflineTagger).unwrap();
    assert!(results[0].keep);
    assert_eq!(results[0].reason, Reason::Ordinary);
}

#[test]
fn test_long_line_requalifies_as_prose() {
    let body = "Best,\n\
                Jane\n\
                Actually one more thing before I forget entirely.\n\
                Jane Doe | Example Org\n";

    let lines = split_lines(body);
    let results = classify(&lines, 0.9, &LexiconTagger).unwrap();

    assert_eq!(results[1].reason, Reason::SignatureContinuation);
    assert!(results[2].keep);
    assert_eq!(results[2].reason, Reason::Ordinary);
    // The contact line after requalification opens a fresh signature block
    assert!(!results[3].keep);
    assert_eq!(results[3].reason, Reason::ContactPattern);
}

#[test]
fn test_contact_heavy_line_never_requalifies() {
    let body = "Best,\nReach me at jane@example.org or on my cell anytime.\n";

    let results = classify(&split_lines(body), 0.9, &LexiconTagger).unwrap();
    assert!(!results[1].keep);
    assert_eq!(results[1].reason, Reason::SignatureContinuation);
}

#[test]
fn test_blank_lines_inside_signature_dropped() {
    let body = "Best,\n\nJane Doe\n";

    let cleaned = scrub_body(body, 0.9, &LexiconTagger).unwrap();
    assert_eq!(cleaned, "Best,\n");
}

#[test]
fn test_embedded_header_kept_in_conversation() {
    let body = "From: Jane Doe <jane@example.org>\nSubject: Re: timing\n";

    let results = classify(&split_lines(body), 0.9, &LexiconTagger).unwrap();
    assert!(results.iter().all(|result| result.keep));
    assert!(
        results
            .iter()
            .all(|result| result.reason == Reason::QuoteDelimiter)
    );
}

#[test]
fn test_prefix_classification_is_stable() {
    let base = "One perfectly ordinary sentence about the quarterly report.\n\
                Best,\n\
                Jane Doe\n";
    let variant = "One perfectly ordinary sentence about the quarterly report.\n\
                Best,\n\
                Completely different tail content for this scan here.\n";

    let first = classify(&split_lines(base), 0.9, &LexiconTagger).unwrap();
    let second = classify(&split_lines(variant), 0.9, &LexiconTagger).unwrap();

    assert_eq!(first[..2], second[..2]);
}

#[test]
fn test_scrub_output_is_subsequence_of_input() {
    let body = "Morning update below.\n\
                \n\
                Best,\n\
                Jane Doe\n\
                On Tue, Feb 6, 2024, Sam Roe wrote:\n\
                > Earlier message body.\n";

    let cleaned = scrub_body(body, 0.9, &LexiconTagger).unwrap();

    let mut input_lines = split_lines(body).into_iter();
    for kept in split_lines(&cleaned) {
        assert!(
            input_lines.any(|original| original.raw() == kept.raw()),
            "kept line not found in input order: {:?}",
            kept.raw()
        );
    }
}

#[test]
fn test_results_serialize_for_diagnostics() {
    let lines = split_lines("Best,\n");
    let results = classify(&lines, 0.9, &LexiconTagger).unwrap();

    let json = serde_json::to_string(&results).unwrap();
    assert!(json.contains("\"SignatureOpening\""));

    let parsed: Vec<ClassificationResult> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, results);
}
