//! Integration tests for the precis summarizer.

use precis::{
    summarize, Config, Event, Outcome, SentenceSegmenter, Session, StopWords, Summarizer,
};
use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;
use tempfile::tempdir;

const ARTICLE: &str = "Solar power is growing quickly around the world. \
    Prices for solar panels fell sharply during the last decade. \
    Many cities now run buses on electricity. \
    Dr. Lee said solar panels and solar farms will dominate new power capacity. \
    Wind power is also expanding, though more slowly. \
    Critics worry about storage for solar power at night.";

/// Stop words frozen for tests that assert exact output.
fn frozen_summarizer() -> Summarizer {
    Summarizer::new(Arc::new(StopWords::from_list(&[
        "is", "the", "for", "during", "now", "on", "said", "and", "will", "also", "though", "more",
        "about", "at", "many", "around",
    ])))
}

fn sentences_of(text: &str) -> Vec<String> {
    SentenceSegmenter::new().segment_to_strings(text).unwrap()
}

#[test]
fn test_summary_contains_only_document_sentences() {
    let document = sentences_of(ARTICLE);

    for n in 1..=8 {
        let summary = summarize(ARTICLE, n).unwrap();
        let selected = sentences_of(&summary);

        let unique: HashSet<&String> = selected.iter().collect();
        assert_eq!(unique.len(), selected.len(), "duplicate sentence for n={}", n);
        for sentence in &selected {
            assert!(document.contains(sentence), "{:?} not in document", sentence);
        }
        assert_eq!(selected.len(), (n as usize).min(document.len()));
    }
}

#[test]
fn test_selection_preserves_document_order() {
    let summarizer = frozen_summarizer();
    let summary = summarizer.summarize_detailed(ARTICLE, 3).unwrap();

    let positions: Vec<usize> = summary.sentences.iter().map(|s| s.sentence.index).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);

    // The bus sentence shares no words with the rest
    assert!(!summary.text().contains("buses"));
    assert!(summary.text().contains("Dr. Lee said solar panels"));
}

#[test]
fn test_all_sentences_when_count_exceeds_document() {
    let summarizer = frozen_summarizer();
    let text = "Alpha leads. Beta follows. Gamma ends.";

    assert_eq!(summarizer.summarize(text, 3).unwrap(), text);
    assert_eq!(summarizer.summarize(text, 50).unwrap(), text);
}

#[test]
fn test_empty_document() {
    assert_eq!(summarize("", 1).unwrap(), "");
    assert_eq!(summarize("", 3).unwrap(), "");
    assert_eq!(summarize("   \n  ", 3).unwrap(), "");
}

#[test]
fn test_non_positive_counts_rejected() {
    assert!(summarize(ARTICLE, 0).unwrap_err().is_invalid_argument());
    assert!(summarize(ARTICLE, -1).unwrap_err().is_invalid_argument());
    assert!(frozen_summarizer().summarize(ARTICLE, 0).unwrap_err().is_invalid_argument());
}

#[test]
fn test_idempotent() {
    let summarizer = frozen_summarizer();
    let first = summarizer.summarize(ARTICLE, 2).unwrap();
    let second = summarizer.summarize(ARTICLE, 2).unwrap();
    assert_eq!(first, second);

    assert_eq!(summarize(ARTICLE, 2).unwrap(), summarize(ARTICLE, 2).unwrap());
}

#[test]
fn test_pets_relative_ranking() {
    let text = "Cats are great pets. Dogs are loyal companions. \
                Cats and dogs can be friends. Many people love cats.";
    let summarizer = Summarizer::new(Arc::new(StopWords::from_list(&[
        "are", "and", "can", "be", "many",
    ])));

    let scored = summarizer.score_sentences(text).unwrap();
    let score = |i: usize| scored[i].score;

    // Sentences about cats beat the one that never mentions them
    assert!(score(0) > score(1));
    assert!(score(3) > score(1));
    assert!(score(2) > score(1));

    let summary = summarizer.summarize(text, 2).unwrap();
    assert!(!summary.contains("loyal companions"));
}

#[test]
fn test_stop_words_only_document() {
    let summarizer = frozen_summarizer();
    let text = "Is the. The is! For the? On and at.";

    let frequencies = summarizer.frequencies(text).unwrap();
    assert!(frequencies.is_empty());

    let summary = summarizer.summarize_detailed(text, 2).unwrap();
    assert!(summary.sentences.iter().all(|s| s.score == 0));
    assert_eq!(summary.text(), "Is the. The is!");
}

#[test]
fn test_repeated_sentences_are_separate_candidates() {
    let summarizer = frozen_summarizer();
    let text = "Rust is fast. Rust is fast. Go compiles quickly.";
    let summary = summarizer.summarize_detailed(text, 2).unwrap();

    let positions: Vec<usize> = summary.sentences.iter().map(|s| s.sentence.index).collect();
    assert_eq!(positions, vec![0, 1]);
    assert_eq!(summary.text(), "Rust is fast. Rust is fast.");
}

#[test]
fn test_sentence_spans_point_into_document() {
    let summary = frozen_summarizer().summarize_detailed(ARTICLE, 4).unwrap();

    for scored in &summary.sentences {
        let sentence = &scored.sentence;
        assert_eq!(&ARTICLE[sentence.start..sentence.end], sentence.text);
    }
}

#[test]
fn test_summarizer_from_config_file() {
    let dir = tempdir().unwrap();

    let stop_path = dir.path().join("stop.txt");
    let mut stop_file = std::fs::File::create(&stop_path).unwrap();
    writeln!(stop_file, "the\nis\nand").unwrap();

    let config_path = dir.path().join("precis.toml");
    std::fs::write(
        &config_path,
        format!(
            "[text]\nstopwords_path = {:?}\n\n[summary]\nsentence_count = 1\n",
            stop_path.to_str().unwrap()
        ),
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();
    let summarizer = Summarizer::from_config(&config).unwrap();
    assert_eq!(summarizer.default_sentence_count(), 1);

    let summary = summarizer
        .summarize("The sea is calm. Storms and storms and storms.", 1)
        .unwrap();
    assert_eq!(summary, "Storms and storms and storms.");
}

#[test]
fn test_unavailable_stop_words_fail_loudly() {
    let mut config = Config::default();
    config.text.stopwords_path = Some("/missing/stopwords.txt".into());
    let err = Summarizer::from_config(&config).unwrap_err();
    assert!(err.is_resource_unavailable());

    let mut config = Config::default();
    config.text.language = "elvish".to_string();
    let err = Summarizer::from_config(&config).unwrap_err();
    assert!(err.is_resource_unavailable());
}

#[test]
fn test_session_round_trip() {
    let dir = tempdir().unwrap();
    let mut session = Session::new(frozen_summarizer(), dir.path()).with_sentence_count(1);

    match session.handle(Event::Submit(ARTICLE.to_string())) {
        Outcome::Appended(line) => assert!(line.starts_with("Summary: ")),
        other => panic!("unexpected outcome: {:?}", other),
    }

    let path = match session.handle(Event::Save) {
        Outcome::Saved(path) => path,
        other => panic!("unexpected outcome: {:?}", other),
    };
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("summary_") && name.ends_with(".txt"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), session.transcript());

    assert_eq!(session.handle(Event::Clear), Outcome::Cleared);
    assert!(session.transcript().is_empty());
}

#[test]
fn test_summarizer_is_shareable_across_threads() {
    let summarizer = Arc::new(frozen_summarizer());
    let expected = summarizer.summarize(ARTICLE, 2).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let summarizer = Arc::clone(&summarizer);
            std::thread::spawn(move || summarizer.summarize(ARTICLE, 2).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
