//! Interactive session adapter.
//!
//! A [`Session`] owns the displayed transcript and turns discrete user
//! events into calls on a [`Summarizer`]. No summarization logic lives here.

use crate::error::Result;
use crate::summarizer::Summarizer;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Message shown when the user submits blank input.
pub const EMPTY_INPUT_WARNING: &str = "Please provide some text to summarize.";

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Summarize the given text.
    Submit(String),
    /// Empty the transcript.
    Clear,
    /// Write the transcript to a timestamped file.
    Save,
}

/// What the front end should show after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A line was appended to the transcript.
    Appended(String),
    /// The input was rejected; the transcript is unchanged.
    Warning(String),
    /// The transcript was emptied.
    Cleared,
    /// The transcript was written to this file.
    Saved(PathBuf),
    /// Saving failed; the transcript is unchanged.
    SaveFailed(String),
}

/// Transcript state plus the summarizer it drives.
#[derive(Debug)]
pub struct Session {
    summarizer: Summarizer,
    sentence_count: usize,
    save_dir: PathBuf,
    transcript: String,
}

impl Session {
    /// Creates a session saving transcripts into `save_dir`.
    pub fn new(summarizer: Summarizer, save_dir: impl Into<PathBuf>) -> Self {
        let sentence_count = summarizer.default_sentence_count();
        Self {
            summarizer,
            sentence_count,
            save_dir: save_dir.into(),
            transcript: String::new(),
        }
    }

    /// Overrides the number of sentences per summary.
    pub fn with_sentence_count(mut self, sentence_count: usize) -> Self {
        self.sentence_count = sentence_count;
        self
    }

    /// The current transcript.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Handles one event.
    pub fn handle(&mut self, event: Event) -> Outcome {
        match event {
            Event::Submit(text) => self.submit(&text),
            Event::Clear => {
                self.transcript.clear();
                Outcome::Cleared
            }
            Event::Save => match self.save_at(Local::now()) {
                Ok(path) => Outcome::Saved(path),
                Err(e) => {
                    log::warn!("Saving transcript failed: {}", e);
                    Outcome::SaveFailed(e.to_string())
                }
            },
        }
    }

    fn submit(&mut self, text: &str) -> Outcome {
        if text.trim().is_empty() {
            return Outcome::Warning(EMPTY_INPUT_WARNING.to_string());
        }

        let line = match self.summarizer.summarize(text, self.sentence_count) {
            Ok(summary) => format!("Summary: {}", summary),
            Err(e) => format!("Error summarizing text: {}", e),
        };

        self.transcript.push_str(&line);
        self.transcript.push_str("\n\n");
        Outcome::Appended(line)
    }

    /// Writes the transcript to `summary_<YYYYMMDD_HHMMSS>.txt` in the save directory.
    pub fn save_at(&self, now: DateTime<Local>) -> Result<PathBuf> {
        let path = transcript_path(&self.save_dir, now);
        std::fs::write(&path, &self.transcript)?;
        log::info!("Saved transcript to {}", path.display());
        Ok(path)
    }
}

/// Builds the timestamped transcript file name.
pub fn transcript_path(dir: &Path, now: DateTime<Local>) -> PathBuf {
    dir.join(format!("summary_{}.txt", now.format("%Y%m%d_%H%M%S")))
}

/// Maps a line of terminal input to an event.
///
/// Returns `None` for the quit command.
pub fn parse_command(line: &str) -> Option<Event> {
    match line.trim() {
        ":quit" | ":q" => None,
        ":clear" => Some(Event::Clear),
        ":save" => Some(Event::Save),
        _ => Some(Event::Submit(line.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SummaryConfig;
    use crate::text::StopWords;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn session(dir: &Path) -> Session {
        let summarizer = Summarizer::new(Arc::new(StopWords::from_list(&["the", "is"])));
        Session::new(summarizer, dir)
    }

    #[test]
    fn test_submit_appends_summary() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());

        let outcome = session.handle(Event::Submit("The sky is blue.".to_string()));
        assert_eq!(outcome, Outcome::Appended("Summary: The sky is blue.".to_string()));
        assert_eq!(session.transcript(), "Summary: The sky is blue.\n\n");
    }

    #[test]
    fn test_blank_input_warns() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());

        let outcome = session.handle(Event::Submit("   ".to_string()));
        assert_eq!(outcome, Outcome::Warning(EMPTY_INPUT_WARNING.to_string()));
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_failure_is_rendered_and_history_kept() {
        let dir = tempfile::tempdir().unwrap();
        let summarizer = Summarizer::new(Arc::new(StopWords::from_list(&[]))).with_config(SummaryConfig {
            sentence_count: 1,
            max_input_bytes: Some(20),
        });
        let mut session = Session::new(summarizer, dir.path());

        session.handle(Event::Submit("Short text.".to_string()));
        let before = session.transcript().to_string();

        let outcome = session.handle(Event::Submit("This input is far beyond the limit.".to_string()));
        match outcome {
            Outcome::Appended(line) => assert!(line.starts_with("Error summarizing text: ")),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(session.transcript().starts_with(&before));
    }

    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());

        session.handle(Event::Submit("Something happened.".to_string()));
        assert_eq!(session.handle(Event::Clear), Outcome::Cleared);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_save_writes_timestamped_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        session.handle(Event::Submit("Rivers flow.".to_string()));

        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let path = session.save_at(now).unwrap();

        assert_eq!(path, dir.path().join("summary_20240309_140507.txt"));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, session.transcript());
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir.path().join("missing"));

        match session.handle(Event::Save) {
            Outcome::SaveFailed(_) => {}
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(":quit"), None);
        assert_eq!(parse_command(" :clear "), Some(Event::Clear));
        assert_eq!(parse_command(":save"), Some(Event::Save));
        assert_eq!(
            parse_command("Hello there."),
            Some(Event::Submit("Hello there.".to_string()))
        );
    }
}
