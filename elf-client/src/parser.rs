//! Classification of puzzle site HTML responses

use crate::client::SubmissionResult;
use crate::error::ElfError;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;
use std::time::Duration;

fn user_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(anonymous user #(\d+)\)").unwrap())
}

fn throttle_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"You have (.+?) left to wait\.").unwrap())
}

fn main_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("main").unwrap())
}

/// Pull the user id out of the settings page.
pub(crate) fn extract_user_id(html: &str) -> Option<u64> {
    let captures = user_id_regex().captures(html)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Text content of the `<main>` element of a response page.
pub(crate) fn extract_main_text(html: &str) -> Result<String, ElfError> {
    let document = Html::parse_document(html);
    let main = document
        .select(main_selector())
        .next()
        .ok_or(ElfError::HtmlParse)?;
    Ok(main.text().collect())
}

fn extract_throttle_wait(text: &str) -> Option<Duration> {
    let captures = throttle_regex().captures(text)?;
    humantime::parse_duration(captures.get(1)?.as_str()).ok()
}

/// Map a submission response page to its outcome.
pub(crate) fn classify_submission(html: &str) -> Result<SubmissionResult, ElfError> {
    let text = extract_main_text(html)?;

    if text.contains("not the right answer") {
        return Ok(SubmissionResult::Incorrect);
    }
    if text.contains("already complete it") {
        return Ok(SubmissionResult::AlreadyCompleted);
    }
    if text.contains("gave an answer too recently") {
        return Ok(SubmissionResult::Throttled {
            wait_time: extract_throttle_wait(&text),
        });
    }

    Ok(SubmissionResult::Correct)
}
