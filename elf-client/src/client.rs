//! Blocking HTTP client for the puzzle site

use crate::error::ElfError;
use crate::leaderboard::Leaderboard;
use crate::parser;
use reqwest::header::HeaderValue;
use std::time::Duration;
use zeroize::Zeroize;

/// Outcome of verifying a session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// User id when the session is valid, None otherwise
    pub user_id: Option<u64>,
}

/// Outcome of submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Correct,
    Incorrect,
    /// The part had already been solved
    AlreadyCompleted,
    /// The site rate-limited the submission
    Throttled { wait_time: Option<Duration> },
}

/// Client for the Advent of Code website.
///
/// Redirects are disabled: session verification relies on distinguishing a
/// 200 settings page from a redirect to the homepage.
///
/// # Example
///
/// ```no_run
/// use elf_client::ElfClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ElfClient::new()?;
/// let input = client.get_input(2025, 1, "session_cookie")?;
/// println!("{} bytes of input", input.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ElfClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
}

impl ElfClient {
    pub fn new() -> Result<Self, ElfError> {
        Self::builder().build()
    }

    pub fn builder() -> ElfClientBuilder {
        ElfClientBuilder::new()
    }

    /// Cookie header for `session`, marked sensitive; the temporary cookie
    /// string is zeroized after the header is built.
    fn cookie_header(session: &str) -> Result<HeaderValue, ElfError> {
        let mut cookie = format!("session={}", session);
        let mut header = HeaderValue::from_bytes(cookie.as_bytes())
            .map_err(|_| ElfError::ClientInit("invalid session cookie".to_string()))?;
        header.set_sensitive(true);
        cookie.zeroize();
        Ok(header)
    }

    fn url(&self, segments: &[&str]) -> Result<reqwest::Url, ElfError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ElfError::ClientInit("base URL cannot be a base".to_string()))?
            .clear()
            .extend(segments);
        Ok(url)
    }

    /// Check whether a session cookie is still valid.
    ///
    /// A 2xx settings page means the session works and carries the user id;
    /// a redirect means the cookie is stale.
    pub fn verify_session(&self, session: &str) -> Result<SessionInfo, ElfError> {
        let response = self
            .client
            .get(self.url(&["settings"])?)
            .header("Cookie", Self::cookie_header(session)?)
            .send()?;

        if !response.status().is_success() {
            return Ok(SessionInfo { user_id: None });
        }

        let html = response.text().map_err(|_| ElfError::Encoding)?;
        Ok(SessionInfo {
            user_id: parser::extract_user_id(&html),
        })
    }

    /// Fetch the personalized puzzle input for a year and day.
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<String, ElfError> {
        let url = self.url(&[&year.to_string(), "day", &day.to_string(), "input"])?;
        let response = self
            .client
            .get(url)
            .header("Cookie", Self::cookie_header(session)?)
            .send()?;

        if !response.status().is_success() {
            return Err(ElfError::InvalidStatus {
                status: response.status(),
            });
        }
        response.text().map_err(|_| ElfError::Encoding)
    }

    /// Submit an answer for a part and classify the site's verdict.
    pub fn submit_answer(
        &self,
        year: u16,
        day: u8,
        part: u8,
        answer: &str,
        session: &str,
    ) -> Result<SubmissionResult, ElfError> {
        let url = self.url(&[&year.to_string(), "day", &day.to_string(), "answer"])?;
        let form = [("level", part.to_string()), ("answer", answer.to_string())];
        let response = self
            .client
            .post(url)
            .header("Cookie", Self::cookie_header(session)?)
            .form(&form)
            .send()?;

        if !response.status().is_success() {
            return Err(ElfError::InvalidStatus {
                status: response.status(),
            });
        }

        let html = response.text().map_err(|_| ElfError::Encoding)?;
        parser::classify_submission(&html)
    }

    /// Fetch a private leaderboard as JSON.
    pub fn get_private_leaderboard(
        &self,
        year: u16,
        board_id: u64,
        session: &str,
    ) -> Result<Leaderboard, ElfError> {
        let url = self.url(&[
            &year.to_string(),
            "leaderboard",
            "private",
            "view",
            &format!("{}.json", board_id),
        ])?;
        let response = self
            .client
            .get(url)
            .header("Cookie", Self::cookie_header(session)?)
            .send()?;

        if !response.status().is_success() {
            return Err(ElfError::InvalidStatus {
                status: response.status(),
            });
        }

        let body = response.text().map_err(|_| ElfError::Encoding)?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Builder for [`ElfClient`].
///
/// The base URL is overridable so tests can point the client at a mock
/// server; the no-redirect policy is applied unconditionally.
#[derive(Debug)]
pub struct ElfClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl ElfClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
        }
    }

    /// Override the base URL (mainly for tests).
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, ElfError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Supply a customized reqwest builder (timeouts, proxies). The redirect
    /// policy is still forced to `none`.
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    pub fn build(self) -> Result<ElfClient, ElfError> {
        let base_url = self.base_url.unwrap_or_else(|| {
            reqwest::Url::parse("https://adventofcode.com").expect("default base URL is valid")
        });

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ElfError::ClientInit(e.to_string()))?;

        Ok(ElfClient { client, base_url })
    }
}

impl Default for ElfClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url() {
        let client = ElfClient::new().unwrap();
        assert_eq!(client.base_url.as_str(), "https://adventofcode.com/");
    }

    #[test]
    fn invalid_base_url_rejected() {
        assert!(ElfClient::builder().base_url("not a url").is_err());
    }

    #[test]
    fn fetches_input() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2025/day/7/input")
            .with_status(200)
            .with_body("S..\n.^.\n")
            .expect(1)
            .create();

        let client = ElfClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap();

        let input = client.get_input(2025, 7, "cookie").unwrap();
        assert_eq!(input, "S..\n.^.\n");
        mock.assert();
    }

    #[test]
    fn input_error_status_is_fatal() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/2025/day/26/input")
            .with_status(404)
            .create();

        let client = ElfClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap();

        match client.get_input(2025, 26, "cookie").unwrap_err() {
            ElfError::InvalidStatus { status } => assert_eq!(status.as_u16(), 404),
            other => panic!("expected InvalidStatus, got {:?}", other),
        }
    }

    #[test]
    fn submits_answer_form() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/2025/day/3/answer")
            .match_body(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("level".into(), "2".into()),
                mockito::Matcher::UrlEncoded("answer".into(), "17316".into()),
            ]))
            .with_status(200)
            .with_body("<html><body><main>That's the right answer!</main></body></html>")
            .expect(1)
            .create();

        let client = ElfClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap();

        let result = client.submit_answer(2025, 3, 2, "17316", "cookie").unwrap();
        assert_eq!(result, SubmissionResult::Correct);
        mock.assert();
    }

    #[test]
    fn session_redirect_means_invalid() {
        let mut server = mockito::Server::new();
        let home = server
            .mock("GET", "/")
            .with_status(200)
            .expect(0)
            .create();
        let settings = server
            .mock("GET", "/settings")
            .with_status(303)
            .with_header("location", "/")
            .expect(1)
            .create();

        let client = ElfClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap();

        let info = client.verify_session("stale").unwrap();
        assert!(info.user_id.is_none());
        home.assert();
        settings.assert();
    }

    #[test]
    fn session_settings_page_carries_user_id() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/settings")
            .with_status(200)
            .with_body("<html><body>Settings (anonymous user #314159)</body></html>")
            .create();

        let client = ElfClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap();

        let info = client.verify_session("fresh").unwrap();
        assert_eq!(info.user_id, Some(314159));
    }

    #[test]
    fn fetches_private_leaderboard() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/2025/leaderboard/private/view/98765.json")
            .with_status(200)
            .with_body(
                r#"{"owner_id":1,"event":"2025","members":{
                    "1":{"id":1,"name":"alice","stars":22,"local_score":240,"global_score":0,"last_star_ts":1765002000},
                    "2":{"id":2,"name":null,"stars":4,"local_score":31,"global_score":0,"last_star_ts":1764700000}
                }}"#,
            )
            .create();

        let client = ElfClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap();

        let board = client.get_private_leaderboard(2025, 98765, "cookie").unwrap();
        assert_eq!(board.event, "2025");
        let standings = board.standings();
        assert_eq!(standings.len(), 2);
        assert_eq!(standings[0].display_name(), "alice");
        assert_eq!(standings[1].display_name(), "(anonymous user #2)");
    }
}
