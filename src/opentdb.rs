use log::{info, warn};
use parking_lot::RwLock;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use thiserror::Error;

use crate::game::quiz::definition::{Question, RawQuestion};

#[cfg(test)]
mod tests;

pub const DEFAULT_API_URL: &str = "https://opentdb.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

const TOKEN_NOT_FOUND: u8 = 3;
const TOKEN_EMPTY: u8 = 4;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not reach the trivia service ({0})")]
    Network(String),
    #[error("the trivia service sent an unreadable response ({0})")]
    Malformed(#[from] serde_json::Error),
    #[error("the trivia service rejected the request: {}", describe_response_code(.0))]
    Rejected(u8),
    #[error("the trivia service returned no questions")]
    EmptyResultSet,
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::Network(error.to_string())
    }
}

fn describe_response_code(code: &u8) -> &'static str {
    match *code {
        1 => "not enough questions available",
        2 => "invalid parameter",
        TOKEN_NOT_FOUND => "session token not found",
        TOKEN_EMPTY => "session token has run out of questions",
        5 => "too many requests, wait a few seconds",
        _ => "unknown response code",
    }
}

#[derive(Debug, Deserialize)]
struct QuestionsEnvelope {
    response_code: u8,
    #[serde(default)]
    results: Vec<RawQuestion>,
}

#[derive(Debug, Deserialize)]
struct TokenEnvelope {
    response_code: u8,
    #[serde(default)]
    token: Option<String>,
}

pub fn parse_questions(body: &str) -> Result<Vec<Question>, FetchError> {
    let envelope: QuestionsEnvelope = serde_json::from_str(body)?;
    if envelope.response_code != 0 {
        return Err(FetchError::Rejected(envelope.response_code));
    }
    if envelope.results.is_empty() {
        return Err(FetchError::EmptyResultSet);
    }
    Ok(envelope.results.into_iter().map(Question::from).collect())
}

pub fn parse_token(body: &str) -> Result<String, FetchError> {
    let envelope: TokenEnvelope = serde_json::from_str(body)?;
    match envelope.token {
        Some(token) if envelope.response_code == 0 && !token.is_empty() => Ok(token),
        _ => Err(FetchError::Rejected(envelope.response_code)),
    }
}

pub trait QuestionSource {
    fn fetch_questions(&self, amount: usize) -> Result<Vec<Question>, FetchError>;
}

pub type SourceHandle = Arc<dyn QuestionSource + Send + Sync>;

pub trait TriviaApi {
    fn request_token(&self) -> Result<String, FetchError>;
    fn reset_token(&self, token: &str) -> Result<String, FetchError>;
    fn fetch_questions(&self, token: &str, amount: usize) -> Result<Vec<Question>, FetchError>;
}

#[derive(Clone, Debug)]
pub struct OpenTdbClient {
    http: Client,
    api_url: String,
}

impl OpenTdbClient {
    pub fn new(api_url: &str) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(OpenTdbClient {
            http,
            api_url: api_url.trim_end_matches('/').to_owned(),
        })
    }

    fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<String, FetchError> {
        let body = self
            .http
            .get(&format!("{}/{}", self.api_url, endpoint))
            .query(query)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(body)
    }
}

impl TriviaApi for OpenTdbClient {
    fn request_token(&self) -> Result<String, FetchError> {
        info!("Requesting a new session token");
        let body = self.get("api_token.php", &[("command", "request")])?;
        parse_token(&body)
    }

    fn reset_token(&self, token: &str) -> Result<String, FetchError> {
        info!("Resetting the session token");
        let body = self.get("api_token.php", &[("command", "reset"), ("token", token)])?;
        parse_token(&body)
    }

    fn fetch_questions(&self, token: &str, amount: usize) -> Result<Vec<Question>, FetchError> {
        info!("Fetching {} questions", amount);
        let amount = amount.to_string();
        let body = self.get("api.php", &[("amount", amount.as_str()), ("token", token)])?;
        parse_questions(&body)
    }
}

// Fetches with a session token, renewing it once when the service reports it missing or exhausted
pub struct TokenSession<A> {
    api: A,
    token: RwLock<String>,
}

impl<A: TriviaApi> TokenSession<A> {
    pub fn new(api: A, token: String) -> Self {
        TokenSession {
            api,
            token: RwLock::new(token),
        }
    }

    fn renew_token(&self, code: u8) -> Result<(), FetchError> {
        let token = if code == TOKEN_EMPTY {
            let current = self.token.read().clone();
            self.api.reset_token(&current)?
        } else {
            self.api.request_token()?
        };
        *self.token.write() = token;
        Ok(())
    }
}

impl<A: TriviaApi> QuestionSource for TokenSession<A> {
    fn fetch_questions(&self, amount: usize) -> Result<Vec<Question>, FetchError> {
        let token = self.token.read().clone();
        match self.api.fetch_questions(&token, amount) {
            Err(FetchError::Rejected(code)) if code == TOKEN_NOT_FOUND || code == TOKEN_EMPTY => {
                warn!("{}, renewing it", describe_response_code(&code));
                self.renew_token(code)?;
                let token = self.token.read().clone();
                self.api.fetch_questions(&token, amount)
            }
            result => result,
        }
    }
}

#[derive(Debug)]
pub enum FetchState {
    InProgress,
    Success(Vec<Question>),
    Failure(FetchError),
}

pub struct FetchHandle {
    receiver: Receiver<Result<Vec<Question>, FetchError>>,
}

impl FetchHandle {
    pub fn get_state(&self) -> FetchState {
        match self.receiver.try_recv() {
            Ok(Ok(questions)) => FetchState::Success(questions),
            Ok(Err(e)) => FetchState::Failure(e),
            Err(TryRecvError::Empty) => FetchState::InProgress,
            Err(TryRecvError::Disconnected) => {
                FetchState::Failure(FetchError::Network("fetch worker stopped".to_owned()))
            }
        }
    }
}

pub fn fetch_in_background(source: SourceHandle, amount: usize) -> FetchHandle {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let result = source.fetch_questions(amount);
        if let Err(e) = &result {
            warn!("Question fetch failed: {}", e);
        }
        // The receiver is gone if the quiz moved on before the fetch completed
        if sender.send(result).is_err() {
            info!("Discarding questions fetched after the quiz was torn down");
        }
    });
    FetchHandle { receiver }
}
