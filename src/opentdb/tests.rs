use super::*;
use std::sync::Mutex;
use std::time::Instant;

use crate::game::quiz::definition::Difficulty;

const SAMPLE_RESPONSE: &str = r#"{
    "response_code": 0,
    "results": [
        {
            "category": "Science &amp; Nature",
            "type": "multiple",
            "difficulty": "hard",
            "question": "What is the chemical symbol for tungsten?",
            "correct_answer": "W",
            "incorrect_answers": ["Tu", "Tg", "Wo"]
        },
        {
            "category": "History",
            "type": "boolean",
            "difficulty": "easy",
            "question": "The Titanic sank in 1912.",
            "correct_answer": "True",
            "incorrect_answers": ["False"]
        }
    ]
}"#;

#[test]
fn parses_questions_in_order() {
    let questions = parse_questions(SAMPLE_RESPONSE).unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].category, "Science & Nature");
    assert_eq!(questions[0].difficulty, Difficulty::Hard);
    assert_eq!(questions[0].incorrect_answers, vec!["Tu", "Tg", "Wo"]);
    assert_eq!(questions[1].correct_answer, "True");
    assert_eq!(questions[1].difficulty, Difficulty::Easy);
}

#[test]
fn empty_results_are_an_error() {
    let result = parse_questions(r#"{ "response_code": 0, "results": [] }"#);
    assert!(matches!(result, Err(FetchError::EmptyResultSet)));
}

#[test]
fn nonzero_response_code_is_rejected() {
    let result = parse_questions(r#"{ "response_code": 3, "results": [] }"#);
    match result {
        Err(FetchError::Rejected(code)) => assert_eq!(code, 3),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn rejection_message_explains_code() {
    let message = FetchError::Rejected(4).to_string();
    assert!(message.contains("run out of questions"));
}

#[test]
fn malformed_body_is_an_error() {
    let result = parse_questions("<html>Service unavailable</html>");
    assert!(matches!(result, Err(FetchError::Malformed(_))));
}

#[test]
fn parses_token() {
    let body = r#"{ "response_code": 0, "response_message": "Token Generated Successfully!", "token": "abc" }"#;
    assert_eq!(parse_token(body).unwrap(), "abc");
}

#[test]
fn missing_token_is_rejected() {
    let body = r#"{ "response_code": 5 }"#;
    assert!(matches!(parse_token(body), Err(FetchError::Rejected(5))));
}

struct StubSource {
    requested_amounts: Mutex<Vec<usize>>,
}

impl QuestionSource for StubSource {
    fn fetch_questions(&self, amount: usize) -> Result<Vec<Question>, FetchError> {
        self.requested_amounts.lock().unwrap().push(amount);
        parse_questions(SAMPLE_RESPONSE)
    }
}

#[test]
fn background_fetch_delivers_questions() {
    let source = Arc::new(StubSource {
        requested_amounts: Mutex::new(vec![]),
    });
    let handle = fetch_in_background(source.clone(), 5);

    let start_time = Instant::now();
    let questions = loop {
        match handle.get_state() {
            FetchState::InProgress => (),
            FetchState::Success(questions) => break questions,
            FetchState::Failure(e) => panic!("fetch failed: {}", e),
        }
        if Instant::now().duration_since(start_time) > Duration::from_secs(5) {
            panic!("Timed out waiting for fetch to complete");
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    assert_eq!(questions.len(), 2);
    assert_eq!(*source.requested_amounts.lock().unwrap(), vec![5]);
}

// Serves questions only for `valid_token`, recording every call
struct StubApi {
    valid_token: String,
    fetch_code: u8,
    calls: Mutex<Vec<String>>,
}

impl StubApi {
    fn new(valid_token: &str, fetch_code: u8) -> Self {
        StubApi {
            valid_token: valid_token.to_owned(),
            fetch_code,
            calls: Mutex::new(vec![]),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl TriviaApi for StubApi {
    fn request_token(&self) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push("request".to_owned());
        Ok(self.valid_token.clone())
    }

    fn reset_token(&self, token: &str) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push(format!("reset {}", token));
        Ok(self.valid_token.clone())
    }

    fn fetch_questions(&self, token: &str, _amount: usize) -> Result<Vec<Question>, FetchError> {
        self.calls.lock().unwrap().push(format!("fetch {}", token));
        if token == self.valid_token {
            parse_questions(SAMPLE_RESPONSE)
        } else {
            Err(FetchError::Rejected(self.fetch_code))
        }
    }
}

#[test]
fn session_uses_its_token() {
    let session = TokenSession::new(StubApi::new("good", 3), "good".to_owned());
    assert_eq!(session.fetch_questions(5).unwrap().len(), 2);
    assert_eq!(session.api.calls(), vec!["fetch good"]);
}

#[test]
fn missing_token_is_replaced() {
    let session = TokenSession::new(StubApi::new("fresh", 3), "stale".to_owned());
    assert_eq!(session.fetch_questions(5).unwrap().len(), 2);
    assert_eq!(
        session.api.calls(),
        vec!["fetch stale", "request", "fetch fresh"]
    );

    session.fetch_questions(5).unwrap();
    assert_eq!(session.api.calls().last().unwrap(), "fetch fresh");
}

#[test]
fn exhausted_token_is_reset() {
    let session = TokenSession::new(StubApi::new("reset", 4), "spent".to_owned());
    assert_eq!(session.fetch_questions(5).unwrap().len(), 2);
    assert_eq!(
        session.api.calls(),
        vec!["fetch spent", "reset spent", "fetch reset"]
    );
}

#[test]
fn other_rejections_are_not_renewed() {
    let session = TokenSession::new(StubApi::new("good", 5), "other".to_owned());
    assert!(matches!(
        session.fetch_questions(5),
        Err(FetchError::Rejected(5))
    ));
    assert_eq!(session.api.calls(), vec!["fetch other"]);
}
