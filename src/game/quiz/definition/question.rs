use html_escape::decode_html_entities;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;


lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

pub fn decode_html(text: &str) -> String {
    let decoded = decode_html_entities(text);
    WHITESPACE_REGEX
        .replace_all(decoded.trim(), " ")
        .into_owned()
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[serde(other)]
    Unrated,
}

impl Difficulty {
    pub fn multiplier(self) -> u32 {
        match self {
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Easy | Difficulty::Unrated => 1,
        }
    }

    pub fn compute_score(self, base_score: u32, countdown: u32) -> u32 {
        base_score + countdown * self.multiplier()
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Unrated
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct RawQuestion {
    pub category: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub category: String,
    pub text: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    pub difficulty: Difficulty,
}

impl Question {
    pub fn answers(&self) -> Vec<Answer> {
        let mut answers: Vec<Answer> = self
            .incorrect_answers
            .iter()
            .map(|text| Answer {
                text: text.clone(),
                is_correct: false,
            })
            .collect();
        answers.push(Answer {
            text: self.correct_answer.clone(),
            is_correct: true,
        });
        answers
    }
}

impl From<RawQuestion> for Question {
    fn from(raw_question: RawQuestion) -> Self {
        Question {
            category: decode_html(&raw_question.category),
            text: decode_html(&raw_question.question),
            correct_answer: decode_html(&raw_question.correct_answer),
            incorrect_answers: raw_question
                .incorrect_answers
                .iter()
                .map(|answer| decode_html(answer))
                .collect(),
            difficulty: raw_question.difficulty,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}

impl Answer {
    // Identifiers used by UI automation to find answer controls
    pub fn test_id(&self, index: usize) -> String {
        if self.is_correct {
            "correct-answer".to_owned()
        } else {
            format!("wrong-answer-{}", index)
        }
    }
}
