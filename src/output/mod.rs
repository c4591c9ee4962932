use std::fmt;

use crate::game::quiz::definition::{Answer, Question};
use crate::game::score::ScoreRecap;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    Feedback,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Feedback => "/feedback",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestionCard {
    pub number: usize,
    pub total: usize,
    pub question: Question,
    pub answers: Vec<Answer>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswerReveal(Vec<Answer>),
    CommandFailed(String),
    Countdown(u32),
    FetchFailed(String),
    GameResults(ScoreRecap),
    GuessCorrect(u32),
    GuessIncorrect(String),
    Loading,
    QuestionBegins(QuestionCard),
    TimeUp(String),
}

pub trait GameOutput {
    fn say(&self, message: &Message);

    fn navigate(&self, route: Route);
}
