use std::sync::Arc;
use std::time::{Duration, Instant};

use super::*;
use crate::game::quiz::definition::{Question, RawQuestion};
use crate::game::quiz::{Quiz, Settings};
use crate::game::score::ScoreBoard;
use crate::opentdb::{FetchError, QuestionSource};
use crate::output::mock::MockGameOutput;
use crate::output::Message;

struct OneQuestion;

impl QuestionSource for OneQuestion {
    fn fetch_questions(&self, _amount: usize) -> Result<Vec<Question>, FetchError> {
        Ok(vec![RawQuestion {
            category: "General Knowledge".to_owned(),
            question: "How many legs does a spider have?".to_owned(),
            correct_answer: "8".to_owned(),
            incorrect_answers: vec!["6".to_owned(), "10".to_owned(), "4".to_owned()],
            difficulty: Default::default(),
        }
        .into()])
    }
}

fn loaded_quiz(output: &MockGameOutput) -> Quiz<MockGameOutput> {
    let mut quiz = Quiz::new(
        Settings::default(),
        Arc::new(OneQuestion),
        Arc::new(ScoreBoard::new()),
        output.clone(),
    );
    let start_time = Instant::now();
    while quiz.get_question_state().is_none() {
        if Instant::now().duration_since(start_time) > Duration::from_secs(5) {
            panic!("Timed out waiting for questions");
        }
        std::thread::sleep(Duration::from_millis(10));
        quiz.tick(Duration::default());
    }
    quiz
}

#[test]
fn answering_twice_suggests_next() {
    let output = MockGameOutput::new();
    let mut quiz = loaded_quiz(&output);

    execute(&mut quiz, &output, Command::Answer(0));
    assert!(!output.contains_message(&Message::CommandFailed(
        "This question is settled, type `next` to continue".to_owned()
    )));

    execute(&mut quiz, &output, Command::Answer(1));
    assert!(output.contains_message(&Message::CommandFailed(
        "This question is settled, type `next` to continue".to_owned()
    )));
}

#[test]
fn out_of_range_answer_is_reported() {
    let output = MockGameOutput::new();
    let mut quiz = loaded_quiz(&output);
    execute(&mut quiz, &output, Command::Answer(6));
    assert!(output.contains_message(&Message::CommandFailed("There is no answer #7".to_owned())));
    assert!(!quiz.get_question_state().unwrap().is_input_locked());
}
