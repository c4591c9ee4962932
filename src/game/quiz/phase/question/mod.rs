use anyhow::{anyhow, Context, Result};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

use crate::game::quiz::definition::{Answer, Question};
use crate::game::quiz::State;
use crate::game::score::ScoreHandle;
use crate::output::{GameOutput, Message, QuestionCard};


pub fn shuffle_answers<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Vec<Answer> {
    let mut answers = question.answers();
    answers.shuffle(rng);
    answers
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuessResult {
    pub is_correct: bool,
    pub score_delta: u32,
}

#[derive(Clone, Debug)]
pub struct Countdown {
    time_limit: Duration,
    time_elapsed: Duration,
    running: bool,
}

impl Countdown {
    pub fn new(time_limit: Duration) -> Self {
        Countdown {
            time_limit,
            time_elapsed: Duration::default(),
            running: true,
        }
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.time_limit
            .as_secs()
            .saturating_sub(self.time_elapsed.as_secs()) as u32
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn advance(&mut self, dt: Duration) {
        if self.running {
            self.time_elapsed += dt;
        }
    }

    fn stop(&mut self) {
        self.running = false;
    }
}

pub struct QuestionState<O: GameOutput> {
    question: Question,
    number: usize,
    total: usize,
    answers: Vec<Answer>,
    countdown: Countdown,
    input_locked: bool,
    answer_revealed: bool,
    base_score: u32,
    score: ScoreHandle,
    output: O,
}

impl<O: GameOutput> QuestionState<O> {
    pub fn new(
        question: Question,
        answers: Vec<Answer>,
        (number, total): (usize, usize),
        duration: Duration,
        base_score: u32,
        score: ScoreHandle,
        output: O,
    ) -> Self {
        QuestionState {
            question,
            number,
            total,
            answers,
            countdown: Countdown::new(duration),
            input_locked: false,
            answer_revealed: false,
            base_score,
            score,
            output,
        }
    }

    pub fn get_question(&self) -> &Question {
        &self.question
    }

    pub fn get_answers(&self) -> &Vec<Answer> {
        &self.answers
    }

    pub fn get_countdown(&self) -> u32 {
        self.countdown.remaining_seconds()
    }

    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    pub fn is_answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    pub fn select_answer(&mut self, index: usize) -> Result<GuessResult> {
        if self.input_locked {
            return Err(anyhow!("Answers are locked for this question"));
        }

        let is_correct = self
            .answers
            .get(index)
            .map(|answer| answer.is_correct)
            .context(format!("There is no answer #{}", index + 1))?;

        self.countdown.stop();
        self.input_locked = true;
        self.answer_revealed = true;

        let score_delta = if is_correct {
            let points = self
                .question
                .difficulty
                .compute_score(self.base_score, self.countdown.remaining_seconds());
            self.score.add_score(points);
            self.output.say(&Message::GuessCorrect(points));
            points
        } else {
            self.output
                .say(&Message::GuessIncorrect(self.question.correct_answer.clone()));
            0
        };

        self.output.say(&Message::AnswerReveal(self.answers.clone()));

        Ok(GuessResult {
            is_correct,
            score_delta,
        })
    }

    fn time_up(&mut self) {
        self.countdown.stop();
        self.input_locked = true;
        self.answer_revealed = true;
        self.output
            .say(&Message::TimeUp(self.question.correct_answer.clone()));
        self.output.say(&Message::AnswerReveal(self.answers.clone()));
    }
}

impl<O: GameOutput> State for QuestionState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuestionBegins(QuestionCard {
            number: self.number,
            total: self.total,
            question: self.question.clone(),
            answers: self.answers.clone(),
        }));
        self.output
            .say(&Message::Countdown(self.countdown.remaining_seconds()));
    }

    fn on_tick(&mut self, dt: Duration) {
        if !self.countdown.is_running() {
            return;
        }

        let before = self.countdown.remaining_seconds();
        self.countdown.advance(dt);
        let after = self.countdown.remaining_seconds();

        if after != before {
            self.output.say(&Message::Countdown(after));
        }
        if after == 0 {
            self.time_up();
        }
    }

    fn on_end(&mut self) {
        debug!(
            "Leaving question {}/{} with {}s left",
            self.number,
            self.total,
            self.countdown.remaining_seconds()
        );
    }

    fn is_over(&self) -> bool {
        false
    }
}
