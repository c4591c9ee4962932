use anyhow::{anyhow, Result};
use log::{debug, error};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use self::definition::*;
use self::phase::*;
pub use self::phase::{shuffle_answers, GuessResult, QuestionState};
pub use self::settings::Settings;
use crate::game::score::ScoreHandle;
use crate::opentdb::{FetchError, FetchState, SourceHandle};
use crate::output::GameOutput;

pub mod definition;
mod phase;
mod settings;


trait State {
    fn on_begin(&mut self);
    fn on_tick(&mut self, dt: Duration);
    fn on_end(&mut self);
    fn is_over(&self) -> bool;
}

enum Phase<O: GameOutput> {
    Loading(LoadingState<O>),
    FetchFailed(FailedState<O>),
    Question(QuestionState<O>),
    Results(ResultsState<O>),
}

impl<O: GameOutput> Phase<O> {
    fn get_state(&mut self) -> &mut dyn State {
        match self {
            Phase::Loading(s) => s,
            Phase::FetchFailed(s) => s,
            Phase::Question(s) => s,
            Phase::Results(s) => s,
        }
    }

    fn get_name(&self) -> &'static str {
        match self {
            Phase::Loading(_) => "loading",
            Phase::FetchFailed(_) => "fetch failed",
            Phase::Question(_) => "question",
            Phase::Results(_) => "results",
        }
    }
}

pub struct Quiz<O: GameOutput + Clone> {
    settings: Settings,
    current_phase: Phase<O>,
    definition: Option<QuizDefinition>,
    position: usize,
    source: SourceHandle,
    score: ScoreHandle,
    output: O,
    rng: StdRng,
}

impl<O: GameOutput + Clone> Quiz<O> {
    pub fn new(settings: Settings, source: SourceHandle, score: ScoreHandle, output: O) -> Self {
        Quiz::with_rng(settings, source, score, output, StdRng::from_entropy())
    }

    pub fn with_rng(
        settings: Settings,
        source: SourceHandle,
        score: ScoreHandle,
        output: O,
        rng: StdRng,
    ) -> Self {
        let loading_state =
            LoadingState::new(source.clone(), settings.question_count, output.clone());
        let mut quiz = Quiz {
            settings,
            current_phase: Phase::Loading(loading_state),
            definition: None,
            position: 0,
            source,
            score,
            output,
            rng,
        };
        quiz.current_phase.get_state().on_begin();
        quiz
    }

    pub fn is_over(&self) -> bool {
        match self.current_phase {
            Phase::Results(_) => true,
            _ => false,
        }
    }

    pub fn get_position(&self) -> usize {
        self.position
    }

    pub fn get_question_state(&self) -> Option<&QuestionState<O>> {
        match &self.current_phase {
            Phase::Question(state) => Some(state),
            _ => None,
        }
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        self.current_phase.get_state().on_end();
        debug!(
            "Leaving {} phase for {} phase",
            self.current_phase.get_name(),
            phase.get_name()
        );
        self.current_phase = phase;
        self.current_phase.get_state().on_begin();
    }

    pub fn tick(&mut self, dt: Duration) {
        let state = self.current_phase.get_state();
        state.on_tick(dt);
        if state.is_over() {
            self.advance();
        }
    }

    pub fn select_answer(&mut self, index: usize) -> Result<GuessResult> {
        match &mut self.current_phase {
            Phase::Question(state) => state.select_answer(index),
            _ => Err(anyhow!("There is no active question")),
        }
    }

    pub fn next(&mut self) -> Result<()> {
        match &self.current_phase {
            Phase::Question(state) if state.is_answer_revealed() => {
                self.advance();
                Ok(())
            }
            Phase::Question(_) => Err(anyhow!("Pick an answer before moving on")),
            _ => Err(anyhow!("There is no active question")),
        }
    }

    pub fn retry(&mut self) -> Result<()> {
        match &self.current_phase {
            Phase::FetchFailed(_) => {
                self.begin_loading();
                Ok(())
            }
            _ => Err(anyhow!("There is nothing to retry")),
        }
    }

    fn advance(&mut self) {
        match &mut self.current_phase {
            Phase::Loading(state) => match state.take_result() {
                FetchState::Success(questions) => match QuizDefinition::new(questions) {
                    Ok(definition) => {
                        self.definition = Some(definition);
                        self.position = 0;
                        self.begin_question();
                    }
                    Err(e) => {
                        error!("{:#}", e);
                        let state =
                            FailedState::new(FetchError::EmptyResultSet, self.output.clone());
                        self.set_current_phase(Phase::FetchFailed(state));
                    }
                },
                FetchState::Failure(e) => {
                    let state = FailedState::new(e, self.output.clone());
                    self.set_current_phase(Phase::FetchFailed(state));
                }
                FetchState::InProgress => (),
            },
            Phase::Question(_) => {
                let position = self.position;
                let is_last = self
                    .definition
                    .as_ref()
                    .map_or(true, |d| d.is_last(position));
                if is_last {
                    let state = ResultsState::new(self.score.clone(), self.output.clone());
                    self.set_current_phase(Phase::Results(state));
                } else {
                    self.position += 1;
                    self.begin_question();
                }
            }
            Phase::FetchFailed(_) | Phase::Results(_) => (),
        }
    }

    fn begin_loading(&mut self) {
        let state = LoadingState::new(
            self.source.clone(),
            self.settings.question_count,
            self.output.clone(),
        );
        self.set_current_phase(Phase::Loading(state));
    }

    fn begin_question(&mut self) {
        let definition = match &self.definition {
            Some(definition) => definition,
            None => return,
        };
        let question = match definition.get_question(self.position) {
            Some(question) => question.clone(),
            None => return,
        };
        let total = definition.get_questions().len();
        let answers = shuffle_answers(&question, &mut self.rng);
        let state = QuestionState::new(
            question,
            answers,
            (self.position + 1, total),
            self.settings.question_duration,
            self.settings.base_score,
            self.score.clone(),
            self.output.clone(),
        );
        self.set_current_phase(Phase::Question(state));
    }
}
