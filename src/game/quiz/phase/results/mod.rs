use log::debug;
use std::time::Duration;

use crate::game::quiz::State;
use crate::game::score::ScoreHandle;
use crate::output::{GameOutput, Message, Route};


pub struct ResultsState<O> {
    score: ScoreHandle,
    output: O,
}

impl<O> ResultsState<O> {
    pub fn new(score: ScoreHandle, output: O) -> Self {
        ResultsState { score, output }
    }
}

impl<O: GameOutput> State for ResultsState<O> {
    fn on_tick(&mut self, _dt: Duration) {}

    fn on_begin(&mut self) {
        let recap = self.score.get_recap();
        debug!(
            "Quiz complete with {} points over {} correct answers",
            recap.score, recap.assertions
        );
        self.output.say(&Message::GameResults(recap));
        self.output.navigate(Route::Feedback);
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
