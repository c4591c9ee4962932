use std::time::Duration;

use crate::game::quiz::State;
use crate::opentdb::FetchError;
use crate::output::{GameOutput, Message};


pub struct FailedState<O> {
    error: FetchError,
    output: O,
}

impl<O: GameOutput> FailedState<O> {
    pub fn new(error: FetchError, output: O) -> Self {
        FailedState { error, output }
    }
}

impl<O: GameOutput> State for FailedState<O> {
    fn on_begin(&mut self) {
        self.output
            .say(&Message::FetchFailed(self.error.to_string()));
    }

    fn on_tick(&mut self, _dt: Duration) {}

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
