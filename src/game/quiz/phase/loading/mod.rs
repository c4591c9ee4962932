use std::time::Duration;

use crate::game::quiz::State;
use crate::opentdb::{self, FetchHandle, FetchState, SourceHandle};
use crate::output::{GameOutput, Message};


pub struct LoadingState<O> {
    source: SourceHandle,
    amount: usize,
    fetch_handle: Option<FetchHandle>,
    fetch_state: FetchState,
    output: O,
}

impl<O: GameOutput> LoadingState<O> {
    pub fn new(source: SourceHandle, amount: usize, output: O) -> Self {
        LoadingState {
            source,
            amount,
            fetch_handle: None,
            fetch_state: FetchState::InProgress,
            output,
        }
    }

    pub fn take_result(&mut self) -> FetchState {
        std::mem::replace(&mut self.fetch_state, FetchState::InProgress)
    }
}

impl<O: GameOutput> State for LoadingState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::Loading);
        self.fetch_handle = Some(opentdb::fetch_in_background(
            self.source.clone(),
            self.amount,
        ));
    }

    fn on_tick(&mut self, _dt: Duration) {
        if let FetchState::InProgress = self.fetch_state {
            if let Some(handle) = &self.fetch_handle {
                self.fetch_state = handle.get_state();
            }
        }
    }

    fn on_end(&mut self) {
        self.fetch_handle = None;
    }

    fn is_over(&self) -> bool {
        match self.fetch_state {
            FetchState::InProgress => false,
            FetchState::Success(_) | FetchState::Failure(_) => true,
        }
    }
}
