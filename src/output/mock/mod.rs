use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{GameOutput, Message, Route};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entry {
    Text(Message),
    Navigation(Route),
}

#[derive(Clone, Default)]
pub struct MockGameOutput {
    entries: Arc<RwLock<Vec<Entry>>>,
}

impl MockGameOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Message> {
        let entries = std::mem::replace(&mut *self.entries.write(), Vec::new());
        entries
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Text(message) => Some(message),
                Entry::Navigation(_) => None,
            })
            .collect()
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.entries
            .read()
            .iter()
            .any(|entry| *entry == Entry::Text(message.clone()))
    }

    pub fn count_messages<F: Fn(&Message) -> bool>(&self, predicate: F) -> usize {
        self.entries
            .read()
            .iter()
            .filter(|entry| match entry {
                Entry::Text(message) => predicate(message),
                Entry::Navigation(_) => false,
            })
            .count()
    }

    pub fn navigations(&self) -> Vec<Route> {
        self.entries
            .read()
            .iter()
            .filter_map(|entry| match entry {
                Entry::Navigation(route) => Some(*route),
                Entry::Text(_) => None,
            })
            .collect()
    }
}

impl GameOutput for MockGameOutput {
    fn say(&self, message: &Message) {
        self.entries.write().push(Entry::Text(message.clone()));
    }

    fn navigate(&self, route: Route) {
        self.entries.write().push(Entry::Navigation(route));
    }
}
