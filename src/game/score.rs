use parking_lot::RwLock;
use std::sync::Arc;


pub trait ScoreAccumulator {
    fn add_score(&self, points: u32);
    fn get_recap(&self) -> ScoreRecap;
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScoreRecap {
    pub score: u32,
    pub assertions: u32,
}

#[derive(Clone, Debug, Default)]
pub struct ScoreBoard {
    recap: Arc<RwLock<ScoreRecap>>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Default::default()
    }
}

impl ScoreAccumulator for ScoreBoard {
    fn add_score(&self, points: u32) {
        let mut recap = self.recap.write();
        recap.score += points;
        recap.assertions += 1;
    }

    fn get_recap(&self) -> ScoreRecap {
        *self.recap.read()
    }
}

pub type ScoreHandle = Arc<dyn ScoreAccumulator + Send + Sync>;
