use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Settings {
    pub question_count: usize,
    pub question_duration: Duration,
    pub base_score: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            question_count: 5,
            question_duration: Duration::from_secs(30),
            base_score: 10,
        }
    }
}
