use anyhow::{anyhow, Result};

pub mod question;

pub use question::{Answer, Difficulty, Question, RawQuestion};

#[derive(Clone, Debug)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn new(questions: Vec<Question>) -> Result<QuizDefinition> {
        if questions.is_empty() {
            return Err(anyhow!("A quiz needs at least one question"));
        }
        Ok(QuizDefinition { questions })
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn get_question(&self, position: usize) -> Option<&Question> {
        self.questions.get(position)
    }

    pub fn is_last(&self, position: usize) -> bool {
        position + 1 >= self.questions.len()
    }
}
