use log::{debug, info};
use parking_lot::RwLock;
use std::io::Write;
use std::sync::Arc;

use crate::game::quiz::definition::{Answer, Difficulty};
use crate::output::{GameOutput, Message, QuestionCard, Route};

#[derive(Clone, Debug, Default)]
pub struct TerminalOutput {
    // True while the cursor sits at the end of a countdown line
    countdown_line_open: Arc<RwLock<bool>>,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Default::default()
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            Loading => "⏳ Fetching questions...".into(),
            FetchFailed(reason) => format!(
                "⚠️ Could not load the quiz: {}\nType `retry` to try again or `quit` to leave.",
                reason
            ),
            QuestionBegins(card) => interpret_question_card(card),
            Countdown(seconds) => format!("⏱️ {:>2}s remaining", seconds),
            GuessCorrect(points) => format!("✅ Correct! You earned {} points.", points),
            GuessIncorrect(answer) => format!("❌ Wrong! The answer was **{}**.", answer),
            TimeUp(answer) => format!("⌛ Time's up! The answer was **{}**.", answer),
            AnswerReveal(answers) => {
                let mut reveal = String::new();
                for (index, answer) in answers.iter().enumerate() {
                    let mark = if answer.is_correct { "✅" } else { "❌" };
                    reveal += &format!("{} [{}] {}\n", mark, index + 1, answer.text);
                }
                reveal += "Type `next` to continue.";
                reveal
            }
            GameResults(recap) => format!(
                "🏁 Quiz over! You answered {} question(s) correctly for a total of {} points.",
                recap.assertions, recap.score
            ),
            CommandFailed(reason) => format!("🚫 {}", reason),
        }
    }

    fn close_countdown_line(&self) {
        let mut open = self.countdown_line_open.write();
        if *open {
            println!();
            *open = false;
        }
    }
}

fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "easy",
        Difficulty::Medium => "medium",
        Difficulty::Hard => "hard",
        Difficulty::Unrated => "unrated",
    }
}

fn interpret_question_card(card: &QuestionCard) -> String {
    let mut text = format!(
        "\n**Question {}/{}** · {} ({})\n{}\n",
        card.number,
        card.total,
        card.question.category,
        difficulty_label(card.question.difficulty),
        card.question.text
    );
    text += &render_answers(&card.answers);
    text
}

fn render_answers(answers: &[Answer]) -> String {
    answers
        .iter()
        .enumerate()
        .map(|(index, answer)| {
            debug!("Answer control {}: {}", answer.test_id(index), answer.text);
            format!("  [{}] {}", index + 1, answer.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl GameOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        let text = self.interpret_message(message);
        if let Message::Countdown(_) = message {
            print!("\r{}", text);
            std::io::stdout().flush().ok();
            *self.countdown_line_open.write() = true;
        } else {
            self.close_countdown_line();
            println!("{}", text);
        }
    }

    fn navigate(&self, route: Route) {
        self.close_countdown_line();
        info!("Navigating to {}", route);
        println!("➡️  {}", route.path());
    }
}
