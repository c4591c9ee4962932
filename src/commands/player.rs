use anyhow::{anyhow, Result};
use log::{debug, warn};

use crate::commands::Command;
use crate::game::quiz::Quiz;
use crate::output::{GameOutput, Message};

#[cfg(test)]
mod tests;

pub fn execute<O: GameOutput + Clone>(quiz: &mut Quiz<O>, output: &O, command: Command) {
    let result = || -> Result<()> {
        match command {
            Command::Answer(index) => {
                if quiz.get_question_state().map_or(false, |s| s.is_input_locked()) {
                    return Err(anyhow!("This question is settled, type `next` to continue"));
                }
                let guess_result = quiz.select_answer(index)?;
                if let Some(state) = quiz.get_question_state() {
                    debug!(
                        "Question {} ({:?}) answered with {:?} at {}s (correct: {}, +{})",
                        quiz.get_position() + 1,
                        state.get_question().text,
                        state.get_answers()[index].text,
                        state.get_countdown(),
                        guess_result.is_correct,
                        guess_result.score_delta
                    );
                }
            }
            Command::Next => quiz.next()?,
            Command::Retry => quiz.retry()?,
            Command::Quit => (),
        };
        Ok(())
    }();

    if let Err(e) = result {
        warn!("{:#}", e);
        output.say(&Message::CommandFailed(format!("{}", e)));
    }
}
