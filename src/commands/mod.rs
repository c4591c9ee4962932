use anyhow::{anyhow, Context, Result};
use log::error;
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver};
use std::thread;

pub mod player;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Answer(usize),
    Next,
    Retry,
    Quit,
}

fn parse_answer_number(number: &str) -> Result<usize> {
    let number: usize = number
        .parse()
        .context(format!("`{}` is not an answer number", number))?;
    if number == 0 {
        return Err(anyhow!("Answers are numbered from 1"));
    }
    Ok(number - 1)
}

impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        let line = line.trim().to_lowercase();
        let mut words = line.split_whitespace();
        let command = match (words.next(), words.next(), words.next()) {
            (Some("next"), None, None) | (Some("n"), None, None) => Command::Next,
            (Some("retry"), None, None) | (Some("r"), None, None) => Command::Retry,
            (Some("quit"), None, None) | (Some("q"), None, None) => Command::Quit,
            (Some("answer"), Some(number), None) | (Some("a"), Some(number), None) => {
                Command::Answer(parse_answer_number(number)?)
            }
            (Some(number), None, None) if number.chars().all(|c| c.is_ascii_digit()) => {
                Command::Answer(parse_answer_number(number)?)
            }
            (None, _, _) => {
                return Err(anyhow!("Type an answer number, `next`, `retry` or `quit`"));
            }
            _ => return Err(anyhow!("Unknown command `{}`", line)),
        };
        Ok(command)
    }
}

pub fn spawn_reader() -> Receiver<String> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if sender.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!("Could not read from stdin: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}
