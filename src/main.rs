use anyhow::{Context, Result};
use dotenv::dotenv;
use log::{error, info};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Instant;

mod commands;
mod config;
mod game;
mod opentdb;
mod output;

use crate::commands::Command;
use crate::config::Config;
use crate::game::quiz::{Quiz, Settings};
use crate::game::score::ScoreBoard;
use crate::opentdb::{OpenTdbClient, TokenSession, TriviaApi};
use crate::output::terminal::TerminalOutput;
use crate::output::{GameOutput, Message};

fn run() -> Result<()> {
    let config = Config::from_env()?;

    let client = OpenTdbClient::new(&config.api_url).context("Could not create HTTP client")?;
    let token = match config.token.clone() {
        Some(token) => token,
        None => client
            .request_token()
            .context("Could not obtain a session token")?,
    };
    let source = Arc::new(TokenSession::new(client, token));

    let output = TerminalOutput::new();
    let mut quiz = Quiz::new(
        Settings::default(),
        source,
        Arc::new(ScoreBoard::new()),
        output.clone(),
    );

    let input = commands::spawn_reader();
    let mut last_tick = Instant::now();
    while !quiz.is_over() {
        match input.recv_timeout(config.tick_interval) {
            Ok(line) => match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => commands::player::execute(&mut quiz, &output, command),
                Err(e) => output.say(&Message::CommandFailed(format!("{}", e))),
            },
            Err(RecvTimeoutError::Timeout) => (),
            Err(RecvTimeoutError::Disconnected) => break,
        }

        let now = Instant::now();
        quiz.tick(now.duration_since(last_tick));
        last_tick = now;
    }
    drop(quiz);
    info!("Quiz torn down");
    Ok(())
}

fn main() {
    dotenv().ok();
    pretty_env_logger::init();

    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
