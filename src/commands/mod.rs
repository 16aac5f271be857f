pub mod del;
pub mod executable;
pub mod get;
pub mod hget;
pub mod hset;
pub mod llen;
pub mod lpop;
pub mod lpush;
pub mod lrange;
pub mod set;

use std::vec;

use thiserror::Error as ThisError;

use crate::commands::executable::Executable;
use crate::reply::Reply;
use crate::store::{Store, StoreError};

use del::Del;
use get::Get;
use hget::Hget;
use hset::Hset;
use llen::Llen;
use lpop::Lpop;
use lpush::Lpush;
use lrange::Lrange;
use set::Set;

#[derive(Debug, PartialEq)]
pub enum Command {
    Del(Del),
    Get(Get),
    Hget(Hget),
    Hset(Hset),
    Llen(Llen),
    Lpop(Lpop),
    Lpush(Lpush),
    Lrange(Lrange),
    Set(Set),

    /// Session commands, handled by the prompt loop without touching the
    /// store.
    Help,
    Quit,
}

impl Executable for Command {
    fn exec(self, store: Store) -> Result<Reply, StoreError> {
        match self {
            Command::Del(cmd) => cmd.exec(store),
            Command::Get(cmd) => cmd.exec(store),
            Command::Hget(cmd) => cmd.exec(store),
            Command::Hset(cmd) => cmd.exec(store),
            Command::Llen(cmd) => cmd.exec(store),
            Command::Lpop(cmd) => cmd.exec(store),
            Command::Lpush(cmd) => cmd.exec(store),
            Command::Lrange(cmd) => cmd.exec(store),
            Command::Set(cmd) => cmd.exec(store),

            // The REPL intercepts these before execution.
            Command::Help | Command::Quit => Ok(Reply::Ok),
        }
    }
}

impl TryFrom<&str> for Command {
    type Error = CommandParserError;

    /// Parses one input line: whitespace-separated tokens, the first being
    /// the command name, matched case-insensitively.
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let mut tokens = line
            .split_whitespace()
            .map(String::from)
            .collect::<Vec<_>>()
            .into_iter();

        let name = tokens.next().ok_or(CommandParserError::EmptyInput)?;

        let parser = &mut CommandParser {
            command: name.to_lowercase(),
            parts: tokens,
        };

        match name.to_uppercase().as_str() {
            "DEL" => Del::try_from(parser).map(Command::Del),
            "GET" => Get::try_from(parser).map(Command::Get),
            "HGET" => Hget::try_from(parser).map(Command::Hget),
            "HSET" => Hset::try_from(parser).map(Command::Hset),
            "LLEN" => Llen::try_from(parser).map(Command::Llen),
            "LPOP" => Lpop::try_from(parser).map(Command::Lpop),
            "LPUSH" => Lpush::try_from(parser).map(Command::Lpush),
            "LRANGE" => Lrange::try_from(parser).map(Command::Lrange),
            "SET" => Set::try_from(parser).map(Command::Set),
            "HELP" => Ok(Command::Help),
            "QUIT" | "EXIT" | "Q" => Ok(Command::Quit),
            _ => Err(CommandParserError::UnknownCommand { command: name }),
        }
    }
}

pub(crate) struct CommandParser {
    /// Lowercased command name, used in arity error messages.
    command: String,
    parts: vec::IntoIter<String>,
}

impl CommandParser {
    fn wrong_arity(&self) -> CommandParserError {
        CommandParserError::WrongNumberOfArguments {
            command: self.command.clone(),
        }
    }

    fn next_string(&mut self) -> Result<String, CommandParserError> {
        match self.parts.next() {
            Some(token) => Ok(token),
            None => Err(self.wrong_arity()),
        }
    }

    fn next_integer(&mut self) -> Result<i64, CommandParserError> {
        let token = self.next_string()?;
        token
            .parse::<i64>()
            .map_err(|_| CommandParserError::NotAnInteger)
    }

    /// Consumes every remaining token.
    fn rest(&mut self) -> Vec<String> {
        self.parts.by_ref().collect()
    }

    /// Rejects trailing tokens the command does not take.
    fn finish(&mut self) -> Result<(), CommandParserError> {
        match self.parts.next() {
            Some(_) => Err(self.wrong_arity()),
            None => Ok(()),
        }
    }
}

#[derive(Debug, ThisError, PartialEq)]
pub enum CommandParserError {
    #[error("wrong number of arguments for '{command}' command")]
    WrongNumberOfArguments { command: String },
    #[error("unknown command '{command}'")]
    UnknownCommand { command: String },
    #[error("ERR value is not an integer or out of range")]
    NotAnInteger,
    #[error("ERR syntax error")]
    Syntax,
    #[error("empty input")]
    EmptyInput,
}
