//! Decoding of operator input lines.

use crate::player::state::Command;

/// A decoded input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Command(Command),
    Quit,
}

/// Decode the first whitespace-separated token of `line`.
///
/// Only the single characters `p`, `s`, `f`, `r` and `k` are recognized;
/// anything else (including an empty line) yields `None`.
pub fn parse_command(line: &str) -> Option<Token> {
    let token = line.split_whitespace().next()?;
    match token {
        "p" => Some(Token::Command(Command::Play)),
        "s" => Some(Token::Command(Command::Stop)),
        "f" => Some(Token::Command(Command::FastForward)),
        "r" => Some(Token::Command(Command::Rewind)),
        "k" => Some(Token::Quit),
        _ => None,
    }
}
