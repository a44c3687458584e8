//! Interactive menu loop.

use std::io::{self, BufRead, Write};

use crate::blockchain::QuizContract;
use crate::interaction;
use crate::session::Session;

const MENU: &str = "Pick an option:\n\
                    1. Show question.\n\
                    2. Send answer.\n\
                    3. Check if you answered correctly.\n\
                    4. Exit application.";

/// A recognized menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowQuestion,
    SendAnswer,
    CheckCorrect,
    Exit,
}

impl MenuChoice {
    /// Exact match only; padded or blank input is not a choice.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::ShowQuestion),
            "2" => Some(MenuChoice::SendAnswer),
            "3" => Some(MenuChoice::CheckCorrect),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Read one line without its terminator. `None` at end of input.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Show the menu and dispatch choices until "4" or end of input.
pub async fn run<C, R, W>(session: &Session<C>, mut input: R, mut out: W) -> io::Result<()>
where
    C: QuizContract,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "{}", MENU)?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            tracing::debug!("Input closed, leaving menu");
            writeln!(out, "Exiting Application.... Goodbye")?;
            return Ok(());
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::ShowQuestion) => {
                interaction::read_question(session, &mut out).await?;
            }
            Some(MenuChoice::SendAnswer) => {
                writeln!(out, "Type in your answer")?;
                out.flush()?;
                let Some(answer) = read_line(&mut input)? else {
                    writeln!(out, "Exiting Application.... Goodbye")?;
                    return Ok(());
                };
                interaction::send_answer(session, &answer, &mut out).await?;
            }
            Some(MenuChoice::CheckCorrect) => {
                interaction::check_correct(session, &mut out).await?;
            }
            Some(MenuChoice::Exit) => {
                writeln!(out, "Exiting Application.... Goodbye")?;
                return Ok(());
            }
            None => {
                writeln!(out, "Invalid option. Please try again.")?;
            }
        }
    }
}
