//! Menu actions against the bound quiz.
//!
//! Each action reports its result or failure on the CLI output and returns;
//! only I/O errors on that output propagate.

use std::io::{self, Write};

use crate::blockchain::QuizContract;
use crate::error::QuizError;
use crate::hashing::answer_digest;
use crate::session::Session;

/// Printed after read failures that may stem from an unconfirmed transaction.
pub const TRANSACTION_WAIT_HINT: &str =
    "If you've just started the application, wait for the network to confirm your transaction.";

/// Print the question stored in the contract.
pub async fn read_question<C, W>(session: &Session<C>, out: &mut W) -> io::Result<()>
where
    C: QuizContract,
    W: Write,
{
    match session.question().await {
        Ok(question) => writeln!(out, "Question: {}", question),
        Err(e) => report(out, &e),
    }
}

/// Hash `answer` and submit it to the contract.
pub async fn send_answer<C, W>(session: &Session<C>, answer: &str, out: &mut W) -> io::Result<()>
where
    C: QuizContract,
    W: Write,
{
    match session.send_answer(answer_digest(answer)).await {
        Ok(tx_hash) => writeln!(
            out,
            "Answer sent! Please wait for tx {} to be confirmed.",
            tx_hash
        ),
        Err(e) => report(out, &e),
    }
}

/// Ask the contract whether this account answered correctly.
pub async fn check_correct<C, W>(session: &Session<C>, out: &mut W) -> io::Result<()>
where
    C: QuizContract,
    W: Write,
{
    match session.check_board().await {
        Ok(correct) => writeln!(out, "Were you correct?: {}", correct),
        Err(e) => report(out, &e),
    }
}

fn report<W: Write>(out: &mut W, err: &QuizError) -> io::Result<()> {
    tracing::warn!(error = %err, "Contract interaction failed");
    writeln!(out, "Error: {}", err)?;
    if err.may_be_unconfirmed() {
        writeln!(out, "{}", TRANSACTION_WAIT_HINT)?;
    }
    Ok(())
}
