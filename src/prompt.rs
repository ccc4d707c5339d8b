use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

// ---------------------------------------------------------------------------
// Console prompt helpers
// ---------------------------------------------------------------------------
//
// Every interactive loop in the program goes through these helpers, which work
// over generic readers/writers so they can be driven by in-memory buffers in
// tests instead of a live console.

/// Print a question and return the operator's answer, trimmed and lowercased.
///
/// Fails if the input stream is closed, so an EOF on stdin ends the program
/// instead of spinning on the prompt.
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    writeln!(out, "\n{question}")?;
    out.flush()?;

    let mut line = String::new();
    let bytes = input.read_line(&mut line).context("reading console input")?;
    if bytes == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim().to_lowercase())
}

/// Ask until `parse` accepts the answer; on rejection print `guidance` and
/// re-prompt. Never gives up on invalid input.
pub fn ask_until<R, W, T, F>(
    input: &mut R,
    out: &mut W,
    question: &str,
    guidance: &str,
    parse: F,
) -> Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        let answer = ask(input, out, question)?;
        match parse(&answer) {
            Some(value) => return Ok(value),
            None => writeln!(out, "{guidance}")?,
        }
    }
}

/// Ask a yes/no question; anything else prints `clarification` and re-prompts.
pub fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
    clarification: &str,
) -> Result<bool> {
    ask_until(input, out, question, clarification, |answer| match answer {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn answers_are_trimmed_and_lowercased() {
        let mut input = Cursor::new(b"  ChIcAgO \n".to_vec());
        let mut out = Vec::new();
        let answer = ask(&mut input, &mut out, "Which city?").unwrap();
        assert_eq!(answer, "chicago");
    }

    #[test]
    fn closed_input_is_an_error_not_a_spin() {
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        assert!(ask(&mut input, &mut out, "Which city?").is_err());
    }

    #[test]
    fn ask_until_reprompts_with_guidance() {
        let mut input = Cursor::new(b"blue\ngreen\n".to_vec());
        let mut out = Vec::new();
        let answer = ask_until(&mut input, &mut out, "Colour?", "Only green works.", |s| {
            (s == "green").then(|| s.to_string())
        })
        .unwrap();
        assert_eq!(answer, "green");
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Only green works."));
    }

    #[test]
    fn yes_no_clarifies_on_anything_else() {
        let mut input = Cursor::new(b"maybe\nYES\n".to_vec());
        let mut out = Vec::new();
        let answer = ask_yes_no(&mut input, &mut out, "Continue?", "Please say yes or no.")
            .unwrap();
        assert!(answer);
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Please say yes or no."));
    }
}
