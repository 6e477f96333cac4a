// texture-resizer/src/utils/prompt.rs
use std::io::{self, BufRead, Write};

const CANCEL_TOKEN: &str = "n";

/// Only an explicit "n" (any case) cancels; everything else, blank lines,
/// end of input and unreadable answers included, means carry on.
pub fn is_cancel_answer(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(CANCEL_TOKEN)
}

pub fn confirm_continue<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "Continue anyway? (y/n): ")?;
    output.flush()?;

    let mut answer = String::new();
    if let Err(e) = input.read_line(&mut answer) {
        log::debug!("Unreadable confirmation answer, continuing: {}", e);
        return Ok(true);
    }

    Ok(!is_cancel_answer(&answer))
}
