use super::*;

use std::io::Write;

pub(crate) fn confirm(question: &str) -> Result<bool> {
  print!("{question}");

  io::stdout().flush()?;

  let mut answer = String::new();

  io::stdin().read_line(&mut answer)?;

  Ok(is_affirmative(&answer))
}

pub(crate) fn is_affirmative(answer: &str) -> bool {
  answer.trim().eq_ignore_ascii_case("y")
}
