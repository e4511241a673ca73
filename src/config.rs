use super::*;

#[derive(Debug)]
pub(crate) struct Config {
  pub(crate) video_id: String,
}

impl Config {
  pub(crate) fn is_valid_video_id(id: &str) -> bool {
    id.len() == 11
      && id
        .bytes()
        .all(|byte| byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_')
  }

  pub(crate) fn load() -> Result<Self> {
    let video_id = env::args()
      .nth(1)
      .or_else(|| env::var("VIDEO_ID").ok())
      .context(
        "no video id given: pass it as the first argument or set VIDEO_ID",
      )?;

    Self::parse(&video_id)
  }

  pub(crate) fn parse(video_id: &str) -> Result<Self> {
    anyhow::ensure!(
      Self::is_valid_video_id(video_id),
      "invalid video id `{video_id}`: expected 11 characters of A-Z, a-z, 0-9, `-` or `_` (e.g. dQw4w9WgXcQ)",
    );

    Ok(Self {
      video_id: video_id.to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_a_well_formed_video_id() {
    assert_eq!(Config::parse("dQw4w9WgXcQ").unwrap().video_id, "dQw4w9WgXcQ");
  }

  #[test]
  fn accepts_hyphen_and_underscore() {
    assert!(Config::parse("a-b_c-d_e-f").is_ok());
  }

  #[test]
  fn rejects_short_ids() {
    assert!(Config::parse("short").is_err());
  }

  #[test]
  fn rejects_long_ids() {
    assert!(Config::parse("dQw4w9WgXcQQ").is_err());
  }

  #[test]
  fn rejects_forbidden_characters() {
    assert!(Config::parse("dQw4w9WgXc!").is_err());
    assert!(Config::parse("dQw4w9WgXc ").is_err());
  }

  #[test]
  fn rejects_non_ascii_of_the_right_length() {
    assert!(Config::parse("dQw4w9WgXcé").is_err());
  }
}
