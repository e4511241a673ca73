use super::*;

#[derive(Debug)]
pub(crate) enum Outcome {
  Aborted,
  Clean,
  Swept(DeleteReport),
}

pub(crate) async fn run_sweep(
  api: &impl YouTubeApi,
  video_id: &str,
  ask: &mut dyn FnMut() -> Result<bool>,
) -> Result<Outcome> {
  match validate_ownership(api, video_id).await {
    Ok(channel_title) => {
      println!(
        "Ownership confirmed: this video belongs to your channel ({channel_title})."
      );
    }
    Err(error) => {
      eprintln!("{} {error:#}", "warning:".bold().yellow());

      println!("Make sure you are signed in with the account that owns the video.");

      if !ask()? {
        return Ok(Outcome::Aborted);
      }
    }
  }

  let flagged = match scan_comments(api, video_id).await {
    Ok(flagged) => flagged,
    Err(error) => {
      eprintln!(
        "{} could not fetch comments: {error:#}",
        "warning:".bold().yellow()
      );

      Vec::new()
    }
  };

  if flagged.is_empty() {
    return Ok(Outcome::Clean);
  }

  println!("Found {} spam comments. Deleting...", flagged.len());

  Ok(Outcome::Swept(delete_comments(api, &flagged).await))
}
