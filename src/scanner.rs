use super::*;

const MAX_RESULTS: u32 = 100;

pub(crate) fn flag_spam(threads: &[CommentThread]) -> Vec<String> {
  let mut flagged = Vec::new();

  for thread in threads {
    let comment = &thread.snippet.top_level_comment;

    let author = &comment.snippet.author_display_name;

    let preview =
      truncate(&sanitize_comment(&comment.snippet.text_display), 120);

    println!("Checking comment from {author}: \"{preview}\"");

    if is_spam(&comment.snippet.text_display) {
      println!("{} {author}: \"{preview}\"", "spam".bold().red());

      flagged.push(comment.id.clone());
    }
  }

  flagged
}

// One page of up to 100 threads; videos with more need repeat runs.
pub(crate) async fn scan_comments(
  api: &impl YouTubeApi,
  video_id: &str,
) -> Result<Vec<String>> {
  Ok(flag_spam(
    &api.list_comment_threads(video_id, MAX_RESULTS).await?,
  ))
}
