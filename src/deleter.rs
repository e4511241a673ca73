use super::*;

const FAILURE_HINTS: &str = "\
Likely causes:
  - the comment id is invalid or the comment was already deleted
  - the signed-in account has no permission to delete this comment
  - a thread id was passed where a comment id was expected
  - the API quota or rate limit was exceeded";

#[derive(Debug)]
pub(crate) struct DeleteFailure {
  pub(crate) id: String,
  pub(crate) reason: String,
}

#[derive(Debug, Default)]
pub(crate) struct DeleteReport {
  pub(crate) deleted: Vec<String>,
  pub(crate) failed: Vec<DeleteFailure>,
}

pub(crate) async fn delete_comments(
  api: &impl YouTubeApi,
  ids: &[String],
) -> DeleteReport {
  let mut report = DeleteReport::default();

  for id in ids {
    println!("Deleting comment {id}...");

    match delete_one(api, id).await {
      Ok(deleted_id) => {
        println!("Deleted comment {deleted_id}.");

        report.deleted.push(deleted_id);
      }
      Err(error) => {
        let failure = DeleteFailure {
          id: id.clone(),
          reason: format!("{error:#}"),
        };

        eprintln!(
          "{} could not delete {}: {}",
          "warning:".bold().yellow(),
          failure.id,
          failure.reason
        );

        report.failed.push(failure);
      }
    }
  }

  if !report.failed.is_empty() {
    eprintln!("{FAILURE_HINTS}");
  }

  report
}

async fn delete_one(api: &impl YouTubeApi, id: &str) -> Result<String> {
  if !looks_like_thread_id(id) {
    api.delete_comment(id).await?;

    return Ok(id.to_string());
  }

  let thread = api
    .resolve_thread(id)
    .await?
    .with_context(|| format!("comment thread {id} not found"))?;

  let comment_id = thread.snippet.top_level_comment.id;

  println!("Thread {id} resolves to comment {comment_id}.");

  api.delete_comment(&comment_id).await?;

  Ok(comment_id)
}

// Thread ids start with `Ug`; reply ids carry a `.`-separated suffix. This is
// shape-guessing the id format docs do not guarantee; see DESIGN.md.
pub(crate) fn looks_like_thread_id(id: &str) -> bool {
  id.starts_with("Ug") && !id.contains('.')
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::{comment::CommentSnippet, comment_thread::ThreadSnippet},
    std::{cell::RefCell, collections::HashSet},
  };

  #[derive(Default)]
  struct FakeApi {
    attempted: RefCell<Vec<String>>,
    fail_ids: HashSet<String>,
    threads: HashSet<String>,
  }

  impl YouTubeApi for FakeApi {
    async fn delete_comment(&self, comment_id: &str) -> Result {
      self.attempted.borrow_mut().push(comment_id.to_string());

      if self.fail_ids.contains(comment_id) {
        anyhow::bail!("403 Forbidden: insufficient permissions");
      }

      Ok(())
    }

    async fn list_comment_threads(
      &self,
      _video_id: &str,
      _max_results: u32,
    ) -> Result<Vec<CommentThread>> {
      unreachable!("the deleter must not scan")
    }

    async fn my_channel_id(&self) -> Result<Option<String>> {
      unreachable!("the deleter must not validate ownership")
    }

    async fn resolve_thread(
      &self,
      thread_id: &str,
    ) -> Result<Option<CommentThread>> {
      Ok(self.threads.contains(thread_id).then(|| CommentThread {
        id: thread_id.to_string(),
        snippet: ThreadSnippet {
          top_level_comment: Comment {
            id: format!("{thread_id}.top"),
            snippet: CommentSnippet {
              author_display_name: "author".to_string(),
              text_display: "text".to_string(),
            },
          },
        },
      }))
    }

    async fn video(&self, _video_id: &str) -> Result<Option<Video>> {
      unreachable!("the deleter must not fetch videos")
    }
  }

  fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(ToString::to_string).collect()
  }

  #[test]
  fn thread_ids_are_recognized_by_shape() {
    assert!(looks_like_thread_id("UgzXyzAbc123"));
    assert!(!looks_like_thread_id("UgzXyzAbc123.9qweRtyUiop"));
    assert!(!looks_like_thread_id("AbcDefGhi"));
    assert!(!looks_like_thread_id(""));
  }

  #[tokio::test]
  async fn one_failure_does_not_stop_the_batch() {
    let api = FakeApi {
      fail_ids: HashSet::from(["c2".to_string()]),
      ..FakeApi::default()
    };

    let report = delete_comments(&api, &ids(&["c1", "c2", "c3"])).await;

    assert_eq!(*api.attempted.borrow(), ids(&["c1", "c2", "c3"]));
    assert_eq!(report.deleted, ids(&["c1", "c3"]));
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].id, "c2");
    assert!(report.failed[0].reason.contains("403"));
  }

  #[tokio::test]
  async fn thread_ids_are_resolved_before_deletion() {
    let api = FakeApi {
      threads: HashSet::from(["UgzThread".to_string()]),
      ..FakeApi::default()
    };

    let report = delete_comments(&api, &ids(&["UgzThread"])).await;

    assert_eq!(*api.attempted.borrow(), ids(&["UgzThread.top"]));
    assert_eq!(report.deleted, ids(&["UgzThread.top"]));
    assert!(report.failed.is_empty());
  }

  #[tokio::test]
  async fn unresolved_threads_are_reported_and_skipped() {
    let api = FakeApi::default();

    let report =
      delete_comments(&api, &ids(&["UgzMissing", "plain.comment"])).await;

    assert_eq!(*api.attempted.borrow(), ids(&["plain.comment"]));
    assert_eq!(report.deleted, ids(&["plain.comment"]));
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].id, "UgzMissing");
    assert!(report.failed[0].reason.contains("not found"));
  }

  #[tokio::test]
  async fn deletes_run_strictly_in_input_order() {
    let api = FakeApi::default();

    delete_comments(&api, &ids(&["z.1", "a.2", "m.3"])).await;

    assert_eq!(*api.attempted.borrow(), ids(&["z.1", "a.2", "m.3"]));
  }
}
