use super::*;

// The five remote calls the sweep needs, kept behind a trait so the scanner,
// deleter and orchestrator can run against in-memory fakes in tests.
pub(crate) trait YouTubeApi {
  async fn delete_comment(&self, comment_id: &str) -> Result;

  async fn list_comment_threads(
    &self,
    video_id: &str,
    max_results: u32,
  ) -> Result<Vec<CommentThread>>;

  async fn my_channel_id(&self) -> Result<Option<String>>;

  async fn resolve_thread(
    &self,
    thread_id: &str,
  ) -> Result<Option<CommentThread>>;

  async fn video(&self, video_id: &str) -> Result<Option<Video>>;
}
