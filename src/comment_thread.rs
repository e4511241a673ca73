use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct CommentThread {
  #[allow(dead_code)]
  pub(crate) id: String,
  pub(crate) snippet: ThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ThreadSnippet {
  pub(crate) top_level_comment: Comment,
}
