use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Comment {
  pub(crate) id: String,
  pub(crate) snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentSnippet {
  #[serde(default)]
  pub(crate) author_display_name: String,
  pub(crate) text_display: String,
}
