use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Video {
  #[allow(dead_code)]
  pub(crate) id: String,
  pub(crate) snippet: VideoSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoSnippet {
  pub(crate) channel_id: String,
  pub(crate) channel_title: String,
  pub(crate) title: String,
}
