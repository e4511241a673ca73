use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Channel {
  pub(crate) id: String,
}
