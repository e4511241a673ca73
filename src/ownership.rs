use super::*;

#[derive(Debug, Error)]
pub(crate) enum OwnershipError {
  #[error("could not find a channel for the authenticated account")]
  AuthChannelNotFound,
  #[error(
    "video `{video_title}` belongs to channel `{channel_title}`, not to your account"
  )]
  NotOwner {
    channel_title: String,
    video_title: String,
  },
  #[error("no video found with id {0}")]
  VideoNotFound(String),
}

pub(crate) async fn validate_ownership(
  api: &impl YouTubeApi,
  video_id: &str,
) -> Result<String> {
  let my_channel_id = api
    .my_channel_id()
    .await?
    .ok_or(OwnershipError::AuthChannelNotFound)?;

  let video = api
    .video(video_id)
    .await?
    .ok_or_else(|| OwnershipError::VideoNotFound(video_id.to_string()))?;

  if video.snippet.channel_id != my_channel_id {
    return Err(
      OwnershipError::NotOwner {
        channel_title: video.snippet.channel_title,
        video_title: video.snippet.title,
      }
      .into(),
    );
  }

  Ok(video.snippet.channel_title)
}
