use super::*;

pub(crate) struct Client {
  client: reqwest::Client,
  token: String,
}

impl Client {
  const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

  async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
      return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    anyhow::bail!("{status}: {body}");
  }

  fn endpoint(path: &str, query: &[(&str, &str)]) -> Result<Url> {
    let mut url = Url::parse(&format!("{}/{path}", Self::API_BASE_URL))?;

    url.query_pairs_mut().extend_pairs(query);

    Ok(url)
  }

  async fn get<T>(&self, url: Url) -> Result<T>
  where
    T: serde::de::DeserializeOwned,
  {
    let response = self
      .client
      .get(url)
      .bearer_auth(&self.token)
      .send()
      .await?;

    Ok(Self::check(response).await?.json::<T>().await?)
  }

  pub(crate) fn new(token: String) -> Self {
    Self {
      client: reqwest::Client::new(),
      token,
    }
  }
}

impl YouTubeApi for Client {
  async fn delete_comment(&self, comment_id: &str) -> Result {
    let url = Self::endpoint("comments", &[("id", comment_id)])?;

    let response = self
      .client
      .delete(url)
      .bearer_auth(&self.token)
      .send()
      .await?;

    Self::check(response).await?;

    Ok(())
  }

  async fn list_comment_threads(
    &self,
    video_id: &str,
    max_results: u32,
  ) -> Result<Vec<CommentThread>> {
    let url = Self::endpoint(
      "commentThreads",
      &[
        ("part", "snippet"),
        ("videoId", video_id),
        ("maxResults", &max_results.to_string()),
      ],
    )?;

    Ok(
      self
        .get::<Listing<CommentThread>>(url)
        .await
        .context("could not list comment threads")?
        .items,
    )
  }

  async fn my_channel_id(&self) -> Result<Option<String>> {
    let url = Self::endpoint("channels", &[("part", "id"), ("mine", "true")])?;

    Ok(
      self
        .get::<Listing<Channel>>(url)
        .await
        .context("could not look up the authenticated channel")?
        .items
        .into_iter()
        .next()
        .map(|channel| channel.id),
    )
  }

  async fn resolve_thread(
    &self,
    thread_id: &str,
  ) -> Result<Option<CommentThread>> {
    let url =
      Self::endpoint("commentThreads", &[("part", "snippet"), ("id", thread_id)])?;

    Ok(
      self
        .get::<Listing<CommentThread>>(url)
        .await
        .with_context(|| format!("could not look up comment thread {thread_id}"))?
        .items
        .into_iter()
        .next(),
    )
  }

  async fn video(&self, video_id: &str) -> Result<Option<Video>> {
    let url =
      Self::endpoint("videos", &[("part", "snippet"), ("id", video_id)])?;

    Ok(
      self
        .get::<Listing<Video>>(url)
        .await
        .with_context(|| format!("could not look up video {video_id}"))?
        .items
        .into_iter()
        .next(),
    )
  }
}
