use super::*;

const CALLBACK_PAGE: &str = "\
<html>
  <body style=\"text-align: center; font-family: sans-serif; padding: 20px;\">
    <h2>Sign-in complete</h2>
    <p>You can close this page and return to the terminal.</p>
  </body>
</html>";

pub(crate) struct Authenticator {
  client: reqwest::Client,
  credentials: InstalledCredentials,
  token_path: PathBuf,
}

impl Authenticator {
  const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

  const SCOPE: &str = "https://www.googleapis.com/auth/youtube.force-ssl";

  const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

  fn auth_url(&self, redirect_uri: &str) -> Result<Url> {
    let mut url = Url::parse(Self::AUTH_URL)?;

    url
      .query_pairs_mut()
      .append_pair("access_type", "offline")
      .append_pair("client_id", &self.credentials.client_id)
      .append_pair("redirect_uri", redirect_uri)
      .append_pair("response_type", "code")
      .append_pair("scope", Self::SCOPE);

    Ok(url)
  }

  pub(crate) async fn authorize(&self) -> Result<String> {
    if let Some(stored) = StoredToken::load(&self.token_path)? {
      return self.refresh(stored).await;
    }

    let redirect_uri = self.credentials.redirect_uri()?.to_string();

    let auth_url = self.auth_url(&redirect_uri)?;

    if webbrowser::open(auth_url.as_str()).is_ok() {
      println!("Complete the sign-in in your browser, or open this URL:");
    } else {
      println!("Open this URL in your browser to authorize access:");
    }

    println!("{auth_url}");

    let code = Self::wait_for_code(&redirect_uri).await?;

    let token = self
      .exchange(&[
        ("client_id", self.credentials.client_id.as_str()),
        ("client_secret", self.credentials.client_secret.as_str()),
        ("code", &code),
        ("grant_type", "authorization_code"),
        ("redirect_uri", &redirect_uri),
      ])
      .await
      .context("could not exchange the authorization code for a token")?;

    let stored = StoredToken {
      access_token: token.access_token.clone(),
      refresh_token: token.refresh_token,
    };

    stored.save(&self.token_path)?;

    println!("Token saved to {}.", self.token_path.display());

    Ok(token.access_token)
  }

  async fn exchange(&self, params: &[(&str, &str)]) -> Result<TokenResponse> {
    let response = self
      .client
      .post(Self::TOKEN_URL)
      .form(params)
      .send()
      .await?;

    let status = response.status();

    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();

      anyhow::bail!("token endpoint returned {status}: {body}");
    }

    Ok(response.json().await?)
  }

  pub(crate) fn new(credentials: InstalledCredentials) -> Self {
    Self {
      client: reqwest::Client::new(),
      credentials,
      token_path: Self::token_path(),
    }
  }

  async fn refresh(&self, stored: StoredToken) -> Result<String> {
    let Some(refresh_token) = stored.refresh_token.clone() else {
      return Ok(stored.access_token);
    };

    let token = self
      .exchange(&[
        ("client_id", self.credentials.client_id.as_str()),
        ("client_secret", self.credentials.client_secret.as_str()),
        ("grant_type", "refresh_token"),
        ("refresh_token", &refresh_token),
      ])
      .await
      .with_context(|| {
        format!(
          "could not refresh the stored token (delete {} to sign in again)",
          self.token_path.display()
        )
      })?;

    let updated = StoredToken {
      access_token: token.access_token.clone(),
      refresh_token: token.refresh_token.or(stored.refresh_token),
    };

    updated.save(&self.token_path)?;

    Ok(token.access_token)
  }

  fn token_path() -> PathBuf {
    if let Ok(path) = env::var("YTSWEEP_TOKEN_FILE") {
      return PathBuf::from(path);
    }

    PathBuf::from("token.json")
  }

  // Resolves exactly once: connections are accepted until one carries an
  // authorization code, then the listener is dropped.
  async fn wait_for_code(redirect_uri: &str) -> Result<String> {
    let redirect = Url::parse(redirect_uri)
      .with_context(|| format!("invalid redirect URI `{redirect_uri}`"))?;

    let port = redirect.port_or_known_default().unwrap_or(80);

    let listener = TcpListener::bind(("127.0.0.1", port))
      .await
      .with_context(|| {
        format!("could not listen on port {port} for the OAuth callback")
      })?;

    println!("Waiting for the OAuth callback on port {port}...");

    loop {
      let (mut stream, _) = listener.accept().await?;

      let mut request_line = String::new();

      BufReader::new(&mut stream)
        .read_line(&mut request_line)
        .await?;

      match extract_code(&request_line) {
        Some(code) => {
          respond(&mut stream, "200 OK", CALLBACK_PAGE).await?;

          return Ok(code);
        }
        None => {
          respond(&mut stream, "404 Not Found", "").await?;
        }
      }
    }
  }
}

fn extract_code(request_line: &str) -> Option<String> {
  let path = request_line.split_whitespace().nth(1)?;

  let url = Url::parse(&format!("http://localhost{path}")).ok()?;

  url
    .query_pairs()
    .find(|(key, _)| key == "code")
    .map(|(_, value)| value.into_owned())
}

async fn respond(
  stream: &mut tokio::net::TcpStream,
  status: &str,
  body: &str,
) -> Result {
  let response = format!(
    "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
    body.len()
  );

  stream.write_all(response.as_bytes()).await?;

  stream.shutdown().await?;

  Ok(())
}
