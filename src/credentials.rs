use super::*;

#[derive(Debug, Deserialize)]
struct CredentialsFile {
  installed: InstalledCredentials,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InstalledCredentials {
  pub(crate) client_id: String,
  pub(crate) client_secret: String,
  pub(crate) redirect_uris: Vec<String>,
}

impl InstalledCredentials {
  pub(crate) fn load() -> Result<Self> {
    let path = Self::path();

    let data = fs::read(&path).with_context(|| {
      format!(
        "could not read {} (download the installed-app OAuth client file from the Google Cloud console)",
        path.display()
      )
    })?;

    Ok(
      serde_json::from_slice::<CredentialsFile>(&data)
        .with_context(|| format!("could not parse {}", path.display()))?
        .installed,
    )
  }

  fn path() -> PathBuf {
    if let Ok(path) = env::var("YTSWEEP_CREDENTIALS_FILE") {
      return PathBuf::from(path);
    }

    PathBuf::from("credentials.json")
  }

  pub(crate) fn redirect_uri(&self) -> Result<&str> {
    self
      .redirect_uris
      .first()
      .map(String::as_str)
      .context("the credentials file lists no redirect URIs")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_an_installed_app_credentials_file() {
    let file = serde_json::from_str::<CredentialsFile>(
      r#"{
        "installed": {
          "client_id": "123.apps.googleusercontent.com",
          "project_id": "sweeper",
          "auth_uri": "https://accounts.google.com/o/oauth2/auth",
          "token_uri": "https://oauth2.googleapis.com/token",
          "client_secret": "secret",
          "redirect_uris": ["http://localhost"]
        }
      }"#,
    )
    .unwrap();

    assert_eq!(file.installed.client_id, "123.apps.googleusercontent.com");
    assert_eq!(file.installed.redirect_uri().unwrap(), "http://localhost");
  }

  #[test]
  fn empty_redirect_uris_is_an_error() {
    let credentials = InstalledCredentials {
      client_id: "id".to_string(),
      client_secret: "secret".to_string(),
      redirect_uris: Vec::new(),
    };

    assert!(credentials.redirect_uri().is_err());
  }
}
