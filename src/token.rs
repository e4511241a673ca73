use super::*;

#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct StoredToken {
  pub(crate) access_token: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub(crate) refresh_token: Option<String>,
}

impl StoredToken {
  fn ensure_parent_dir(path: &Path) -> Result {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }

    Ok(())
  }

  pub(crate) fn load(path: &Path) -> Result<Option<Self>> {
    if !path.exists() {
      return Ok(None);
    }

    let data = fs::read(path)
      .with_context(|| format!("could not read {}", path.display()))?;

    Ok(Some(serde_json::from_slice(&data).with_context(|| {
      format!("could not parse {}", path.display())
    })?))
  }

  pub(crate) fn save(&self, path: &Path) -> Result {
    Self::ensure_parent_dir(path)?;

    fs::write(path, serde_json::to_vec_pretty(self)?)
      .with_context(|| format!("could not write {}", path.display()))?;

    Ok(())
  }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
  pub(crate) access_token: String,
  #[serde(default)]
  pub(crate) refresh_token: Option<String>,
}
