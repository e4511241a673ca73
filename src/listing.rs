use super::*;

// The API omits `items` entirely on some empty results.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct Listing<T> {
  #[serde(default)]
  pub(crate) items: Vec<T>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_items_deserializes_to_empty() {
    let listing =
      serde_json::from_str::<Listing<Channel>>(r#"{"kind": "youtube#channelListResponse"}"#)
        .unwrap();

    assert!(listing.items.is_empty());
  }

  #[test]
  fn present_items_deserialize_in_order() {
    let listing = serde_json::from_str::<Listing<Channel>>(
      r#"{"items": [{"id": "UCa"}, {"id": "UCb"}]}"#,
    )
    .unwrap();

    assert_eq!(listing.items[0].id, "UCa");
    assert_eq!(listing.items[1].id, "UCb");
  }
}
