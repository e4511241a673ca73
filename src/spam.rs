use super::*;

// Promotional spam dodges keyword filters with full-width letters, combining
// marks and other compatibility characters. NFKD maps those back to plain
// forms, so any text the decomposition changes is treated as spam. Legitimate
// accented text trips this too; see DESIGN.md.
pub(crate) fn is_spam(text: &str) -> bool {
  text.nfkd().ne(text.chars())
}
