use super::*;

/// Attribute list of a serialized tag; values are always double-quoted.
const TAG_ATTRIBUTES: &str = r#"(?:\s(?:[^>"]|"[^"]*")*)?/?>"#;

pub(crate) static BLOCK_OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
  let names = extract::BLOCK_TAGS
    .iter()
    .map(|tag| regex::escape(tag))
    .collect::<Vec<String>>()
    .join("|");

  Regex::new(&format!("(?i)<(?:{names}){TAG_ATTRIBUTES}")).unwrap()
});

pub(crate) static BREAK_TAG: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(&format!("(?i)<br{TAG_ATTRIBUTES}")).unwrap());

pub(crate) static HORIZONTAL_WHITESPACE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

pub(crate) static HTML_WHITESPACE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[ \t\r\n\x0C]+").unwrap());

pub(crate) static LINE_BREAK: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// A comment, or a tag whose name starts with a letter, `/`, `!` or `?`.
///
/// A bare `<` followed by anything else is text.
pub(crate) static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"(?s)<!--.*?-->|<[A-Za-z/!?](?:[^<>"]|"[^"]*")*>"#).unwrap()
});

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn block_open_tag_matches_catalogue_only() {
    assert!(BLOCK_OPEN_TAG.is_match("<p>"));
    assert!(BLOCK_OPEN_TAG.is_match(r#"<DIV class="a" id="b">"#));
    assert!(BLOCK_OPEN_TAG.is_match("<h3>"));
    assert!(BLOCK_OPEN_TAG.is_match("<textarea rows=\"2\">"));
    assert!(!BLOCK_OPEN_TAG.is_match("</p>"));
    assert!(!BLOCK_OPEN_TAG.is_match("<span>"));
    assert!(!BLOCK_OPEN_TAG.is_match("<param>"));
    assert!(!BLOCK_OPEN_TAG.is_match("<h7>"));
    assert!(!BLOCK_OPEN_TAG.is_match("<divider>"));
  }

  #[test]
  fn block_open_tag_skips_quoted_angle_brackets() {
    let found = BLOCK_OPEN_TAG
      .find(r#"<div title="a>b">x</div>"#)
      .map(|m| m.as_str());

    assert_eq!(found, Some(r#"<div title="a>b">"#));
  }

  #[test]
  fn break_tag_accepts_all_variants() {
    for tag in ["<br>", "<br/>", "<br />", "<BR>", r#"<br class="x">"#] {
      assert!(BREAK_TAG.is_match(tag), "{tag}");
    }

    assert!(!BREAK_TAG.is_match("<bro>"));
  }

  #[test]
  fn markup_strips_tags_comments_and_doctype() {
    assert_eq!(
      MARKUP.replace_all(
        r#"<!DOCTYPE html><p title="1 > 0">a<!-- <b>x</b> -->b</p>"#,
        ""
      ),
      "ab"
    );
  }

  #[test]
  fn markup_leaves_bare_angle_brackets() {
    assert_eq!(
      MARKUP.replace_all("<p>a < b and <3 > 2</p>", ""),
      "a < b and <3 > 2"
    );
    assert_eq!(MARKUP.replace_all("<p>x <b</p>", ""), "x <b");
  }

  #[test]
  fn line_break_prefers_crlf() {
    assert_eq!(
      LINE_BREAK.split("a\r\nb\nc\rd").collect::<Vec<&str>>(),
      vec!["a", "b", "c", "d"]
    );
  }
}
