use super::*;

/// Tags assumed to start a new line of text.
pub const BLOCK_TAGS: &[&str] = &[
  "address",
  "article",
  "aside",
  "blockquote",
  "caption",
  "code",
  "cite",
  "div",
  "dl",
  "details",
  "footer",
  "h1",
  "h2",
  "h3",
  "h4",
  "h5",
  "h6",
  "header",
  "label",
  "ul",
  "ol",
  "li",
  "nav",
  "p",
  "pre",
  "q",
  "table",
  "tr",
  "textarea",
  "select",
  "section",
];

/// Elements that carry no text and are dropped before extraction.
pub const MEDIA_TAGS: &[&str] = &["img", "map", "audio", "canvas"];

/// Turns serialized inner markup into normalized lines of text.
///
/// Entities are decoded before the remaining markup is stripped;
/// [`TextOptions::keep_escaped_markup`] swaps those two steps.
pub(crate) fn markup_to_text(markup: &str, options: &TextOptions) -> String {
  let broken = re::BREAK_TAG.replace_all(markup, "\n");

  let blocked = re::BLOCK_OPEN_TAG.replace_all(&broken, "\n${0}");

  let collapsed = collapse_whitespace(&blocked);

  let stripped = if options.keep_escaped_markup {
    decode_entities(&re::MARKUP.replace_all(&collapsed, "")).into_owned()
  } else {
    re::MARKUP
      .replace_all(&decode_entities(&collapsed), "")
      .into_owned()
  };

  text::join_lines(text::split_lines(&stripped), options)
}

impl Document {
  /// Plain text of the content root with default [`TextOptions`].
  pub fn clean_text(&mut self) -> Result<String> {
    self.clean_text_of_with(self.root_id, &TextOptions::default())
  }

  /// Plain text of `node` with default [`TextOptions`].
  pub fn clean_text_of(&mut self, node: NodeId) -> Result<String> {
    self.clean_text_of_with(node, &TextOptions::default())
  }

  /// Plain text of `node`; media elements inside it are removed first.
  pub fn clean_text_of_with(
    &mut self,
    node: NodeId,
    options: &TextOptions,
  ) -> Result<String> {
    Pipeline::for_text(Context::new(self, node)).run()?;

    Ok(markup_to_text(&self.inner_html_of(node), options))
  }

  /// Plain text of the content root.
  pub fn clean_text_with(&mut self, options: &TextOptions) -> Result<String> {
    self.clean_text_of_with(self.root_id, options)
  }
}
