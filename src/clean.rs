use super::*;

impl Document {
  /// Prunes the document according to `options` and serializes the content
  /// root.
  pub fn clean_html(&mut self, options: &CleanOptions) -> Result<String> {
    let root = self.root_id;

    Pipeline::for_clean_html(Context::new(self, root), options).run()?;

    Ok(decode_text(&format_markup(&self.to_html(), options)))
  }
}

/// Decodes entities in the text between tags; tags and comments pass through.
fn decode_text(markup: &str) -> String {
  let mut decoded = String::with_capacity(markup.len());

  let mut last = 0;

  for tag in re::MARKUP.find_iter(markup) {
    decoded.push_str(&decode_entities(&markup[last..tag.start()]));
    decoded.push_str(tag.as_str());
    last = tag.end();
  }

  decoded.push_str(&decode_entities(&markup[last..]));

  decoded
}

fn format_markup(markup: &str, options: &CleanOptions) -> String {
  if options.single_line {
    return re::HTML_WHITESPACE
      .replace_all(markup, " ")
      .trim()
      .replace("> <", "><");
  }

  let collapsed = collapse_whitespace(markup);

  re::LINE_BREAK
    .split(&collapsed)
    .map(str::trim)
    .collect::<Vec<&str>>()
    .join(options.line_ending.as_str())
}
