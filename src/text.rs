use super::*;

/// Collapses runs of spaces and tabs into a single space.
#[must_use]
pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
  re::HORIZONTAL_WHITESPACE.replace_all(text, " ")
}

/// Decodes named and numeric character references.
#[must_use]
pub fn decode_entities(text: &str) -> Cow<'_, str> {
  html_escape::decode_html_entities(text)
}

/// Whether `text` is empty once whitespace is trimmed.
///
/// U+00A0 counts as content because it serializes as `&nbsp;`.
#[must_use]
pub fn is_blank(text: &str) -> bool {
  text
    .chars()
    .all(|c| c.is_whitespace() && c != '\u{a0}')
}

/// Normalizes free text into trimmed, entity-decoded lines joined by the
/// configured line ending.
#[must_use]
pub fn normalize(text: &str, options: &TextOptions) -> String {
  let collapsed = collapse_whitespace(text);

  let lines = split_lines(&collapsed)
    .into_iter()
    .map(|line| decode_entities(&line).into_owned())
    .collect::<Vec<String>>();

  join_lines(lines, options)
}

pub(crate) fn split_lines(text: &str) -> Vec<String> {
  re::LINE_BREAK
    .split(text)
    .map(|line| line.trim().to_string())
    .collect()
}

pub(crate) fn join_lines(lines: Vec<String>, options: &TextOptions) -> String {
  let Some(first) = lines.iter().position(|line| !line.is_empty()) else {
    return String::new();
  };

  let last = lines
    .iter()
    .rposition(|line| !line.is_empty())
    .unwrap_or(first);

  let mut kept: Vec<String> = Vec::with_capacity(last - first + 1);

  for line in lines.into_iter().skip(first).take(last - first + 1) {
    let previous_blank = kept.last().is_some_and(String::is_empty);

    match options.blank_lines {
      BlankLines::Collapse if line.is_empty() && previous_blank => continue,
      BlankLines::Remove if line.is_empty() => continue,
      _ => kept.push(line),
    }
  }

  kept.join(options.line_ending.as_str())
}
