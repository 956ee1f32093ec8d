use super::*;

impl Document {
  /// Attribute value of the first element matching `path`.
  ///
  /// A missing element or attribute yields `None`.
  pub fn attribute_value(
    &self,
    path: &str,
    attribute: &str,
  ) -> Result<Option<String>> {
    let Some(id) = self.select_one(path)? else {
      return Ok(None);
    };

    Ok(
      self
        .node(id)
        .and_then(|node| {
          node
            .value()
            .as_element()
            .and_then(|element| document::names::attribute(element, attribute))
        })
        .map(str::to_string),
    )
  }

  /// Like [`Document::attribute_value`] but substitutes `default` when absent.
  pub fn attribute_value_or(
    &self,
    path: &str,
    attribute: &str,
    default: &str,
  ) -> Result<String> {
    Ok(
      self
        .attribute_value(path, attribute)?
        .unwrap_or_else(|| default.to_string()),
    )
  }

  /// Every element with the given tag name, in document order.
  #[must_use]
  pub fn descendants(&self, tag: &str) -> Vec<NodeId> {
    self
      .html
      .tree
      .root()
      .descendants()
      .filter(|node| {
        node
          .value()
          .as_element()
          .is_some_and(|element| document::names::is_tag(element, tag))
      })
      .map(|node| node.id())
      .collect()
  }

  /// Trimmed inner markup of the first node matching `path`.
  pub fn inner_html(&self, path: &str) -> Result<Option<String>> {
    Ok(
      self
        .select_one(path)?
        .map(|id| self.inner_html_of(id).trim().to_string()),
    )
  }

  /// Trimmed text content of the first node matching `path`.
  pub fn inner_text(&self, path: &str) -> Result<Option<String>> {
    Ok(
      self
        .select_one(path)?
        .map(|id| self.text_of(id).trim().to_string()),
    )
  }

  /// Collects `input` elements into a key/value map.
  ///
  /// Inputs with a blank key or value are skipped; a later input with the same
  /// key replaces an earlier one.
  #[must_use]
  pub fn input_values(
    &self,
    key_attribute: &str,
    value_attribute: &str,
  ) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();

    for id in self.descendants("input") {
      let Some(element) = self.node(id).and_then(|node| node.value().as_element())
      else {
        continue;
      };

      let key = document::names::attribute(element, key_attribute);
      let value = document::names::attribute(element, value_attribute);

      if let (Some(key), Some(value)) = (key, value)
        && !key.trim().is_empty()
        && !value.trim().is_empty()
      {
        values.insert(key.to_string(), value.to_string());
      }
    }

    values
  }

  /// Nodes matching `path`, in document order. No match is an empty result.
  pub fn select(&self, path: &str) -> Result<Vec<NodeId>> {
    self.select_from(self.root_id, path)
  }

  /// Nodes matching `path` evaluated against `context`.
  ///
  /// Absolute paths ignore the context; a detached context matches nothing.
  pub fn select_from(&self, context: NodeId, path: &str) -> Result<Vec<NodeId>> {
    let path = Path::parse(path)?;
    Ok(path.evaluate(self, context))
  }

  pub fn select_one(&self, path: &str) -> Result<Option<NodeId>> {
    self.select_one_from(self.root_id, path)
  }

  pub fn select_one_from(
    &self,
    context: NodeId,
    path: &str,
  ) -> Result<Option<NodeId>> {
    Ok(self.select_from(context, path)?.into_iter().next())
  }

  /// Evaluates an already compiled path against the content root.
  #[must_use]
  pub fn select_path(&self, path: &Path) -> Vec<NodeId> {
    path.evaluate(self, self.root_id)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  const PAGE: &str = r#"
    <html>
      <head><title>Title</title></head>
      <body>
        <div id="main"> <p>Tom &amp; Jerry</p> </div>
        <a href="/next" data-track="1">Next</a>
        <form>
          <input name="user" value="ada">
          <input name="token" value="  ">
          <input value="orphan">
          <input name="user" value="grace">
          <input name="lang" value="en">
        </form>
      </body>
    </html>
  "#;

  #[test]
  fn inner_html_is_trimmed() {
    let document = Document::parse(PAGE);

    assert_eq!(
      document.inner_html("//div[@id='main']").unwrap().as_deref(),
      Some("<p>Tom &amp; Jerry</p>")
    );
  }

  #[test]
  fn inner_text_is_decoded() {
    let document = Document::parse(PAGE);

    assert_eq!(
      document.inner_text("//div").unwrap().as_deref(),
      Some("Tom & Jerry")
    );
  }

  #[test]
  fn missing_attribute_is_absent() {
    let document = Document::parse(PAGE);

    assert_eq!(
      document.attribute_value("//a", "href").unwrap().as_deref(),
      Some("/next")
    );
    assert_eq!(document.attribute_value("//a", "title").unwrap(), None);
    assert_eq!(document.attribute_value("//table", "id").unwrap(), None);
    assert_eq!(
      document.attribute_value_or("//a", "title", "untitled").unwrap(),
      "untitled"
    );
  }

  #[test]
  fn missing_nodes_are_absent() {
    let document = Document::parse(PAGE);

    assert_eq!(document.inner_html("//table").unwrap(), None);
    assert_eq!(document.inner_text("//table").unwrap(), None);
    assert_eq!(document.select_one("//table").unwrap(), None);
  }

  #[test]
  fn invalid_path_is_an_error() {
    let document = Document::parse(PAGE);

    assert!(matches!(
      document.inner_text("//div["),
      Err(Error::InvalidPath { .. })
    ));
  }

  #[test]
  fn collects_input_values() {
    let document = Document::parse(PAGE);

    let values = document.input_values("name", "value");

    assert_eq!(
      values.into_iter().collect::<Vec<(String, String)>>(),
      vec![
        ("lang".to_string(), "en".to_string()),
        ("user".to_string(), "grace".to_string()),
      ]
    );
  }

  #[test]
  fn descendants_by_tag_name() {
    let document = Document::parse(PAGE);

    assert_eq!(document.descendants("INPUT").len(), 5);
    assert!(document.descendants("table").is_empty());
  }

  #[test]
  fn removed_subtrees_yield_no_matches() {
    let mut document = Document::parse(PAGE);

    let form = document.select_one("//form").unwrap().unwrap();
    let input = document.select_one("//input").unwrap().unwrap();

    document.remove_tags(["form"]);

    assert!(document.select("//input").unwrap().is_empty());
    assert!(document.select_from(form, ".//input").unwrap().is_empty());
    assert!(document.select_from(input, ".").is_err());
    assert!(document.select_from(input, "./*").unwrap().is_empty());
  }

  #[test]
  fn compiled_paths_are_reusable() {
    let document = Document::parse(PAGE);

    let path = Path::parse("//input[@name]").unwrap();

    assert_eq!(document.select_path(&path).len(), 4);
    assert_eq!(document.select_path(&path), document.select("//input[@name]").unwrap());
  }
}
