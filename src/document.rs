use super::*;

/// Tag and attribute names are compared as ASCII-lowercased keys.
pub(crate) mod names {
  use super::*;

  pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
  }

  pub(crate) fn is_tag(element: &Element, name: &str) -> bool {
    element.name().eq_ignore_ascii_case(name)
  }

  pub(crate) fn attribute<'a>(
    element: &'a Element,
    name: &str,
  ) -> Option<&'a str> {
    element
      .attrs()
      .find(|(key, _)| key.eq_ignore_ascii_case(name))
      .map(|(_, value)| value)
  }

  pub(crate) fn has_prefix(name: &str, prefix: &str) -> bool {
    name
      .get(..prefix.len())
      .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
  }
}

/// A parsed HTML tree that the cleaning operations mutate in place.
#[derive(Debug)]
pub struct Document {
  pub(crate) html: Html,
  pub(crate) root_id: NodeId,
}

impl Document {
  pub(crate) fn detach_all(&mut self, ids: Vec<NodeId>) -> usize {
    let mut detached = 0;

    for id in ids {
      if id == self.html.tree.root().id() || !self.is_attached(id) {
        continue;
      }

      if let Some(mut node) = self.html.tree.get_mut(id) {
        node.detach();
        detached += 1;
      }
    }

    detached
  }

  /// Number of element nodes still reachable from the root.
  #[must_use]
  pub fn element_count(&self) -> usize {
    self
      .html
      .tree
      .root()
      .descendants()
      .filter(|node| node.value().is_element())
      .count()
  }

  pub(crate) fn element_ids(&self) -> Vec<NodeId> {
    self
      .html
      .tree
      .root()
      .descendants()
      .filter(|node| node.value().is_element())
      .map(|node| node.id())
      .collect()
  }

  /// Serializes the children of `node`; empty for text, comments and detached
  /// nodes.
  #[must_use]
  pub fn inner_html_of(&self, node: NodeId) -> String {
    if !self.is_attached(node) {
      return String::new();
    }

    if node == self.html.tree.root().id() {
      return self.html.html();
    }

    self
      .html
      .tree
      .get(node)
      .and_then(ElementRef::wrap)
      .map(|element| element.inner_html())
      .unwrap_or_default()
  }

  /// Whether `node` can still be reached from the root.
  #[must_use]
  pub fn is_attached(&self, node: NodeId) -> bool {
    let root = self.html.tree.root().id();

    let Some(node) = self.html.tree.get(node) else {
      return false;
    };

    node.id() == root || node.ancestors().any(|ancestor| ancestor.id() == root)
  }

  /// Parses `html` and applies the load-time pruning and guards in `options`.
  pub fn load(html: &str, options: &LoadOptions) -> Result<Self> {
    let mut document = if options.fragment {
      Self::parse_fragment(html)
    } else {
      Self::parse(html)
    };

    let root = document.root_id;

    Pipeline::for_load(Context::new(&mut document, root), options).run()?;

    Ok(document)
  }

  pub(crate) fn node(&self, id: NodeId) -> Option<NodeRef<'_, Node>> {
    self.html.tree.get(id)
  }

  /// Parses a full document without any pruning.
  #[must_use]
  pub fn parse(html: &str) -> Self {
    let html = Html::parse_document(html);

    let root_id = html.tree.root().id();

    Self { html, root_id }
  }

  /// Number of parse errors the parser reported for the source markup.
  #[must_use]
  pub fn parse_error_count(&self) -> usize {
    self.html.errors.len()
  }

  /// Parses a body fragment without any pruning.
  #[must_use]
  pub fn parse_fragment(html: &str) -> Self {
    let html = Html::parse_fragment(html);

    let root_id = html.root_element().id();

    Self { html, root_id }
  }

  /// The node whose inner markup is this document's serialization.
  #[must_use]
  pub fn root(&self) -> NodeId {
    self.root_id
  }

  /// Lowercased tag name of an element node.
  #[must_use]
  pub fn tag_name(&self, node: NodeId) -> Option<String> {
    self
      .node(node)?
      .value()
      .as_element()
      .map(|element| names::normalize(element.name()))
  }

  /// Concatenated text of every descendant text node.
  #[must_use]
  pub fn text_of(&self, node: NodeId) -> String {
    if !self.is_attached(node) {
      return String::new();
    }

    let Some(node) = self.node(node) else {
      return String::new();
    };

    node
      .descendants()
      .filter_map(|descendant| descendant.value().as_text())
      .map(|text| &**text)
      .collect()
  }

  /// Serialized markup of the content root.
  #[must_use]
  pub fn to_html(&self) -> String {
    self.inner_html_of(self.root_id)
  }
}

impl From<&str> for Document {
  fn from(html: &str) -> Self {
    Self::parse(html)
  }
}
