use super::*;

impl Document {
  /// Detaches every comment node.
  pub fn remove_comments(&mut self) -> usize {
    let comments = self
      .html
      .tree
      .root()
      .descendants()
      .filter(|node| node.value().is_comment())
      .map(|node| node.id())
      .collect::<Vec<NodeId>>();

    self.detach_all(comments)
  }

  /// Detaches every node matching any of `paths`, path by path.
  pub fn remove_nodes<I, S>(&mut self, paths: I) -> Result<usize>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    self.remove_nodes_from(self.root_id, paths)
  }

  /// Like [`Document::remove_nodes`] with relative paths evaluated against
  /// `context`.
  pub fn remove_nodes_from<I, S>(
    &mut self,
    context: NodeId,
    paths: I,
  ) -> Result<usize>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut removed = 0;

    for path in paths {
      let matches = self.select_from(context, path.as_ref())?;
      removed += self.detach_all(matches);
    }

    Ok(removed)
  }

  /// Detaches the subtree of every element whose tag is in `tags`.
  ///
  /// Returns the number of subtrees removed; matches nested inside an already
  /// removed subtree are not counted.
  pub fn remove_tags<I, S>(&mut self, tags: I) -> usize
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let tags = tags
      .into_iter()
      .map(|tag| document::names::normalize(tag.as_ref()))
      .collect::<HashSet<String>>();

    if tags.is_empty() {
      return 0;
    }

    let matches = self
      .html
      .tree
      .root()
      .descendants()
      .filter(|node| {
        node.value().as_element().is_some_and(|element| {
          tags.contains(&document::names::normalize(element.name()))
        })
      })
      .map(|node| node.id())
      .collect::<Vec<NodeId>>();

    self.detach_all(matches)
  }

  fn retain_attributes(&mut self, remove: impl Fn(&str) -> bool) -> usize {
    let mut removed = 0;

    for id in self.element_ids() {
      let Some(mut node) = self.html.tree.get_mut(id) else {
        continue;
      };

      let Node::Element(element) = node.value() else {
        continue;
      };

      let before = element.attrs.len();

      element.attrs.retain(|(name, _)| !remove(name.local.as_ref()));

      removed += before - element.attrs.len();
    }

    removed
  }

  /// Removes the attribute called `name` from every element.
  pub fn strip_attribute(&mut self, name: &str) -> usize {
    let name = document::names::normalize(name);
    self.retain_attributes(|attribute| attribute.eq_ignore_ascii_case(&name))
  }

  /// Removes every attribute whose name starts with `prefix`, ignoring case.
  pub fn strip_attributes_with_prefix(&mut self, prefix: &str) -> usize {
    if prefix.is_empty() {
      return 0;
    }

    self.retain_attributes(|attribute| {
      document::names::has_prefix(attribute, prefix)
    })
  }
}
