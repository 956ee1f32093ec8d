use super::*;

/// Detach counts produced by [`Document::collapse_empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseSummary {
  /// Elements removed up front because they had no children at all.
  pub childless: usize,
  /// Removals per blank-content pass; the last entry is always zero.
  pub passes: Vec<usize>,
}

impl CollapseSummary {
  #[must_use]
  pub fn total(&self) -> usize {
    self.childless + self.passes.iter().sum::<usize>()
  }
}

impl Document {
  /// Removes empty `tag` elements until a pass removes nothing.
  ///
  /// An element is empty when it has no children or when every child is a
  /// whitespace-only text node.
  pub fn collapse_empty(&mut self, tag: &str) -> CollapseSummary {
    let tag = document::names::normalize(tag);

    let childless = self.collapse_candidates(&tag, |node| !node.has_children());

    let childless = self.detach_all(childless);

    let mut passes = Vec::new();

    loop {
      let blank = self.collapse_candidates(&tag, Self::has_blank_content);

      let removed = self.detach_all(blank);

      passes.push(removed);

      if removed == 0 {
        break;
      }
    }

    debug!(
      "collapsed {} empty <{tag}> elements in {} passes",
      childless + passes.iter().sum::<usize>(),
      passes.len()
    );

    CollapseSummary { childless, passes }
  }

  fn collapse_candidates(
    &self,
    tag: &str,
    is_empty: impl Fn(NodeRef<'_, Node>) -> bool,
  ) -> Vec<NodeId> {
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
      .filter(|node| is_empty(*node))
      .map(|node| node.id())
      .collect()
  }

  fn has_blank_content(node: NodeRef<'_, Node>) -> bool {
    node.children().all(|child| match child.value() {
      Node::Text(text) => is_blank(text),
      _ => false,
    })
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn nested_empty_divs_disappear_over_two_passes() {
    let mut document = Document::parse_fragment("<div><div></div></div>");

    let summary = document.collapse_empty("div");

    assert_eq!(
      summary,
      CollapseSummary {
        childless: 1,
        passes: vec![1, 0],
      }
    );
    assert_eq!(summary.total(), 2);
    assert!(document.select("//div").unwrap().is_empty());
    assert_eq!(document.to_html(), "");
  }

  #[test]
  fn whitespace_only_chain_collapses() {
    let mut document = Document::parse_fragment(
      "<div>\n  <div> <div>\t</div> </div>\n</div><p>kept</p>",
    );

    let summary = document.collapse_empty("div");

    assert_eq!(summary.childless, 0);
    assert_eq!(summary.passes, vec![1, 1, 1, 0]);
    assert_eq!(document.to_html(), "<p>kept</p>");
  }

  #[test]
  fn keeps_divs_with_content() {
    let mut document = Document::parse_fragment(
      "<div><br></div><div>&nbsp;</div><div><!-- c --></div><div> text </div>",
    );

    let summary = document.collapse_empty("div");

    assert_eq!(summary.total(), 0);
    assert_eq!(document.select("//div").unwrap().len(), 4);
  }

  #[test]
  fn only_collapses_requested_tag() {
    let mut document =
      Document::parse_fragment("<span></span><div><span> </span></div>");

    document.collapse_empty("span");

    assert_eq!(document.to_html(), "<div></div>");
  }

  #[test]
  fn collapse_is_idempotent() {
    let html = "<div><div> </div><p>x</p></div><div></div>";

    let mut document = Document::parse_fragment(html);

    document.collapse_empty("div");

    let once = document.to_html();

    let summary = document.collapse_empty("div");

    assert_eq!(summary.total(), 0);
    assert_eq!(document.to_html(), once);
    assert_eq!(once, "<div><p>x</p></div>");
  }

  #[test]
  fn no_empty_element_survives() {
    let inputs = [
      "<div><div><div><div></div></div></div></div>",
      "<div> <div></div> <div> </div> </div><div>x</div>",
      "<section><div></div><div><div>\n</div></div></section>",
    ];

    for html in inputs {
      let mut document = Document::parse_fragment(html);

      document.collapse_empty("div");

      for id in document.select("//div").unwrap() {
        let node = document.node(id).unwrap();

        assert!(node.has_children(), "{html}");
        assert!(!Document::has_blank_content(node), "{html}");
      }
    }
  }
}
