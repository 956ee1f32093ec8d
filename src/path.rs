use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
  Child,
  Descendant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeTest {
  AnyElement,
  AnyNode,
  Comment,
  Element(String),
  Text,
}

impl NodeTest {
  fn matches(&self, node: &Node) -> bool {
    match (self, node) {
      (Self::AnyElement, Node::Element(_)) => true,
      (Self::AnyNode, Node::Element(_) | Node::Text(_) | Node::Comment(_)) => {
        true
      }
      (Self::Comment, Node::Comment(_)) => true,
      (Self::Element(name), Node::Element(element)) => {
        document::names::is_tag(element, name)
      }
      (Self::Text, Node::Text(_)) => true,
      _ => false,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate {
  Attribute(String),
  AttributeEquals(String, String),
  Position(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
  axis: Axis,
  predicates: Vec<Predicate>,
  test: NodeTest,
}

impl Step {
  fn apply(&self, candidates: Vec<NodeRef<'_, Node>>) -> Vec<NodeId> {
    let mut matched = candidates
      .into_iter()
      .filter(|node| self.test.matches(node.value()))
      .collect::<Vec<NodeRef<'_, Node>>>();

    for predicate in &self.predicates {
      matched = match predicate {
        Predicate::Position(position) => matched
          .get(position - 1)
          .copied()
          .into_iter()
          .collect(),
        Predicate::Attribute(name) => matched
          .into_iter()
          .filter(|node| Self::attribute(node, name).is_some())
          .collect(),
        Predicate::AttributeEquals(name, value) => matched
          .into_iter()
          .filter(|node| Self::attribute(node, name) == Some(value.as_str()))
          .collect(),
      };
    }

    matched.into_iter().map(|node| node.id()).collect()
  }

  fn attribute<'a>(node: &NodeRef<'a, Node>, name: &str) -> Option<&'a str> {
    node
      .value()
      .as_element()
      .and_then(|element| document::names::attribute(element, name))
  }
}

/// A compiled path expression, a small XPath subset.
///
/// Supported: `/` and `//` separators, tag names, `*`, `comment()`, `text()`,
/// `node()`, `[@attr]`, `[@attr='value']`, `[n]`, and a trailing `@attr` step
/// that selects the elements carrying that attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
  absolute: bool,
  source: String,
  steps: Vec<Step>,
}

impl Path {
  pub(crate) fn evaluate(&self, document: &Document, context: NodeId) -> Vec<NodeId> {
    let start = if self.absolute {
      document.html.tree.root().id()
    } else {
      context
    };

    if !document.is_attached(start) {
      return Vec::new();
    }

    let mut current = vec![start];

    for step in &self.steps {
      let mut next = Vec::new();

      for id in current {
        let Some(node) = document.node(id) else {
          continue;
        };

        let parents = match step.axis {
          Axis::Child => vec![node],
          Axis::Descendant => node.descendants().collect(),
        };

        for parent in parents {
          next.extend(step.apply(parent.children().collect()));
        }
      }

      current = Self::in_document_order(document, next);

      if current.is_empty() {
        break;
      }
    }

    current
  }

  fn in_document_order(document: &Document, ids: Vec<NodeId>) -> Vec<NodeId> {
    if ids.len() <= 1 {
      return ids;
    }

    let wanted = ids.into_iter().collect::<HashSet<NodeId>>();

    document
      .html
      .tree
      .root()
      .descendants()
      .map(|node| node.id())
      .filter(|id| wanted.contains(id))
      .collect()
  }

  pub fn parse(source: &str) -> Result<Self> {
    PathParser::new(source).parse()
  }

  /// The expression this path was parsed from.
  #[must_use]
  pub fn source(&self) -> &str {
    &self.source
  }
}

impl FromStr for Path {
  type Err = Error;

  fn from_str(source: &str) -> Result<Self> {
    Self::parse(source)
  }
}

impl Display for Path {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&self.source)
  }
}

struct PathParser<'a> {
  position: usize,
  source: &'a str,
}

impl<'a> PathParser<'a> {
  fn attribute_step(&mut self, axis: Axis, steps: &mut Vec<Step>) -> Result {
    let name = self.name()?;

    match (axis, steps.last_mut()) {
      (Axis::Child, Some(step)) => {
        step.predicates.push(Predicate::Attribute(name));
      }
      _ => steps.push(Step {
        axis,
        predicates: vec![Predicate::Attribute(name)],
        test: NodeTest::AnyElement,
      }),
    }

    self.skip_whitespace();

    if !self.at_end() {
      return Err(self.error("attribute step must be the last step"));
    }

    Ok(())
  }

  fn at_end(&self) -> bool {
    self.position >= self.source.len()
  }

  fn eat(&mut self, token: &str) -> bool {
    if self.rest().starts_with(token) {
      self.position += token.len();
      true
    } else {
      false
    }
  }

  fn error(&self, message: &str) -> Error {
    Error::InvalidPath {
      path: self.source.to_string(),
      message: format!("{message} at offset {}", self.position),
    }
  }

  fn literal(&mut self) -> Result<String> {
    let quote = match self.rest().chars().next() {
      Some(quote @ ('\'' | '"')) => quote,
      _ => return Err(self.error("expected quoted value")),
    };

    self.position += 1;

    let Some(end) = self.rest().find(quote) else {
      return Err(self.error("unterminated quoted value"));
    };

    let value = self.rest()[..end].to_string();

    self.position += end + 1;

    Ok(value)
  }

  fn name(&mut self) -> Result<String> {
    let length = self
      .rest()
      .find(|c: char| {
        !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
      })
      .unwrap_or(self.rest().len());

    if length == 0 {
      return Err(self.error("expected name"));
    }

    let name = document::names::normalize(&self.rest()[..length]);

    self.position += length;

    Ok(name)
  }

  fn new(source: &'a str) -> Self {
    Self {
      position: 0,
      source,
    }
  }

  fn node_test(&mut self) -> Result<NodeTest> {
    if self.eat("*") {
      return Ok(NodeTest::AnyElement);
    }

    let name = self.name()?;

    if !self.eat("()") {
      return Ok(NodeTest::Element(name));
    }

    match name.as_str() {
      "comment" => Ok(NodeTest::Comment),
      "node" => Ok(NodeTest::AnyNode),
      "text" => Ok(NodeTest::Text),
      _ => Err(self.error("unsupported node test")),
    }
  }

  fn parse(mut self) -> Result<Path> {
    self.skip_whitespace();

    if self.at_end() {
      return Err(self.error("empty path"));
    }

    let absolute = self.rest().starts_with('/');

    if !absolute && self.rest().starts_with('.') && !self.rest().starts_with("..")
    {
      self.position += 1;

      if self.at_end() {
        return Err(self.error("expected step after `.`"));
      }
    }

    let mut steps = Vec::new();

    while !self.at_end() {
      let axis = if self.eat("//") {
        Axis::Descendant
      } else if self.eat("/") || steps.is_empty() {
        Axis::Child
      } else {
        return Err(self.error("expected `/`"));
      };

      if self.eat("@") {
        self.attribute_step(axis, &mut steps)?;
        break;
      }

      let test = self.node_test()?;
      let predicates = self.predicates()?;

      steps.push(Step {
        axis,
        predicates,
        test,
      });

      self.skip_whitespace();
    }

    if steps.is_empty() {
      return Err(self.error("expected step"));
    }

    Ok(Path {
      absolute,
      source: self.source.to_string(),
      steps,
    })
  }

  fn predicate(&mut self) -> Result<Predicate> {
    self.skip_whitespace();

    let predicate = if self.eat("@") {
      let name = self.name()?;

      self.skip_whitespace();

      if self.eat("=") {
        self.skip_whitespace();
        Predicate::AttributeEquals(name, self.literal()?)
      } else {
        Predicate::Attribute(name)
      }
    } else {
      let digits = self
        .rest()
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(self.rest().len());

      match self.rest()[..digits].parse::<usize>() {
        Ok(position) if position > 0 => {
          self.position += digits;
          Predicate::Position(position)
        }
        _ => return Err(self.error("expected attribute test or position")),
      }
    };

    self.skip_whitespace();

    if !self.eat("]") {
      return Err(self.error("expected `]`"));
    }

    Ok(predicate)
  }

  fn predicates(&mut self) -> Result<Vec<Predicate>> {
    let mut predicates = Vec::new();

    while self.eat("[") {
      predicates.push(self.predicate()?);
    }

    Ok(predicates)
  }

  fn rest(&self) -> &'a str {
    &self.source[self.position..]
  }

  fn skip_whitespace(&mut self) {
    let rest = self.rest();
    self.position += rest.len() - rest.trim_start().len();
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn select(html: &str, path: &str) -> Vec<String> {
    let document = Document::parse_fragment(html);

    document
      .select(path)
      .unwrap()
      .into_iter()
      .map(|id| document.text_of(id))
      .collect()
  }

  #[test]
  fn descendant_tag_matches_in_document_order() {
    assert_eq!(
      select("<div><p>a</p><section><p>b</p></section></div><p>c</p>", "//p"),
      vec!["a", "b", "c"]
    );
  }

  #[test]
  fn child_step_only_matches_direct_children() {
    assert_eq!(
      select("<div><p>a</p><section><p>b</p></section></div>", "//div/p"),
      vec!["a"]
    );
  }

  #[test]
  fn attribute_existence_selects_owning_elements() {
    let html = r#"<p style="x">a</p><span>b</span><em style="y">c</em>"#;

    assert_eq!(select(html, "//@style"), vec!["a", "c"]);
    assert_eq!(select(html, "//*[@style]"), vec!["a", "c"]);
    assert_eq!(select(html, "//em/@style"), vec!["c"]);
  }

  #[test]
  fn attribute_value_predicate() {
    let html = r#"<p class="a">1</p><p class="b">2</p><p class='a'>3</p>"#;

    assert_eq!(select(html, "//p[@class='a']"), vec!["1", "3"]);
    assert_eq!(select(html, r#"//p[@class="b"]"#), vec!["2"]);
  }

  #[test]
  fn position_counts_per_parent() {
    let html = "<ul><li>a</li><li>b</li></ul><ul><li>c</li><li>d</li></ul>";

    assert_eq!(select(html, "//li[2]"), vec!["b", "d"]);
    assert_eq!(select(html, "//ul[2]/li[1]"), vec!["c"]);
  }

  #[test]
  fn tag_names_are_case_insensitive() {
    assert_eq!(select("<P>a</P>", "//P"), vec!["a"]);
  }

  #[test]
  fn comment_and_text_tests() {
    let document = Document::parse_fragment("<!-- one --><p>two<!-- three --></p>");

    assert_eq!(document.select("//comment()").unwrap().len(), 2);
    assert_eq!(document.select("//p/text()").unwrap().len(), 1);
    assert_eq!(document.select("//p/node()").unwrap().len(), 2);
  }

  #[test]
  fn relative_paths_start_at_context() {
    let document = Document::parse_fragment(
      "<div><p>a</p></div><section><p>b</p></section>",
    );

    let section = document.select_one("//section").unwrap().unwrap();

    let relative = document.select_from(section, ".//p").unwrap();

    assert_eq!(relative.len(), 1);
    assert_eq!(document.text_of(relative[0]), "b");

    let child = document.select_from(section, "p").unwrap();

    assert_eq!(child, relative);

    let absolute = document.select_from(section, "//p").unwrap();

    assert_eq!(absolute.len(), 2);
  }

  #[test]
  fn no_match_is_empty() {
    assert!(select("<p>a</p>", "//table").is_empty());
  }

  #[test]
  fn rejects_invalid_syntax() {
    for source in ["", "   ", "//", "//div[", "//div[0]", "//@", "//@id/p", "//div[@id=x]", "//foo()", "."] {
      assert!(
        matches!(Path::parse(source), Err(Error::InvalidPath { .. })),
        "expected `{source}` to be rejected"
      );
    }
  }

  #[test]
  fn keeps_source_text() {
    let path = "//div[@id='main']".parse::<Path>().unwrap();

    assert_eq!(path.source(), "//div[@id='main']");
    assert_eq!(path.to_string(), "//div[@id='main']");
  }
}
