use super::*;

/// Removes empty elements of one tag until nothing more collapses.
pub(crate) struct CollapseEmptyStage {
  tag: String,
}

impl CollapseEmptyStage {
  pub(crate) fn new(tag: &str) -> Self {
    Self {
      tag: tag.to_string(),
    }
  }
}

impl Stage for CollapseEmptyStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    context.document().collapse_empty(&self.tag);

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn collapses_nested_empty_elements() {
    let mut document =
      Document::parse_fragment("<div><div> </div></div><div>x</div>");

    let root = document.root();

    let mut context = Context::new(&mut document, root);

    CollapseEmptyStage::new("DIV").run(&mut context).unwrap();

    assert_eq!(document.to_html(), "<div>x</div>");
  }
}
