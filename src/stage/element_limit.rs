use super::*;

pub(crate) struct ElementLimitStage {
  limit: usize,
}

impl ElementLimitStage {
  pub(crate) fn new(limit: usize) -> Self {
    Self { limit }
  }
}

impl Stage for ElementLimitStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let found = context.document().element_count();

    if found > self.limit {
      return Err(Error::ElementLimitExceeded {
        found,
        limit: self.limit,
      });
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_documents_over_the_limit() {
    let result = Document::load(
      "<div><p>a</p><p>b</p></div>",
      &LoadOptions::builder().max_elements(Some(4)).build(),
    );

    assert!(matches!(
      result,
      Err(Error::ElementLimitExceeded { found: 6, limit: 4 })
    ));
  }

  #[test]
  fn accepts_documents_at_the_limit() {
    let result = Document::load(
      "<div><p>a</p><p>b</p></div>",
      &LoadOptions::builder().max_elements(Some(6)).build(),
    );

    assert!(result.is_ok());
  }
}
