use super::*;

pub(crate) struct StripAttributePrefixStage {
  prefix: &'static str,
}

impl StripAttributePrefixStage {
  pub(crate) fn new(prefix: &'static str) -> Self {
    Self { prefix }
  }
}

impl Stage for StripAttributePrefixStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let removed = context
      .document()
      .strip_attributes_with_prefix(self.prefix);

    debug!("stripped {removed} `{}*` attributes", self.prefix);

    Ok(())
  }
}
