use super::*;

pub(crate) struct StripAttributeStage {
  name: &'static str,
}

impl StripAttributeStage {
  pub(crate) fn new(name: &'static str) -> Self {
    Self { name }
  }
}

impl Stage for StripAttributeStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let removed = context.document().strip_attribute(self.name);

    debug!("stripped {removed} `{}` attributes", self.name);

    Ok(())
  }
}
