use super::*;

pub(crate) struct RemoveTagsStage {
  tags: Vec<String>,
}

impl RemoveTagsStage {
  pub(crate) fn new<I, S>(tags: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      tags: tags.into_iter().map(Into::into).collect(),
    }
  }
}

impl Stage for RemoveTagsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let removed = context.document().remove_tags(&self.tags);

    debug!("removed {removed} elements tagged {:?}", self.tags);

    Ok(())
  }
}
