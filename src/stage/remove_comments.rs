use super::*;

pub(crate) struct RemoveCommentsStage;

impl Stage for RemoveCommentsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let removed = context.document().remove_comments();

    debug!("removed {removed} comment nodes");

    Ok(())
  }
}
