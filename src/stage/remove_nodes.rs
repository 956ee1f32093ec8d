use super::*;

/// Removes nodes matching path expressions evaluated against the context scope.
pub(crate) struct RemoveNodesStage {
  paths: Vec<String>,
}

impl RemoveNodesStage {
  pub(crate) fn new<I, S>(paths: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      paths: paths.into_iter().map(Into::into).collect(),
    }
  }
}

impl Stage for RemoveNodesStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let scope = context.scope();

    let removed = context.document().remove_nodes_from(scope, &self.paths)?;

    debug!("removed {removed} nodes matching {:?}", self.paths);

    Ok(())
  }
}
