use super::*;

pub(crate) struct Context<'a> {
  document: &'a mut Document,
  scope: NodeId,
}

impl<'a> Context<'a> {
  pub(crate) fn document(&mut self) -> &mut Document {
    &mut *self.document
  }

  pub(crate) fn new(document: &'a mut Document, scope: NodeId) -> Self {
    Self { document, scope }
  }

  /// Node that relative paths are evaluated against.
  pub(crate) fn scope(&self) -> NodeId {
    self.scope
  }
}
