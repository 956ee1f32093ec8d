use super::*;

/// Rejects input the parser had to repair more often than allowed.
pub(crate) struct ParseErrorLimitStage {
  limit: usize,
}

impl ParseErrorLimitStage {
  pub(crate) fn new(limit: usize) -> Self {
    Self { limit }
  }
}

impl Stage for ParseErrorLimitStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let found = context.document().parse_error_count();

    if found > self.limit {
      return Err(Error::MalformedInput {
        found,
        limit: self.limit,
      });
    }

    Ok(())
  }
}
