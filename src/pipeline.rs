use super::*;

pub(crate) struct Pipeline<'a> {
  context: Context<'a>,
  stages: Vec<Box<dyn Stage + 'a>>,
}

impl<'a> Pipeline<'a> {
  fn add_stage(&mut self, stage: Box<dyn Stage + 'a>) {
    self.stages.push(stage);
  }

  pub(crate) fn for_clean_html(
    context: Context<'a>,
    options: &CleanOptions,
  ) -> Self {
    let mut pipeline = Self::new(context);

    if options.remove_inline_style {
      pipeline.add_stage(Box::new(StripAttributeStage::new("style")));
    }

    if options.remove_data_attributes {
      pipeline.add_stage(Box::new(StripAttributePrefixStage::new("data-")));
    }

    if options.remove_event_attributes {
      pipeline.add_stage(Box::new(StripAttributePrefixStage::new("on")));
    }

    if options.remove_meta {
      pipeline.add_stage(Box::new(RemoveTagsStage::new(["meta"])));
    }

    for tag in &options.empty_tags {
      pipeline.add_stage(Box::new(CollapseEmptyStage::new(tag)));
    }

    pipeline
  }

  pub(crate) fn for_load(context: Context<'a>, options: &LoadOptions) -> Self {
    let mut pipeline = Self::new(context);

    if let Some(limit) = options.max_elements {
      pipeline.add_stage(Box::new(ElementLimitStage::new(limit)));
    }

    if let Some(limit) = options.max_parse_errors {
      pipeline.add_stage(Box::new(ParseErrorLimitStage::new(limit)));
    }

    if options.remove_comments {
      pipeline.add_stage(Box::new(RemoveCommentsStage));
    }

    if options.remove_script_link_style {
      pipeline.add_stage(Box::new(RemoveTagsStage::new([
        "script", "style", "link",
      ])));
    }

    pipeline
  }

  pub(crate) fn for_text(context: Context<'a>) -> Self {
    let mut pipeline = Self::new(context);

    pipeline.add_stage(Box::new(RemoveNodesStage::new(
      MEDIA_TAGS.iter().map(|tag| format!(".//{tag}")),
    )));

    pipeline
  }

  pub(crate) fn new(context: Context<'a>) -> Self {
    Self {
      context,
      stages: Vec::new(),
    }
  }

  pub(crate) fn run(mut self) -> Result {
    let total = self.stages.len();

    for (index, stage) in self.stages.iter_mut().enumerate() {
      trace!("running stage {} of {total}", index + 1);
      stage.run(&mut self.context)?;
    }

    Ok(())
  }
}
