use super::*;

mod collapse_empty;
mod element_limit;
mod parse_error_limit;
mod remove_comments;
mod remove_nodes;
mod remove_tags;
mod strip_attribute;
mod strip_attribute_prefix;

pub(crate) use {
  collapse_empty::CollapseEmptyStage, element_limit::ElementLimitStage,
  parse_error_limit::ParseErrorLimitStage,
  remove_comments::RemoveCommentsStage, remove_nodes::RemoveNodesStage,
  remove_tags::RemoveTagsStage, strip_attribute::StripAttributeStage,
  strip_attribute_prefix::StripAttributePrefixStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;
}
