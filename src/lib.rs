use {
  context::Context,
  ego_tree::{NodeId, NodeRef},
  log::{debug, trace},
  pipeline::Pipeline,
  regex::Regex,
  scraper::{ElementRef, Html, Node, node::Element},
  serde::{Deserialize, Serialize},
  stage::{
    CollapseEmptyStage, ElementLimitStage, ParseErrorLimitStage,
    RemoveCommentsStage, RemoveNodesStage, RemoveTagsStage, Stage,
    StripAttributePrefixStage, StripAttributeStage,
  },
  std::{
    borrow::Cow,
    collections::{BTreeMap, HashSet},
    fmt::{self, Display, Formatter},
    str::FromStr,
    sync::LazyLock,
  },
};

pub use crate::{
  collapse::CollapseSummary,
  document::Document,
  error::Error,
  extract::{BLOCK_TAGS, MEDIA_TAGS},
  options::{
    BlankLines, CleanOptions, CleanOptionsBuilder, LineEnding, LoadOptions,
    LoadOptionsBuilder, TextOptions, TextOptionsBuilder,
  },
  path::Path,
  text::{collapse_whitespace, decode_entities, is_blank, normalize},
};

mod clean;
mod collapse;
mod context;
mod document;
mod error;
mod extract;
mod options;
mod path;
mod pipeline;
mod prune;
mod query;
mod re;
mod stage;
mod text;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
