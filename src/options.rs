use super::*;

/// Line terminator used when joining output lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
  Lf,
  #[default]
  CrLf,
}

impl LineEnding {
  #[must_use]
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Lf => "\n",
      Self::CrLf => "\r\n",
    }
  }
}

impl Display for LineEnding {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// What happens to blank lines between text lines.
///
/// Leading and trailing blank lines are always dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankLines {
  /// Keep every blank line the block markers produced.
  #[default]
  Preserve,
  /// Squash runs of blank lines into one.
  Collapse,
  /// Drop blank lines entirely.
  Remove,
}

/// Parse-time pruning and input guards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoadOptions {
  pub fragment: bool,
  pub max_elements: Option<usize>,
  pub max_parse_errors: Option<usize>,
  #[serde(alias = "removeComment")]
  pub remove_comments: bool,
  pub remove_script_link_style: bool,
}

impl Default for LoadOptions {
  fn default() -> Self {
    Self {
      fragment: false,
      max_elements: None,
      max_parse_errors: None,
      remove_comments: true,
      remove_script_link_style: true,
    }
  }
}

impl LoadOptions {
  #[must_use]
  pub fn builder() -> LoadOptionsBuilder {
    LoadOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct LoadOptionsBuilder {
  inner: LoadOptions,
}

impl LoadOptionsBuilder {
  #[must_use]
  pub fn build(self) -> LoadOptions {
    self.inner
  }

  #[must_use]
  pub fn fragment(self, fragment: bool) -> Self {
    Self {
      inner: LoadOptions {
        fragment,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn max_elements(self, max_elements: Option<usize>) -> Self {
    Self {
      inner: LoadOptions {
        max_elements,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn max_parse_errors(self, max_parse_errors: Option<usize>) -> Self {
    Self {
      inner: LoadOptions {
        max_parse_errors,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn remove_comments(self, remove_comments: bool) -> Self {
    Self {
      inner: LoadOptions {
        remove_comments,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn remove_script_link_style(self, remove_script_link_style: bool) -> Self {
    Self {
      inner: LoadOptions {
        remove_script_link_style,
        ..self.inner
      },
    }
  }
}

/// Flags for [`Document::clean_html`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CleanOptions {
  pub empty_tags: Vec<String>,
  pub line_ending: LineEnding,
  #[serde(alias = "removeDataAttribute")]
  pub remove_data_attributes: bool,
  #[serde(alias = "removeEventAttribute")]
  pub remove_event_attributes: bool,
  pub remove_inline_style: bool,
  pub remove_meta: bool,
  #[serde(alias = "allInOneLine")]
  pub single_line: bool,
}

impl Default for CleanOptions {
  fn default() -> Self {
    Self {
      empty_tags: vec!["div".to_string()],
      line_ending: LineEnding::default(),
      remove_data_attributes: false,
      remove_event_attributes: true,
      remove_inline_style: true,
      remove_meta: true,
      single_line: true,
    }
  }
}

impl CleanOptions {
  #[must_use]
  pub fn builder() -> CleanOptionsBuilder {
    CleanOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct CleanOptionsBuilder {
  inner: CleanOptions,
}

impl CleanOptionsBuilder {
  #[must_use]
  pub fn build(self) -> CleanOptions {
    self.inner
  }

  #[must_use]
  pub fn empty_tags<I, S>(self, tags: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      inner: CleanOptions {
        empty_tags: tags.into_iter().map(Into::into).collect(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn line_ending(self, line_ending: LineEnding) -> Self {
    Self {
      inner: CleanOptions {
        line_ending,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn remove_data_attributes(self, remove_data_attributes: bool) -> Self {
    Self {
      inner: CleanOptions {
        remove_data_attributes,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn remove_event_attributes(self, remove_event_attributes: bool) -> Self {
    Self {
      inner: CleanOptions {
        remove_event_attributes,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn remove_inline_style(self, remove_inline_style: bool) -> Self {
    Self {
      inner: CleanOptions {
        remove_inline_style,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn remove_meta(self, remove_meta: bool) -> Self {
    Self {
      inner: CleanOptions {
        remove_meta,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn single_line(self, single_line: bool) -> Self {
    Self {
      inner: CleanOptions {
        single_line,
        ..self.inner
      },
    }
  }
}

/// Output shape of the text normalizer and extractor.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default, rename_all = "camelCase")]
pub struct TextOptions {
  pub blank_lines: BlankLines,
  /// Strip markup before decoding entities, so escaped tags such as
  /// `&lt;b&gt;` survive as literal text.
  pub keep_escaped_markup: bool,
  pub line_ending: LineEnding,
}

impl TextOptions {
  #[must_use]
  pub fn builder() -> TextOptionsBuilder {
    TextOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct TextOptionsBuilder {
  inner: TextOptions,
}

impl TextOptionsBuilder {
  #[must_use]
  pub fn blank_lines(self, blank_lines: BlankLines) -> Self {
    Self {
      inner: TextOptions {
        blank_lines,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn build(self) -> TextOptions {
    self.inner
  }

  #[must_use]
  pub fn keep_escaped_markup(self, keep_escaped_markup: bool) -> Self {
    Self {
      inner: TextOptions {
        keep_escaped_markup,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn line_ending(self, line_ending: LineEnding) -> Self {
    Self {
      inner: TextOptions {
        line_ending,
        ..self.inner
      },
    }
  }
}
