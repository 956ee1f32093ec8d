#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("aborting parsing document; {found} elements found (limit: {limit})")]
  ElementLimitExceeded { found: usize, limit: usize },
  #[error("invalid path expression `{path}`: {message}")]
  InvalidPath { path: String, message: String },
  #[error("malformed input; parser reported {found} errors (limit: {limit})")]
  MalformedInput { found: usize, limit: usize },
}
