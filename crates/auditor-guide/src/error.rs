use thiserror::Error;

/// Errors from the decision tree and template lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuideError {
    #[error("root node not found: {0}")]
    UnknownRoot(String),

    #[error("node {from} points to unknown node {to}")]
    UnknownTarget { from: String, to: String },

    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    #[error("cycle detected through node {0}")]
    Cycle(String),

    #[error("walk already reached an outcome")]
    WalkFinished,

    #[error("unknown template: {0}")]
    UnknownTemplate(String),
}

pub type GuideResult<T> = Result<T, GuideError>;
