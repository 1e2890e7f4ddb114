//! # auditor-guide
//!
//! Convenience entry points into the classification rule space. Neither is
//! authoritative: both pre-fill an [`AISystemInput`](auditor_types::AISystemInput)
//! that is then classified by the engine like any other input.
//!
//! - [`DecisionTree`] / [`DecisionWalk`]: a fixed acyclic graph of yes/no
//!   legal questions ending in a suggested tier, with single-step undo.
//! - [`templates`]: sector presets (medical chatbot, CV screening, ...) with
//!   the tier they are expected to classify to.

pub mod error;
pub mod templates;
pub mod tree;

pub use error::{GuideError, GuideResult};
pub use templates::{template, templates, SectorTemplate};
pub use tree::{Answer, DecisionTree, DecisionWalk, Edge, Position, QuestionNode, Suggestion, TreeOutcome};
