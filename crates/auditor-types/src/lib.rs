//! # auditor-types
//!
//! Shared data model for the AI Act Auditor.
//!
//! - [`AISystemInput`]: questionnaire answers describing an AI system. Every
//!   field has a falsy/empty default so partially filled forms deserialize.
//! - [`RiskLevel`]: the four ordered tiers (Prohibited > High > Limited > Minimal).
//! - [`AnalysisResult`] / [`MatchedRule`]: the outcome of one classification.
//! - [`InputFlag`]: typed accessor for every boolean flag of the input, used by
//!   the rule catalog and the guided entry points instead of field-name lookup.
//! - [`validation`]: per-step completeness checks of the questionnaire.

pub mod input;
pub mod language;
pub mod result;
pub mod risk;
pub mod validation;

pub use input::{
    AISystemInput, AutomationLevel, ContentType, DataType, DeploymentPhase, InputFlag,
    OutputType, Sector, UserType,
};
pub use language::Language;
pub use result::{AnalysisResult, MatchedRule};
pub use risk::{ParseRiskLevelError, RiskLevel};
pub use validation::{ContextCompleteness, StepValidation, ValidationReport};
