use auditor_types::RiskLevel;
use thiserror::Error;

/// Errors raised while building a rule catalog.
///
/// Classification itself never fails; these only occur at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("rule catalog is empty")]
    EmptyCatalog,

    #[error("duplicate rule id: {0}")]
    DuplicateRuleId(String),

    #[error("rule {0} targets Minimal Risk; minimal is the fallback and takes no rules")]
    MinimalTarget(String),

    #[error("no rule targets {0}")]
    MissingTier(RiskLevel),

    #[error("rule {id} ({tier}) is listed after a lower-precedence rule")]
    OutOfOrder { id: String, tier: RiskLevel },
}

pub type RulesResult<T> = Result<T, RulesError>;
