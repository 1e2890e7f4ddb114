use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

/// Questionnaire answers describing an AI system.
///
/// Flags are not mutually exclusive: a system may tick several Annex III
/// categories at once and the engine resolves a single tier by precedence.
/// Every field defaults to `false`/empty so a half-filled form is still a
/// valid input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AISystemInput {
    pub name: String,
    pub description: String,
    pub intended_purpose: String,
    /// General domain, free text ("HR", "Healthcare").
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,

    // Article 5 prohibited practices
    pub manipulative_techniques: bool,
    pub exploits_vulnerabilities: bool,
    pub social_scoring: bool,
    pub realtime_remote_biometrics: bool,

    /// Safety component of a product under Annex I legislation.
    pub is_safety_component: bool,

    // Annex III high-risk categories
    pub biometrics: bool,
    pub infrastructure: bool,
    pub education: bool,
    pub employment: bool,
    pub services: bool,
    pub law_enforcement: bool,
    pub migration: bool,
    pub justice: bool,

    /// Generative AI or chatbot (Article 50 transparency).
    pub is_gen_ai: bool,

    // Health domain (Annex III, 5)
    pub health_domain: bool,
    pub influences_diagnosis: bool,
    pub is_administrative_only: bool,

    // Synthetic content (Article 50(2) and 50(4))
    pub generates_synthetic_content: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub content_types: BTreeSet<ContentType>,

    // Contextual enrichment
    pub user_type: Option<UserType>,
    #[serde(deserialize_with = "null_as_default")]
    pub data_types: BTreeSet<DataType>,
    pub affects_rights: bool,
    pub automation_level: Option<AutomationLevel>,
    pub output_type: Option<OutputType>,
    pub additional_context: Option<String>,

    pub deployment_phase: DeploymentPhase,
    /// ISO 639-1 code for output strings; unsupported codes fall back to English.
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sectors: BTreeSet<Sector>,
}

/// Explicit `null` reads as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl AISystemInput {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        intended_purpose: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            intended_purpose: intended_purpose.into(),
            ..Default::default()
        }
    }

    /// Set a boolean flag, builder style.
    pub fn with_flag(mut self, flag: InputFlag, value: bool) -> Self {
        flag.set(&mut self, value);
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn flag(&self, flag: InputFlag) -> bool {
        flag.get(self)
    }

    /// Flags currently set, in [`InputFlag::ALL`] order.
    pub fn set_flags(&self) -> Vec<InputFlag> {
        InputFlag::ALL
            .iter()
            .copied()
            .filter(|f| f.get(self))
            .collect()
    }

    /// Lower-cased `description` and `intended_purpose`, space separated.
    pub fn text_corpus(&self) -> String {
        format!("{} {}", self.description, self.intended_purpose).to_lowercase()
    }
}

/// Every boolean flag of [`AISystemInput`], with typed accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFlag {
    ManipulativeTechniques,
    ExploitsVulnerabilities,
    SocialScoring,
    RealtimeRemoteBiometrics,
    IsSafetyComponent,
    Biometrics,
    Infrastructure,
    Education,
    Employment,
    Services,
    LawEnforcement,
    Migration,
    Justice,
    IsGenAi,
    HealthDomain,
    InfluencesDiagnosis,
    IsAdministrativeOnly,
    GeneratesSyntheticContent,
    AffectsRights,
}

impl InputFlag {
    pub const ALL: [InputFlag; 19] = [
        InputFlag::ManipulativeTechniques,
        InputFlag::ExploitsVulnerabilities,
        InputFlag::SocialScoring,
        InputFlag::RealtimeRemoteBiometrics,
        InputFlag::IsSafetyComponent,
        InputFlag::Biometrics,
        InputFlag::Infrastructure,
        InputFlag::Education,
        InputFlag::Employment,
        InputFlag::Services,
        InputFlag::LawEnforcement,
        InputFlag::Migration,
        InputFlag::Justice,
        InputFlag::IsGenAi,
        InputFlag::HealthDomain,
        InputFlag::InfluencesDiagnosis,
        InputFlag::IsAdministrativeOnly,
        InputFlag::GeneratesSyntheticContent,
        InputFlag::AffectsRights,
    ];

    /// The eight Annex III category flags.
    pub const ANNEX_III: [InputFlag; 8] = [
        InputFlag::Biometrics,
        InputFlag::Infrastructure,
        InputFlag::Education,
        InputFlag::Employment,
        InputFlag::Services,
        InputFlag::LawEnforcement,
        InputFlag::Migration,
        InputFlag::Justice,
    ];

    /// Article 5 prohibited-practice flags.
    pub const PROHIBITED_PRACTICES: [InputFlag; 4] = [
        InputFlag::ManipulativeTechniques,
        InputFlag::ExploitsVulnerabilities,
        InputFlag::SocialScoring,
        InputFlag::RealtimeRemoteBiometrics,
    ];

    pub fn get(&self, input: &AISystemInput) -> bool {
        *self.field(input)
    }

    pub fn set(&self, input: &mut AISystemInput, value: bool) {
        *self.field_mut(input) = value;
    }

    /// Wire name of the field.
    pub fn field_name(&self) -> &'static str {
        match self {
            InputFlag::ManipulativeTechniques => "manipulative_techniques",
            InputFlag::ExploitsVulnerabilities => "exploits_vulnerabilities",
            InputFlag::SocialScoring => "social_scoring",
            InputFlag::RealtimeRemoteBiometrics => "realtime_remote_biometrics",
            InputFlag::IsSafetyComponent => "is_safety_component",
            InputFlag::Biometrics => "biometrics",
            InputFlag::Infrastructure => "infrastructure",
            InputFlag::Education => "education",
            InputFlag::Employment => "employment",
            InputFlag::Services => "services",
            InputFlag::LawEnforcement => "law_enforcement",
            InputFlag::Migration => "migration",
            InputFlag::Justice => "justice",
            InputFlag::IsGenAi => "is_gen_ai",
            InputFlag::HealthDomain => "health_domain",
            InputFlag::InfluencesDiagnosis => "influences_diagnosis",
            InputFlag::IsAdministrativeOnly => "is_administrative_only",
            InputFlag::GeneratesSyntheticContent => "generates_synthetic_content",
            InputFlag::AffectsRights => "affects_rights",
        }
    }

    fn field<'a>(&self, input: &'a AISystemInput) -> &'a bool {
        match self {
            InputFlag::ManipulativeTechniques => &input.manipulative_techniques,
            InputFlag::ExploitsVulnerabilities => &input.exploits_vulnerabilities,
            InputFlag::SocialScoring => &input.social_scoring,
            InputFlag::RealtimeRemoteBiometrics => &input.realtime_remote_biometrics,
            InputFlag::IsSafetyComponent => &input.is_safety_component,
            InputFlag::Biometrics => &input.biometrics,
            InputFlag::Infrastructure => &input.infrastructure,
            InputFlag::Education => &input.education,
            InputFlag::Employment => &input.employment,
            InputFlag::Services => &input.services,
            InputFlag::LawEnforcement => &input.law_enforcement,
            InputFlag::Migration => &input.migration,
            InputFlag::Justice => &input.justice,
            InputFlag::IsGenAi => &input.is_gen_ai,
            InputFlag::HealthDomain => &input.health_domain,
            InputFlag::InfluencesDiagnosis => &input.influences_diagnosis,
            InputFlag::IsAdministrativeOnly => &input.is_administrative_only,
            InputFlag::GeneratesSyntheticContent => &input.generates_synthetic_content,
            InputFlag::AffectsRights => &input.affects_rights,
        }
    }

    fn field_mut<'a>(&self, input: &'a mut AISystemInput) -> &'a mut bool {
        match self {
            InputFlag::ManipulativeTechniques => &mut input.manipulative_techniques,
            InputFlag::ExploitsVulnerabilities => &mut input.exploits_vulnerabilities,
            InputFlag::SocialScoring => &mut input.social_scoring,
            InputFlag::RealtimeRemoteBiometrics => &mut input.realtime_remote_biometrics,
            InputFlag::IsSafetyComponent => &mut input.is_safety_component,
            InputFlag::Biometrics => &mut input.biometrics,
            InputFlag::Infrastructure => &mut input.infrastructure,
            InputFlag::Education => &mut input.education,
            InputFlag::Employment => &mut input.employment,
            InputFlag::Services => &mut input.services,
            InputFlag::LawEnforcement => &mut input.law_enforcement,
            InputFlag::Migration => &mut input.migration,
            InputFlag::Justice => &mut input.justice,
            InputFlag::IsGenAi => &mut input.is_gen_ai,
            InputFlag::HealthDomain => &mut input.health_domain,
            InputFlag::InfluencesDiagnosis => &mut input.influences_diagnosis,
            InputFlag::IsAdministrativeOnly => &mut input.is_administrative_only,
            InputFlag::GeneratesSyntheticContent => &mut input.generates_synthetic_content,
            InputFlag::AffectsRights => &mut input.affects_rights,
        }
    }
}

/// Kinds of synthetic content a system can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Image,
    Video,
    Audio,
    Avatar,
    Text,
}

impl ContentType {
    /// Content that can depict real persons, places or events (deep fakes).
    pub fn is_deep_fake_capable(&self) -> bool {
        !matches!(self, ContentType::Text)
    }
}

/// Primary user profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    GeneralPublic,
    Professionals,
    VulnerableGroups,
    Mixed,
}

/// Categories of data processed by the system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Personal,
    Sensitive,
    Biometric,
    Financial,
    Health,
    None,
}

/// How much of the decision the system takes on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutomationLevel {
    Full,
    Partial,
    Advisory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    Recommendations,
    Decisions,
    Content,
    Predictions,
    Classifications,
}

/// Lifecycle stage of the system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeploymentPhase {
    #[serde(rename = "On Market")]
    OnMarket,
    #[serde(rename = "In Service")]
    InService,
    #[default]
    #[serde(rename = "Development")]
    Development,
}

/// Sector tags used for multi-tagging and sector-specific obligations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Health,
    Biometric,
    Infrastructure,
    Education,
    Employment,
    PublicServices,
    LawEnforcement,
    Migration,
    Financial,
    Justice,
}
