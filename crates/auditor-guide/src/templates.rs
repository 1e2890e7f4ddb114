//! Sector templates for quick audits.

use std::collections::BTreeSet;

use auditor_types::{
    AISystemInput, ContentType, DataType, InputFlag, Language, OutputType, RiskLevel, Sector,
    UserType,
};
use serde::Serialize;

use crate::error::{GuideError, GuideResult};

/// A named input preset with the tier it is expected to land in.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectorTemplate {
    pub id: &'static str,
    pub label_en: &'static str,
    pub label_fr: &'static str,
    /// `None` for the blank custom template.
    pub expected_level: Option<RiskLevel>,
    pub preset: AISystemInput,
}

impl SectorTemplate {
    pub fn label(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.label_en,
            Language::Fr => self.label_fr,
        }
    }

    /// Preset merged onto `input`: flags and sets are added, scalar fields
    /// the preset defines overwrite. Free text other than `domain` is kept.
    pub fn apply(&self, input: &mut AISystemInput) {
        let preset = &self.preset;
        for flag in preset.set_flags() {
            flag.set(input, true);
        }
        if !preset.domain.is_empty() {
            input.domain = preset.domain.clone();
        }
        input.content_types.extend(preset.content_types.iter().copied());
        input.data_types.extend(preset.data_types.iter().copied());
        input.sectors.extend(preset.sectors.iter().copied());
        if preset.user_type.is_some() {
            input.user_type = preset.user_type;
        }
        if preset.output_type.is_some() {
            input.output_type = preset.output_type;
        }
    }
}

fn preset(domain: &str, flags: &[InputFlag]) -> AISystemInput {
    let mut input = AISystemInput::default().with_domain(domain);
    for flag in flags {
        flag.set(&mut input, true);
    }
    input
}

/// All templates, custom last.
pub fn templates() -> Vec<SectorTemplate> {
    let mut medical = preset(
        "Healthcare",
        &[InputFlag::HealthDomain, InputFlag::InfluencesDiagnosis],
    );
    medical.data_types = BTreeSet::from([DataType::Health, DataType::Personal, DataType::Sensitive]);
    medical.sectors = BTreeSet::from([Sector::Health]);

    let mut cv = preset(
        "Employment / HR",
        &[InputFlag::Employment, InputFlag::AffectsRights],
    );
    cv.output_type = Some(OutputType::Classifications);
    cv.sectors = BTreeSet::from([Sector::Employment]);

    let mut credit = preset(
        "Financial Services",
        &[InputFlag::Services, InputFlag::AffectsRights],
    );
    credit.output_type = Some(OutputType::Predictions);
    credit.data_types = BTreeSet::from([DataType::Financial, DataType::Personal]);
    credit.sectors = BTreeSet::from([Sector::Financial]);

    let mut deepfake = preset(
        "Content Generation",
        &[InputFlag::GeneratesSyntheticContent, InputFlag::IsGenAi],
    );
    deepfake.content_types = BTreeSet::from([ContentType::Image, ContentType::Video, ContentType::Audio]);

    let mut admission = preset("Education", &[InputFlag::Education, InputFlag::AffectsRights]);
    admission.output_type = Some(OutputType::Decisions);
    admission.user_type = Some(UserType::GeneralPublic);
    admission.sectors = BTreeSet::from([Sector::Education]);

    let mut chatbot = preset("Customer Service", &[InputFlag::IsGenAi]);
    chatbot.user_type = Some(UserType::GeneralPublic);

    let mut fraud = preset("Financial Services", &[InputFlag::Services]);
    fraud.output_type = Some(OutputType::Classifications);
    fraud.data_types = BTreeSet::from([DataType::Financial, DataType::Personal]);
    fraud.sectors = BTreeSet::from([Sector::Financial]);

    vec![
        SectorTemplate {
            id: "medical_chatbot",
            label_en: "Medical Chatbot",
            label_fr: "Chatbot Médical",
            expected_level: Some(RiskLevel::High),
            preset: medical,
        },
        SectorTemplate {
            id: "cv_screening",
            label_en: "CV Screening / HR",
            label_fr: "Tri de CV / RH",
            expected_level: Some(RiskLevel::High),
            preset: cv,
        },
        SectorTemplate {
            id: "credit_scoring",
            label_en: "Credit Scoring",
            label_fr: "Scoring Crédit",
            expected_level: Some(RiskLevel::High),
            preset: credit,
        },
        SectorTemplate {
            id: "deepfake",
            label_en: "Deepfake Generator",
            label_fr: "Générateur Deepfake",
            expected_level: Some(RiskLevel::Limited),
            preset: deepfake,
        },
        SectorTemplate {
            id: "student_admission",
            label_en: "Student Admission",
            label_fr: "Admission Étudiants",
            expected_level: Some(RiskLevel::High),
            preset: admission,
        },
        SectorTemplate {
            id: "customer_chatbot",
            label_en: "Customer Chatbot",
            label_fr: "Chatbot Client",
            expected_level: Some(RiskLevel::Limited),
            preset: chatbot,
        },
        SectorTemplate {
            id: "fraud_detection",
            label_en: "Fraud Detection",
            label_fr: "Détection Fraude",
            expected_level: Some(RiskLevel::High),
            preset: fraud,
        },
        SectorTemplate {
            id: "custom",
            label_en: "Custom Audit",
            label_fr: "Audit Personnalisé",
            expected_level: None,
            preset: AISystemInput::default(),
        },
    ]
}

pub fn template(id: &str) -> GuideResult<SectorTemplate> {
    templates()
        .into_iter()
        .find(|t| t.id == id)
        .ok_or_else(|| GuideError::UnknownTemplate(id.to_string()))
}
