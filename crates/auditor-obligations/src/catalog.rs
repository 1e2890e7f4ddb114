//! Static checklists, one per tier. Critical items come first where the
//! tier has any; order is part of the contract.

use crate::checklist::{ChecklistItem, Priority};

const EUR_LEX_AI_ACT: &str = "https://eur-lex.europa.eu/eli/reg/2024/1689/oj";
const GDPR_INFO: &str = "https://gdpr-info.eu/";
const ISO_42001: &str = "https://www.iso.org/standard/81230.html";

pub(crate) const PROHIBITED_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        id: "prohibited-cease",
        title: "Cease Prohibited Activities Immediately",
        description: "Stop any deployment or development of systems that manipulate behavior, exploit vulnerabilities, perform social scoring, or conduct real-time biometric identification in public spaces",
        article: "Article 5",
        link: EUR_LEX_AI_ACT,
        category: "Legal Compliance",
        priority: Priority::Critical,
    },
    ChecklistItem {
        id: "prohibited-legal-counsel",
        title: "Consult Legal Expert Urgently",
        description: "Contact a specialized AI Act lawyer to discuss potential exemptions, transition periods, or system modifications",
        article: "Article 5, 113",
        link: EUR_LEX_AI_ACT,
        category: "Legal Compliance",
        priority: Priority::Critical,
    },
    ChecklistItem {
        id: "prohibited-penalties",
        title: "Assess Potential Penalties",
        description: "Understand that prohibited practices can lead to fines up to €35M or 7% of global turnover",
        article: "Article 99",
        link: EUR_LEX_AI_ACT,
        category: "Risk Management",
        priority: Priority::Critical,
    },
    ChecklistItem {
        id: "prohibited-shutdown-record",
        title: "Document System Shutdown",
        description: "Create detailed records of when the system was disabled and why, for regulatory compliance",
        article: "Article 72",
        link: EUR_LEX_AI_ACT,
        category: "Documentation",
        priority: Priority::High,
    },
];

pub(crate) const HIGH_RISK_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        id: "high-risk-management",
        title: "Establish Risk Management System",
        description: "Implement continuous risk identification, analysis, estimation, evaluation, and mitigation processes throughout the AI lifecycle",
        article: "Article 9",
        link: EUR_LEX_AI_ACT,
        category: "Risk Management",
        priority: Priority::Critical,
    },
    ChecklistItem {
        id: "high-data-governance",
        title: "Implement Data Governance",
        description: "Ensure training, validation, and testing datasets are relevant, representative, free of errors, and complete",
        article: "Article 10",
        link: EUR_LEX_AI_ACT,
        category: "Data Management",
        priority: Priority::Critical,
    },
    ChecklistItem {
        id: "high-technical-documentation",
        title: "Prepare Technical Documentation",
        description: "Create comprehensive documentation covering system design, development, testing, and performance",
        article: "Article 11, Annex IV",
        link: EUR_LEX_AI_ACT,
        category: "Documentation",
        priority: Priority::Critical,
    },
    ChecklistItem {
        id: "high-logging",
        title: "Implement Automatic Logging",
        description: "Design system to automatically record events, decisions, and interactions for traceability",
        article: "Article 12",
        link: EUR_LEX_AI_ACT,
        category: "Technical Compliance",
        priority: Priority::High,
    },
    ChecklistItem {
        id: "high-transparency",
        title: "Ensure Transparency to Users",
        description: "Provide clear, concise instructions for deployers in an appropriate format (user manual)",
        article: "Article 13",
        link: EUR_LEX_AI_ACT,
        category: "Transparency",
        priority: Priority::High,
    },
    ChecklistItem {
        id: "high-human-oversight",
        title: "Enable Human Oversight",
        description: "Design system to be effectively overseen by natural persons, with ability to override, interrupt, or stop",
        article: "Article 14",
        link: EUR_LEX_AI_ACT,
        category: "Safety",
        priority: Priority::Critical,
    },
    ChecklistItem {
        id: "high-accuracy",
        title: "Achieve Appropriate Accuracy",
        description: "Ensure system achieves appropriate levels of accuracy, robustness, and cybersecurity",
        article: "Article 15",
        link: EUR_LEX_AI_ACT,
        category: "Technical Compliance",
        priority: Priority::High,
    },
    ChecklistItem {
        id: "high-quality-management",
        title: "Establish Quality Management System",
        description: "Implement processes for compliance monitoring, incident handling, and continuous improvement",
        article: "Article 17",
        link: EUR_LEX_AI_ACT,
        category: "Quality Management",
        priority: Priority::High,
    },
    ChecklistItem {
        id: "high-eu-database",
        title: "Register System in EU Database",
        description: "Register high-risk AI system in the EU database before market placement",
        article: "Article 71",
        link: EUR_LEX_AI_ACT,
        category: "Legal Compliance",
        priority: Priority::Critical,
    },
    ChecklistItem {
        id: "high-conformity-assessment",
        title: "Conduct Conformity Assessment",
        description: "Complete either internal control or third-party assessment depending on Annex III category",
        article: "Article 43",
        link: EUR_LEX_AI_ACT,
        category: "Certification",
        priority: Priority::Critical,
    },
    ChecklistItem {
        id: "high-ce-marking",
        title: "Affix CE Marking",
        description: "Apply CE marking once conformity assessment is successful",
        article: "Article 48",
        link: EUR_LEX_AI_ACT,
        category: "Certification",
        priority: Priority::High,
    },
    ChecklistItem {
        id: "high-declaration-of-conformity",
        title: "Draft EU Declaration of Conformity",
        description: "Prepare formal declaration that system complies with all AI Act requirements",
        article: "Article 47",
        link: EUR_LEX_AI_ACT,
        category: "Certification",
        priority: Priority::High,
    },
    ChecklistItem {
        id: "high-post-market-monitoring",
        title: "Implement Post-Market Monitoring",
        description: "Establish systematic procedures to monitor system performance in real-world conditions",
        article: "Article 72",
        link: EUR_LEX_AI_ACT,
        category: "Monitoring",
        priority: Priority::High,
    },
    ChecklistItem {
        id: "high-incident-reporting",
        title: "Set Up Incident Reporting",
        description: "Create process to report serious incidents and malfunctions to national authorities",
        article: "Article 73",
        link: EUR_LEX_AI_ACT,
        category: "Risk Management",
        priority: Priority::Critical,
    },
    ChecklistItem {
        id: "high-authorised-representative",
        title: "Appoint EU Authorized Representative",
        description: "If provider is outside EU, designate authorized representative in Member State",
        article: "Article 22",
        link: EUR_LEX_AI_ACT,
        category: "Legal Compliance",
        priority: Priority::High,
    },
];

pub(crate) const LIMITED_RISK_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        id: "limited-ai-interaction-notice",
        title: "Inform Users About AI Interaction",
        description: "Clearly disclose when users are interacting with an AI system, unless obvious from context",
        article: "Article 50",
        link: EUR_LEX_AI_ACT,
        category: "Transparency",
        priority: Priority::High,
    },
    ChecklistItem {
        id: "limited-content-labelling",
        title: "Label AI-Generated Content",
        description: "Mark synthetic audio, image, video, or text content as artificially generated or manipulated",
        article: "Article 50(2)",
        link: EUR_LEX_AI_ACT,
        category: "Transparency",
        priority: Priority::High,
    },
    ChecklistItem {
        id: "limited-deep-fakes",
        title: "Detect Deepfakes",
        description: "If generating deepfakes, ensure they are detectable and labeled appropriately",
        article: "Article 50(4)",
        link: EUR_LEX_AI_ACT,
        category: "Safety",
        priority: Priority::Critical,
    },
    ChecklistItem {
        id: "limited-gpai-transparency",
        title: "Implement GPAI Transparency Requirements",
        description: "For general-purpose AI: publish documentation, copyright compliance, and technical summary",
        article: "Article 53",
        link: EUR_LEX_AI_ACT,
        category: "Transparency",
        priority: Priority::High,
    },
    ChecklistItem {
        id: "limited-codes-of-conduct",
        title: "Consider Voluntary Codes of Conduct",
        description: "Adopt voluntary codes of conduct going beyond minimum transparency obligations",
        article: "Article 95",
        link: EUR_LEX_AI_ACT,
        category: "Best Practices",
        priority: Priority::Medium,
    },
];

pub(crate) const MINIMAL_RISK_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        id: "minimal-gdpr",
        title: "Ensure GDPR Compliance",
        description: "Even minimal-risk AI must comply with GDPR if processing personal data",
        article: "GDPR",
        link: GDPR_INFO,
        category: "Data Protection",
        priority: Priority::High,
    },
    ChecklistItem {
        id: "minimal-documentation",
        title: "Document System Purpose and Design",
        description: "Maintain internal documentation as good practice for future audits or reclassification",
        article: "Best Practice",
        link: EUR_LEX_AI_ACT,
        category: "Documentation",
        priority: Priority::Medium,
    },
    ChecklistItem {
        id: "minimal-reclassification-watch",
        title: "Monitor for Classification Changes",
        description: "Periodically reassess whether system usage or features could shift it to higher risk category",
        article: "Annex III",
        link: EUR_LEX_AI_ACT,
        category: "Risk Management",
        priority: Priority::Medium,
    },
    ChecklistItem {
        id: "minimal-voluntary-standards",
        title: "Adopt Voluntary Standards",
        description: "Consider implementing voluntary AI ethics guidelines and technical standards (e.g., ISO/IEC 42001)",
        article: "Article 96",
        link: ISO_42001,
        category: "Best Practices",
        priority: Priority::Low,
    },
];
