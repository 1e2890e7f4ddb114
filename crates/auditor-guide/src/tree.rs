//! Yes/no decision tree.
//!
//! Nodes ask one legal question each. Every edge leads either to another
//! node or to a terminal [`TreeOutcome`]; the graph is checked to be acyclic
//! when the tree is built, so a walk ends within `nodes.len()` answers.

use std::collections::{BTreeSet, HashMap, HashSet};

use auditor_types::{AISystemInput, InputFlag, Language, RiskLevel};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GuideError, GuideResult};

/// Terminal label of a walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TreeOutcome {
    Prohibited,
    HighRisk,
    Limited,
    Minimal,
}

impl TreeOutcome {
    pub fn risk_level(&self) -> RiskLevel {
        match self {
            TreeOutcome::Prohibited => RiskLevel::Prohibited,
            TreeOutcome::HighRisk => RiskLevel::High,
            TreeOutcome::Limited => RiskLevel::Limited,
            TreeOutcome::Minimal => RiskLevel::Minimal,
        }
    }

    /// Flags every walk ending here pre-fills.
    pub fn presets(&self) -> &'static [InputFlag] {
        match self {
            TreeOutcome::Prohibited | TreeOutcome::HighRisk => &[InputFlag::AffectsRights],
            TreeOutcome::Limited => &[InputFlag::IsGenAi],
            TreeOutcome::Minimal => &[],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

/// Where an answer leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Node(&'static str),
    Outcome(TreeOutcome),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionNode {
    pub id: &'static str,
    pub question_en: &'static str,
    pub question_fr: &'static str,
    pub yes: Edge,
    pub no: Edge,
    /// Flags implied by answering "yes".
    pub prefill: &'static [InputFlag],
}

impl QuestionNode {
    pub fn question(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.question_en,
            Language::Fr => self.question_fr,
        }
    }

    pub fn edge(&self, answer: Answer) -> Edge {
        match answer {
            Answer::Yes => self.yes,
            Answer::No => self.no,
        }
    }
}

/// Validated question graph.
#[derive(Clone, Debug, Serialize)]
pub struct DecisionTree {
    root: &'static str,
    nodes: Vec<QuestionNode>,
    #[serde(skip)]
    index: HashMap<&'static str, usize>,
}

impl DecisionTree {
    pub fn new(root: &'static str, nodes: Vec<QuestionNode>) -> GuideResult<Self> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id, i).is_some() {
                return Err(GuideError::DuplicateNode(node.id.to_string()));
            }
        }
        if !index.contains_key(root) {
            return Err(GuideError::UnknownRoot(root.to_string()));
        }
        for node in &nodes {
            for edge in [node.yes, node.no] {
                if let Edge::Node(target) = edge {
                    if !index.contains_key(target) {
                        return Err(GuideError::UnknownTarget {
                            from: node.id.to_string(),
                            to: target.to_string(),
                        });
                    }
                }
            }
        }

        let tree = Self { root, nodes, index };
        tree.check_acyclic()?;
        debug!(nodes = tree.nodes.len(), root, "decision tree validated");
        Ok(tree)
    }

    /// The AI Act questionnaire.
    pub fn builtin() -> GuideResult<Self> {
        Self::new("manipulation", builtin_nodes())
    }

    pub fn root(&self) -> &'static str {
        self.root
    }

    pub fn nodes(&self) -> &[QuestionNode] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&QuestionNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn start(&self) -> DecisionWalk<'_> {
        DecisionWalk {
            tree: self,
            position: Position::Question(self.root),
            history: Vec::new(),
        }
    }

    /// Walk from the root answering `answers` in order.
    pub fn replay(&self, answers: &[Answer]) -> GuideResult<DecisionWalk<'_>> {
        let mut walk = self.start();
        for answer in answers {
            walk.answer(*answer)?;
        }
        Ok(walk)
    }

    fn check_acyclic(&self) -> GuideResult<()> {
        // iterative DFS; `on_path` holds the nodes of the current branch
        let mut done: HashSet<&'static str> = HashSet::new();
        for node in &self.nodes {
            if done.contains(node.id) {
                continue;
            }
            let mut on_path: HashSet<&'static str> = HashSet::new();
            let mut stack: Vec<(&'static str, usize)> = vec![(node.id, 0)];
            on_path.insert(node.id);

            while let Some((id, next_edge)) = stack.pop() {
                let Some(current) = self.node(id) else {
                    continue;
                };
                let edges = [current.yes, current.no];
                if next_edge == edges.len() {
                    on_path.remove(id);
                    done.insert(id);
                    continue;
                }
                stack.push((id, next_edge + 1));
                if let Edge::Node(target) = edges[next_edge] {
                    if on_path.contains(target) {
                        return Err(GuideError::Cycle(target.to_string()));
                    }
                    if !done.contains(target) {
                        on_path.insert(target);
                        stack.push((target, 0));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Current place in a walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Position {
    Question(&'static str),
    Outcome(TreeOutcome),
}

/// One traversal of a [`DecisionTree`], with an undo history.
#[derive(Clone, Debug)]
pub struct DecisionWalk<'a> {
    tree: &'a DecisionTree,
    position: Position,
    history: Vec<(&'static str, Answer)>,
}

impl<'a> DecisionWalk<'a> {
    pub fn position(&self) -> Position {
        self.position
    }

    /// The question waiting for an answer, if the walk is still running.
    pub fn current(&self) -> Option<&'a QuestionNode> {
        match self.position {
            Position::Question(id) => self.tree.node(id),
            Position::Outcome(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<TreeOutcome> {
        match self.position {
            Position::Outcome(outcome) => Some(outcome),
            Position::Question(_) => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn history(&self) -> &[(&'static str, Answer)] {
        &self.history
    }

    pub fn answer(&mut self, answer: Answer) -> GuideResult<Position> {
        let node = self.current().ok_or(GuideError::WalkFinished)?;
        self.history.push((node.id, answer));
        self.position = match node.edge(answer) {
            Edge::Node(next) => Position::Question(next),
            Edge::Outcome(outcome) => Position::Outcome(outcome),
        };
        debug!(node = node.id, ?answer, position = ?self.position, "decision tree step");
        Ok(self.position)
    }

    /// Undo the last answer. Returns `false` at the root.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some((id, _)) => {
                self.position = Position::Question(id);
                true
            }
            None => false,
        }
    }

    /// Outcome and pre-fill of a finished walk.
    pub fn suggestion(&self) -> Option<Suggestion> {
        let outcome = self.outcome()?;
        let mut prefill: BTreeSet<InputFlag> = self
            .history
            .iter()
            .filter(|(_, answer)| *answer == Answer::Yes)
            .filter_map(|(id, _)| self.tree.node(id))
            .flat_map(|node| node.prefill.iter().copied())
            .collect();
        prefill.extend(outcome.presets().iter().copied());

        Some(Suggestion {
            outcome,
            risk_level: outcome.risk_level(),
            prefill,
        })
    }
}

/// Suggested tier and the flags to pre-fill before classifying.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub outcome: TreeOutcome,
    pub risk_level: RiskLevel,
    pub prefill: BTreeSet<InputFlag>,
}

impl Suggestion {
    /// Set every pre-filled flag on `input`. Flags already set stay set.
    pub fn apply(&self, input: &mut AISystemInput) {
        for flag in &self.prefill {
            flag.set(input, true);
        }
    }
}

fn builtin_nodes() -> Vec<QuestionNode> {
    use Edge::{Node, Outcome};
    use TreeOutcome::{HighRisk, Limited, Minimal, Prohibited};

    fn high(
        id: &'static str,
        question_en: &'static str,
        question_fr: &'static str,
        next: &'static str,
        prefill: &'static [InputFlag],
    ) -> QuestionNode {
        QuestionNode {
            id,
            question_en,
            question_fr,
            yes: Outcome(HighRisk),
            no: Node(next),
            prefill,
        }
    }
    fn prohibited(
        id: &'static str,
        question_en: &'static str,
        question_fr: &'static str,
        next: &'static str,
        prefill: &'static [InputFlag],
    ) -> QuestionNode {
        QuestionNode {
            id,
            question_en,
            question_fr,
            yes: Outcome(Prohibited),
            no: Node(next),
            prefill,
        }
    }

    vec![
        prohibited(
            "manipulation",
            "Does your AI use subliminal, manipulative or deceptive techniques to distort behaviour?",
            "Votre IA utilise-t-elle des techniques subliminales, manipulatrices ou trompeuses pour altérer le comportement ?",
            "vulnerabilities",
            &[InputFlag::ManipulativeTechniques],
        ),
        prohibited(
            "vulnerabilities",
            "Does it exploit vulnerabilities of specific groups (age, disability, social or economic situation)?",
            "Exploite-t-elle les vulnérabilités de groupes spécifiques (âge, handicap, situation sociale ou économique) ?",
            "scoring",
            &[InputFlag::ExploitsVulnerabilities],
        ),
        prohibited(
            "scoring",
            "Is it a social scoring system used by a public authority?",
            "Est-ce un système de scoring social utilisé par une autorité publique ?",
            "biometric_live",
            &[InputFlag::SocialScoring],
        ),
        prohibited(
            "biometric_live",
            "Do you use real-time remote biometric identification in public spaces?",
            "Utilisez-vous l'identification biométrique en temps réel dans des espaces publics ?",
            "health_diagnosis",
            &[InputFlag::RealtimeRemoteBiometrics],
        ),
        high(
            "health_diagnosis",
            "Is it a health system influencing diagnosis or treatment decisions?",
            "S'agit-il d'un système de santé influençant les décisions de diagnostic ou de traitement ?",
            "biometrics",
            &[InputFlag::HealthDomain, InputFlag::InfluencesDiagnosis],
        ),
        high(
            "biometrics",
            "Does it perform biometric identification, categorisation or emotion recognition?",
            "Réalise-t-il une identification biométrique, une catégorisation ou une reconnaissance des émotions ?",
            "critical_infra",
            &[InputFlag::Biometrics],
        ),
        high(
            "critical_infra",
            "Does the system manage critical infrastructure (energy, transport, water, telecom)?",
            "Le système gère-t-il une infrastructure critique (énergie, transport, eau, telecom) ?",
            "employment",
            &[InputFlag::Infrastructure],
        ),
        high(
            "employment",
            "Is it used for recruitment, promotion or monitoring of workers?",
            "Est-il utilisé pour le recrutement, la promotion ou la surveillance de travailleurs ?",
            "education",
            &[InputFlag::Employment],
        ),
        high(
            "education",
            "Does it decide on school admission or evaluate students?",
            "Décide-t-il de l'admission scolaire ou évalue-t-il des élèves ?",
            "essential_services",
            &[InputFlag::Education],
        ),
        high(
            "essential_services",
            "Does it evaluate access to essential services such as credit, insurance or public benefits?",
            "Évalue-t-il l'accès à des services essentiels comme le crédit, l'assurance ou les prestations publiques ?",
            "law_enforcement",
            &[InputFlag::Services],
        ),
        high(
            "law_enforcement",
            "Is it used by or on behalf of law enforcement authorities?",
            "Est-il utilisé par les autorités répressives ou pour leur compte ?",
            "migration",
            &[InputFlag::LawEnforcement],
        ),
        high(
            "migration",
            "Is it used in migration, asylum or border control?",
            "Est-il utilisé pour la migration, l'asile ou le contrôle aux frontières ?",
            "justice",
            &[InputFlag::Migration],
        ),
        high(
            "justice",
            "Does it assist judicial decisions or influence elections?",
            "Assiste-t-il des décisions de justice ou influence-t-il des élections ?",
            "gen_ai",
            &[InputFlag::Justice],
        ),
        QuestionNode {
            id: "gen_ai",
            question_en: "Is it a generative AI system or a chatbot?",
            question_fr: "S'agit-il d'un système d'IA générative ou d'un chatbot ?",
            yes: Outcome(Limited),
            no: Outcome(Minimal),
            prefill: &[InputFlag::IsGenAi],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> DecisionTree {
        DecisionTree::builtin().unwrap()
    }

    fn node(id: &'static str, yes: Edge, no: Edge) -> QuestionNode {
        QuestionNode {
            id,
            question_en: "?",
            question_fr: "?",
            yes,
            no,
            prefill: &[],
        }
    }

    #[test]
    fn builtin_shape() {
        let tree = tree();
        assert_eq!(tree.root(), "manipulation");
        assert_eq!(tree.nodes().len(), 14);
        assert!(tree.node("gen_ai").is_some());
    }

    #[test]
    fn all_no_then_gen_ai_is_limited() {
        let tree = tree();
        let mut walk = tree.start();
        while walk.current().map(|n| n.id) != Some("gen_ai") {
            walk.answer(Answer::No).unwrap();
        }
        assert_eq!(
            walk.answer(Answer::Yes).unwrap(),
            Position::Outcome(TreeOutcome::Limited)
        );
        let suggestion = walk.suggestion().unwrap();
        assert_eq!(suggestion.risk_level, RiskLevel::Limited);
        assert_eq!(suggestion.prefill, BTreeSet::from([InputFlag::IsGenAi]));
    }

    #[test]
    fn all_no_is_minimal() {
        let tree = tree();
        let walk = tree.replay(&[Answer::No; 14]).unwrap();
        assert_eq!(walk.outcome(), Some(TreeOutcome::Minimal));
        assert!(walk.suggestion().unwrap().prefill.is_empty());
    }

    #[test]
    fn yes_prefills_and_presets() {
        let tree = tree();
        let walk = tree.replay(&[Answer::No, Answer::No, Answer::No, Answer::No, Answer::Yes]).unwrap();
        let suggestion = walk.suggestion().unwrap();
        assert_eq!(suggestion.outcome, TreeOutcome::HighRisk);
        assert_eq!(
            suggestion.prefill,
            BTreeSet::from([
                InputFlag::HealthDomain,
                InputFlag::InfluencesDiagnosis,
                InputFlag::AffectsRights,
            ])
        );

        let mut input = AISystemInput::default();
        suggestion.apply(&mut input);
        assert!(input.health_domain && input.influences_diagnosis && input.affects_rights);
    }

    #[test]
    fn back_undoes_one_step() {
        let tree = tree();
        let mut walk = tree.start();
        assert!(!walk.back());

        walk.answer(Answer::No).unwrap();
        walk.answer(Answer::Yes).unwrap();
        assert!(walk.is_finished());

        assert!(walk.back());
        assert_eq!(walk.position(), Position::Question("vulnerabilities"));
        assert!(walk.back());
        assert_eq!(walk.position(), Position::Question("manipulation"));
        assert!(walk.history().is_empty());
    }

    #[test]
    fn answering_after_outcome_fails() {
        let tree = tree();
        let mut walk = tree.replay(&[Answer::Yes]).unwrap();
        assert_eq!(walk.answer(Answer::No), Err(GuideError::WalkFinished));
    }

    #[test]
    fn rejects_cycles() {
        let nodes = vec![
            node("a", Edge::Node("b"), Edge::Outcome(TreeOutcome::Minimal)),
            node("b", Edge::Outcome(TreeOutcome::Limited), Edge::Node("a")),
        ];
        assert!(matches!(DecisionTree::new("a", nodes), Err(GuideError::Cycle(_))));
    }

    #[test]
    fn rejects_dangling_edges_and_root() {
        let nodes = vec![node("a", Edge::Node("missing"), Edge::Outcome(TreeOutcome::Minimal))];
        assert!(matches!(
            DecisionTree::new("a", nodes.clone()),
            Err(GuideError::UnknownTarget { .. })
        ));
        assert_eq!(
            DecisionTree::new("z", nodes).unwrap_err(),
            GuideError::UnknownRoot("z".into())
        );
    }

    #[test]
    fn accepts_shared_subtrees() {
        let nodes = vec![
            node("a", Edge::Node("c"), Edge::Node("b")),
            node("b", Edge::Node("c"), Edge::Outcome(TreeOutcome::Minimal)),
            node("c", Edge::Outcome(TreeOutcome::HighRisk), Edge::Outcome(TreeOutcome::Minimal)),
        ];
        assert!(DecisionTree::new("a", nodes).is_ok());
    }

    #[test]
    fn outcome_wire_names() {
        assert_eq!(
            serde_json::to_value(TreeOutcome::HighRisk).unwrap(),
            serde_json::json!("HIGH_RISK")
        );
    }

    #[test]
    fn localized_questions() {
        let tree = tree();
        let gen_ai = tree.node("gen_ai").unwrap();
        assert!(gen_ai.question(Language::Fr).contains("IA générative"));
    }
}
