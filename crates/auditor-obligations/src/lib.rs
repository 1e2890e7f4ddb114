//! # auditor-obligations
//!
//! Obligations Resolver: maps a resolved risk tier to what the provider has
//! to do about it.
//!
//! - [`checklist`] / [`checklist_stats`]: the four static, ordered compliance
//!   checklists (critical items first) with legal references and links.
//! - [`obligations`] / [`next_steps`]: the localized obligation strings that
//!   go into an `AnalysisResult`, extended by sector and transparency duties.
//!
//! Tier alone selects a catalog; there is no predicate logic here beyond
//! appending the duties a flag makes explicit.

mod catalog;
pub mod checklist;
pub mod obligations;

pub use checklist::{checklist, checklist_stats, ChecklistItem, ChecklistStats, Priority};
pub use obligations::{base_obligations, next_steps, obligations};
