//! API request handlers

mod assess;
mod audits;
mod checklist;
mod guide;
mod health;
mod templates;
mod terms;
mod validate;

pub use assess::*;
pub use audits::*;
pub use checklist::*;
pub use guide::*;
pub use health::*;
pub use templates::*;
pub use terms::*;
pub use validate::*;
