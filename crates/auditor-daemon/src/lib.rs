//! AI Act Auditor daemon library
//!
//! This module provides the components of `auditord`:
//! - REST API handlers over the classification engine, checklists and guide
//! - Audit history storage
//! - Server lifecycle management

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod storage;

pub use api::{create_router, AppState};
pub use config::DaemonConfig;
pub use error::{ApiError, DaemonError, StorageError};
pub use server::Server;
pub use storage::{AuditRecord, AuditStorage, InMemoryStorage};
