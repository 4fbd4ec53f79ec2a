//! Faculty workload framework for the U-Engine ecosystem.
//!
//! Tracks which courses each faculty member teaches, derives their teaching
//! load, and checks their weekly timetable for collisions. Presentation,
//! persistence and file export are left to collaborators that call into
//! this crate and render the snapshots it returns.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Faculty`, `Course`, `Meeting`, `TimeRange`,
//!   `WorkloadStatus`, `ScheduleConflict`, `LoadStatus`
//! - **`store`**: Storage interface (`Store`) and the in-memory `MemoryStore`
//! - **`registry`**: Assignment rules over a store (`assign`, `unassign`,
//!   `list_courses`)
//! - **`workload`**: Unit totals, load-band classification, required load
//! - **`conflict`**: Same-day meeting overlap detection
//! - **`report`**: Per-faculty `WorkloadStatus`, department summary, export rows
//! - **`config`**: Band table and required-load policy (defaults / TOML / env)
//! - **`validation`**: Catalog integrity checks (duplicate IDs, dangling refs)
//!
//! # Data Flow
//!
//! Strictly one-directional: callers mutate through the `Registry`, then ask
//! the `ReportBuilder` for fresh snapshots. Nothing is cached, so every
//! report reflects the current records.
//!
//! Everything runs synchronously on the caller's thread.

pub mod config;
pub mod conflict;
pub mod error;
pub mod models;
pub mod registry;
pub mod report;
pub mod store;
pub mod validation;
pub mod workload;

pub use error::{Result, WorkloadError};
