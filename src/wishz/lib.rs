//! # Wishz Architecture
//!
//! Wishz is a **UI-agnostic birthday scheduling library** with a thin
//! interactive CLI on top. The layering mirrors that split:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Prompt loop, stdin/stdout, colored output                │
//! │  - The ONLY place that knows about a terminal               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns Result types          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, no I/O assumptions                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/) · Scheduling (schedule.rs) · Dispatch     │
//! │  - RecordStore trait: FileStore prod, InMemoryStore tests   │
//! │  - Injectable Clock + JobScheduler + MessageSender          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` types, never writes to stdout/stderr and never exits the
//! process. The seams that touch the outside world (wall clock, sleeping,
//! the message dispatch tool) are traits, so tests run against fakes with
//! no real delays and no real sends.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each menu command
//! - [`store`]: Flat-file record storage and the in-memory test backend
//! - [`schedule`]: Daily job scheduler, clock abstraction, tick loop
//! - [`dispatch`]: Greeting template and the external send delegate
//! - [`model`]: The `BirthdayRecord` type and line format
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod schedule;
pub mod store;
