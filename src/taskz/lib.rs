//! # Taskz Architecture
//!
//! Taskz is a **UI-agnostic task list library**. The binary is a thin terminal
//! client over it; the same core could drive any other frontend.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, args.rs, wired by main.rs)                │
//! │  - Parses arguments, renders the list, handles terminal I/O │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Controller (controller.rs)                                 │
//! │  - Owns the authoritative task collection and the filter    │
//! │  - Turns events into mutate → persist → re-render cycles    │
//! └─────────────────────────────────────────────────────────────┘
//!                │                             │
//!                ▼                             ▼
//! ┌──────────────────────────┐  ┌──────────────────────────────┐
//! │  Storage (store/)        │  │  Surface (surface.rs)        │
//! │  - TaskStore trait       │  │  - Render + event capability │
//! │  - FileStore (prod)      │  │  - TermSurface (cli/render)  │
//! │  - InMemoryStore (tests) │  │  - recording fakes in tests  │
//! └──────────────────────────┘  └──────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From [`controller`] inward, code takes regular Rust arguments, returns
//! `Result`, and never touches stdout/stderr or `std::process::exit`. The
//! terminal only appears behind the [`surface::Surface`] seam.
//!
//! ## Control Flow
//!
//! Every event follows the same cycle: mutate the in-memory collection,
//! persist the full collection, recompute the filtered view, hand it to the
//! surface. Persistence completes before the event handler returns, so the
//! stored and in-memory collections never diverge.
//!
//! ## Module Overview
//!
//! - [`controller`]: The task list controller—entry point for all operations
//! - [`surface`]: The render/event capability the controller drives
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types ([`model::Task`], [`model::Filter`])
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Terminal rendering and message printing for the binary

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod store;
pub mod surface;
