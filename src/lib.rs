//! Connect Four (workspace facade crate).
//!
//! The rules engine, input mapping and terminal rendering live in dedicated
//! crates under `crates/`; this package re-exports them as
//! `connect_four::{core,input,term,types}` and adds the runtime pieces the
//! binary needs (environment config and the optional event journal).

pub mod config;
pub mod journal;

pub use connect_four_core as core;
pub use connect_four_input as input;
pub use connect_four_term as term;
pub use connect_four_types as types;
