//! Task-board interaction handling.
//!
//! This module wires discrete user interactions (form submits, star/sort/check
//! clicks, focus changes, modal visibility) to the five backend mutations and
//! to the follow-up view refresh. Handlers receive typed, already-extracted
//! input values; no handler re-queries ambient page state. After a mutation
//! settles successfully, board state is refetched once and re-rendered in
//! place of a whole-page reload, a step that can be exercised in isolation.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
