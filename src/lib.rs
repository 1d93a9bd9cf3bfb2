//! Taskboard: client-side controller for a task-board web application.
//!
//! This crate drives a server-rendered to-do board. It reads form input,
//! issues mutations against the backend HTTP API (create task, create group,
//! mark important, apply a sort order, complete task), and refreshes the view
//! by refetching board state and re-rendering it once each mutation settles.
//! The backend itself and its persistence are external collaborators reached
//! only over HTTP.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure interaction types and the panel state machine, with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the two external collaborators
//!   (the backend API and the view surface)
//! - **Adapters**: Concrete implementations of ports (HTTP client, HTML
//!   renderer, in-memory fakes)
//!
//! # Modules
//!
//! - [`board`]: Task-board event routing, mutation dispatch, and view refresh

pub mod board;
