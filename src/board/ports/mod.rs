//! Port contracts for the board's two external collaborators.

pub mod api;
pub mod view;

pub use api::{ApiError, ApiResult, BoardApi};
pub use view::BoardView;
