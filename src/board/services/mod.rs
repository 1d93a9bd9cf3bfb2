//! Application services for board interaction orchestration.

mod controller;
mod router;

pub use controller::{BoardControllerError, BoardControllerResult, TaskBoardController};
pub use router::BoardEventRouter;
