//! In-memory fakes of the board ports for tests.

mod api;
mod view;

pub use api::{IssuedRequest, RecordingBoardApi};
pub use view::InMemoryBoardView;
