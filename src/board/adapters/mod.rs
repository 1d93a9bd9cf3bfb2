//! Adapter implementations of the board ports.

pub mod html;
pub mod http;
pub mod memory;

pub use html::{HtmlBoardRenderer, RenderError};
pub use http::HttpBoardApi;
