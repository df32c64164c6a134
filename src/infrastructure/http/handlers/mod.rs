//! HTTP Handlers

mod novel;
mod ping;

pub use novel::{get_ranking, get_text, search};
pub use ping::ping;
