//! Query Handlers

mod novel_handlers;

pub use novel_handlers::{GetNovelTextHandler, GetRankingHandler, SearchNovelsHandler};
