//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod repositories;
mod source_fetcher;
mod text_processing;

pub use repositories::{NovelQueryPort, RepositoryError, Snapshot};
pub use source_fetcher::{FetchError, SourceFetcherPort};
pub use text_processing::{BodyExtractorPort, DecodeError, ExtractError, TextDecoderPort};
