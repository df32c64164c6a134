//! Text Adapters - 解码与正文抽取实现

mod decoder;
mod extractor;

pub use decoder::EncodingDecoder;
pub use extractor::{MainTextExtractor, MAIN_TEXT_SELECTOR};
