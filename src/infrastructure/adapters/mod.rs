//! Infrastructure Adapters

pub mod source;
pub mod text;

pub use source::{FakeSourceFetcher, HttpSourceFetcher, HttpSourceFetcherConfig};
pub use text::{EncodingDecoder, MainTextExtractor};
