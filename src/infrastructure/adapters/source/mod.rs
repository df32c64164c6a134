//! Source Adapters - 源站抓取实现

mod fake_fetcher;
mod http_fetcher;

pub use fake_fetcher::FakeSourceFetcher;
pub use http_fetcher::{HttpSourceFetcher, HttpSourceFetcherConfig};
