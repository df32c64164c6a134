//! Text Processing Ports - 出站端口
//!
//! 定义遗留编码解码与正文抽取的抽象接口
//! 具体实现在 infrastructure 层（encoding_rs / scraper）

use thiserror::Error;

/// 解码错误
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),

    /// 字节序列无法映射到目标编码
    ///
    /// 解码器不允许以替换字符（U+FFFD）静默兜底，
    /// 否则文本完整性无法校验
    #[error("Malformed byte sequence for encoding {0}")]
    MalformedSequence(String),
}

/// 抽取错误
#[derive(Debug, Error)]
pub enum ExtractError {
    /// 正文容器不存在（源站改版或抓到了错误页）
    ///
    /// 与"容器存在但正文为空"（成功返回空串）是两种结果
    #[error("Body container not found: selector `{0}` matched nothing")]
    BodyNotFound(String),
}

/// 遗留编码解码端口
pub trait TextDecoderPort: Send + Sync {
    /// 将指定编码的字节解码为字符串
    fn decode(&self, bytes: &[u8], encoding_label: &str) -> Result<String, DecodeError>;
}

/// 正文抽取端口
pub trait BodyExtractorPort: Send + Sync {
    /// 从 HTML 文档中抽取去除首尾空白的正文文本
    fn extract_body(&self, html: &str) -> Result<String, ExtractError>;
}
