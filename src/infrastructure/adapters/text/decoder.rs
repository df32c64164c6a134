//! Encoding Decoder - 遗留编码解码
//!
//! 基于 encoding_rs 实现 TextDecoderPort。
//! 青空文库正文页是 Shift_JIS；编码标签来自配置，标签解析交给
//! encoding_rs 的 WHATWG label 机制（"Shift_JIS"、"sjis" 等均可）。

use encoding_rs::Encoding;

use crate::application::ports::{DecodeError, TextDecoderPort};

/// 遗留编码解码器
pub struct EncodingDecoder;

impl TextDecoderPort for EncodingDecoder {
    fn decode(&self, bytes: &[u8], encoding_label: &str) -> Result<String, DecodeError> {
        let encoding = Encoding::for_label(encoding_label.as_bytes())
            .ok_or_else(|| DecodeError::UnknownEncoding(encoding_label.to_string()))?;

        let (text, _, had_errors) = encoding.decode(bytes);

        // encoding_rs 会把非法序列替换为 U+FFFD 并置 had_errors；
        // 这里拒绝替换结果，保证文本完整性可校验
        if had_errors {
            return Err(DecodeError::MalformedSequence(
                encoding.name().to_string(),
            ));
        }

        Ok(text.into_owned())
    }
}
