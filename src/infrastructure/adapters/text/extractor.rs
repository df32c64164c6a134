//! Main Text Extractor - 正文抽取
//!
//! 基于 scraper 实现 BodyExtractorPort。
//! 选择器是与源站页面结构的隐式契约：青空文库把正文放在
//! `div.main_text` 里。源站改版时只需改这一个常量。

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::application::ports::{BodyExtractorPort, ExtractError};

/// 正文容器选择器（青空文库页面结构契约）
pub const MAIN_TEXT_SELECTOR: &str = "div.main_text";

static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(MAIN_TEXT_SELECTOR).expect("static selector must parse"));

/// 正文抽取器
pub struct MainTextExtractor;

impl BodyExtractorPort for MainTextExtractor {
    fn extract_body(&self, html: &str) -> Result<String, ExtractError> {
        let document = Html::parse_document(html);

        let container = document
            .select(&BODY_SELECTOR)
            .next()
            .ok_or_else(|| ExtractError::BodyNotFound(MAIN_TEXT_SELECTOR.to_string()))?;

        // 容器存在但为空是合法结果，返回空串
        Ok(container.text().collect::<String>().trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 青空文库正文页的结构样例，选择器契约以此为准
    const AOZORA_FIXTURE: &str = r#"
        <html>
          <body>
            <div class="metadata"><h1 class="title">坊っちゃん</h1></div>
            <div class="main_text">
                親譲りの無鉄砲で小供の時から損ばかりしている。
            </div>
            <div class="bibliographical_information">底本：…</div>
          </body>
        </html>"#;

    #[test]
    fn test_extracts_only_main_text_container() {
        let body = MainTextExtractor.extract_body(AOZORA_FIXTURE).unwrap();
        assert_eq!(body, "親譲りの無鉄砲で小供の時から損ばかりしている。");
    }

    #[test]
    fn test_result_is_trimmed() {
        let html = "<div class=\"main_text\">\n\t  こんにちは  \n</div>";
        assert_eq!(MainTextExtractor.extract_body(html).unwrap(), "こんにちは");
    }

    #[test]
    fn test_nested_markup_flattens_to_text() {
        // 青空文库正文里常见 ruby 注音与 <br/>
        let html = "<div class=\"main_text\">吾輩は<ruby>猫<rt>ねこ</rt></ruby>である<br/></div>";
        assert_eq!(
            MainTextExtractor.extract_body(html).unwrap(),
            "吾輩は猫ねこである"
        );
    }

    #[test]
    fn test_missing_container_is_error() {
        let html = "<html><body><p>404 Not Found</p></body></html>";
        let err = MainTextExtractor.extract_body(html).unwrap_err();
        assert!(matches!(err, ExtractError::BodyNotFound(_)));
    }

    #[test]
    fn test_present_but_empty_container_is_empty_string() {
        // "存在但为空" 与 "不存在" 必须可区分
        let html = "<div class=\"main_text\">   </div>";
        assert_eq!(MainTextExtractor.extract_body(html).unwrap(), "");
    }

    #[test]
    fn test_first_matching_container_wins() {
        let html = "<div class=\"main_text\">first</div><div class=\"main_text\">second</div>";
        assert_eq!(MainTextExtractor.extract_body(html).unwrap(), "first");
    }
}
