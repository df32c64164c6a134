//! Novel HTTP Handlers
//!
//! 三个查询入口的 HTTP 适配。
//! "未命中/无数据"映射为 errno 404，检索错误按类别映射（见 error.rs）

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{GetNovelText, GetRanking, SearchNovels};
use crate::domain::novel::WorkId;
use crate::infrastructure::http::dto::{
    ApiResponse, GetTextRequest, NovelInfoResponse, RankedNovelResponse, RankingRequest,
    RankingResponse, SearchRequest, SearchResponse, TextResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取小说全文
pub async fn get_text(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GetTextRequest>,
) -> Result<Json<ApiResponse<TextResponse>>, ApiError> {
    let text = state
        .get_text_handler
        .handle(GetNovelText {
            work_id: WorkId::new(request.work_id),
        })
        .await?;

    match text {
        Some(text) => Ok(Json(ApiResponse::success(TextResponse {
            work_id: request.work_id,
            text,
        }))),
        None => Err(ApiError::NotFound(format!(
            "Novel not found: {}",
            request.work_id
        ))),
    }
}

/// 获取访问量排行
pub async fn get_ranking(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RankingRequest>,
) -> Result<Json<ApiResponse<RankingResponse>>, ApiError> {
    let rankings = state
        .get_ranking_handler
        .handle(GetRanking {
            limit: request.limit,
        })
        .await?;

    match rankings {
        Some(rankings) => Ok(Json(ApiResponse::success(RankingResponse {
            entries: rankings
                .into_iter()
                .map(RankedNovelResponse::from)
                .collect(),
        }))),
        None => Err(ApiError::NotFound("No ranking data".to_string())),
    }
}

/// 按作者姓名搜索
///
/// 空结果是合法成功，返回空列表而不是 404
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<ApiResponse<SearchResponse>>, ApiError> {
    let novels = state
        .search_handler
        .handle(SearchNovels {
            query: request.query,
        })
        .await?;

    Ok(Json(ApiResponse::success(SearchResponse {
        novels: novels.into_iter().map(NovelInfoResponse::from).collect(),
    })))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    use crate::infrastructure::adapters::source::FakeSourceFetcher;
    use crate::infrastructure::adapters::text::{EncodingDecoder, MainTextExtractor};
    use crate::infrastructure::http::routes::create_routes;
    use crate::infrastructure::http::state::AppState;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, insert_novel_for_test, run_migrations, DatabaseConfig,
        SqliteNovelRepository,
    };

    async fn test_app(fetcher: FakeSourceFetcher) -> Router {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        insert_novel_for_test(&pool, 1, "坊っちゃん", "夏目", "漱石", "http://src/1", 80).await;
        insert_novel_for_test(&pool, 2, "羅生門", "芥川", "龍之介", "http://src/2", 50).await;

        let state = AppState::new(
            Arc::new(SqliteNovelRepository::new(pool)),
            Arc::new(fetcher),
            Arc::new(EncodingDecoder),
            Arc::new(MainTextExtractor),
            "Shift_JIS",
        );

        create_routes().with_state(Arc::new(state))
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> Value {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        // 业务错误也走 HTTP 200 + errno
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_text_success_envelope() {
        let (page, _, _) =
            encoding_rs::SHIFT_JIS.encode("<div class=\"main_text\"> こんにちは </div>");
        let app = test_app(FakeSourceFetcher::new().with_page("http://src/1", page.into_owned()))
            .await;

        let body = post_json(app, "/api/novel/text", json!({ "work_id": 1 })).await;

        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["text"], "こんにちは");
        assert_eq!(body["data"]["work_id"], 1);
    }

    #[tokio::test]
    async fn test_get_text_absent_novel_is_errno_404() {
        let app = test_app(FakeSourceFetcher::new()).await;
        let body = post_json(app, "/api/novel/text", json!({ "work_id": 999 })).await;
        assert_eq!(body["errno"], 404);
    }

    #[tokio::test]
    async fn test_get_text_upstream_failure_is_errno_502() {
        // novel 1 存在但 Fake 未注册其 URL → 抓取 404
        let app = test_app(FakeSourceFetcher::new()).await;
        let body = post_json(app, "/api/novel/text", json!({ "work_id": 1 })).await;
        assert_eq!(body["errno"], 502);
    }

    #[tokio::test]
    async fn test_ranking_entries_and_no_data() {
        let app = test_app(FakeSourceFetcher::new()).await;
        let body = post_json(app.clone(), "/api/novel/ranking", json!({ "limit": 2 })).await;

        assert_eq!(body["errno"], 0);
        let entries = body["data"]["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["rank"], 1);
        assert_eq!(entries[0]["title"], "坊っちゃん");
        assert_eq!(entries[1]["rank"], 2);

        let no_data = post_json(app, "/api/novel/ranking", json!({ "limit": 0 })).await;
        assert_eq!(no_data["errno"], 404);
    }

    #[tokio::test]
    async fn test_search_empty_result_is_success() {
        let app = test_app(FakeSourceFetcher::new()).await;

        let hit = post_json(
            app.clone(),
            "/api/novel/search",
            json!({ "query": "芥川" }),
        )
        .await;
        assert_eq!(hit["errno"], 0);
        assert_eq!(hit["data"]["novels"][0]["title"], "羅生門");

        let empty = post_json(app, "/api/novel/search", json!({ "query": "太宰" })).await;
        assert_eq!(empty["errno"], 0);
        assert_eq!(empty["data"]["novels"].as_array().unwrap().len(), 0);
    }
}
