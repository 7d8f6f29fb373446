//! Article handlers
//!
//! Listing and search failures return generic 500 messages; the underlying
//! cause is logged. Validation messages pass through with their exact
//! wording.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::handlers::DataResponse;
use crate::AppState;
use reviewhub_common::{
    db::models::Article,
    db::{FetchArticlesOptions, NewArticle},
    errors::{AppError, Result},
    pagination::PaginatedResult,
    DEFAULT_PAGE_SIZE,
};

#[derive(Debug, Deserialize)]
pub struct ListArticlesQuery {
    #[serde(rename = "companyId")]
    pub company_id: Option<String>,

    pub page: Option<u64>,

    pub tag: Option<String>,

    pub q: Option<String>,
}

/// GET /api/articles - one page of a company's articles, newest first
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListArticlesQuery>,
) -> Result<Json<PaginatedResult<Article>>> {
    let company_id = params
        .company_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::missing_field("companyId"))?;

    let opts = FetchArticlesOptions {
        company_id,
        tag: params.tag,
        keyword: params.q,
        page: params.page.unwrap_or(1),
        page_size: DEFAULT_PAGE_SIZE,
    };

    let result = state
        .repo
        .fetch_articles(&opts)
        .await
        .map_err(|e| e.redact("Failed to fetch articles"))?;

    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub company_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub tag: Option<String>,
    pub user_id: Option<String>,
}

/// POST /api/articles - validate and persist one new article
pub async fn create_article(
    State(state): State<AppState>,
    Json(body): Json<CreateArticleRequest>,
) -> Result<Json<DataResponse<Article>>> {
    let company_id = body
        .company_id
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::missing_field("company_id"))?;

    let tag = body
        .tag
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::missing_field("tag"))?;

    // Anonymous submissions get a generated actor id
    let user_id = body
        .user_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let payload = NewArticle {
        company_id,
        title: body.title.unwrap_or_default(),
        content: body.content.unwrap_or_default(),
        user_id,
        tag,
    };

    let created = state
        .repo
        .create_article(payload)
        .await
        .map_err(|e| e.redact("Failed to create article"))?;

    tracing::info!(
        article_id = %created.id,
        company_id = %created.company_id,
        tag = %created.tag,
        "Article created"
    );

    Ok(Json(DataResponse { data: created }))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// GET /api/search - keyword search across all companies. A blank keyword
/// returns everything; result order is unspecified.
pub async fn search_articles(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<DataResponse<Vec<Article>>>> {
    let keyword = params.q.unwrap_or_default();

    let articles = state
        .repo
        .search_articles(&keyword)
        .await
        .map_err(|e| e.redact("Failed to search articles"))?;

    Ok(Json(DataResponse { data: articles }))
}
