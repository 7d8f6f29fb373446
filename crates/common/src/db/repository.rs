//! Repository pattern for database operations
//!
//! The data access layer for articles and companies. Every operation is a
//! single stateless round trip; filtering, case-insensitive search,
//! ordering, and windowing are all pushed down to Postgres through the
//! query builder.

use crate::db::models::{
    Article, ArticleActiveModel, ArticleColumn, ArticleEntity, Company, CompanyColumn,
    CompanyEntity,
};
use crate::db::DbPool;
use crate::errors::{AppError, Result};
use crate::pagination::{self, PaginatedResult};
use crate::{DEFAULT_PAGE_SIZE, VALID_TAGS};
use sea_orm::sea_query::{extension::postgres::PgExpr, Condition, Expr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set,
};
use uuid::Uuid;

/// Options for the filtered, paginated article listing
#[derive(Debug, Clone)]
pub struct FetchArticlesOptions {
    /// Company to list articles for. Opaque; an unknown id yields zero rows.
    pub company_id: String,

    /// Optional tag equality filter, passed through unvalidated
    pub tag: Option<String>,

    /// Optional keyword, matched case-insensitively against title or content
    pub keyword: Option<String>,

    /// 1-based page number
    pub page: u64,

    pub page_size: u64,
}

impl FetchArticlesOptions {
    pub fn new(company_id: impl Into<String>) -> Self {
        Self {
            company_id: company_id.into(),
            tag: None,
            keyword: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Payload for creating an article. Stored verbatim once validated.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub company_id: String,
    pub title: String,
    pub content: String,
    pub user_id: String,
    pub tag: String,
}

/// Pre-insert validation gate. Checks run in order and the first failure
/// wins: title, then content, then tag. Trimming is applied only for the
/// emptiness test; the stored values keep their whitespace.
pub fn validate_new_article(payload: &NewArticle) -> Result<()> {
    if payload.title.trim().is_empty() {
        return Err(AppError::validation("Title cannot be empty"));
    }

    if payload.content.trim().is_empty() {
        return Err(AppError::validation("Content cannot be empty"));
    }

    if !VALID_TAGS.contains(&payload.tag.as_str()) {
        return Err(AppError::validation(format!(
            "Invalid tag. Must be one of: {}",
            VALID_TAGS.join(", ")
        )));
    }

    Ok(())
}

/// Case-insensitive substring match on title OR content. The keyword is
/// interpolated into the pattern as-is; LIKE metacharacters pass through
/// literally.
fn keyword_condition(keyword: &str) -> Condition {
    let pattern = format!("%{}%", keyword);
    Condition::any()
        .add(Expr::col(ArticleColumn::Title).ilike(pattern.clone()))
        .add(Expr::col(ArticleColumn::Content).ilike(pattern))
}

/// Build the keyword search query. A keyword that is blank after trimming
/// omits the filter entirely. No ORDER BY: result order in this path is
/// unspecified, unlike the listing.
fn search_query(keyword: &str) -> Select<ArticleEntity> {
    let mut query = ArticleEntity::find();

    let keyword = keyword.trim();
    if !keyword.is_empty() {
        query = query.filter(keyword_condition(keyword));
    }

    query
}

/// Build the filtered listing query, without its pagination window.
fn list_query(opts: &FetchArticlesOptions) -> Select<ArticleEntity> {
    let mut query = ArticleEntity::find()
        .filter(ArticleColumn::CompanyId.eq(&opts.company_id))
        .order_by_desc(ArticleColumn::CreatedAt);

    // Passed through as-is: an unknown tag matches nothing rather than
    // failing.
    if let Some(ref tag) = opts.tag {
        query = query.filter(ArticleColumn::Tag.eq(tag));
    }

    if let Some(ref keyword) = opts.keyword {
        let keyword = keyword.trim();
        if !keyword.is_empty() {
            query = query.filter(keyword_condition(keyword));
        }
    }

    query
}

/// Repository for data access operations
#[derive(Clone)]
pub struct Repository {
    pool: DbPool,
}

impl Repository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> &DatabaseConnection {
        self.pool.conn()
    }

    /// Ping the database
    pub async fn ping(&self) -> Result<()> {
        self.pool.ping().await
    }

    // ========================================================================
    // Article Operations
    // ========================================================================

    /// Keyword search across all companies. A keyword that is blank after
    /// trimming returns the unfiltered set.
    pub async fn search_articles(&self, keyword: &str) -> Result<Vec<Article>> {
        search_query(keyword)
            .all(self.conn())
            .await
            .map_err(Into::into)
    }

    /// One page of a company's articles, newest first, plus pagination
    /// metadata. `total` counts matching rows ignoring the page window.
    pub async fn fetch_articles(
        &self,
        opts: &FetchArticlesOptions,
    ) -> Result<PaginatedResult<Article>> {
        let query = list_query(opts);

        let total = query.clone().count(self.conn()).await?;

        let (from, _to) = pagination::page_range(opts.page, opts.page_size);
        let data = query
            .offset(from)
            .limit(opts.page_size)
            .all(self.conn())
            .await?;

        Ok(PaginatedResult {
            data,
            page: opts.page,
            page_size: opts.page_size,
            total,
            has_more: pagination::has_more(opts.page, opts.page_size, total),
        })
    }

    /// Validate then insert exactly one article, returning the persisted
    /// row with its server-assigned id and created_at. Not idempotent.
    pub async fn create_article(&self, payload: NewArticle) -> Result<Article> {
        validate_new_article(&payload)?;

        let now = chrono::Utc::now();

        let article = ArticleActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            company_id: Set(payload.company_id),
            title: Set(payload.title),
            content: Set(payload.content),
            user_id: Set(payload.user_id),
            tag: Set(payload.tag),
            created_at: Set(now.into()),
        };

        article.insert(self.conn()).await.map_err(Into::into)
    }

    // ========================================================================
    // Company Operations
    // ========================================================================

    /// Find company by ID. A missing id is a valid outcome, not an error.
    pub async fn find_company_by_id(&self, id: &str) -> Result<Option<Company>> {
        CompanyEntity::find_by_id(id)
            .one(self.conn())
            .await
            .map_err(Into::into)
    }

    /// All companies, name ascending. No pagination.
    pub async fn list_companies(&self) -> Result<Vec<Company>> {
        CompanyEntity::find()
            .order_by_asc(CompanyColumn::Name)
            .all(self.conn())
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use sea_orm::{DatabaseBackend, DbBackend, MockDatabase, MockExecResult, QueryTrait, Value};
    use std::collections::BTreeMap;

    fn payload(title: &str, content: &str, tag: &str) -> NewArticle {
        NewArticle {
            company_id: "company-1".to_string(),
            title: title.to_string(),
            content: content.to_string(),
            user_id: "user-1".to_string(),
            tag: tag.to_string(),
        }
    }

    fn article(id: &str, title: &str, content: &str, tag: &str) -> Article {
        Article {
            id: id.to_string(),
            company_id: "company-1".to_string(),
            title: title.to_string(),
            content: content.to_string(),
            user_id: "user-1".to_string(),
            tag: tag.to_string(),
            created_at: chrono::DateTime::parse_from_rfc3339("2026-01-10T00:00:00Z").unwrap(),
        }
    }

    // ------------------------------------------------------------------
    // Validation gate
    // ------------------------------------------------------------------

    #[test]
    fn test_rejects_empty_title() {
        let err = validate_new_article(&payload("", "content", "workplace_review")).unwrap_err();
        assert_eq!(err.to_string(), "Title cannot be empty");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_rejects_whitespace_only_title() {
        let err = validate_new_article(&payload("   ", "content", "workplace_review")).unwrap_err();
        assert_eq!(err.to_string(), "Title cannot be empty");
    }

    #[test]
    fn test_rejects_whitespace_only_content() {
        let err = validate_new_article(&payload("title", " \t\n", "workplace_review")).unwrap_err();
        assert_eq!(err.to_string(), "Content cannot be empty");
    }

    #[test]
    fn test_title_check_wins_when_both_blank() {
        let err = validate_new_article(&payload(" ", " ", "bogus")).unwrap_err();
        assert_eq!(err.to_string(), "Title cannot be empty");
    }

    #[test]
    fn test_rejects_unknown_tag() {
        let err = validate_new_article(&payload("title", "content", "salary_review")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid tag. Must be one of: workplace_review, service_review"
        );
    }

    #[test]
    fn test_accepts_both_valid_tags() {
        assert!(validate_new_article(&payload("t", "c", "workplace_review")).is_ok());
        assert!(validate_new_article(&payload("t", "c", "service_review")).is_ok());
    }

    #[test]
    fn test_validation_does_not_trim_stored_values() {
        // Leading/trailing whitespace around real content is legal
        assert!(validate_new_article(&payload("  title  ", "  content  ", "service_review")).is_ok());
    }

    // ------------------------------------------------------------------
    // Query construction
    // ------------------------------------------------------------------

    fn sql(query: Select<ArticleEntity>) -> String {
        query.build(DbBackend::Postgres).to_string()
    }

    #[test]
    fn test_search_query_matches_title_or_content() {
        let built = sql(search_query("Salary"));
        assert!(built.contains(r#""title" ILIKE '%Salary%'"#), "{}", built);
        assert!(built.contains(r#""content" ILIKE '%Salary%'"#), "{}", built);
        assert!(built.contains(" OR "), "{}", built);
    }

    #[test]
    fn test_search_query_has_no_order_clause() {
        let built = sql(search_query("Salary"));
        assert!(!built.contains("ORDER BY"), "{}", built);
    }

    #[test]
    fn test_blank_keyword_omits_filter() {
        let built = sql(search_query("   "));
        assert!(!built.contains("WHERE"), "{}", built);
        assert!(!built.contains("ILIKE"), "{}", built);
    }

    #[test]
    fn test_keyword_is_trimmed_before_matching() {
        let built = sql(search_query("  office  "));
        assert!(built.contains("'%office%'"), "{}", built);
    }

    #[test]
    fn test_like_metacharacters_pass_through() {
        let built = sql(search_query("100%"));
        assert!(built.contains("'%100%%'"), "{}", built);
    }

    #[test]
    fn test_list_query_orders_newest_first() {
        let opts = FetchArticlesOptions::new("company-1");
        let built = sql(list_query(&opts));
        assert!(
            built.contains(r#"ORDER BY "articles"."created_at" DESC"#),
            "{}",
            built
        );
        assert!(built.contains("'company-1'"), "{}", built);
    }

    #[test]
    fn test_list_query_applies_tag_filter_verbatim() {
        let mut opts = FetchArticlesOptions::new("company-1");
        opts.tag = Some("service_review".to_string());
        let built = sql(list_query(&opts));
        assert!(built.contains("'service_review'"), "{}", built);

        // An invalid tag is still an equality filter: zero matches, no error
        opts.tag = Some("not_a_tag".to_string());
        let built = sql(list_query(&opts));
        assert!(built.contains("'not_a_tag'"), "{}", built);
    }

    #[test]
    fn test_list_query_combines_filters_conjunctively() {
        let mut opts = FetchArticlesOptions::new("company-1");
        opts.tag = Some("workplace_review".to_string());
        opts.keyword = Some("salary".to_string());
        let built = sql(list_query(&opts));
        assert!(built.contains("'company-1'"), "{}", built);
        assert!(built.contains("'workplace_review'"), "{}", built);
        assert!(built.contains("ILIKE '%salary%'"), "{}", built);
        assert!(built.contains(" AND "), "{}", built);
    }

    #[test]
    fn test_blank_listing_keyword_is_dropped() {
        let mut opts = FetchArticlesOptions::new("company-1");
        opts.keyword = Some("  ".to_string());
        let built = sql(list_query(&opts));
        assert!(!built.contains("ILIKE"), "{}", built);
    }

    #[test]
    fn test_pagination_window_first_page() {
        let opts = FetchArticlesOptions::new("company-1");
        let (from, to) = pagination::page_range(opts.page, opts.page_size);
        assert_eq!((from, to), (0, 9));
        let built = sql(list_query(&opts).offset(from).limit(opts.page_size));
        assert!(built.contains("LIMIT 10"), "{}", built);
        assert!(built.contains("OFFSET 0"), "{}", built);
    }

    #[test]
    fn test_pagination_window_third_page() {
        let mut opts = FetchArticlesOptions::new("company-1");
        opts.page = 3;
        let (from, to) = pagination::page_range(opts.page, opts.page_size);
        assert_eq!((from, to), (20, 29));
        let built = sql(list_query(&opts).offset(from).limit(opts.page_size));
        assert!(built.contains("LIMIT 10"), "{}", built);
        assert!(built.contains("OFFSET 20"), "{}", built);
    }

    // ------------------------------------------------------------------
    // Repository behavior against a mock store
    // ------------------------------------------------------------------

    fn mock_repo(db: DatabaseConnection) -> Repository {
        Repository::new(DbPool::from_connection(db))
    }

    #[tokio::test]
    async fn test_create_rejects_before_touching_the_store() {
        // No results are queued: any query would fail the test
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = mock_repo(db);

        let err = repo
            .create_article(payload("  ", "content", "workplace_review"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Title cannot be empty");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_returns_persisted_row() {
        let persisted = article("a-1", "Great place", "Benefits are amazing.", "workplace_review");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![persisted.clone()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = mock_repo(db);

        let created = repo
            .create_article(payload("Great place", "Benefits are amazing.", "workplace_review"))
            .await
            .unwrap();

        assert_eq!(created.id, "a-1");
        assert_eq!(created.title, "Great place");
        assert_eq!(created.tag, "workplace_review");
    }

    #[tokio::test]
    async fn test_fetch_articles_shapes_result() {
        let rows = vec![
            article("a-2", "Nice office", "Clean and modern.", "workplace_review"),
            article("a-1", "Great place", "Benefits are amazing.", "workplace_review"),
        ];

        let count_row = BTreeMap::from([("num_items", Value::BigInt(Some(15)))]);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row]])
            .append_query_results([rows.clone()])
            .into_connection();
        let repo = mock_repo(db);

        let result = repo
            .fetch_articles(&FetchArticlesOptions::new("company-1"))
            .await
            .unwrap();

        assert_eq!(result.data, rows);
        assert_eq!(result.page, 1);
        assert_eq!(result.page_size, 10);
        assert_eq!(result.total, 15);
        assert!(result.has_more);
    }

    #[tokio::test]
    async fn test_fetch_articles_no_more_on_short_total() {
        let count_row = BTreeMap::from([("num_items", Value::BigInt(Some(3)))]);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row]])
            .append_query_results([vec![
                article("a-1", "Great place", "Benefits are amazing.", "workplace_review"),
            ]])
            .into_connection();
        let repo = mock_repo(db);

        let result = repo
            .fetch_articles(&FetchArticlesOptions::new("company-1"))
            .await
            .unwrap();

        assert_eq!(result.total, 3);
        assert!(!result.has_more);
    }

    #[tokio::test]
    async fn test_missing_company_is_none_not_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Company>::new()])
            .into_connection();
        let repo = mock_repo(db);

        let company = repo.find_company_by_id("no-such-company").await.unwrap();
        assert!(company.is_none());
    }

    #[tokio::test]
    async fn test_search_returns_matching_rows() {
        let rows = vec![
            article("a-1", "Salary is great here", "The benefits are amazing.", "workplace_review"),
            article("a-2", "Great workplace", "Salary could be better though.", "service_review"),
        ];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([rows.clone()])
            .into_connection();
        let repo = mock_repo(db);

        let found = repo.search_articles("Salary").await.unwrap();
        assert_eq!(found, rows);
    }
}
