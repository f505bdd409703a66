//! Post handlers.

use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use actix_web::{Either, HttpResponse, web};
use serde::{Deserialize, Serialize};

use star_core::domain::{CreatePostInput, PostCategory, UpdatePostInput};
use star_shared::{FilterValue, PaginationParams, SearchParams, SortOrder};

use crate::middleware::auth::Credential;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Query string of the list endpoints. `filters` is a JSON object.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    pub category: Option<PostCategory>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub query: Option<String>,
    pub filters: Option<String>,
}

impl ListPostsQuery {
    fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            page_size: self.page_size,
        }
    }

    fn search(&self) -> AppResult<SearchParams> {
        let filters = match self.filters.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                serde_json::from_str::<BTreeMap<String, FilterValue>>(raw)
                    .map_err(|e| AppError::BadRequest(format!("Invalid filters: {e}")))?
            }
            _ => BTreeMap::new(),
        };

        Ok(SearchParams {
            query: self.query.clone(),
            filters,
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order,
        })
    }
}

/// Reply with the envelope's own status code.
fn envelope<T: Serialize>(code: u16, body: &T) -> HttpResponse {
    HttpResponse::build(StatusCode::from_u16(code).unwrap_or(StatusCode::OK)).json(body)
}

/// GET /api/posts?category=...
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let category = query
        .category
        .ok_or_else(|| AppError::Validation("Missing required fields: category".to_string()))?;
    let search = query.search()?;

    let page = state
        .posts
        .list_posts(category, &search, &query.pagination())
        .await?;
    Ok(envelope(page.code, &page))
}

/// GET /api/users/{id}/posts
pub async fn list_user_posts(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let page = state
        .posts
        .list_posts_by_author(&path, &query.pagination())
        .await?;
    Ok(envelope(page.code, &page))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_post(&path).await?;
    Ok(envelope(post.code, &post))
}

/// POST /api/posts - JSON or form body.
pub async fn create_post(
    state: web::Data<AppState>,
    credential: Credential,
    body: Either<web::Json<CreatePostInput>, web::Form<CreatePostInput>>,
) -> AppResult<HttpResponse> {
    let input = match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    let post = state.posts.create_post(input, credential.token()).await?;
    tracing::info!(post_id = %post.data.id, category = %post.data.category, "Post created");
    Ok(envelope(post.code, &post))
}

/// PATCH /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    credential: Credential,
    path: web::Path<String>,
    body: web::Json<UpdatePostInput>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .update_post(&path, body.into_inner(), credential.token())
        .await?;
    Ok(envelope(post.code, &post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    credential: Credential,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let status = state.posts.delete_post(&path, credential.token()).await?;
    Ok(envelope(status.code, &status))
}

/// POST /api/posts/{id}/like
pub async fn like_post(
    state: web::Data<AppState>,
    credential: Credential,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let status = state.posts.like_post(&path, credential.token()).await?;
    Ok(envelope(status.code, &status))
}
