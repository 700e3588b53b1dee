//! Post endpoints: list, create, click increment, edit and delete.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use wall_core::domain::{Post, PostQuery, resolve_content};
use wall_shared::dto;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Raw `/posts` query string. Values arrive as strings so that unparsable
/// input can fall back to defaults instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    page: Option<String>,
    limit: Option<String>,
    date: Option<String>,
}

impl ListParams {
    fn into_query(self) -> PostQuery {
        PostQuery::from_raw(self.page.as_deref(), self.limit.as_deref(), self.date.as_deref())
    }
}

/// GET /posts
///
/// One page of the wall, newest first, optionally windowed to a single
/// UTC day via `?date=YYYY-MM-DD`.
pub async fn list_posts(
    state: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> AppResult<HttpResponse> {
    let query = params.into_inner().into_query();
    let posts = state.posts.list(query).await?;

    let body: Vec<dto::Post> = posts.into_iter().map(to_wire).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<dto::CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let request = body.into_inner();
    let post = Post::create(&request.content, request.author.as_deref())?;

    let created = state.posts.create(post).await?;
    tracing::info!(id = %created.id, author = %created.author, "post created");

    Ok(HttpResponse::Created().json(to_wire(created)))
}

/// PATCH /posts/{id}
///
/// Atomic click increment. The returned post carries the authoritative
/// counter, which clients adopt as-is.
pub async fn increment_click(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let updated = state.posts.increment_clicks(id).await?;

    Ok(HttpResponse::Ok().json(to_wire(updated)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<dto::UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let content = body.into_inner().content;
    let content = resolve_content(&content)?;

    let updated = state.posts.update_content(id, content).await?;

    Ok(HttpResponse::Ok().json(to_wire(updated)))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?;
    tracing::info!(%id, "post deleted");

    Ok(HttpResponse::NoContent().finish())
}

fn to_wire(post: Post) -> dto::Post {
    dto::Post {
        id: post.id,
        content: post.content,
        author: post.author,
        created_at: post.created_at,
        updated_at: post.updated_at,
        click_count: post.click_count,
    }
}
