//! HTTP routing.
//!
//! | Method | Path |
//! |---|---|
//! | GET, POST | `/api/users` |
//! | GET, PUT, DELETE | `/api/users/{id}` |
//! | GET, POST | `/api/posts` |
//! | GET, PUT, DELETE | `/api/posts/{id}` |
//! | POST | `/api/auth/login` |
//! | GET | `/health` |

use crate::envelope::ApiResponse;
use crate::error::{ApiError, ApiResult};
use crate::handler::RequestHandler;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use blogapi_core::request::{
    CreatePostRequest, CreateUserRequest, LoginRequest, PostQuery, UpdatePostRequest,
    UpdateUserRequest,
};
use blogapi_core::{PostId, UserId};
use serde::Serialize;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Every route the server exposes, as `(methods, path, summary)`.
pub const ROUTES: &[(&str, &str, &str)] = &[
    ("GET", "/api/users", "List users"),
    ("POST", "/api/users", "Create a user (name, email, password?)"),
    ("GET", "/api/users/{id}", "Get a user"),
    ("PUT", "/api/users/{id}", "Update a user (name?, email?, password?)"),
    ("DELETE", "/api/users/{id}", "Delete a user and their posts"),
    ("GET", "/api/posts", "List posts (?authorId, ?published)"),
    ("POST", "/api/posts", "Create a post (title, content, authorId, published?)"),
    ("GET", "/api/posts/{id}", "Get a post"),
    ("PUT", "/api/posts/{id}", "Update a post (title?, content?, authorId?, published?)"),
    ("DELETE", "/api/posts/{id}", "Delete a post"),
    ("POST", "/api/auth/login", "Log in (email, password)"),
    ("GET", "/health", "Liveness probe"),
];

const INVALID_USER_ID: &str = "ID do usuário deve ser um número válido";
const INVALID_POST_ID: &str = "ID do post deve ser um número válido";
const INVALID_BODY: &str = "Corpo da requisição inválido";
const ROUTE_NOT_FOUND: &str = "Rota não encontrada";
const INVALID_QUERY: &str = "Parâmetros de consulta inválidos";

/// Builds the application router.
pub fn router(handler: RequestHandler) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/posts", get(list_posts).post(create_post))
        .route(
            "/api/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route("/api/auth/login", post(login))
        .fallback(fallback)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(handler)
}

fn reply<T: Serialize>(status: StatusCode, data: T, message: &str) -> Response {
    (status, Json(ApiResponse::ok(data, message))).into_response()
}

fn parse_user_id(raw: &str) -> ApiResult<UserId> {
    raw.trim()
        .parse()
        .map(UserId::new)
        .map_err(|_| ApiError::Validation(INVALID_USER_ID.into()))
}

fn parse_post_id(raw: &str) -> ApiResult<PostId> {
    raw.trim()
        .parse()
        .map(PostId::new)
        .map_err(|_| ApiError::Validation(INVALID_POST_ID.into()))
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!(%rejection, "request body rejected");
        ApiError::Validation(INVALID_BODY.into())
    })
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal(detail).into_response()
}

async fn health() -> &'static str {
    "ok"
}

async fn fallback() -> ApiError {
    ApiError::NotFound(ROUTE_NOT_FOUND.into())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

// ---- users ----

async fn list_users(State(handler): State<RequestHandler>) -> ApiResult<Response> {
    let users = handler.list_users()?;
    Ok(reply(StatusCode::OK, users, "Usuários recuperados com sucesso"))
}

async fn create_user(
    State(handler): State<RequestHandler>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let user = handler.create_user(body(payload)?)?;
    Ok(reply(StatusCode::CREATED, user, "Usuário criado com sucesso"))
}

async fn get_user(
    State(handler): State<RequestHandler>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let user = handler.get_user(parse_user_id(&id)?)?;
    Ok(reply(StatusCode::OK, user, "Usuário recuperado com sucesso"))
}

async fn update_user(
    State(handler): State<RequestHandler>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let id = parse_user_id(&id)?;
    let user = handler.update_user(id, body(payload)?)?;
    Ok(reply(StatusCode::OK, user, "Usuário atualizado com sucesso"))
}

async fn delete_user(
    State(handler): State<RequestHandler>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    handler.delete_user(parse_user_id(&id)?)?;
    Ok(reply(StatusCode::OK, (), "Usuário deletado com sucesso"))
}

// ---- posts ----

async fn list_posts(
    State(handler): State<RequestHandler>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(pairs) = pairs.map_err(|rejection| {
        tracing::debug!(%rejection, "query string rejected");
        ApiError::Validation(INVALID_QUERY.into())
    })?;
    let posts = handler.list_posts(&PostQuery::from_pairs(pairs))?;
    Ok(reply(StatusCode::OK, posts, "Posts recuperados com sucesso"))
}

async fn create_post(
    State(handler): State<RequestHandler>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let post = handler.create_post(body(payload)?)?;
    Ok(reply(StatusCode::CREATED, post, "Post criado com sucesso"))
}

async fn get_post(
    State(handler): State<RequestHandler>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let post = handler.get_post(parse_post_id(&id)?)?;
    Ok(reply(StatusCode::OK, post, "Post recuperado com sucesso"))
}

async fn update_post(
    State(handler): State<RequestHandler>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePostRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let id = parse_post_id(&id)?;
    let post = handler.update_post(id, body(payload)?)?;
    Ok(reply(StatusCode::OK, post, "Post atualizado com sucesso"))
}

async fn delete_post(
    State(handler): State<RequestHandler>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    handler.delete_post(parse_post_id(&id)?)?;
    Ok(reply(StatusCode::OK, (), "Post deletado com sucesso"))
}

// ---- auth ----

async fn login(
    State(handler): State<RequestHandler>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let session = handler.login(body(payload)?)?;
    Ok(reply(StatusCode::OK, session, "Login realizado com sucesso"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_parsing() {
        assert_eq!(parse_user_id("12").unwrap(), UserId::new(12));
        assert_eq!(parse_post_id(" 3 ").unwrap(), PostId::new(3));
        assert!(matches!(parse_user_id("abc"), Err(ApiError::Validation(_))));
        assert!(matches!(parse_post_id("-1"), Err(ApiError::Validation(_))));
    }

    #[test]
    fn panic_maps_to_internal_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn route_table_covers_every_resource() {
        let paths: Vec<_> = ROUTES.iter().map(|(_, path, _)| *path).collect();
        for path in ["/api/users", "/api/users/{id}", "/api/posts", "/api/posts/{id}", "/api/auth/login"] {
            assert!(paths.contains(&path), "missing {path}");
        }
    }
}
