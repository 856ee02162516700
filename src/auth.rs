use askama::Template;
use axum::{
    Form, Router,
    extract::{FromRequestParts, Query, State},
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{models::User, state::AppState};

const USER_ID_KEY: &str = "user_id";

/// Sign-in URL that returns to `dest` once the user is signed in.
#[must_use]
pub fn login_url(dest: &str) -> String {
    format!("/login?continue={dest}")
}

/// Sign-out URL that returns to `dest` once the session is cleared.
#[must_use]
pub fn logout_url(dest: &str) -> String {
    format!("/logout?continue={dest}")
}

/// The signed-in user, if any.
///
/// Handlers that serve signed-out visitors as well take this instead of
/// rejecting sessionless requests.
pub struct CurrentUser(pub Option<User>);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let user_id = session.get::<Uuid>(USER_ID_KEY).await.map_err(|e| {
            tracing::error!(error = %e, "session read failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })?;

        let Some(user_id) = user_id else {
            return Ok(Self(None));
        };

        let user = User::by_id(&state.db_pool, user_id)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())?;

        Ok(Self(user))
    }
}

#[derive(Deserialize)]
struct ContinueParams {
    #[serde(rename = "continue")]
    continue_to: Option<String>,
}

#[derive(Template)]
#[template(path = "login.html")]
struct LoginPage {
    continue_to: Option<String>,
}

async fn login(Query(params): Query<ContinueParams>) -> Result<Html<String>, StatusCode> {
    LoginPage {
        continue_to: params.continue_to,
    }
    .render()
    .map(Html)
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

#[derive(Deserialize)]
struct LoginForm {
    email: String,
    #[serde(rename = "continue")]
    continue_to: Option<String>,
}

async fn post_login(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(LoginForm { email, continue_to }): Form<LoginForm>,
) -> Result<Redirect, StatusCode> {
    let user = User::find_or_create(&db_pool, &email).await.map_err(|e| {
        tracing::error!(error = %e, "sign-in failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    session
        .insert(USER_ID_KEY, user.id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Redirect::to(continue_to.as_deref().unwrap_or("/")))
}

async fn logout(
    session: Session,
    Query(params): Query<ContinueParams>,
) -> Result<Redirect, StatusCode> {
    session
        .flush()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Redirect::to(params.continue_to.as_deref().unwrap_or("/login")))
}

pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login))
        .route("/login", post(post_login))
        .route("/logout", get(logout))
}
