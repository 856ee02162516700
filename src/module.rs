use axum::{
    Router,
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
    routing::MethodRouter,
};
use serde::Deserialize;

use crate::{models::Course, state::AppState};

/// Routes a module hands to the host for mounting.
///
/// Global handlers mount at their path verbatim. Namespaced handlers mount
/// under `/{course_slug}` and run with the course resolved from the path.
pub struct Module {
    name: &'static str,
    description: &'static str,
    global_handlers: Vec<(&'static str, MethodRouter<AppState>)>,
    namespaced_handlers: Vec<(&'static str, MethodRouter<AppState>)>,
}

impl Module {
    #[must_use]
    pub fn new(
        name: &'static str,
        description: &'static str,
        global_handlers: Vec<(&'static str, MethodRouter<AppState>)>,
        namespaced_handlers: Vec<(&'static str, MethodRouter<AppState>)>,
    ) -> Self {
        Self {
            name,
            description,
            global_handlers,
            namespaced_handlers,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    #[must_use]
    pub fn into_router(self) -> Router<AppState> {
        let mut router = Router::new();

        for (path, handler) in self.global_handlers {
            router = router.route(path, handler);
        }

        for (path, handler) in self.namespaced_handlers {
            router = router.route(&format!("/{{course_slug}}{path}"), handler);
        }

        router
    }
}

#[derive(Deserialize)]
struct CourseParams {
    course_slug: String,
}

/// The course a namespaced request is bound to.
///
/// Unknown slugs reject with 404 before the handler runs.
pub struct CurrentCourse(pub Course);

impl FromRequestParts<AppState> for CurrentCourse {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<CourseParams>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let course = Course::by_slug(&state.db_pool, &params.course_slug)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "course lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            })?
            .ok_or_else(|| StatusCode::NOT_FOUND.into_response())?;

        Ok(Self(course))
    }
}
