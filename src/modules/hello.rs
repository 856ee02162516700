//! Hello World example module.
//!
//! Registers two handlers:
//!
//! 1. A global handler at `/global`, not bound to any course.
//!
//! 2. A namespaced handler at `/{course_slug}/local`, bound to the course the
//!    host resolves from the request path. After creating a course
//!    (`my_course`, say), visit `/my_course/local` to invoke it.
//!
//! Both handlers render the same template and serve signed-in and signed-out
//! visitors alike, with links to sign in or out that return to the page.

use askama::Template;
use axum::{
    http::{StatusCode, Uri},
    response::Html,
    routing::get,
};

use crate::{
    auth::{self, CurrentUser},
    models::{Course, User},
    module::{CurrentCourse, Module},
};

pub const GLOBAL_URL: &str = "/global";
pub const NAMESPACED_URL: &str = "/local";

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage {
    course: Option<Course>,
    login_url: String,
    logout_url: String,
    user: Option<User>,
}

async fn global(user: CurrentUser, uri: Uri) -> Result<Html<String>, StatusCode> {
    IndexPage {
        course: None,
        login_url: auth::login_url(uri.path()),
        logout_url: auth::logout_url(uri.path()),
        user: user.0,
    }
    .render()
    .map(Html)
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

async fn namespaced(
    user: CurrentUser,
    CurrentCourse(course): CurrentCourse,
    uri: Uri,
) -> Result<Html<String>, StatusCode> {
    IndexPage {
        course: Some(course),
        login_url: auth::login_url(uri.path()),
        logout_url: auth::logout_url(uri.path()),
        user: user.0,
    }
    .render()
    .map(Html)
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

pub fn register_module() -> Module {
    Module::new(
        "Hello World",
        "Campus Hello World module",
        vec![(GLOBAL_URL, get(global))],
        vec![(NAMESPACED_URL, get(namespaced))],
    )
}
