//! Route handlers for the catalog pages.
//!
//! Handlers emit domain log events; the per-request span, log line, and
//! metrics are produced by the instrumentation middleware.

use axum::extract::{Form, Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use serde::Deserialize;

use crate::catalog::{CatalogError, CourseForm};
use crate::http::server::AppState;
use crate::http::views;

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            CatalogError::CourseNotFound(code) => {
                let page = views::error_page(
                    "404 - Course Not Found",
                    &format!("No course found with code '{code}'."),
                );
                (StatusCode::NOT_FOUND, Html(page)).into_response()
            }
            CatalogError::DuplicateCode(code) => {
                let page = views::error_page(
                    "Duplicate Course",
                    &format!("A course with code '{code}' already exists."),
                );
                (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response()
            }
        }
    }
}

pub async fn home() -> Html<String> {
    tracing::info!("index page loaded");
    Html(views::home_page())
}

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Course code just added, for the confirmation banner.
    pub added: Option<String>,
}

pub async fn course_catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Html<String> {
    let courses = state.store.all();
    tracing::info!(courses_count = courses.len(), "course catalog loaded");
    Html(views::catalog_page(&courses, query.added.as_deref()))
}

pub async fn course_details(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Html<String>, CatalogError> {
    match state.store.get(&code) {
        Some(course) => {
            tracing::info!(course_code = %course.code, "course details loaded");
            Ok(Html(views::course_detail_page(&course)))
        }
        None => {
            tracing::error!(course_code = %code, "course not found");
            Err(CatalogError::CourseNotFound(code))
        }
    }
}

pub async fn add_course_form() -> Html<String> {
    tracing::info!("add course page loaded");
    Html(views::add_course_page(&CourseForm::default(), &[]))
}

pub async fn add_course(
    State(state): State<AppState>,
    Form(form): Form<CourseForm>,
) -> Response {
    let course = match form.clone().into_course() {
        Ok(course) => course,
        Err(missing) => {
            for field in &missing {
                tracing::warn!(missing_field = field, "form validation warning");
            }
            let errors: Vec<String> = missing
                .iter()
                .map(|field| format!("Field '{field}' is required."))
                .collect();
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(views::add_course_page(&form, &errors)),
            )
                .into_response();
        }
    };

    let code = course.code.clone();
    let name = course.name.clone();

    match state.store.insert(course) {
        Ok(()) => {
            tracing::info!(course_code = %code, course_name = %name, "course added");
            Redirect::to(&format!("/courses?added={code}")).into_response()
        }
        Err(err @ CatalogError::DuplicateCode(_)) => {
            tracing::warn!(course_code = %err.code(), "duplicate course code submitted");
            let errors = vec![format!(
                "A course with code '{}' already exists.",
                err.code()
            )];
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(views::add_course_page(&form, &errors)),
            )
                .into_response()
        }
        Err(other) => other.into_response(),
    }
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Fallback for unmatched paths; rendered as the user-visible error page.
pub async fn not_found(uri: Uri) -> Response {
    tracing::warn!(path = %uri.path(), "page not found");
    let page = views::error_page(
        "404 - Page Not Found",
        "Sorry, we couldn't find what you're looking for.",
    );
    (StatusCode::NOT_FOUND, Html(page)).into_response()
}
