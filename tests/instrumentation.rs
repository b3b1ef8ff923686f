//! Tests for the per-request metrics emitted by the instrumentation
//! middleware, observed through a Prometheus recorder handle.
//!
//! Each test drives a route no other test in this binary touches, so the
//! shared recorder sees independent deltas.

mod common;

use course_catalog::observability::metrics::{
    REQUESTS_TOTAL, REQUEST_DURATION_SECONDS, REQUEST_ERRORS_TOTAL,
};

#[tokio::test]
async fn each_request_counts_once_and_records_latency() {
    let handle = common::metrics_handle();
    let app = common::spawn_app().await;
    let client = common::client();

    let labels = [("route", "/"), ("status", "200")];
    let duration_count = format!("{REQUEST_DURATION_SECONDS}_count");

    let before = handle.render();
    let requests_before = common::sample_value(&before, REQUESTS_TOTAL, &labels);
    let samples_before =
        common::sample_value(&before, &duration_count, &[("route", "/")]);

    let res = client.get(app.url("/")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    let after = handle.render();
    let requests_after = common::sample_value(&after, REQUESTS_TOTAL, &labels);
    let samples_after =
        common::sample_value(&after, &duration_count, &[("route", "/")]);

    assert_eq!(requests_after - requests_before, 1.0);
    assert_eq!(samples_after - samples_before, 1.0);
}

#[tokio::test]
async fn unknown_course_increments_error_counter_exactly_once() {
    let handle = common::metrics_handle();
    let app = common::spawn_app().await;
    let client = common::client();

    let route = [("route", "/courses/{code}")];

    let before = handle.render();
    let errors_before = common::sample_value(&before, REQUEST_ERRORS_TOTAL, &route);

    let res = client.get(app.url("/courses/GHOST42")).send().await.unwrap();
    assert_eq!(res.status(), 404);

    let after = handle.render();
    let errors_after = common::sample_value(&after, REQUEST_ERRORS_TOTAL, &route);
    let not_found = common::sample_value(
        &after,
        REQUESTS_TOTAL,
        &[("route", "/courses/{code}"), ("status", "404")],
    );

    assert_eq!(errors_after - errors_before, 1.0);
    assert!(not_found >= 1.0, "404 request was not counted");
}

#[tokio::test]
async fn form_validation_failure_is_not_an_error_outcome() {
    let handle = common::metrics_handle();
    let app = common::spawn_app().await;
    let client = common::client();

    let route = [("route", "/courses")];

    let before = handle.render();
    let errors_before = common::sample_value(&before, REQUEST_ERRORS_TOTAL, &route);

    let res = client
        .post(app.url("/courses"))
        .form(&[("code", ""), ("name", ""), ("instructor", "")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 422);

    let after = handle.render();
    let errors_after = common::sample_value(&after, REQUEST_ERRORS_TOTAL, &route);
    let rejected = common::sample_value(
        &after,
        REQUESTS_TOTAL,
        &[("route", "/courses"), ("status", "422")],
    );

    assert_eq!(
        errors_after - errors_before,
        0.0,
        "validation re-render must not count as a server error"
    );
    assert!(rejected >= 1.0, "422 request was not counted");
}
