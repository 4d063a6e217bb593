//! HTTP integration tests for the `/courses` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, course_body, create_course, delete, get, patch_json, post_json};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Test: End-to-end catalog walkthrough
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn catalog_walkthrough(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/courses", &course_body()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let course = body_json(response).await;
    assert_eq!(course["status"], "draft");
    assert_eq!(course["difficulty"], "intermediate");
    assert_eq!(course["enrollment_count"], 0);
    assert_eq!(course["lab_count"], 0);
    let id = course["id"].as_str().unwrap().to_string();

    let enroll = json!({"name": "Al", "email": "a@x.com"});
    let uri = format!("/courses/{id}/enrollments");
    let response = post_json(app.clone(), &uri, &enroll).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["progress_percent"], 0);

    let response = post_json(app.clone(), &uri, &enroll).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = get(app.clone(), &format!("/courses/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["enrollment_count"], 1);

    let response = patch_json(
        app.clone(),
        &format!("/courses/{id}"),
        &json!({"status": "archived"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let patched = body_json(response).await;
    assert_eq!(patched["status"], "archived");
    assert_eq!(patched["enrollment_count"], 1);

    let missing = uuid::Uuid::new_v4();
    let response = get(app, &format!("/courses/{missing}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: Create echoes every supplied field
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_course_with_all_fields(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let body = json!({
        "title": "Kubernetes in Depth",
        "overview": "Clusters, pods and operators.",
        "instructor": "Sam Rivera",
        "primary_video_url": "https://videos.example.com/k8s",
        "supplemental_urls": ["https://docs.example.com/b", "https://docs.example.com/a"],
        "duration_minutes": 240,
        "difficulty": "advanced",
        "tags": ["k8s", "ops"],
        "prerequisites": ["DevOps 101"],
        "category": "Infrastructure",
        "status": "published"
    });

    let response = post_json(app, "/courses", &body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let course = body_json(response).await;
    assert_eq!(course["overview"], "Clusters, pods and operators.");
    assert_eq!(
        course["supplemental_urls"],
        json!(["https://docs.example.com/b", "https://docs.example.com/a"])
    );
    assert_eq!(course["difficulty"], "advanced");
    assert_eq!(course["tags"], json!(["k8s", "ops"]));
    assert_eq!(course["prerequisites"], json!(["DevOps 101"]));
    assert_eq!(course["category"], "Infrastructure");
    assert_eq!(course["status"], "published");
    assert!(course["created_at"].is_string());
    assert_eq!(course["created_at"], course["updated_at"]);
}

// ---------------------------------------------------------------------------
// Test: List returns every course with live counts, oldest first
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_courses_includes_counts(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/courses").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));

    let first = create_course(app.clone()).await;
    let second = create_course(app.clone()).await;

    for email in ["a@x.com", "b@x.com"] {
        let response = post_json(
            app.clone(),
            &format!("/courses/{first}/enrollments"),
            &json!({"name": "Learner", "email": email}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    let response = post_json(
        app.clone(),
        &format!("/courses/{second}/labs"),
        &json!({
            "title": "Deploy a pod",
            "resource_type": "kubernetes",
            "resource_uri": "https://labs.example.com/pod"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let courses = body_json(get(app, "/courses").await).await;
    let courses = courses.as_array().unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0]["id"], first.as_str());
    assert_eq!(courses[0]["enrollment_count"], 2);
    assert_eq!(courses[0]["lab_count"], 0);
    assert_eq!(courses[1]["id"], second.as_str());
    assert_eq!(courses[1]["enrollment_count"], 0);
    assert_eq!(courses[1]["lab_count"], 1);
}

// ---------------------------------------------------------------------------
// Test: PATCH changes only the supplied fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_applies_only_supplied_fields(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let mut body = course_body();
    body["overview"] = json!("Original overview");
    body["tags"] = json!(["ci"]);
    let created = body_json(post_json(app.clone(), "/courses", &body).await).await;
    let id = created["id"].as_str().unwrap();

    // Timestamps have millisecond resolution.
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let response = patch_json(
        app.clone(),
        &format!("/courses/{id}"),
        &json!({"title": "DevOps 201", "tags": ["ci", "cd"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["title"], "DevOps 201");
    assert_eq!(updated["tags"], json!(["ci", "cd"]));
    assert_eq!(updated["overview"], "Original overview");
    assert_eq!(updated["instructor"], "Jo");
    assert_eq!(updated["duration_minutes"], 60);
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_ne!(updated["updated_at"], created["updated_at"]);
}

// ---------------------------------------------------------------------------
// Test: PATCH null clears optional text fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn patch_null_clears_overview_and_category(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let mut body = course_body();
    body["overview"] = json!("Some overview");
    body["category"] = json!("Ops");
    let created = body_json(post_json(app.clone(), "/courses", &body).await).await;
    let id = created["id"].as_str().unwrap();

    let response = patch_json(
        app,
        &format!("/courses/{id}"),
        &json!({"overview": null, "category": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert!(updated["overview"].is_null());
    assert!(updated["category"].is_null());
}

// ---------------------------------------------------------------------------
// Test: Empty PATCH is a no-op
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_patch_changes_nothing(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let created = body_json(post_json(app.clone(), "/courses", &course_body()).await).await;
    let id = created["id"].as_str().unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let response = patch_json(app, &format!("/courses/{id}"), &json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let unchanged = body_json(response).await;
    assert_eq!(unchanged["title"], created["title"]);
    assert_eq!(unchanged["updated_at"], created["updated_at"]);
}

// ---------------------------------------------------------------------------
// Test: Missing and malformed ids are 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_course_ids_return_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let missing = uuid::Uuid::new_v4();

    let response = get(app.clone(), &format!("/courses/{missing}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], format!("Course with id {missing} not found"));

    let response = patch_json(
        app.clone(),
        &format!("/courses/{missing}"),
        &json!({"title": "Whatever"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app.clone(), &format!("/courses/{missing}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, "/courses/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: DELETE removes the course and its children
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_course_cascades(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let id = create_course(app.clone()).await;

    post_json(
        app.clone(),
        &format!("/courses/{id}/enrollments"),
        &json!({"name": "Al", "email": "a@x.com"}),
    )
    .await;
    post_json(
        app.clone(),
        &format!("/courses/{id}/labs"),
        &json!({
            "title": "First lab",
            "resource_type": "walkthrough",
            "resource_uri": "https://labs.example.com/first"
        }),
    )
    .await;

    let response = delete(app.clone(), &format!("/courses/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &format!("/courses/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = get(app, &format!("/courses/{id}/enrollments")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let orphans: i64 = sqlx::query_scalar(
        "SELECT (SELECT COUNT(*) FROM enrollments) + (SELECT COUNT(*) FROM lab_exercises)",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(orphans, 0);
}
