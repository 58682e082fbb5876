//! HTTP-level integration tests for `/api/sites`.
//!
//! Every test seeds the default catalog, so template ids 1 and 2 exist.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_site, delete_auth, get, get_auth, post_auth, post_json, post_json_auth,
    put_json_auth, register,
};
use serde_json::json;
use sitebuilder_db::seed::seed_defaults;
use sqlx::PgPool;

async fn seeded_app(pool: PgPool) -> axum::Router {
    seed_defaults(&pool).await.unwrap();
    common::build_test_app(pool)
}

async fn count_sites(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM sites")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Full lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_login_create_publish(pool: PgPool) {
    let app = seeded_app(pool).await;
    register(&app, "a@x.com", "pw1").await;

    let login = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "a@x.com", "password": "pw1" }),
    )
    .await;
    assert_eq!(login.status(), StatusCode::OK);
    let token = body_json(login).await["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let site = create_site(&app, &token, "foo.com", 1).await;
    assert_eq!(site["status"], "draft");
    assert_eq!(site["domain"], "foo.com");
    let id = site["id"].as_i64().unwrap();

    let published = post_auth(&app, &format!("/api/sites/{id}/publish"), &token).await;
    assert_eq!(published.status(), StatusCode::OK);
    let json = body_json(published).await;
    assert!(json["message"].is_string());
    assert_eq!(json["site"]["status"], "published");

    let fetched = body_json(get_auth(&app, &format!("/api/sites/{id}"), &token).await).await;
    assert_eq!(fetched["site"]["status"], "published");
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_copies_template_content(pool: PgPool) {
    let app = seeded_app(pool.clone()).await;
    let (token, user_id) = register(&app, "a@x.com", "pw").await;

    let site = create_site(&app, &token, "copy.com", 2).await;

    let template_json: serde_json::Value =
        sqlx::query_scalar("SELECT grapesjs_json FROM templates WHERE id = 2")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(site["content_data"], template_json);
    assert_eq!(site["user_id"], user_id);
    assert_eq!(site["template_id"], 2);
    assert!(site["hosting_account_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_missing_template_is_404(pool: PgPool) {
    let app = seeded_app(pool.clone()).await;
    let (token, _) = register(&app, "a@x.com", "pw").await;

    let response = post_json_auth(
        &app,
        "/api/sites",
        json!({ "domain": "x.com", "template_id": 999 }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(count_sites(&pool).await, 0);
}

/// Domains are unique across all users.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_taken_domain_is_400(pool: PgPool) {
    let app = seeded_app(pool.clone()).await;
    let (alice, _) = register(&app, "alice@x.com", "pw").await;
    let (bob, _) = register(&app, "bob@x.com", "pw").await;
    create_site(&app, &alice, "shared.com", 1).await;

    let response = post_json_auth(
        &app,
        "/api/sites",
        json!({ "domain": "shared.com", "template_id": 2 }),
        &bob,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
    assert_eq!(count_sites(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_missing_fields_is_400(pool: PgPool) {
    let app = seeded_app(pool).await;
    let (token, _) = register(&app, "a@x.com", "pw").await;

    for body in [
        json!({ "template_id": 1 }),
        json!({ "domain": "", "template_id": 1 }),
        json!({ "domain": "x.com" }),
        json!({ "domain": "x.com", "template_id": 0 }),
    ] {
        let response = post_json_auth(&app, "/api/sites", body.clone(), &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sites_require_auth(pool: PgPool) {
    let app = seeded_app(pool).await;

    assert_eq!(get(&app, "/api/sites").await.status(), StatusCode::UNAUTHORIZED);
    let response = post_json(
        &app,
        "/api/sites",
        json!({ "domain": "x.com", "template_id": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Ownership
// ---------------------------------------------------------------------------

/// Another user's site is indistinguishable from a missing one.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_foreign_site_is_404_for_every_operation(pool: PgPool) {
    let app = seeded_app(pool.clone()).await;
    let (owner, _) = register(&app, "owner@x.com", "pw").await;
    let (intruder, _) = register(&app, "intruder@x.com", "pw").await;
    let id = create_site(&app, &owner, "mine.com", 1).await["id"]
        .as_i64()
        .unwrap();
    let uri = format!("/api/sites/{id}");

    assert_eq!(get_auth(&app, &uri, &intruder).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        put_json_auth(&app, &uri, json!({ "status": "published" }), &intruder)
            .await
            .status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        post_auth(&app, &format!("{uri}/publish"), &intruder).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(delete_auth(&app, &uri, &intruder).await.status(), StatusCode::NOT_FOUND);

    // Untouched for the owner.
    let json = body_json(get_auth(&app, &uri, &owner).await).await;
    assert_eq!(json["site"]["status"], "draft");
    assert_eq!(count_sites(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_shows_only_own_sites(pool: PgPool) {
    let app = seeded_app(pool).await;
    let (alice, _) = register(&app, "alice@x.com", "pw").await;
    let (bob, _) = register(&app, "bob@x.com", "pw").await;
    create_site(&app, &alice, "a1.com", 1).await;
    create_site(&app, &bob, "b1.com", 1).await;
    create_site(&app, &alice, "a2.com", 2).await;

    let json = body_json(get_auth(&app, "/api/sites", &alice).await).await;
    let domains: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["domain"].as_str().unwrap())
        .collect();

    assert_eq!(domains, vec!["a1.com", "a2.com"]);
}

/// Ids that do not parse name no site; the answer is the usual JSON 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unparseable_site_id_is_json_404(pool: PgPool) {
    let app = seeded_app(pool).await;
    let (token, _) = register(&app, "a@x.com", "pw").await;

    for uri in [
        "/api/sites/abc",
        "/api/sites/99999999999999999999",
        "/api/sites/1.5",
    ] {
        let response = get_auth(&app, uri, &token).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri: {uri}");
        assert_eq!(body_json(response).await["code"], "NOT_FOUND", "uri: {uri}");
    }

    let response = post_auth(&app, "/api/sites/abc/publish", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_status_advances_updated_at(pool: PgPool) {
    let app = seeded_app(pool).await;
    let (token, _) = register(&app, "a@x.com", "pw").await;
    let site = create_site(&app, &token, "u.com", 1).await;
    let id = site["id"].as_i64().unwrap();

    let response = put_json_auth(
        &app,
        &format!("/api/sites/{id}"),
        json!({ "status": "published" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Site updated successfully");
    assert_eq!(json["site"]["status"], "published");
    // Untouched field keeps its value.
    assert_eq!(json["site"]["content_data"], site["content_data"]);

    let before = chrono::DateTime::parse_from_rfc3339(site["updated_at"].as_str().unwrap()).unwrap();
    let after =
        chrono::DateTime::parse_from_rfc3339(json["site"]["updated_at"].as_str().unwrap()).unwrap();
    assert!(after > before);
}

/// Content edits replace the document and never touch the template.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_content_leaves_template_alone(pool: PgPool) {
    let app = seeded_app(pool).await;
    let (token, _) = register(&app, "a@x.com", "pw").await;
    let id = create_site(&app, &token, "c.com", 1).await["id"]
        .as_i64()
        .unwrap();
    let template_before =
        body_json(get_auth(&app, "/api/templates/1", &token).await).await["template"].clone();

    let edited = json!({ "html": "<h1>Mine</h1>", "css": "" });
    let response = put_json_auth(
        &app,
        &format!("/api/sites/{id}"),
        json!({ "content_data": edited, "domain": "ignored.com", "user_id": 999 }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["site"]["content_data"], edited);
    assert_eq!(json["site"]["domain"], "c.com");
    assert_eq!(json["site"]["status"], "draft");

    let template_after =
        body_json(get_auth(&app, "/api/templates/1", &token).await).await["template"].clone();
    assert_eq!(template_before["grapesjs_json"], template_after["grapesjs_json"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_invalid_status_is_400(pool: PgPool) {
    let app = seeded_app(pool).await;
    let (token, _) = register(&app, "a@x.com", "pw").await;
    let id = create_site(&app, &token, "s.com", 1).await["id"]
        .as_i64()
        .unwrap();

    let response = put_json_auth(
        &app,
        &format!("/api/sites/{id}"),
        json!({ "status": "archived" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let json = body_json(get_auth(&app, &format!("/api/sites/{id}"), &token).await).await;
    assert_eq!(json["site"]["status"], "draft");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_site_is_404(pool: PgPool) {
    let app = seeded_app(pool).await;
    let (token, _) = register(&app, "a@x.com", "pw").await;

    let response = put_json_auth(&app, "/api/sites/4242", json!({ "status": "draft" }), &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_twice_is_200_then_404(pool: PgPool) {
    let app = seeded_app(pool.clone()).await;
    let (token, _) = register(&app, "a@x.com", "pw").await;
    let id = create_site(&app, &token, "d.com", 1).await["id"]
        .as_i64()
        .unwrap();
    let uri = format!("/api/sites/{id}");

    let first = delete_auth(&app, &uri, &token).await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(body_json(first).await["message"], "Site deleted successfully");

    assert_eq!(delete_auth(&app, &uri, &token).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get_auth(&app, &uri, &token).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(count_sites(&pool).await, 0);
}

/// A deleted domain can be claimed again.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_domain_is_free_after_delete(pool: PgPool) {
    let app = seeded_app(pool).await;
    let (token, _) = register(&app, "a@x.com", "pw").await;
    let id = create_site(&app, &token, "again.com", 1).await["id"]
        .as_i64()
        .unwrap();
    delete_auth(&app, &format!("/api/sites/{id}"), &token).await;

    let site = create_site(&app, &token, "again.com", 2).await;
    assert_ne!(site["id"], id);
}
