//! Tests for the five resources that physically share the `datadiri` table,
//! each scoped to its own column subset.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, delete, get, send_json};
use serde_json::{json, Value};

fn pegawai_payload() -> Value {
    json!({
        "nama": "Budi Santoso",
        "nik": "3273012345678901",
        "jenis_pegawai": "PNS",
        "status_pegawai": "Aktif",
        "unit": "Keuangan",
        "sub_unit": "Anggaran",
        "pendidikan": "S1",
        "tanggal_lahir": "1990-01-31",
        "tempat_lahir": "Bandung",
        "jenis_kelamin": "Laki-laki",
        "agama": "Islam",
        "foto": "budi.jpg"
    })
}

#[tokio::test]
async fn lookup_resources_see_shared_rows_through_their_own_column() {
    let app = build_test_app().await;

    let response = send_json(
        &app,
        Method::POST,
        "/jeniskelamin",
        json!({"jenis_kelamin": "Laki-laki"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    // the same physical row is visible to a sibling resource, with the
    // sibling's column still at its empty default
    let response = get(&app, &format!("/pendidikan/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["pendidikan"], "");
}

#[tokio::test]
async fn sibling_update_only_touches_its_own_column() {
    let app = build_test_app().await;

    let response = send_json(&app, Method::POST, "/pegawai", pegawai_payload()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    // write the shared column through the jeniskelamin resource
    let response = send_json(
        &app,
        Method::PUT,
        &format!("/jeniskelamin/{id}"),
        json!({"jenis_kelamin": "Perempuan"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // pegawai-owned columns are untouched, the shared column reflects the
    // write, updated_at was refreshed
    let json = body_json(get(&app, &format!("/pegawai/{id}")).await).await;
    assert_eq!(json["data"]["nama"], "Budi Santoso");
    assert_eq!(json["data"]["unit"], "Keuangan");
    assert_eq!(json["data"]["jenis_kelamin"], "Perempuan");
    assert!(!json["data"]["updated_at"].is_null());
}

#[tokio::test]
async fn lookup_resource_filter_applies_to_its_own_column() {
    let app = build_test_app().await;

    for jenis in ["PNS", "Honorer"] {
        let response = send_json(
            &app,
            Method::POST,
            "/jenispegawai",
            json!({"jenis_pegawai": jenis}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // a row created by a sibling has '' in jenis_pegawai and must not match
    let response = send_json(&app, Method::POST, "/pendidikan", json!({"pendidikan": "S2"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get(&app, "/jenispegawai?search=PNS").await).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["jenis_pegawai"], "PNS");

    // the unfiltered list still exposes every datadiri row
    let json = body_json(get(&app, "/jenispegawai").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn pegawai_crud_over_the_uniform_surface() {
    let app = build_test_app().await;

    let response = send_json(&app, Method::POST, "/pegawai", pegawai_payload()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["nik"], "3273012345678901");

    // list filters on nama
    let json = body_json(get(&app, "/pegawai?search=Budi").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // update goes through the id segment, unlike the original's bodyless PUT
    let mut payload = pegawai_payload();
    payload["unit"] = json!("Kepegawaian");
    let response = send_json(&app, Method::PUT, &format!("/pegawai/{id}"), payload).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["unit"], "Kepegawaian");

    let response = delete(&app, &format!("/pegawai/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/pegawai/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn pegawai_create_requires_every_field() {
    let app = build_test_app().await;

    let mut payload = pegawai_payload();
    payload.as_object_mut().unwrap().remove("nik");

    let response = send_json(&app, Method::POST, "/pegawai", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Failed to Bind Input");
}
