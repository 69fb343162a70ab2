//! API integration tests

use axum::http::{header, Method, StatusCode};
use serde_json::json;

use crate::support::{basic, TestApp, PASSWORD, REALM, USERNAME};

fn assert_challenge(response: &crate::support::TestResponse) {
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers.get(header::WWW_AUTHENTICATE).unwrap(),
        &format!("Basic realm=\"{}\"", REALM)
    );
}

#[tokio::test]
async fn test_me_requires_no_credentials() {
    let app = TestApp::new();

    let response = app.send(Method::GET, "/api/me", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert!(body["name"].is_string());
    assert!(body["ru"].is_string());
    assert!(body["course"].is_string());
}

#[tokio::test]
async fn test_list_seeded_books() {
    let app = TestApp::seeded().await;

    let response = app.send_authed(Method::GET, "/api/books", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    let books = body.as_array().unwrap();
    assert_eq!(books.len(), 3);
    assert_eq!(books[0]["id"], 1);
    assert_eq!(books[0]["publisher"], "SAGAH");
    assert_eq!(books[2]["year"], 2008);
}

#[tokio::test]
async fn test_missing_credentials() {
    let app = TestApp::seeded().await;

    let response = app.send(Method::GET, "/api/books", None, None).await;

    assert_challenge(&response);
    assert_eq!(response.json()["message"], "Missing Authorization Header");
}

#[tokio::test]
async fn test_wrong_credentials() {
    let app = TestApp::seeded().await;

    let response = app
        .send(Method::GET, "/api/books", Some(basic("wronguser", "wrongpass")), None)
        .await;

    assert_challenge(&response);
    assert_eq!(response.json()["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_credentials_are_case_sensitive() {
    let app = TestApp::seeded().await;

    let response = app
        .send(
            Method::GET,
            "/api/books",
            Some(basic(&USERNAME.to_uppercase(), PASSWORD)),
            None,
        )
        .await;

    assert_challenge(&response);
}

#[tokio::test]
async fn test_wrong_scheme_and_garbage_headers() {
    let app = TestApp::seeded().await;

    let bearer = app
        .send(Method::GET, "/api/books", Some("Bearer token".to_string()), None)
        .await;
    assert_challenge(&bearer);
    assert_eq!(bearer.json()["message"], "Invalid Auth Scheme");

    let garbage = app
        .send(Method::GET, "/api/books", Some("Basic %%%".to_string()), None)
        .await;
    assert_challenge(&garbage);
    assert_eq!(garbage.json()["message"], "Invalid Authorization Header");
}

#[tokio::test]
async fn test_every_book_route_is_protected() {
    let app = TestApp::seeded().await;
    let body = r#"{"author":"A","title":"T","publisher":"P","year":2020}"#;

    let routes = [
        (Method::GET, "/api/books", None),
        (Method::GET, "/api/books/1", None),
        (Method::POST, "/api/books", Some(body)),
        (Method::PUT, "/api/books/1", Some(body)),
        (Method::DELETE, "/api/books/1", None),
    ];

    for (method, uri, body) in routes {
        let response = app.send(method, uri, None, body).await;
        assert_challenge(&response);
    }

    // Nothing changed
    let response = app.send_authed(Method::GET, "/api/books", None).await;
    assert_eq!(response.json().as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_get_delete_scenario() {
    let app = TestApp::new();

    let first = app
        .send_authed(
            Method::POST,
            "/api/books",
            Some(r#"{"author":"A","title":"T","publisher":"P","year":2020}"#),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.headers.get(header::LOCATION).unwrap(), "/api/books/1");
    assert_eq!(
        first.json(),
        json!({"id": 1, "author": "A", "title": "T", "publisher": "P", "year": 2020})
    );

    let second = app
        .send_authed(
            Method::POST,
            "/api/books",
            Some(r#"{"author":"B","title":"U","publisher":"Q","year":2021}"#),
        )
        .await;
    assert_eq!(second.status, StatusCode::CREATED);
    assert_eq!(second.json()["id"], 2);

    let deleted = app.send_authed(Method::DELETE, "/api/books/1", None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert!(deleted.body.is_empty());

    let gone = app.send_authed(Method::GET, "/api/books/1", None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert!(gone.body.is_empty());

    let kept = app.send_authed(Method::GET, "/api/books/2", None).await;
    assert_eq!(kept.status, StatusCode::OK);
    assert_eq!(kept.json()["title"], "U");
}

#[tokio::test]
async fn test_created_book_round_trips() {
    let app = TestApp::seeded().await;

    let created = app
        .send_authed(
            Method::POST,
            "/api/books",
            Some(r#"{"author":"Knuth","title":"TAOCP","publisher":"AW","year":1968}"#),
        )
        .await;
    let created = created.json();
    assert_eq!(created["id"], 4);

    let fetched = app.send_authed(Method::GET, "/api/books/4", None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json(), created);
}

#[tokio::test]
async fn test_create_with_explicit_ids() {
    let app = TestApp::seeded().await;

    let explicit = app
        .send_authed(Method::POST, "/api/books", Some(r#"{"id":50,"title":"Fifty"}"#))
        .await;
    assert_eq!(explicit.status, StatusCode::CREATED);
    assert_eq!(explicit.headers.get(header::LOCATION).unwrap(), "/api/books/50");

    // Colliding ids are stored as given
    let collision = app
        .send_authed(Method::POST, "/api/books", Some(r#"{"id":2,"title":"Twin"}"#))
        .await;
    assert_eq!(collision.status, StatusCode::CREATED);
    assert_eq!(collision.json()["id"], 2);

    let next = app
        .send_authed(Method::POST, "/api/books", Some(r#"{"title":"Next"}"#))
        .await;
    assert_eq!(next.json()["id"], 51);

    let list = app.send_authed(Method::GET, "/api/books", None).await.json();
    let ids: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 2, 3, 50, 51]);
}

#[tokio::test]
async fn test_list_is_sorted_regardless_of_insertion_order() {
    let app = TestApp::new();

    for id in [9, 4, 7, 1] {
        let body = format!(r#"{{"id":{},"title":"b{}"}}"#, id, id);
        app.send_authed(Method::POST, "/api/books", Some(body.as_str())).await;
    }

    let list = app.send_authed(Method::GET, "/api/books", None).await.json();
    let ids: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 4, 7, 9]);
}

#[tokio::test]
async fn test_update_overwrites_fields_and_keeps_id() {
    let app = TestApp::seeded().await;

    let response = app
        .send_authed(
            Method::PUT,
            "/api/books/2",
            Some(r#"{"id":99,"author":"X","title":"Y","publisher":"Z","year":1}"#),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({"id": 2, "author": "X", "title": "Y", "publisher": "Z", "year": 1})
    );

    let missing = app.send_authed(Method::GET, "/api/books/99", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let app = TestApp::seeded().await;
    let body = r#"{"author":"A","title":"T","publisher":"P","year":2020}"#;

    let get = app.send_authed(Method::GET, "/api/books/404", None).await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);

    let put = app.send_authed(Method::PUT, "/api/books/404", Some(body)).await;
    assert_eq!(put.status, StatusCode::NOT_FOUND);

    let delete = app.send_authed(Method::DELETE, "/api/books/404", None).await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);

    let not_a_number = app.send_authed(Method::GET, "/api/books/abc", None).await;
    assert_eq!(not_a_number.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unparsable_bodies_are_bad_requests() {
    let app = TestApp::seeded().await;

    let create = app
        .send_authed(Method::POST, "/api/books", Some("{not json"))
        .await;
    assert_eq!(create.status, StatusCode::BAD_REQUEST);

    let wrong_type = app
        .send_authed(Method::POST, "/api/books", Some(r#"{"year":"soon"}"#))
        .await;
    assert_eq!(wrong_type.status, StatusCode::BAD_REQUEST);

    let update = app.send_authed(Method::PUT, "/api/books/1", Some("[")).await;
    assert_eq!(update.status, StatusCode::BAD_REQUEST);

    let list = app.send_authed(Method::GET, "/api/books", None).await.json();
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = TestApp::new();

    let response = app.send(Method::GET, "/api-docs/openapi.json", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let doc = response.json();
    assert!(doc["paths"]["/books"].is_object());
    assert!(doc["paths"]["/books/{id}"].is_object());
    assert_eq!(doc["components"]["securitySchemes"]["basic_auth"]["scheme"], "basic");
}

#[tokio::test]
async fn test_auto_id_past_max_is_refused() {
    let app = TestApp::new();

    let last = app
        .send_authed(Method::POST, "/api/books", Some(r#"{"id":2147483647,"title":"Max"}"#))
        .await;
    assert_eq!(last.status, StatusCode::CREATED);

    let next = app
        .send_authed(Method::POST, "/api/books", Some(r#"{"title":"Next"}"#))
        .await;
    assert_eq!(next.status, StatusCode::BAD_REQUEST);
    assert_eq!(next.json()["message"], "No id available");

    let list = app.send_authed(Method::GET, "/api/books", None).await.json();
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_non_numeric_id_is_not_found_without_credentials() {
    let app = TestApp::seeded().await;

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let response = app.send(method, "/api/books/abc", None, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(response.headers.get(header::WWW_AUTHENTICATE).is_none());
    }

    // Numeric ids still require credentials
    let response = app.send(Method::GET, "/api/books/1", None, None).await;
    assert_challenge(&response);
}

#[tokio::test]
async fn test_update_rejects_wrongly_typed_id() {
    let app = TestApp::seeded().await;

    let response = app
        .send_authed(
            Method::PUT,
            "/api/books/1",
            Some(r#"{"id":"x","author":"A","title":"T","publisher":"P","year":2020}"#),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let unchanged = app.send_authed(Method::GET, "/api/books/1", None).await.json();
    assert_eq!(unchanged["publisher"], "SAGAH");
}
