use artfind_core::graphql::ArtistData;
use artfind_core::{
    ArtistSaver, BooksSearchClient, ClientConfig, GraphqlClient, GraphqlError, SaveError, SearchApi,
    SearchController, SearchError, Session,
};
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::rc::Rc;

const GOOD_TOKEN: &str = "good-token";

async fn volumes(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    match params.get("q").map(String::as_str) {
        Some("dune") => Json(json!({
            "kind": "books#volumes",
            "totalItems": 1,
            "items": [{
                "id": "abc",
                "volumeInfo": {
                    "title": "Dune",
                    "authors": ["Frank Herbert"],
                    "imageLinks": { "thumbnail": "http://books/dune.jpg" }
                }
            }]
        })),
        _ => Json(json!({ "kind": "books#volumes", "totalItems": 0 })),
    }
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

fn profile(saved: Vec<Value>) -> Value {
    json!({
        "_id": "u1",
        "username": "ada",
        "email": "ada@example.com",
        "artCount": saved.len(),
        "savedArtist": saved,
    })
}

async fn graphql(headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {GOOD_TOKEN}"))
        .unwrap_or(false);
    let query = body["query"].as_str().unwrap_or_default();

    if query.contains("mutation saveArtist") {
        if !authorized {
            return Json(json!({
                "data": null,
                "errors": [{ "message": "You need to be logged in!" }]
            }));
        }
        let artist = body["variables"]["artistData"].clone();
        return Json(json!({ "data": { "saveArtist": profile(vec![artist]) } }));
    }
    if query.contains("users") && !query.contains("me {") {
        return Json(json!({ "data": { "users": [
            { "_id": "u1", "username": "ada", "email": "ada@example.com" },
            { "_id": "u2", "username": "bob", "email": "bob@example.com" }
        ]}}));
    }
    if authorized {
        Json(json!({ "data": { "me": profile(vec![]) } }))
    } else {
        Json(json!({ "data": null, "errors": [{ "message": "Not logged in" }] }))
    }
}

/// Serve the fake APIs on an ephemeral port and return the base URL.
async fn spawn_server() -> String {
    let app = Router::new()
        .route("/books/v1/volumes", get(volumes))
        .route("/broken", get(broken))
        .route("/graphql", post(graphql));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_search_client_sends_query_and_parses_items() {
    let base = spawn_server().await;
    let client = BooksSearchClient::new(format!("{base}/books/v1/volumes"));

    let response = client.search("dune").await.unwrap();
    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].id, "abc");
    assert_eq!(response.items[0].volume_info.title, "Dune");

    let empty = client.search("nothing matches").await.unwrap();
    assert!(empty.items.is_empty());
}

#[tokio::test]
async fn test_search_client_reports_status() {
    let base = spawn_server().await;
    let client = BooksSearchClient::new(format!("{base}/broken"));

    let err = client.search("dune").await.unwrap_err();
    assert!(matches!(err, SearchError::RequestFailed(500)));
}

#[tokio::test]
async fn test_save_artist_with_bearer_token() {
    let base = spawn_server().await;
    let client = GraphqlClient::new(format!("{base}/graphql"));
    let artist = ArtistData {
        artist_id: "abc".into(),
        authors: vec!["Frank Herbert".into()],
        title: "Dune".into(),
        description: None,
        image: String::new(),
    };

    let profile = client.save_artist(GOOD_TOKEN, &artist).await.unwrap();
    assert_eq!(profile.username, "ada");
    assert_eq!(profile.saved_artists, vec![artist]);
}

#[tokio::test]
async fn test_default_graphql_url_reaches_server_once_resolved() {
    let base = spawn_server().await;
    let config = ClientConfig::default().resolve_against(&base).unwrap();
    assert_eq!(config.graphql_url, format!("{base}/graphql"));

    let client = GraphqlClient::new(config.graphql_url);
    let artist = ArtistData {
        artist_id: "abc".into(),
        title: "Dune".into(),
        ..ArtistData::default()
    };
    let profile = client.save_artist(GOOD_TOKEN, &artist).await.unwrap();
    assert_eq!(profile.saved_artists, vec![artist]);
}

#[tokio::test]
async fn test_graphql_errors_fail_the_call() {
    let base = spawn_server().await;
    let client = GraphqlClient::new(format!("{base}/graphql"));

    let err = client
        .save_artist("wrong-token", &ArtistData::default())
        .await
        .unwrap_err();
    assert!(matches!(err, GraphqlError::Server(msg) if msg == "You need to be logged in!"));
}

#[tokio::test]
async fn test_profile_and_user_queries() {
    let base = spawn_server().await;
    let client = GraphqlClient::new(format!("{base}/graphql"));

    let me = client.me(GOOD_TOKEN).await.unwrap();
    assert_eq!(me.id, "u1");
    assert!(me.saved_artists.is_empty());

    let users = client.users().await.unwrap();
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["ada", "bob"]);
}

#[tokio::test]
async fn test_graphql_status_error() {
    let base = spawn_server().await;
    let client = GraphqlClient::new(format!("{base}/missing"));

    let err = client.users().await.unwrap_err();
    assert!(matches!(err, GraphqlError::Status(404) | GraphqlError::Status(405)));
}

#[tokio::test]
async fn test_controller_end_to_end() {
    let base = spawn_server().await;
    let controller = SearchController::new(
        Rc::new(BooksSearchClient::new(format!("{base}/books/v1/volumes"))),
        Rc::new(GraphqlClient::new(format!("{base}/graphql"))),
    );

    let results = controller.search("dune").await.unwrap().unwrap();
    assert_eq!(results[0].image_url, "http://books/dune.jpg");

    let session = Session::new(Some(GOOD_TOKEN.into()));
    controller.save(&session, &results, "abc").await.unwrap();

    let err = controller
        .save(&Session::new(Some("wrong-token".into())), &results, "abc")
        .await
        .unwrap_err();
    assert!(matches!(err, SaveError::Mutation(GraphqlError::Server(_))));
}
