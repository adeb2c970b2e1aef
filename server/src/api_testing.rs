use crate::{app_builder::build_app, settings::Settings};
use bookshelf::BookStore;
use reqwest::{
    Client, StatusCode,
    header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, ORIGIN},
};
use serde_json::{Value, json};
use std::net::SocketAddr;
use tokio::net::TcpListener;

///# Panics
/// Panics if the TCP listener cannot bind to the requested address
/// or if the local address cannot be retrieved.
async fn spawn_app(settings: &Settings) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addrs = listener
        .local_addr()
        .expect("Failed to get local address from listener");
    let service = build_app(BookStore::seeded(), settings);
    drop(tokio::spawn(async move {
        axum::serve(listener, service)
            .await
            .expect("Server failed to start");
    }));

    addrs
}

///# Panics
/// Panics if the request fails or the response is not JSON.
async fn post_query(client: &Client, url: &str, query: &str) -> Value {
    let response = client
        .post(url)
        .json(&json!({ "query": query }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    response
        .json()
        .await
        .expect("Failed to parse the response")
}

#[tokio::test]
async fn books_over_http() {
    let addrs = spawn_app(&Settings::default()).await;
    let client = Client::new();

    let body = post_query(&client, &format!("http://{addrs}/"), "{ books { id } }").await;
    let ids = body["data"]["books"]
        .as_array()
        .expect("Expected a list of books")
        .iter()
        .map(|book| book["id"].as_str().expect("Expected a string id"))
        .collect::<Vec<_>>();

    assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8"]);
}

#[tokio::test]
async fn book_over_http() {
    let addrs = spawn_app(&Settings::default()).await;
    let client = Client::new();
    let url = format!("http://{addrs}/");

    let found = post_query(
        &client,
        &url,
        r#"{ book(id: "4") { title author createdAt } }"#,
    )
    .await;
    let missing = post_query(&client, &url, r#"{ book(id: "999") { title } }"#).await;

    assert_eq!(
        found,
        json!({
            "data": {
                "book": {
                    "title": "Steppenwolf",
                    "author": "Hermann Hesse",
                    "createdAt": "1970-01-06T07:18:17.425Z"
                }
            }
        })
    );
    assert_eq!(missing, json!({ "data": { "book": null } }));
}

#[tokio::test]
async fn custom_path_and_strict_ids() {
    let mut settings = Settings::default();
    settings.graphql.path = "/graphql".to_owned();
    settings.graphql.strict_ids = true;
    let addrs = spawn_app(&settings).await;
    let client = Client::new();

    let body = post_query(
        &client,
        &format!("http://{addrs}/graphql"),
        r#"{ book(id: "abc") { title } }"#,
    )
    .await;
    let elsewhere = client
        .post(format!("http://{addrs}/"))
        .json(&json!({ "query": "{ books { id } }" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(body["data"]["book"], Value::Null);
    assert_eq!(
        body["errors"][0]["message"],
        r#"The id "abc" is not a number."#
    );
    assert_eq!(elsewhere.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn playground() {
    let addrs = spawn_app(&Settings::default()).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{addrs}/"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .expect("Missing content type")
        .to_str()
        .expect("Content type is not text");
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn playground_disabled() {
    let mut settings = Settings::default();
    settings.graphql.playground = false;
    let addrs = spawn_app(&settings).await;

    let response = Client::new()
        .get(format!("http://{addrs}/"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn cross_origin_requests() {
    let addrs = spawn_app(&Settings::default()).await;

    let response = Client::new()
        .post(format!("http://{addrs}/"))
        .header(ORIGIN, "https://studio.example.com")
        .json(&json!({ "query": "{ books { id } }" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("Missing CORS header"),
        "*"
    );
}
