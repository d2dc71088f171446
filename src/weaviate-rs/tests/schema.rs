mod common;

use common::FakeWeaviate;
use pretty_assertions::assert_eq;
use serde_json::json;
use weaviate_core::{data_type, Property, ShardStatus, WeaviateClass};
use weaviate_rs::ClientError;

#[actix_web::test]
async fn test_get_schema() {
    let server = FakeWeaviate::start();
    server.route(
        "GET",
        "/v1/schema",
        200,
        json!({"classes": [{"class": "Pizza", "properties": [{"name": "name", "dataType": ["text"]}]}]}),
    );

    let schema = server.client().schema().getter().run().await.unwrap();

    assert_eq!(schema.classes.len(), 1);
    assert_eq!(schema.classes[0].class_name, "Pizza");
    assert_eq!(schema.classes[0].properties[0].data_type, vec!["text"]);
}

#[actix_web::test]
async fn test_class_getter_missing_class_is_none() {
    let server = FakeWeaviate::start();
    server.route("GET", "/v1/schema/Soup", 404, json!({}));

    let class = server
        .client()
        .schema()
        .class_getter()
        .with_class_name("Soup")
        .run()
        .await
        .unwrap();

    assert!(class.is_none());
}

#[actix_web::test]
async fn test_create_class_sends_definition() {
    let server = FakeWeaviate::start();
    server.route("POST", "/v1/schema", 200, json!({"class": "Pizza"}));

    let class = WeaviateClass::new("Pizza")
        .description("Italian food")
        .vectorizer("text2vec-contextionary")
        .property(Property::new("name", data_type::TEXT).tokenization("word"));
    let created = server
        .client()
        .schema()
        .class_creator()
        .with_class(class)
        .run()
        .await
        .unwrap();
    assert_eq!(created.class_name, "Pizza");

    let request = server.last_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        request.json(),
        json!({
            "class": "Pizza",
            "description": "Italian food",
            "vectorizer": "text2vec-contextionary",
            "properties": [{"name": "name", "dataType": ["text"], "tokenization": "word"}]
        })
    );
}

#[actix_web::test]
async fn test_create_existing_class_surfaces_server_messages() {
    let server = FakeWeaviate::start();
    server.route(
        "POST",
        "/v1/schema",
        422,
        json!({"error": [{"message": "class name \"Pizza\" already exists"}]}),
    );

    let err = server
        .client()
        .schema()
        .class_creator()
        .with_class(WeaviateClass::new("Pizza"))
        .run()
        .await
        .unwrap_err();

    match err {
        ClientError::Server { status, messages } => {
            assert_eq!(status, 422);
            assert_eq!(messages.len(), 1);
            assert_eq!(messages[0].message, "class name \"Pizza\" already exists");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[actix_web::test]
async fn test_missing_class_name_sends_nothing() {
    let server = FakeWeaviate::start();

    let err = server
        .client()
        .schema()
        .class_deleter()
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidRequest(_)));
    assert!(server.requests().is_empty());
}

#[actix_web::test]
async fn test_all_deleter_deletes_every_class() {
    let server = FakeWeaviate::start();
    server
        .route(
            "GET",
            "/v1/schema",
            200,
            json!({"classes": [{"class": "Pizza"}, {"class": "Soup"}]}),
        )
        .route_raw("DELETE", "/v1/schema/Pizza", 200, "")
        .route_raw("DELETE", "/v1/schema/Soup", 200, "");

    server.client().schema().all_deleter().run().await.unwrap();

    let deletes: Vec<String> = server
        .requests()
        .into_iter()
        .filter(|r| r.method == "DELETE")
        .map(|r| r.uri)
        .collect();
    assert_eq!(deletes, vec!["/v1/schema/Pizza", "/v1/schema/Soup"]);
}

#[actix_web::test]
async fn test_property_creator() {
    let server = FakeWeaviate::start();
    server.route(
        "POST",
        "/v1/schema/Pizza/properties",
        200,
        json!({"name": "price", "dataType": ["number"]}),
    );

    let property = server
        .client()
        .schema()
        .property_creator()
        .with_class_name("Pizza")
        .with_property(Property::new("price", data_type::NUMBER))
        .run()
        .await
        .unwrap();

    assert_eq!(property.name, "price");
    assert_eq!(
        server.last_request().json(),
        json!({"name": "price", "dataType": ["number"]})
    );
}

#[actix_web::test]
async fn test_shards_updater_updates_every_shard() {
    let server = FakeWeaviate::start();
    server
        .route(
            "GET",
            "/v1/schema/Pizza/shards",
            200,
            json!([{"name": "s1", "status": "READY"}, {"name": "s2", "status": "READY"}]),
        )
        .route("PUT", "/v1/schema/Pizza/shards/s1", 200, json!({"status": "READONLY"}))
        .route("PUT", "/v1/schema/Pizza/shards/s2", 200, json!({"status": "READONLY"}));

    let shards = server
        .client()
        .schema()
        .shards_updater()
        .with_class_name("Pizza")
        .with_status(ShardStatus::ReadOnly)
        .run()
        .await
        .unwrap();

    assert_eq!(shards.len(), 2);
    assert!(shards.iter().all(|s| s.status_is(ShardStatus::ReadOnly)));

    let puts: Vec<_> = server
        .requests()
        .into_iter()
        .filter(|r| r.method == "PUT")
        .collect();
    assert_eq!(puts.len(), 2);
    assert!(puts.iter().all(|r| r.json() == json!({"status": "READONLY"})));
}

#[actix_web::test]
async fn test_shards_getter_keeps_transient_status() {
    let server = FakeWeaviate::start();
    server.route(
        "GET",
        "/v1/schema/Pizza/shards",
        200,
        json!([{"name": "s1", "status": "INDEXING"}, {"name": "s2", "status": "READY"}]),
    );

    let shards = server
        .client()
        .schema()
        .shards_getter()
        .with_class_name("Pizza")
        .run()
        .await
        .unwrap();

    assert_eq!(shards[0].status, "INDEXING");
    assert!(shards[1].status_is(ShardStatus::Ready));
}

#[actix_web::test]
async fn test_shard_updater() {
    let server = FakeWeaviate::start();
    server.route("PUT", "/v1/schema/Pizza/shards/s1", 200, json!({"status": "READY"}));

    let update = server
        .client()
        .schema()
        .shard_updater()
        .with_class_name("Pizza")
        .with_shard_name("s1")
        .with_status(ShardStatus::Ready)
        .run()
        .await
        .unwrap();

    assert_eq!(update.status, "READY");
    let request = server.last_request();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.uri, "/v1/schema/Pizza/shards/s1");
    assert_eq!(request.json(), json!({"status": "READY"}));
}
