mod common;

use common::FakeWeaviate;
use pretty_assertions::assert_eq;
use serde_json::json;
use weaviate_core::query::{WhereFilter, WhereOperator};
use weaviate_core::{BatchReference, DeleteOutput, ObjectReference, WeaviateObject};
use weaviate_rs::{ClientError, ErrorMessage};

const PIZZA_ID: &str = "36ddd591-2dee-4e7e-a3cc-eb86d30a4303";

#[actix_web::test]
async fn test_create_object() {
    let server = FakeWeaviate::start();
    server.route(
        "POST",
        "/v1/objects",
        200,
        json!({"id": PIZZA_ID, "class": "Pizza", "properties": {"name": "Hawaii"}}),
    );

    let properties = [("name".to_string(), json!("Hawaii"))].into_iter().collect();
    let object = server
        .client()
        .data()
        .creator()
        .with_class_name("Pizza")
        .with_id(PIZZA_ID)
        .with_properties(properties)
        .run()
        .await
        .unwrap();

    assert_eq!(object.id.as_deref(), Some(PIZZA_ID));
    assert_eq!(
        server.last_request().json(),
        json!({"id": PIZZA_ID, "class": "Pizza", "properties": {"name": "Hawaii"}})
    );
}

#[actix_web::test]
async fn test_create_object_rejects_invalid_id() {
    let server = FakeWeaviate::start();

    let err = server
        .client()
        .data()
        .creator()
        .with_class_name("Pizza")
        .with_id("not-a-uuid")
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidRequest(_)));
    assert!(server.requests().is_empty());
}

#[actix_web::test]
async fn test_get_object_by_id() {
    let server = FakeWeaviate::start();
    let uri = format!("/v1/objects/Pizza/{}?include=vector", PIZZA_ID);
    server.route(
        "GET",
        &uri,
        200,
        json!({"id": PIZZA_ID, "class": "Pizza", "vector": [0.5, 0.25]}),
    );

    let objects = server
        .client()
        .data()
        .getter()
        .with_class_name("Pizza")
        .with_id(PIZZA_ID)
        .with_vector()
        .run()
        .await
        .unwrap();

    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].vector, Some(vec![0.5, 0.25]));
}

#[actix_web::test]
async fn test_get_missing_object_is_empty() {
    let server = FakeWeaviate::start();

    let objects = server
        .client()
        .data()
        .getter()
        .with_class_name("Pizza")
        .with_id(PIZZA_ID)
        .run()
        .await
        .unwrap();

    assert!(objects.is_empty());
}

#[actix_web::test]
async fn test_list_objects_query_parameters() {
    let server = FakeWeaviate::start();
    server.route(
        "GET",
        "/v1/objects?class=Pizza&limit=2&include=classification%2Cvector",
        200,
        json!({"objects": [{"class": "Pizza"}, {"class": "Pizza"}], "totalResults": 2}),
    );

    let objects = server
        .client()
        .data()
        .getter()
        .with_class_name("Pizza")
        .with_limit(2)
        .with_additional("classification")
        .with_vector()
        .run()
        .await
        .unwrap();

    assert_eq!(objects.len(), 2);
}

#[actix_web::test]
async fn test_merge_update_uses_patch() {
    let server = FakeWeaviate::start();
    let uri = format!("/v1/objects/Pizza/{}", PIZZA_ID);
    server.route_raw("PATCH", &uri, 204, "");

    let properties = [("price".to_string(), json!(9.5))].into_iter().collect();
    server
        .client()
        .data()
        .updater()
        .with_class_name("Pizza")
        .with_id(PIZZA_ID)
        .with_properties(properties)
        .with_merge()
        .run()
        .await
        .unwrap();

    let request = server.last_request();
    assert_eq!(request.method, "PATCH");
    assert_eq!(request.json()["properties"], json!({"price": 9.5}));
}

#[actix_web::test]
async fn test_checker_maps_status_to_bool() {
    let server = FakeWeaviate::start();
    let uri = format!("/v1/objects/Pizza/{}", PIZZA_ID);
    server.route_raw("HEAD", &uri, 204, "");

    let data = server.client().data();
    let exists = data
        .checker()
        .with_class_name("Pizza")
        .with_id(PIZZA_ID)
        .run()
        .await
        .unwrap();
    assert!(exists);

    let exists = data
        .checker()
        .with_class_name("Soup")
        .with_id(PIZZA_ID)
        .run()
        .await
        .unwrap();
    assert!(!exists);
}

#[actix_web::test]
async fn test_reference_creator() {
    let server = FakeWeaviate::start();
    let uri = format!("/v1/objects/Pizza/{}/references/inCountry", PIZZA_ID);
    server.route_raw("POST", &uri, 200, "");

    server
        .client()
        .data()
        .reference_creator()
        .with_class_name("Pizza")
        .with_id(PIZZA_ID)
        .with_reference_property("inCountry")
        .with_reference(ObjectReference::to("Country", "5b6a08ba-1d46-43aa-89cc-8b070790c6f2"))
        .run()
        .await
        .unwrap();

    assert_eq!(
        server.last_request().json(),
        json!({"beacon": "weaviate://localhost/Country/5b6a08ba-1d46-43aa-89cc-8b070790c6f2"})
    );
}

#[actix_web::test]
async fn test_objects_batch_reports_item_errors() {
    let server = FakeWeaviate::start();
    server.route(
        "POST",
        "/v1/batch/objects",
        200,
        json!([
            {"id": PIZZA_ID, "class": "Pizza", "result": {}},
            {"class": "Pizza", "result": {"errors": {"error": [{"message": "no such prop"}]}}}
        ]),
    );

    let results = server
        .client()
        .batch()
        .objects_batcher()
        .with_object(WeaviateObject::new("Pizza").id(PIZZA_ID))
        .with_object(WeaviateObject::new("Pizza").property("colour", "red"))
        .run()
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert!(results[0].errors().is_empty());
    assert_eq!(results[1].errors(), vec!["no such prop"]);

    let body = server.last_request().json();
    assert_eq!(body["fields"], json!(["ALL"]));
    assert_eq!(body["objects"].as_array().map(Vec::len), Some(2));
}

#[actix_web::test]
async fn test_empty_batch_is_rejected() {
    let server = FakeWeaviate::start();

    let err = server
        .client()
        .batch()
        .objects_batcher()
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidRequest(_)));
}

#[actix_web::test]
async fn test_references_batch() {
    let server = FakeWeaviate::start();
    server.route("POST", "/v1/batch/references", 200, json!([{"result": {}}]));

    let results = server
        .client()
        .batch()
        .references_batcher()
        .with_reference(BatchReference::new(
            "Pizza",
            PIZZA_ID,
            "inCountry",
            "Country",
            "5b6a08ba-1d46-43aa-89cc-8b070790c6f2",
        ))
        .run()
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(
        server.last_request().json(),
        json!([{
            "from": format!("weaviate://localhost/Pizza/{}/inCountry", PIZZA_ID),
            "to": "weaviate://localhost/Country/5b6a08ba-1d46-43aa-89cc-8b070790c6f2"
        }])
    );
}

#[actix_web::test]
async fn test_batch_delete_sends_where_filter() {
    let server = FakeWeaviate::start();
    server.route(
        "DELETE",
        "/v1/batch/objects",
        200,
        json!({
            "match": {"class": "Pizza"},
            "output": "verbose",
            "dryRun": true,
            "results": {"matches": 1, "limit": 10000, "successful": 1, "failed": 0,
                        "objects": [{"id": PIZZA_ID, "status": "DRYRUN"}]}
        }),
    );

    let response = server
        .client()
        .batch()
        .objects_batch_deleter()
        .with_class_name("Pizza")
        .with_where(
            WhereFilter::new()
                .path(["name"])
                .operator(WhereOperator::Equal)
                .value_text("Hawaii"),
        )
        .with_output(DeleteOutput::Verbose)
        .with_dry_run(true)
        .run()
        .await
        .unwrap();

    assert_eq!(response.results.matches, 1);
    assert_eq!(response.results.objects[0].id, PIZZA_ID);
    assert_eq!(
        server.last_request().json(),
        json!({
            "match": {
                "class": "Pizza",
                "where": {"operator": "Equal", "path": ["name"], "valueText": "Hawaii"}
            },
            "output": "verbose",
            "dryRun": true
        })
    );
}

#[actix_web::test]
async fn test_list_missing_class_is_empty() {
    let server = FakeWeaviate::start();

    let objects = server
        .client()
        .data()
        .getter()
        .with_class_name("Soup")
        .run()
        .await
        .unwrap();

    assert!(objects.is_empty());
    assert_eq!(server.last_request().uri, "/v1/objects?class=Soup");
}

#[actix_web::test]
async fn test_delete_object() {
    let server = FakeWeaviate::start();
    let uri = format!("/v1/objects/Pizza/{}", PIZZA_ID);
    server.route_raw("DELETE", &uri, 204, "");

    server
        .client()
        .data()
        .deleter()
        .with_class_name("Pizza")
        .with_id(PIZZA_ID)
        .run()
        .await
        .unwrap();

    let request = server.last_request();
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.uri, uri);
    assert!(request.body.is_empty());
}

#[actix_web::test]
async fn test_validator_surfaces_unprocessable_entity() {
    let server = FakeWeaviate::start();
    server.route(
        "POST",
        "/v1/objects/validate",
        422,
        json!({"error": [{"message": "invalid object: no such prop with name 'colour' found"}]}),
    );

    let properties = [("colour".to_string(), json!("red"))].into_iter().collect();
    let err = server
        .client()
        .data()
        .validator()
        .with_class_name("Pizza")
        .with_id(PIZZA_ID)
        .with_properties(properties)
        .run()
        .await
        .unwrap_err();

    match err {
        ClientError::Server { status, messages } => {
            assert_eq!(status, 422);
            assert_eq!(
                messages,
                vec![ErrorMessage::new(
                    "invalid object: no such prop with name 'colour' found"
                )]
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let request = server.last_request();
    assert_eq!(request.method, "POST");
    assert_eq!(
        request.json(),
        json!({"id": PIZZA_ID, "class": "Pizza", "properties": {"colour": "red"}})
    );
}

#[actix_web::test]
async fn test_reference_replacer_sends_list() {
    let server = FakeWeaviate::start();
    let uri = format!("/v1/objects/Pizza/{}/references/inCountry", PIZZA_ID);
    server.route_raw("PUT", &uri, 200, "");

    server
        .client()
        .data()
        .reference_replacer()
        .with_class_name("Pizza")
        .with_id(PIZZA_ID)
        .with_reference_property("inCountry")
        .with_references(vec![
            ObjectReference::to("Country", "5b6a08ba-1d46-43aa-89cc-8b070790c6f2"),
            ObjectReference::to("Country", "8c7e6b0d-8a5b-4f3c-9a1e-2d4f6a8b0c1e"),
        ])
        .run()
        .await
        .unwrap();

    let request = server.last_request();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.uri, uri);
    assert_eq!(
        request.json(),
        json!([
            {"beacon": "weaviate://localhost/Country/5b6a08ba-1d46-43aa-89cc-8b070790c6f2"},
            {"beacon": "weaviate://localhost/Country/8c7e6b0d-8a5b-4f3c-9a1e-2d4f6a8b0c1e"}
        ])
    );
}

#[actix_web::test]
async fn test_reference_deleter_sends_body() {
    let server = FakeWeaviate::start();
    let uri = format!("/v1/objects/Pizza/{}/references/inCountry", PIZZA_ID);
    server.route_raw("DELETE", &uri, 204, "");

    server
        .client()
        .data()
        .reference_deleter()
        .with_class_name("Pizza")
        .with_id(PIZZA_ID)
        .with_reference_property("inCountry")
        .with_reference(ObjectReference::to("Country", "5b6a08ba-1d46-43aa-89cc-8b070790c6f2"))
        .run()
        .await
        .unwrap();

    let request = server.last_request();
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.uri, uri);
    assert_eq!(
        request.json(),
        json!({"beacon": "weaviate://localhost/Country/5b6a08ba-1d46-43aa-89cc-8b070790c6f2"})
    );
}

#[actix_web::test]
async fn test_path_segments_are_percent_encoded() {
    let server = FakeWeaviate::start();
    let uri = format!("/v1/objects/Pizza/{}/references/in%20Country", PIZZA_ID);
    server.route_raw("POST", &uri, 200, "");

    server
        .client()
        .data()
        .reference_creator()
        .with_class_name("Pizza")
        .with_id(PIZZA_ID)
        .with_reference_property("in Country")
        .with_reference(ObjectReference::to("Country", "5b6a08ba-1d46-43aa-89cc-8b070790c6f2"))
        .run()
        .await
        .unwrap();

    assert_eq!(server.last_request().uri, uri);
}
