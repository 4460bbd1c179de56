//! Integration tests for signature procedures.

use std::sync::Arc;
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yousign::{
    Client, CreateProcedureRequest, TracingLogger, UpdateProcedureRequest, YousignError,
};

const API_KEY: &str = "0123456789abcdef0123456789abcdef";
const PROCEDURE_ID: &str = "5f0c4a4e-93b1-4c2a-9d8b-1e2f3a4b5c6d";

fn client_for(server: &MockServer) -> Client {
    Client::new(API_KEY, server.uri())
        .unwrap()
        .with_logger(Arc::new(TracingLogger))
}

fn create_mock_procedure(name: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": format!("/procedures/{}", PROCEDURE_ID),
        "name": name,
        "description": "",
        "status": status,
        "members": [],
        "files": [],
        "config": {},
        "createdAt": "2019-03-21T10:00:00+01:00"
    })
}

#[tokio::test]
async fn test_create_procedure_without_start() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/procedures"))
        .and(body_json(serde_json::json!({
            "name": "My procedure",
            "description": "",
            "start": false,
            "config": {}
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(create_mock_procedure("My procedure", "draft")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let procedure = client
        .procedures()
        .create(CreateProcedureRequest {
            name: "My procedure".to_string(),
            start: false,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(procedure.name, "My procedure");
    assert_eq!(procedure.status.as_deref(), Some("draft"));
    assert_eq!(procedure.uuid().unwrap().to_string(), PROCEDURE_ID);
}

#[tokio::test]
async fn test_create_started_procedure_with_members() {
    let mock_server = MockServer::start().await;
    let member = serde_json::json!({
        "firstname": "John",
        "lastname": "Smith",
        "email": "john.smith@example.com",
        "phone": "+33687654321"
    });

    Mock::given(method("POST"))
        .and(path("/procedures"))
        .and(body_json(serde_json::json!({
            "name": "Contract",
            "description": "Employment contract",
            "start": true,
            "members": [member.clone()],
            "config": { "email": { "member.started": [] } }
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(create_mock_procedure("Contract", "active")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = serde_json::Map::new();
    config.insert(
        "email".to_string(),
        serde_json::json!({ "member.started": [] }),
    );

    let client = client_for(&mock_server);
    let procedure = client
        .procedures()
        .create(CreateProcedureRequest {
            name: "Contract".to_string(),
            description: "Employment contract".to_string(),
            members: Some(vec![member]),
            config,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(procedure.status.as_deref(), Some("active"));
}

#[tokio::test]
async fn test_started_procedure_requires_members() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let procedures = client.procedures();

    let err = procedures
        .create(CreateProcedureRequest {
            name: "My procedure".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, YousignError::Argument { field: "members", .. }));

    let err = procedures
        .create(CreateProcedureRequest {
            name: "My procedure".to_string(),
            members: Some(vec![]),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, YousignError::Argument { field: "members", .. }));

    let err = procedures
        .create(CreateProcedureRequest {
            start: false,
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, YousignError::Argument { field: "name", .. }));
}

#[tokio::test]
async fn test_update_procedure_sends_only_supplied_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("/procedures/{}", PROCEDURE_ID)))
        .and(body_json(serde_json::json!({ "name": "Renamed" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(create_mock_procedure("Renamed", "draft")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let procedure = client
        .procedures()
        .update(
            PROCEDURE_ID,
            UpdateProcedureRequest {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(procedure.name, "Renamed");

    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_start_existing_procedure_without_members() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("/procedures/{}", PROCEDURE_ID)))
        .and(body_json(serde_json::json!({ "start": true })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(create_mock_procedure("Contract", "active")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let procedure = client
        .procedures()
        .update(
            PROCEDURE_ID,
            UpdateProcedureRequest {
                start: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(procedure.status.as_deref(), Some("active"));
}

#[tokio::test]
async fn test_get_procedure_with_null_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/procedures/{}", PROCEDURE_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": format!("/procedures/{}", PROCEDURE_ID),
            "name": "Contract",
            "description": null,
            "status": "draft",
            "members": null,
            "files": [{ "id": "/files/a", "name": "a.pdf", "type": "archive" }],
            "config": null,
            "finishedAt": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let procedure = client.procedures().get(PROCEDURE_ID).await.unwrap();
    assert_eq!(procedure.description, "");
    assert!(procedure.members.is_empty());
    assert!(procedure.config.is_empty());
    assert!(procedure.finished_at.is_none());
    assert!(procedure.files[0].kind().is_none());
}

#[tokio::test]
async fn test_get_and_delete_procedure() {
    let mock_server = MockServer::start().await;
    let procedure_path = format!("/procedures/{}", PROCEDURE_ID);

    Mock::given(method("GET"))
        .and(path(procedure_path.as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(create_mock_procedure("My procedure", "draft")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(procedure_path.as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let procedures = client.procedures();

    let procedure = procedures.get(PROCEDURE_ID).await.unwrap();
    assert!(procedure.members.is_empty());
    assert!(procedure.config.is_empty());

    procedures.delete(PROCEDURE_ID).await.unwrap();
}

#[tokio::test]
async fn test_invalid_procedure_ids_never_reach_the_api() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let procedures = client.procedures();

    assert!(matches!(
        procedures.get("not-a-uuid").await.unwrap_err(),
        YousignError::Argument { field: "id", .. }
    ));
    assert!(matches!(
        procedures
            .update("not-a-uuid", UpdateProcedureRequest::default())
            .await
            .unwrap_err(),
        YousignError::Argument { field: "id", .. }
    ));
    assert!(matches!(
        procedures.delete("not-a-uuid").await.unwrap_err(),
        YousignError::Argument { field: "id", .. }
    ));
}
