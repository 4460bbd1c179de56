//! Integration tests for files and file objects.

use std::sync::Arc;
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yousign::{
    Client, CreateFileObjectRequest, CreateFileRequest, FileType, TracingLogger, YousignError,
};

const API_KEY: &str = "0123456789abcdef0123456789abcdef";
const FILE_ID: &str = "3c2b1a09-8f7e-4d6c-9b5a-4f3e2d1c0b9a";
const MEMBER_ID: &str = "0e7c1b1a-2f4d-4e6b-8a9c-0d1e2f3a4b5c";
const PROCEDURE_ID: &str = "5f0c4a4e-93b1-4c2a-9d8b-1e2f3a4b5c6d";
const FILE_OBJECT_ID: &str = "7d6c5b4a-3e2f-4a1b-9c8d-7e6f5a4b3c2d";
// "%PDF-1.4\n"
const PDF_BASE64: &str = "JVBERi0xLjQK";

fn client_for(server: &MockServer) -> Client {
    Client::new(API_KEY, server.uri())
        .unwrap()
        .with_logger(Arc::new(TracingLogger))
}

fn create_mock_file(file_type: &str) -> serde_json::Value {
    serde_json::json!({
        "id": format!("/files/{}", FILE_ID),
        "name": "contract.pdf",
        "type": file_type,
        "contentType": "application/pdf",
        "description": null,
        "createdAt": "2019-03-21T10:00:00+01:00"
    })
}

fn contract(file_type: FileType, procedure: Option<String>) -> CreateFileRequest {
    CreateFileRequest {
        name: "contract.pdf".to_string(),
        content: PDF_BASE64.to_string(),
        file_type,
        procedure,
    }
}

#[tokio::test]
async fn test_create_signable_file_without_procedure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files"))
        .and(body_json(serde_json::json!({
            "name": "contract.pdf",
            "content": PDF_BASE64,
            "type": "signable"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(create_mock_file("signable")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let file = client
        .files()
        .create(contract(FileType::Signable, None))
        .await
        .unwrap();

    assert_eq!(file.name, "contract.pdf");
    assert_eq!(file.kind(), Some(FileType::Signable));
    assert_eq!(file.content_type.as_deref(), Some("application/pdf"));
}

#[tokio::test]
async fn test_create_attachment_with_procedure() {
    let mock_server = MockServer::start().await;
    let procedure = format!("/procedures/{}", PROCEDURE_ID);

    Mock::given(method("POST"))
        .and(path("/files"))
        .and(body_json(serde_json::json!({
            "name": "contract.pdf",
            "content": PDF_BASE64,
            "type": "attachment",
            "procedure": procedure
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(create_mock_file("attachment")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let file = client
        .files()
        .create(contract(FileType::Attachment, Some(procedure.clone())))
        .await
        .unwrap();
    assert_eq!(file.kind(), Some(FileType::Attachment));
}

#[tokio::test]
async fn test_get_file_and_contents() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/files/{}", FILE_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_mock_file("signable")))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/files/{}/download", FILE_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(PDF_BASE64)))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let files = client.files();

    let file = files.get(FILE_ID).await.unwrap();
    assert_eq!(file.uuid().unwrap().to_string(), FILE_ID);

    assert_eq!(files.contents(FILE_ID).await.unwrap(), PDF_BASE64);
    assert_eq!(files.contents_bytes(FILE_ID).await.unwrap(), b"%PDF-1.4\n");
}

#[tokio::test]
async fn test_invalid_file_arguments_never_reach_the_api() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let files = client.files();

    let err = files
        .create(contract(FileType::Attachment, None))
        .await
        .unwrap_err();
    assert!(matches!(err, YousignError::Argument { field: "procedure", .. }));

    let err = files
        .create(CreateFileRequest {
            name: "contract.docx".to_string(),
            ..contract(FileType::Signable, None)
        })
        .await
        .unwrap_err();
    assert!(matches!(err, YousignError::Argument { field: "name", .. }));

    let err = files
        .create(CreateFileRequest {
            content: format!("data:application/pdf;base64,{}", PDF_BASE64),
            ..contract(FileType::Signable, None)
        })
        .await
        .unwrap_err();
    assert!(matches!(err, YousignError::Argument { field: "content", .. }));

    let err = "pdf".parse::<FileType>().unwrap_err();
    assert!(matches!(err, YousignError::Argument { field: "type", .. }));

    for id in ["not-a-uuid", "/files/3c2b1a09-8f7e-4d6c-9b5a-4f3e2d1c0b9a"] {
        assert!(matches!(
            files.get(id).await.unwrap_err(),
            YousignError::Argument { field: "id", .. }
        ));
        assert!(matches!(
            files.contents(id).await.unwrap_err(),
            YousignError::Argument { field: "id", .. }
        ));
    }
}

#[tokio::test]
async fn test_create_file_object_with_default_mentions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/file_objects"))
        .and(body_json(serde_json::json!({
            "file": format!("/files/{}", FILE_ID),
            "member": format!("/members/{}", MEMBER_ID),
            "page": 2,
            "position": "230,499,464,589",
            "reason": "Signed by John",
            "mention": "",
            "mention2": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": format!("/file_objects/{}", FILE_OBJECT_ID),
            "file": create_mock_file("signable"),
            "page": 2,
            "position": "230,499,464,589",
            "reason": "Signed by John",
            "mention": "",
            "mention2": ""
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let object = client
        .file_objects()
        .create(CreateFileObjectRequest {
            file: format!("/files/{}", FILE_ID),
            member: format!("/members/{}", MEMBER_ID),
            page: 2,
            position: "230,499,464,589".to_string(),
            reason: "Signed by John".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(object.page, Some(2));
    assert_eq!(object.uuid().unwrap().to_string(), FILE_OBJECT_ID);
}

#[tokio::test]
async fn test_delete_file_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/file_objects/{}", FILE_OBJECT_ID)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.file_objects().delete(FILE_OBJECT_ID).await.unwrap();

    let err = client.file_objects().delete("42").await.unwrap_err();
    assert!(matches!(err, YousignError::Argument { field: "id", .. }));
}

#[tokio::test]
async fn test_invalid_file_object_never_reaches_the_api() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .file_objects()
        .create(CreateFileObjectRequest {
            file: format!("/files/{}", FILE_ID),
            member: "john".to_string(),
            position: "230,499,464,589".to_string(),
            reason: "Signed by John".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, YousignError::Argument { field: "member", .. }));
}
