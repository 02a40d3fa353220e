//! Command execution against a mocked GitHub API

mod support;

use ghcli::commands::{Command, CommandContext, CreateCommand, ListCommand};
use ghcli::GitHubError;
use serde_json::json;
use std::sync::Arc;
use support::{client_for, issue_json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn context(server: &MockServer, owner: &str, repo: &str) -> CommandContext {
    CommandContext {
        client: Arc::new(client_for(&server.uri())),
        owner: owner.to_string(),
        repo: repo.to_string(),
    }
}

#[tokio::test]
async fn test_list_command_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/demo/issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            issue_json("octo", "demo", 1, "First", "Body"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let result = ListCommand { json: false }
        .execute(&context(&server, "octo", "demo"))
        .await;
    assert!(result.is_ok());
    server.verify().await;
}

#[tokio::test]
async fn test_list_command_json_with_no_issues() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let result = ListCommand { json: true }
        .execute(&context(&server, "octo", "demo"))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_list_command_propagates_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let error = ListCommand { json: false }
        .execute(&context(&server, "octo", "missing"))
        .await
        .unwrap_err();

    let github_error = error.downcast_ref::<GitHubError>().unwrap();
    assert_eq!(github_error.status().map(|s| s.as_u16()), Some(404));
}

#[tokio::test]
async fn test_create_command_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/octo/demo/issues"))
        .and(body_json(json!({"title": "Title", "body": "Body"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(issue_json("octo", "demo", 4, "Title", "Body")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let command = CreateCommand {
        title: "Title".to_string(),
        body: "Body".to_string(),
    };
    assert!(command.execute(&context(&server, "octo", "demo")).await.is_ok());
    server.verify().await;
}

#[tokio::test]
async fn test_create_command_invalid_repository() {
    let server = MockServer::start().await;

    let command = CreateCommand {
        title: "Title".to_string(),
        body: "Body".to_string(),
    };
    let error = command
        .execute(&context(&server, "octo", ""))
        .await
        .unwrap_err();

    assert!(matches!(
        error.downcast_ref::<GitHubError>(),
        Some(GitHubError::InvalidRepository { field: "repository", .. })
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}
