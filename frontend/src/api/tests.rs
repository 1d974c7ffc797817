#![cfg(not(coverage))]

use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn leave_item_json(email: &str, leave_type: &str) -> serde_json::Value {
    json!({
        "Title": "Alice Example",
        "EmployeeEmail": email,
        "LeaveType": leave_type,
        "StartDate": "2024-01-01T08:00:00Z",
        "EndDate": "2024-01-05T08:00:00Z",
        "Status": "Pending",
        "ApproverEmail": "m@x.com"
    })
}

fn new_request() -> NewLeaveRequest {
    NewLeaveRequest {
        employee_name: "Alice Example".into(),
        employee_email: "alice@example.com".into(),
        leave_type: LeaveType::Vacation,
        start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        status: PENDING_STATUS.into(),
        approver_email: "m@x.com".into(),
    }
}

#[tokio::test]
async fn get_list_items_sends_filter_and_projection() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path_contains("/_api/web/lists/getbytitle(")
                .path_contains("LeaveRequests")
                .query_param("$filter", "EmployeeEmail eq 'alice@example.com'")
                .query_param(
                    "$select",
                    "Title,EmployeeEmail,LeaveType,StartDate,EndDate,Status,ApproverEmail",
                )
                .header("accept", "application/json;odata=nometadata");
            then.status(200).json_body(json!({
                "value": [leave_item_json("alice@example.com", "Vacation")]
            }));
        })
        .await;

    let client = ApiClient::new_with_base_url(server.base_url());
    let query = ListQuery::new()
        .filter_eq("EmployeeEmail", "alice@example.com")
        .select(&[
            "Title",
            "EmployeeEmail",
            "LeaveType",
            "StartDate",
            "EndDate",
            "Status",
            "ApproverEmail",
        ]);
    let items: Vec<LeaveRequest> = client
        .get_list_items("LeaveRequests", &query)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].leave_type, Some(LeaveType::Vacation));
}

#[tokio::test]
async fn add_list_item_posts_store_payload_with_digest_and_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path_contains("LeaveRequests")
                .header("x-requestdigest", "digest-1")
                .header("authorization", "Bearer token-1")
                .json_body(json!({
                    "Title": "Alice Example",
                    "EmployeeEmail": "alice@example.com",
                    "LeaveType": "Vacation",
                    "StartDate": "2024-01-01T00:00:00Z",
                    "EndDate": "2024-01-05T00:00:00Z",
                    "Status": "Pending",
                    "ApproverEmail": "m@x.com"
                }));
            then.status(201)
                .json_body(leave_item_json("alice@example.com", "Vacation"));
        })
        .await;

    let client = ApiClient::with_settings(ClientSettings {
        site_url: server.base_url(),
        access_token: Some("token-1".into()),
        request_digest: Some("digest-1".into()),
    });
    client
        .add_list_item("LeaveRequests", &new_request())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn store_error_message_is_surfaced() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_contains("Missing");
            then.status(404).json_body(json!({
                "odata.error": {
                    "code": "-1, System.ArgumentException",
                    "message": { "lang": "en-US", "value": "List 'Missing' does not exist." }
                }
            }));
        })
        .await;

    let client = ApiClient::new_with_base_url(server.base_url());
    let err = client
        .get_list_items::<LeaveRequest>("Missing", &ListQuery::new())
        .await
        .unwrap_err();
    assert_eq!(err.code, "HTTP_404");
    assert_eq!(err.error, "List 'Missing' does not exist.");
}

#[tokio::test]
async fn unreadable_error_body_falls_back_to_status_text() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path_contains("LeaveRequests");
            then.status(500).body("<html>oops</html>");
        })
        .await;

    let client = ApiClient::new_with_base_url(server.base_url());
    let err = client
        .add_list_item("LeaveRequests", &new_request())
        .await
        .unwrap_err();
    assert_eq!(err.code, "HTTP_500");
    assert!(err.error.contains("Internal Server Error"));
}

#[tokio::test]
async fn malformed_success_body_is_a_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_contains("LeaveRequests");
            then.status(200).body("not json");
        })
        .await;

    let client = ApiClient::new_with_base_url(server.base_url());
    let err = client
        .get_list_items::<LeaveRequest>("LeaveRequests", &ListQuery::new())
        .await
        .unwrap_err();
    assert_eq!(err.code, "PARSE_ERROR");
}

#[tokio::test]
async fn unreachable_store_is_a_request_failure() {
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9");
    let err = client
        .get_list_items::<LeaveRequest>("LeaveRequests", &ListQuery::new())
        .await
        .unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
}
