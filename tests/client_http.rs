//! The requests `Client` sends to the REST API, and how it reads the replies
//!
//! Each test runs against a local HTTP server that checks the method, path and body of the calls.

use plan_board::Client;
use plan_board::plan::NewPlan;
use plan_board::task::NewTask;
use plan_board::traits::PlanSource;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();
    Client::new(server.uri()).unwrap()
}

#[tokio::test]
async fn get_plans() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/plans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Holidays", "status": "Pending", "start_date": "2024-02-01", "end_date": "2024-02-20"},
            {"id": 2, "title": "Move out", "status": null, "start_date": "2024-03-01", "end_date": "2024-03-31"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let plans = client.get_plans().await.unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].id(), 1);
    assert_eq!(plans[0].title(), "Holidays");
    assert_eq!(plans[1].status(), None);
}

#[tokio::test]
async fn get_done_plans() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/done-plans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 4, "title": "Taxes", "status": "Completed", "start_date": "2024-01-01", "end_date": "2024-04-15"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let plans = client.get_done_plans().await.unwrap();
    assert_eq!(plans.len(), 1);
    assert!(plans[0].completed());
}

#[tokio::test]
async fn get_tasks_of_a_plan() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "plan_id": 3, "name": "Book", "description": null, "due_date": "2024-02-15",
             "date_added": "2024-01-20T10:00:00+00:00", "completed": 1},
            {"id": 11, "plan_id": 3, "name": "Pack", "description": "Warm clothes", "due_date": "2024-02-18",
             "date_added": null, "completed": 0}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let tasks = client.get_tasks(3).await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert!(tasks[0].completed());
    assert_eq!(tasks[0].description(), "");
    assert!(tasks[1].completed() == false);
    assert_eq!(tasks[1].description(), "Warm clothes");
    assert_eq!(tasks[1].plan_id(), Some(3));
}

#[tokio::test]
async fn invalid_json_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/plans"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_plans().await.unwrap_err();
    assert!(err.to_string().starts_with("Invalid reply from"));
}

#[tokio::test]
async fn add_plan_posts_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/plans"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "title": "Holidays", "start_date": "2024-02-01", "end_date": "2024-02-20"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "Plan added successfully!"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server).await;
    let plan = NewPlan {
        title: "Holidays".to_string(),
        start_date: "2024-02-01".to_string(),
        end_date: "2024-02-20".to_string(),
    };
    assert_eq!(client.add_plan(plan).await.unwrap(), "Plan added successfully!");
}

#[tokio::test]
async fn add_task_posts_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "name": "Book", "description": "", "due_date": "2024-02-15", "plan_id": 3
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "Task added successfully!"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server).await;
    let task = NewTask::new(3, "Book".to_string(), String::new(), "2024-02-15".to_string());
    assert_eq!(client.add_task(task).await.unwrap(), "Task added successfully!");
}

#[tokio::test]
async fn mark_task_done_has_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/tasks/10/done"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Task marked as done!"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server).await;
    assert_eq!(client.mark_task_done(10).await.unwrap(), "Task marked as done!");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn mark_plan_done_has_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/plans/4/done"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Plan marked as done"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server).await;
    assert_eq!(client.mark_plan_done(4).await.unwrap(), "Plan marked as done");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn cleanup_done_plans() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/cleanup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Old completed plans removed."})))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server).await;
    assert_eq!(client.cleanup_done_plans().await.unwrap(), "Old completed plans removed.");
}

#[tokio::test]
async fn reply_without_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/cleanup"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut client = client_for(&server).await;
    assert_eq!(client.cleanup_done_plans().await.unwrap(), "");
}

#[tokio::test]
async fn not_found_message_is_the_error() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/plans/99/done"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Plan not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server).await;
    let err = client.mark_plan_done(99).await.unwrap_err();
    assert_eq!(err.to_string(), "Plan not found");
}

#[tokio::test]
async fn server_error_field_is_the_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "Database is locked"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server).await;
    let task = NewTask::new(3, "Book".to_string(), String::new(), "2024-02-15".to_string());
    let err = client.add_task(task).await.unwrap_err();
    assert_eq!(err.to_string(), "Database is locked");
}

#[tokio::test]
async fn error_without_explanation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/3"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_tasks(3).await.unwrap_err();
    assert_eq!(err.to_string(), "Unexpected HTTP status code 502");
}
