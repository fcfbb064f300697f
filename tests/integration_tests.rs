use serde_json::json;

mod unit;

const BASE_URL: &str = "http://127.0.0.1:8000/api/Employee";

#[tokio::test]
#[ignore = "requires running server"]
async fn test_create_rejects_names_with_digits() {
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{}/Create", BASE_URL))
        .json(&json!({ "id": 0, "name": "John123 Doe" }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.expect("invalid JSON body");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "The name cannot contain numbers");
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_create_rejects_short_names() {
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{}/Create", BASE_URL))
        .json(&json!({ "id": 0, "name": "A" }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_create_fetch_duplicate_delete_flow() {
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/Create", BASE_URL))
        .json(&json!({ "id": 0, "name": "zyxwv utsrq" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = resp.json().await.expect("invalid JSON body");
    let id = body["data"]["id"].as_i64().expect("missing id");
    assert_eq!(body["data"]["name"], "Zyxwv UTSRQ");
    assert!(body["data"]["createdDate"].is_string());

    // same name, different case, new record -> conflict
    let resp = client
        .post(format!("{}/Create", BASE_URL))
        .json(&json!({ "id": 0, "name": "ZYXWV UTSRQ" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 409);

    let resp = client
        .get(format!("{}/GetById?id={}", BASE_URL, id))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 200);

    let resp = client
        .delete(format!("{}/Delete?id={}", BASE_URL, id))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 200);

    let resp = client
        .get(format!("{}/GetById?id={}", BASE_URL, id))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn test_update_unknown_id_is_not_found() {
    let client = reqwest::Client::new();
    let resp = client
        .put(format!("{}/Update", BASE_URL))
        .json(&json!({ "id": 999999, "name": "ghost person" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(resp.status(), 404);
}
