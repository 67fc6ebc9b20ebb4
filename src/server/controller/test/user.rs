use super::*;

#[tokio::test]
async fn creates_user_with_placeholder_description_and_hides_password() {
    let (server, _) = test_server().await;

    let response = server
        .post("/user")
        .json(&json!({ "email": "a@b.com", "password": "x", "description": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["mensaje"], "Usuario creado exitósamente");

    let users: Value = server.get("/user").await.json();
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "a@b.com");
    assert_eq!(users[0]["descripcion"], "no hay descripción");
    assert_eq!(users[0]["is_active"], true);
    assert!(users[0].get("password").is_none());
}

#[tokio::test]
async fn created_user_is_retrievable_by_id() {
    let (server, _) = test_server().await;
    register(&server, "luke@tatooine.org", "force").await;

    let users: Value = server.get("/user").await.json();
    let id = users[0]["id"].as_i64().unwrap();

    let response = server.get(&format!("/user/{}", id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["email"], "luke@tatooine.org");
}

#[tokio::test]
async fn rejects_missing_body() {
    let (server, _) = test_server().await;

    let response = server.post("/user").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        error_message(&body),
        "Body está vacío o email no viene en el body, es inválido"
    );
    assert_eq!(body["status_code"], 400);
}

#[tokio::test]
async fn rejects_missing_required_fields_without_inserting() {
    let (server, _) = test_server().await;

    let no_email = server.post("/user").json(&json!({ "password": "x" })).await;
    let empty_email = server
        .post("/user")
        .json(&json!({ "email": "", "password": "x" }))
        .await;
    let no_password = server.post("/user").json(&json!({ "email": "a@b.com" })).await;

    assert_eq!(no_email.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(empty_email.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&empty_email.json()), "email es inválido");
    assert_eq!(no_password.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&no_password.json()), "password es inválido");

    let users: Value = server.get("/user").await.json();
    assert!(users.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn rejects_duplicate_email() {
    let (server, _) = test_server().await;
    register(&server, "han@falcon.net", "solo").await;

    let response = server
        .post("/user")
        .json(&json!({ "email": "han@falcon.net", "password": "other" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&response.json()), "El usuario ya existe");
}

#[tokio::test]
async fn id_zero_is_bad_request() {
    let (server, _) = test_server().await;

    let get = server.get("/user/0").await;
    let delete = server.delete("/user/0").await;

    assert_eq!(get.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(delete.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&delete.json()), "Id no puede ser igual a 0");
}

#[tokio::test]
async fn unknown_id_is_bad_request() {
    let (server, _) = test_server().await;

    let get = server.get("/user/77").await;
    let delete = server.delete("/user/77").await;

    assert_eq!(get.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&get.json()), "El usuario no existe");
    assert_eq!(delete.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_removes_user() {
    let (server, _) = test_server().await;
    register(&server, "ben@kenobi.org", "hello-there").await;
    register(&server, "maul@sith.org", "revenge").await;

    let users: Value = server.get("/user").await.json();
    let id = users[0]["id"].as_i64().unwrap();

    let response = server.delete(&format!("/user/{}", id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<String>(), "usuario eliminado exitósamente");

    let users: Value = server.get("/user").await.json();
    assert_eq!(users.as_array().unwrap().len(), 1);
    assert_eq!(
        server.get(&format!("/user/{}", id)).await.status_code(),
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn non_numeric_id_is_answered_with_error_body() {
    let (server, _) = test_server().await;

    let get = server.get("/user/abc").await;
    let delete = server.delete("/people/abc").await;

    for response in [get, delete] {
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["status_code"], 400);
        assert_eq!(error_message(&body), "Parámetros de ruta inválidos");
    }
}

#[tokio::test]
async fn unparsable_favorites_filter_is_answered_with_error_body() {
    let (server, _) = test_server().await;

    let response = server.get("/user/favorites?user_id=x").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status_code"], 400);
    assert_eq!(error_message(&body), "Parámetros de consulta inválidos");
}

#[tokio::test]
async fn storage_failure_during_creation_is_generic_500() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::People)
        .build()
        .await
        .unwrap();
    let state = AppState::new(test.db.unwrap(), TokenKeys::new(SECRET, None), 1);
    let server = TestServer::new(router().with_state(state)).unwrap();

    let response = server
        .post("/user")
        .json(&json!({ "email": "a@b.com", "password": "x" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Internal server error", "status_code": 500 })
    );
}
