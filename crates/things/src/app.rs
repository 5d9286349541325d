use std::time::Duration;

use axum::{
    http::StatusCode,
    routing::{get, post, put},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        health::livez,
        items::{create_item, list_items, update_item},
        translation::get_translation,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Mirrors the API Gateway routes so the handlers can be exercised locally.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/livez", get(livez))
        .route("/things", post(create_item))
        .route("/things/{pk}", get(list_items))
        .route("/things/{pk}/{sk}", put(update_item))
        .route("/things/{pk}/{sk}/translation", get(get_translation))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use things_core::item::{Item, ItemUpdate};
    use things_core::storage::{ItemRepository, RepositoryError, Result};
    use tower::ServiceExt;

    use crate::storage::InMemoryRepository;
    use crate::translate::InMemoryTranslator;

    /// Repository whose every operation fails.
    struct FailingRepository;

    #[async_trait]
    impl ItemRepository for FailingRepository {
        async fn query_items(&self, _pk: &str) -> Result<Vec<Item>> {
            Err(RepositoryError::ConnectionFailed("store offline".to_string()))
        }

        async fn get_item(&self, _pk: &str, _sk: &str) -> Result<Option<Item>> {
            Err(RepositoryError::ConnectionFailed("store offline".to_string()))
        }

        async fn put_item(&self, _item: &Item) -> Result<()> {
            Err(RepositoryError::ConnectionFailed("store offline".to_string()))
        }

        async fn update_item(&self, _pk: &str, _sk: &str, _update: &ItemUpdate) -> Result<()> {
            Err(RepositoryError::ConnectionFailed("store offline".to_string()))
        }

        async fn put_translation(
            &self,
            _pk: &str,
            _sk: &str,
            _language: &str,
            _text: &str,
        ) -> Result<()> {
            Err(RepositoryError::ConnectionFailed("store offline".to_string()))
        }
    }

    /// Repository that serves items but refuses to store translations.
    struct TranslationWriteRefused(InMemoryRepository);

    #[async_trait]
    impl ItemRepository for TranslationWriteRefused {
        async fn query_items(&self, pk: &str) -> Result<Vec<Item>> {
            self.0.query_items(pk).await
        }

        async fn get_item(&self, pk: &str, sk: &str) -> Result<Option<Item>> {
            self.0.get_item(pk, sk).await
        }

        async fn put_item(&self, item: &Item) -> Result<()> {
            self.0.put_item(item).await
        }

        async fn update_item(&self, pk: &str, sk: &str, update: &ItemUpdate) -> Result<()> {
            self.0.update_item(pk, sk, update).await
        }

        async fn put_translation(
            &self,
            _pk: &str,
            _sk: &str,
            _language: &str,
            _text: &str,
        ) -> Result<()> {
            Err(RepositoryError::WriteFailed("write refused".to_string()))
        }
    }

    fn test_app() -> Router {
        create_app(AppState::in_memory(), Duration::from_secs(10))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn with_json(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let (status, _) = send(&test_app(), get("/livez")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_empty_partition() {
        let (status, json) = send(&test_app(), get("/things/nobody")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let app = test_app();

        let (status, json) = send(
            &app,
            with_json(
                "POST",
                "/things",
                r#"{"PK":"user1","SK":"item1","description":"Hello","otherAttr":"blue"}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Item created successfully");

        let (status, json) = send(&app, get("/things/user1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!([{
                "PK": "user1",
                "SK": "item1",
                "description": "Hello",
                "otherAttr": "blue"
            }])
        );
    }

    #[tokio::test]
    async fn test_create_validation_errors() {
        let app = test_app();

        let (status, json) = send(&app, with_json("POST", "/things", "")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Missing request body");

        let (status, json) = send(&app, with_json("POST", "/things", r#"{"SK":"x"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "PK and SK are required");

        let (status, json) = send(&app, with_json("POST", "/things", "{oops")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn test_list_with_filter() {
        let app = test_app();
        for (sk, attr) in [("a", "x"), ("b", "y"), ("c", "x")] {
            let body = format!(r#"{{"PK":"p","SK":"{sk}","otherAttr":"{attr}"}}"#);
            send(&app, with_json("POST", "/things", &body)).await;
        }

        let (status, json) = send(&app, get("/things/p?filterAttr=x")).await;

        assert_eq!(status, StatusCode::OK);
        let keys: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["SK"].as_str().unwrap())
            .collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_update_overwrites_both_fields() {
        let app = test_app();
        send(
            &app,
            with_json(
                "POST",
                "/things",
                r#"{"PK":"p","SK":"s","description":"old","otherAttr":"attr"}"#,
            ),
        )
        .await;

        let (status, json) = send(
            &app,
            with_json("PUT", "/things/p/s", r#"{"description":"new"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Item updated successfully");

        let (_, json) = send(&app, get("/things/p")).await;
        assert_eq!(json[0]["description"], "new");
        assert_eq!(json[0]["otherAttr"], "");
    }

    #[tokio::test]
    async fn test_update_missing_body() {
        let (status, json) = send(&test_app(), with_json("PUT", "/things/p/s", "")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Missing request body");
    }

    #[tokio::test]
    async fn test_update_malformed_json_writes_nothing() {
        let app = test_app();

        let (status, json) = send(&app, with_json("PUT", "/things/p/s", "{oops")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON"));

        let (status, json) = send(&app, get("/things/p")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_translation_flow() {
        let translator = InMemoryTranslator::new();
        let state = AppState::new(
            Arc::new(InMemoryRepository::new()),
            Arc::new(translator.clone()),
        );
        let app = create_app(state, Duration::from_secs(10));

        send(
            &app,
            with_json(
                "POST",
                "/things",
                r#"{"PK":"user1","SK":"item1","description":"Hello"}"#,
            ),
        )
        .await;

        let (status, first) = send(&app, get("/things/user1/item1/translation?language=fr")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["cached"], false);
        assert_eq!(first["PK"], "user1");
        assert_eq!(first["SK"], "item1");
        assert_eq!(first["originalDescription"], "Hello");
        assert!(!first["translatedText"].as_str().unwrap().is_empty());

        let (status, second) = send(&app, get("/things/user1/item1/translation?language=fr")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(second["cached"], true);
        assert_eq!(second["translatedText"], first["translatedText"]);
        assert_eq!(translator.calls(), 1);

        // Cached translations never show up in the read projection.
        let (_, items) = send(&app, get("/things/user1")).await;
        assert_eq!(items[0]["description"], "Hello");
        assert!(items[0].get("translation_fr").is_none());
    }

    #[tokio::test]
    async fn test_translation_errors() {
        let app = test_app();

        let (status, json) = send(&app, get("/things/p/s/translation")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Missing target language in query string");

        let (status, json) = send(&app, get("/things/p/s/translation?language=fr")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Item not found");
    }

    #[tokio::test]
    async fn test_store_failure_is_500_with_message() {
        let state = AppState::new(
            Arc::new(FailingRepository),
            Arc::new(InMemoryTranslator::new()),
        );
        let app = create_app(state, Duration::from_secs(10));

        let (status, json) = send(&app, get("/things/p")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["message"], "store offline");

        let (status, _) = send(
            &app,
            with_json("POST", "/things", r#"{"PK":"p","SK":"s"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _) = send(&app, get("/things/p/s/translation?language=fr")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_translation_store_failure_is_500() {
        let repo = InMemoryRepository::new();
        repo.put_item(&Item::new("p", "s").with_description("Hello"))
            .await
            .unwrap();
        let translator = InMemoryTranslator::new();
        let state = AppState::new(
            Arc::new(TranslationWriteRefused(repo)),
            Arc::new(translator.clone()),
        );
        let app = create_app(state, Duration::from_secs(10));

        let (status, json) = send(&app, get("/things/p/s/translation?language=fr")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["message"], "write refused");
        assert_eq!(translator.calls(), 1);
    }
}
