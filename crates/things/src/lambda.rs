//! Lambda adapter for the per-route functions.
//!
//! API Gateway invokes one function per route. Each function reads the path
//! parameters, query string, and body from the proxy event and runs the same
//! request logic as the local axum handlers.

use lambda_http::{run as run_lambda, service_fn, Body, Error, Request, RequestExt, Response};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use things_core::item::ItemError;

use crate::{
    config::Config,
    handlers::{
        items::{create_item_impl, list_items_impl, update_item_impl},
        translation::get_translation_impl,
        AppError,
    },
    state::AppState,
};

/// The route a Lambda function serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// GET /things/{pk}
    GetItems,
    /// POST /things
    CreateItem,
    /// PUT /things/{pk}/{sk}
    UpdateItem,
    /// GET /things/{pk}/{sk}/translation
    GetTranslation,
}

/// Initialize JSON logging for CloudWatch.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "things=info".into()),
        )
        .with_ansi(false)
        .without_time()
        .init();
}

/// Run a Lambda function serving `route` against DynamoDB and Amazon Translate.
pub async fn run(route: Route) -> Result<(), Error> {
    init_tracing();

    let config = Config::from_env();
    let state = AppState::from_aws(&config).await;

    tracing::info!(?route, table = %config.table_name, "Starting Lambda function");

    run_lambda(service_fn(|event: Request| {
        function_handler(&state, route, event)
    }))
    .await
}

/// Handle one API Gateway proxy event.
pub async fn function_handler(
    state: &AppState,
    route: Route,
    event: Request,
) -> Result<Response<Body>, Error> {
    let path = event.path_parameters();
    let query = event.query_string_parameters();

    match route {
        Route::GetItems => {
            let result =
                list_items_impl(state, path.first("pk"), query.first("filterAttr")).await;
            respond(result)
        }
        Route::CreateItem => respond(create_item_impl(state, event.body().as_ref()).await),
        Route::UpdateItem => {
            let result = update_item_impl(
                state,
                path.first("pk"),
                path.first("sk"),
                event.body().as_ref(),
            )
            .await;
            respond(result)
        }
        Route::GetTranslation => {
            let result = get_translation_impl(
                state,
                path.first("pk"),
                path.first("sk"),
                query.first("language"),
            )
            .await;
            respond(result)
        }
    }
}

/// Render a handler result as a JSON response.
fn respond<T: Serialize>(result: Result<T, ItemError>) -> Result<Response<Body>, Error> {
    match result {
        Ok(value) => json_response(200, &value),
        Err(err) => {
            let err = AppError(err);
            err.log();
            json_response(err.status_code().as_u16(), &err.body())
        }
    }
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(body)?;
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::Text(body))?)
}
