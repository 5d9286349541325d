use lambda_http::Error;
use things::lambda::{run, Route};

#[tokio::main]
async fn main() -> Result<(), Error> {
    run(Route::UpdateItem).await
}
