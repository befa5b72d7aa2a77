/*!
Lambda bootstrap for the stream record logger
*/

use ddb_stream_logger::core::context::HandlerContext;
use ddb_stream_logger::function_handler;
use lambda_runtime::{Error, run, service_fn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because the log collector adds the ingestion time.
        .without_time()
        .init();

    let context = HandlerContext::new().await;
    let context_ref = &context;
    run(service_fn(move |event| async move {
        function_handler(context_ref, event).await
    }))
    .await
}
