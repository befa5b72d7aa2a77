/*!
Local replay harness: feeds a captured stream batch through the handler
*/

use clap::{Arg, Command};
use ddb_stream_events::StreamBatch;
use ddb_stream_logger::core::context::HandlerContext;
use ddb_stream_logger::function_handler;
use lambda_runtime::{Context, Error, LambdaEvent};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let matches = Command::new("replay")
        .about("Feed a captured DynamoDB stream batch through the record logger")
        .arg(
            Arg::new("batch")
                .short('b')
                .long("batch")
                .help("Path to a JSON file containing a stream batch")
                .value_name("PATH")
                .required(true),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("batch")
        .ok_or("missing --batch argument")?;

    let raw = std::fs::read_to_string(path)?;
    let batch: StreamBatch = serde_json::from_str(&raw)?;

    // No AWS environment locally, so the context carries no store client.
    let context = HandlerContext::without_store();
    let event = LambdaEvent::new(batch, Context::default());
    function_handler(&context, event).await
}
