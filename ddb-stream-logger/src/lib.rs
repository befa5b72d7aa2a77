/*!
Change-event notification handler for DynamoDB stream batches

Receives a batch of change records from the stream trigger and logs the
changed attribute values for each record, branching on whether the change
was an insertion, update, or deletion. All observable output is log lines;
nothing is persisted or forwarded.
*/

use ddb_stream_events::StreamBatch;
use lambda_runtime::{Error, LambdaEvent};
use tracing::debug;

use crate::core::{context::HandlerContext, dispatcher, sink::TracingSink};

pub mod core;

/// Entry point the Lambda runtime drives once per delivered batch.
///
/// Returns `Ok(())` for every well-formed batch; a batch that fails to
/// deserialize is rejected by the runtime before this handler runs.
pub async fn function_handler(
    context: &HandlerContext,
    event: LambdaEvent<StreamBatch>,
) -> Result<(), Error> {
    let (batch, invocation) = event.into_parts();
    debug!(
        request_id = %invocation.request_id,
        store_configured = context.store().is_some(),
        "handling stream invocation"
    );

    let mut sink = TracingSink;
    dispatcher::handle_batch(&batch, &mut sink);
    Ok(())
}
