/*!
Per-process handler context
*/

use aws_sdk_dynamodb::Client;
use tracing::info;

/// Long-lived invocation context holding the DynamoDB client handle.
///
/// Constructed once at process start and passed explicitly to the handler.
/// This core only logs stream records, so the client is never exercised for
/// reads or writes; it exists so table access can be added without changing
/// the handler's shape.
pub struct HandlerContext {
    store: Option<Client>,
}

impl HandlerContext {
    /// Build the context with a store client from the ambient AWS
    /// environment (region, credentials).
    pub async fn new() -> Self {
        let config = aws_config::load_from_env().await;
        info!("Store client configured for region {:?}", config.region());
        Self {
            store: Some(Client::new(&config)),
        }
    }

    /// Context without a store client, for local replay and tests where no
    /// AWS environment exists.
    pub fn without_store() -> Self {
        Self { store: None }
    }

    pub fn store(&self) -> Option<&Client> {
        self.store.as_ref()
    }
}
