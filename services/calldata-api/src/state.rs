use calldata_core::{ServiceConfig, TransactionStore};
use calldata_crypto::RecordBuilder;

/// Shared application state handed to every handler.
pub struct AppState {
    pub config: ServiceConfig,
    pub store: TransactionStore,
    pub builder: RecordBuilder,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        AppState {
            config,
            store: TransactionStore::new(),
            builder: RecordBuilder::new(),
        }
    }
}
