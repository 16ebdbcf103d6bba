use async_trait::async_trait;

use crate::core::models::{ResultSet, SearchQuery};

/// Looks up games for a query. Implementations never fail: when the real
/// lookup cannot produce results they substitute placeholder records.
#[async_trait]
pub trait GameSearchProvider: Send + Sync {
    async fn lookup(&self, query: &SearchQuery) -> ResultSet;
}
