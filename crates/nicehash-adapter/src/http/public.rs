/*
[INPUT]:  Algorithm/location filters and provider addresses
[OUTPUT]: Version, public order book and market/provider statistics
[POS]:    HTTP layer - public endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::codec::decode;
use crate::http::{NicehashClient, Result};
use crate::types::{
    AlgoType, ApiMethod, GlobalStat, Location, Order, Params, ProviderExtendedStats,
    ProviderStats, ProviderWorkers,
};

impl NicehashClient {
    /// Query the API version tag
    ///
    /// GET /api
    pub async fn get_version(&self) -> Result<String> {
        self.call(Params::default(), decode::version_result).await
    }

    /// Query the public order book
    ///
    /// GET /api?method=orders.get&algo={algo}&location={location}
    pub async fn get_orders(
        &self,
        algo: impl Into<Option<AlgoType>>,
        location: impl Into<Option<Location>>,
    ) -> Result<Vec<Order>> {
        let params = Params::new(ApiMethod::OrdersGet)
            .algo(algo)
            .location(location);
        self.call(params, decode::orders_result).await
    }

    /// Current profitability and speed of every algorithm
    ///
    /// GET /api?method=stats.global.current
    pub async fn get_stats_global_current(&self) -> Result<Vec<GlobalStat>> {
        self.call(
            Params::new(ApiMethod::StatsGlobalCurrent),
            decode::global_stats_result,
        )
        .await
    }

    /// Average profitability and speed over the last 24 hours
    ///
    /// GET /api?method=stats.global.24h
    pub async fn get_stats_global_day(&self) -> Result<Vec<GlobalStat>> {
        self.call(
            Params::new(ApiMethod::StatsGlobalDay),
            decode::global_stats_result,
        )
        .await
    }

    /// Balances, speeds and payments of a provider address
    ///
    /// GET /api?method=stats.provider&addr={addr}
    pub async fn get_stats_provider(&self, addr: &str) -> Result<ProviderStats> {
        let params = Params::new(ApiMethod::StatsProvider).addr(addr);
        self.call(params, decode::provider_stats_result).await
    }

    /// Extended provider statistics including 300 second history buckets
    ///
    /// GET /api?method=stats.provider.ex&addr={addr}
    pub async fn get_stats_provider_ex(&self, addr: &str) -> Result<ProviderExtendedStats> {
        let params = Params::new(ApiMethod::StatsProviderEx).addr(addr);
        self.call(params, decode::provider_extended_stats_result).await
    }

    /// Workers connected under a provider address for one algorithm
    ///
    /// GET /api?method=stats.provider.workers&addr={addr}&algo={algo}
    pub async fn get_stats_provider_workers(
        &self,
        addr: &str,
        algo: impl Into<Option<AlgoType>>,
    ) -> Result<ProviderWorkers> {
        let params = Params::new(ApiMethod::StatsProviderWorkers)
            .addr(addr)
            .algo(algo);
        self.call(params, decode::provider_workers_result).await
    }
}
