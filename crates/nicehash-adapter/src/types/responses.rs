/*
[INPUT]:  Multi-part result objects (several collections per call)
[OUTPUT]: Aggregate response structs
[POS]:    Data layer - results of the provider statistics methods
[UPDATE]: When a method starts returning additional collections
*/

use serde::Serialize;

use super::enums::AlgoType;
use super::models::{
    ProviderExtendedHistory, ProviderExtendedPayment, ProviderExtendedStat, ProviderPayment,
    ProviderStat, ProviderWorker,
};

/// Result of `stats.provider`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderStats {
    pub stats: Vec<ProviderStat>,
    pub payments: Vec<ProviderPayment>,
}

/// Result of `stats.provider.ex`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderExtendedStats {
    pub current: Vec<ProviderExtendedStat>,
    pub past: Vec<ProviderExtendedHistory>,
    pub payments: Vec<ProviderExtendedPayment>,
}

/// Result of `stats.provider.workers`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderWorkers {
    pub address: String,
    pub algo: Option<AlgoType>,
    pub workers: Vec<ProviderWorker>,
}
