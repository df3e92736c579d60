/*
[INPUT]:  Decoded response payloads
[OUTPUT]: Typed Rust records for every resource the API returns
[POS]:    Data layer - domain records produced by the wire decoder
[UPDATE]: When API schema changes or new records added
*/

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use super::enums::{AlgoType, Location, OrderType};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Version {
    pub api_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Balance {
    pub confirmed: f64,
    pub pending: f64,
}

/// Public order book entry returned by `orders.get`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: u64,
    pub order_type: OrderType,
    pub algo: AlgoType,
    pub price: f64,
    pub alive: bool,
    pub limit_speed: f64,
    pub accepted_speed: f64,
    pub workers: u64,
}

/// Order owned by the authenticated caller, including pool connection details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MyOrder {
    pub id: u64,
    pub order_type: OrderType,
    pub algo: AlgoType,
    pub price: f64,
    pub btc_avail: f64,
    pub btc_paid: f64,
    pub pool_host: String,
    pub pool_port: u16,
    pub pool_user: String,
    pub pool_pass: String,
    pub alive: bool,
    pub limit_speed: f64,
    pub accepted_speed: f64,
    pub workers: u64,
    /// Expiry as reported by the server, in milliseconds since the epoch.
    pub end: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalStat {
    pub algo: AlgoType,
    pub profitability_above_btc: f64,
    pub profitability_above_ltc: f64,
    pub price: f64,
    pub profitability_btc: f64,
    pub profitability_ltc: f64,
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderStat {
    pub algo: AlgoType,
    pub balance: f64,
    pub accepted_speed: f64,
    pub rejected_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderPayment {
    pub amount: f64,
    pub fee: f64,
    pub txid: String,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderExtendedStat {
    pub algo: AlgoType,
    pub suffix: String,
    pub name: String,
    pub profitability: f64,
    pub unpaid: f64,
    pub accepted_speed: f64,
    pub rejected_speed: f64,
}

/// One 300 second bucket of provider history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderExtendedHistoryPoint {
    pub unpaid: f64,
    pub accepted_speed: f64,
    pub rejected_speed: f64,
}

/// Provider history for one algorithm, keyed by bucket start time.
///
/// Buckets with neither accepted nor rejected speed are not present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderExtendedHistory {
    pub algo: AlgoType,
    pub data: BTreeMap<DateTime<Utc>, ProviderExtendedHistoryPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderExtendedPayment {
    pub amount: f64,
    pub fee: f64,
    pub txid: String,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderWorker {
    pub name: String,
    pub accepted_speed: f64,
    pub rejected_speed: f64,
    pub connected: u64,
    pub xnsub_enabled: bool,
    pub difficulty: f64,
    pub location: Location,
}
