/*
[INPUT]:  `result` payloads already extracted from the RPC envelope
[OUTPUT]: Domain records, or a DecodeError naming the offending path
[POS]:    Codec layer - two-phase decoding (serde_json::Value -> records)
[UPDATE]: When a method's payload shape changes
*/

//! Wire decoder.
//!
//! The API is not uniformly shaped: decimals travel as JSON strings, some
//! payloads are positional arrays, and timestamps are either formatted
//! strings or epoch integers depending on the method. Everything is first
//! parsed into a [`Value`] and then converted field by field here.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::http::DecodeError;
use crate::types::{
    AlgoType, Balance, GlobalStat, Location, MyOrder, Order, OrderType, ProviderExtendedHistory,
    ProviderExtendedHistoryPoint, ProviderExtendedPayment, ProviderExtendedStat,
    ProviderExtendedStats, ProviderPayment, ProviderStat, ProviderStats, ProviderWorker,
    ProviderWorkers,
};

type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Layout of `stats.provider.*` payment timestamps.
pub const PAYMENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width of a provider history bucket in seconds.
pub const HISTORY_BUCKET_SECS: i64 = 300;

const RAW_PREVIEW_MAX_CHARS: usize = 64;

fn preview(value: &Value) -> String {
    let raw = value.to_string();
    if raw.chars().count() <= RAW_PREVIEW_MAX_CHARS {
        return raw;
    }
    let mut short: String = raw.chars().take(RAW_PREVIEW_MAX_CHARS).collect();
    short.push_str("...");
    short
}

fn mismatch(path: &str, expected: &'static str, found: &Value) -> DecodeError {
    DecodeError::TypeMismatch {
        path: path.to_string(),
        expected,
        found: preview(found),
    }
}

fn child(path: &str, key: &str) -> String {
    format!("{path}.{key}")
}

fn item(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

// ### Primitive conversions

fn as_object<'a>(value: &'a Value, path: &str) -> DecodeResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| mismatch(path, "object", value))
}

fn as_array<'a>(value: &'a Value, path: &str) -> DecodeResult<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| mismatch(path, "array", value))
}

fn as_str<'a>(value: &'a Value, path: &str) -> DecodeResult<&'a str> {
    value.as_str().ok_or_else(|| mismatch(path, "string", value))
}

fn as_bool(value: &Value, path: &str) -> DecodeResult<bool> {
    value.as_bool().ok_or_else(|| mismatch(path, "boolean", value))
}

/// Non-negative integer; integral floats such as `3.0` are accepted.
fn as_u64(value: &Value, path: &str) -> DecodeResult<u64> {
    if let Some(number) = value.as_u64() {
        return Ok(number);
    }
    match value.as_f64() {
        Some(number) if number >= 0.0 && number.fract() == 0.0 && number <= u64::MAX as f64 => {
            Ok(number as u64)
        }
        _ => Err(mismatch(path, "non-negative integer", value)),
    }
}

/// Decimal carried as a JSON string. A bare JSON number is rejected.
fn numeric_string(value: &Value, path: &str) -> DecodeResult<f64> {
    let raw = value
        .as_str()
        .ok_or_else(|| mismatch(path, "numeric string", value))?;
    match raw.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(DecodeError::InvalidNumber {
            path: path.to_string(),
            raw: raw.to_string(),
        }),
    }
}

fn algo(value: &Value, path: &str) -> DecodeResult<AlgoType> {
    let code = as_u64(value, path)?;
    AlgoType::from_code(code).ok_or_else(|| DecodeError::UnknownVariant {
        path: path.to_string(),
        kind: "algorithm",
        code: code.to_string(),
    })
}

fn location(value: &Value, path: &str) -> DecodeResult<Location> {
    let code = as_u64(value, path)?;
    Location::from_code(code).ok_or_else(|| DecodeError::UnknownVariant {
        path: path.to_string(),
        kind: "location",
        code: code.to_string(),
    })
}

fn order_type(value: &Value, path: &str) -> DecodeResult<OrderType> {
    let code = as_u64(value, path)?;
    OrderType::from_code(code).ok_or_else(|| DecodeError::UnknownVariant {
        path: path.to_string(),
        kind: "order type",
        code: code.to_string(),
    })
}

/// `"YYYY-MM-DD HH:MM:SS"`, interpreted as UTC.
fn formatted_time(value: &Value, path: &str) -> DecodeResult<DateTime<Utc>> {
    let raw = value
        .as_str()
        .ok_or_else(|| mismatch(path, "date-time string", value))?;
    NaiveDateTime::parse_from_str(raw, PAYMENT_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| DecodeError::InvalidTimestamp {
            path: path.to_string(),
            raw: format!("{raw:?}"),
        })
}

fn epoch_secs(secs: i64, path: &str, raw: &Value) -> DecodeResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DecodeError::InvalidTimestamp {
        path: path.to_string(),
        raw: preview(raw),
    })
}

/// Unix epoch seconds carried as a JSON integer.
fn epoch_time(value: &Value, path: &str) -> DecodeResult<DateTime<Utc>> {
    let secs = value
        .as_i64()
        .ok_or_else(|| mismatch(path, "epoch integer", value))?;
    epoch_secs(secs, path, value)
}

/// Accepted / rejected speed map shared by the positional payloads.
///
/// Both keys are optional and default to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Speeds {
    accepted: f64,
    rejected: f64,
}

impl Speeds {
    fn is_idle(&self) -> bool {
        self.accepted == 0.0 && self.rejected == 0.0
    }
}

fn speeds(value: &Value, path: &str) -> DecodeResult<Speeds> {
    let fields = Fields::new(value, path)?;
    Ok(Speeds {
        accepted: fields.decimal_or_zero("a")?,
        rejected: fields.decimal_or_zero("rs")?,
    })
}

// ### Keyed objects

/// Field access over a JSON object with path-aware errors.
///
/// An absent key and an explicit `null` are treated the same way.
pub(crate) struct Fields<'a> {
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(value: &'a Value, path: &str) -> DecodeResult<Self> {
        Ok(Self {
            path: path.to_string(),
            map: as_object(value, path)?,
        })
    }

    fn path_of(&self, key: &str) -> String {
        child(&self.path, key)
    }

    fn optional(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    fn required(&self, key: &str) -> DecodeResult<&'a Value> {
        self.optional(key).ok_or_else(|| DecodeError::Missing {
            path: self.path_of(key),
        })
    }

    fn decimal(&self, key: &str) -> DecodeResult<f64> {
        numeric_string(self.required(key)?, &self.path_of(key))
    }

    fn decimal_or_zero(&self, key: &str) -> DecodeResult<f64> {
        self.optional(key)
            .map_or(Ok(0.0), |value| numeric_string(value, &self.path_of(key)))
    }

    fn string(&self, key: &str) -> DecodeResult<String> {
        as_str(self.required(key)?, &self.path_of(key)).map(str::to_string)
    }

    fn string_or_empty(&self, key: &str) -> DecodeResult<String> {
        self.optional(key).map_or(Ok(String::new()), |value| {
            as_str(value, &self.path_of(key)).map(str::to_string)
        })
    }

    fn u64(&self, key: &str) -> DecodeResult<u64> {
        as_u64(self.required(key)?, &self.path_of(key))
    }

    fn u64_or_zero(&self, key: &str) -> DecodeResult<u64> {
        self.optional(key)
            .map_or(Ok(0), |value| as_u64(value, &self.path_of(key)))
    }

    fn port_or_zero(&self, key: &str) -> DecodeResult<u16> {
        let path = self.path_of(key);
        let port = self.u64_or_zero(key)?;
        u16::try_from(port).map_err(|_| DecodeError::TypeMismatch {
            path,
            expected: "port number",
            found: port.to_string(),
        })
    }

    fn bool_or_false(&self, key: &str) -> DecodeResult<bool> {
        self.optional(key)
            .map_or(Ok(false), |value| as_bool(value, &self.path_of(key)))
    }

    fn algo(&self, key: &str) -> DecodeResult<AlgoType> {
        algo(self.required(key)?, &self.path_of(key))
    }

    fn optional_algo(&self, key: &str) -> DecodeResult<Option<AlgoType>> {
        self.optional(key)
            .map(|value| algo(value, &self.path_of(key)))
            .transpose()
    }

    fn order_type_or_standard(&self, key: &str) -> DecodeResult<OrderType> {
        self.optional(key).map_or(Ok(OrderType::Standard), |value| {
            order_type(value, &self.path_of(key))
        })
    }

    /// Decode every element of an array field; an absent field is an empty list.
    fn list<T>(&self, key: &str, decode: fn(&Value, &str) -> DecodeResult<T>) -> DecodeResult<Vec<T>> {
        let Some(value) = self.optional(key) else {
            return Ok(Vec::new());
        };
        let path = self.path_of(key);
        as_array(value, &path)?
            .iter()
            .enumerate()
            .map(|(index, element)| decode(element, &item(&path, index)))
            .collect()
    }
}

// ### Positional arrays

/// Wire type expected at one position of a positional array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Text,
    NumericText,
    Number,
    Object,
}

impl Slot {
    fn expected(self) -> &'static str {
        match self {
            Slot::Text => "string",
            Slot::NumericText => "numeric string",
            Slot::Number => "number",
            Slot::Object => "object",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            Slot::Text | Slot::NumericText => value.is_string(),
            Slot::Number => value.is_number(),
            Slot::Object => value.is_object(),
        }
    }
}

/// Ordered `(field name, slot)` table describing a positional payload.
pub(crate) type Schema = [(&'static str, Slot)];

pub(crate) const WORKER_SCHEMA: &Schema = &[
    ("name", Slot::Text),
    ("speeds", Slot::Object),
    ("connected", Slot::Number),
    ("xnsub", Slot::Number),
    ("difficulty", Slot::NumericText),
    ("location", Slot::Number),
];

pub(crate) const CURRENT_STAT_SCHEMA: &Schema =
    &[("speeds", Slot::Object), ("balance", Slot::NumericText)];

pub(crate) const HISTORY_BUCKET_SCHEMA: &Schema = &[
    ("bucket", Slot::Number),
    ("speeds", Slot::Object),
    ("balance", Slot::NumericText),
];

/// A positional array that has been checked against its schema.
///
/// Trailing elements beyond the schema are ignored.
pub(crate) struct Positions<'a> {
    items: &'a [Value],
    paths: Vec<String>,
}

impl<'a> Positions<'a> {
    pub(crate) fn new(value: &'a Value, path: &str, schema: &Schema) -> DecodeResult<Self> {
        let items = as_array(value, path)?;
        if items.len() < schema.len() {
            return Err(DecodeError::ShortArray {
                path: path.to_string(),
                expected: schema.len(),
                found: items.len(),
            });
        }

        let mut paths = Vec::with_capacity(schema.len());
        for (index, (name, slot)) in schema.iter().enumerate() {
            let slot_path = format!("{} ({name})", item(path, index));
            if !slot.accepts(&items[index]) {
                return Err(mismatch(&slot_path, slot.expected(), &items[index]));
            }
            paths.push(slot_path);
        }

        Ok(Self { items, paths })
    }

    fn at(&self, index: usize) -> (&'a Value, &str) {
        (&self.items[index], &self.paths[index])
    }

    fn string(&self, index: usize) -> DecodeResult<String> {
        let (value, path) = self.at(index);
        as_str(value, path).map(str::to_string)
    }

    fn decimal(&self, index: usize) -> DecodeResult<f64> {
        let (value, path) = self.at(index);
        numeric_string(value, path)
    }

    fn u64(&self, index: usize) -> DecodeResult<u64> {
        let (value, path) = self.at(index);
        as_u64(value, path)
    }

    fn speeds(&self, index: usize) -> DecodeResult<Speeds> {
        let (value, path) = self.at(index);
        speeds(value, path)
    }

    fn location(&self, index: usize) -> DecodeResult<Location> {
        let (value, path) = self.at(index);
        location(value, path)
    }
}

// ### Records: direct keyed decode

pub fn balance(value: &Value, path: &str) -> DecodeResult<Balance> {
    let fields = Fields::new(value, path)?;
    Ok(Balance {
        confirmed: fields.decimal("balance_confirmed")?,
        pending: fields.decimal("balance_pending")?,
    })
}

pub fn order(value: &Value, path: &str) -> DecodeResult<Order> {
    let fields = Fields::new(value, path)?;
    Ok(Order {
        id: fields.u64("id")?,
        order_type: fields.order_type_or_standard("type")?,
        algo: fields.algo("algo")?,
        price: fields.decimal_or_zero("price")?,
        alive: fields.bool_or_false("alive")?,
        limit_speed: fields.decimal_or_zero("limit_speed")?,
        accepted_speed: fields.decimal_or_zero("accepted_speed")?,
        workers: fields.u64_or_zero("workers")?,
    })
}

pub fn my_order(value: &Value, path: &str) -> DecodeResult<MyOrder> {
    let fields = Fields::new(value, path)?;
    Ok(MyOrder {
        id: fields.u64("id")?,
        order_type: fields.order_type_or_standard("type")?,
        algo: fields.algo("algo")?,
        price: fields.decimal_or_zero("price")?,
        btc_avail: fields.decimal_or_zero("btc_avail")?,
        btc_paid: fields.decimal_or_zero("btc_paid")?,
        pool_host: fields.string_or_empty("pool_host")?,
        pool_port: fields.port_or_zero("pool_port")?,
        pool_user: fields.string_or_empty("pool_user")?,
        pool_pass: fields.string_or_empty("pool_pass")?,
        alive: fields.bool_or_false("alive")?,
        limit_speed: fields.decimal_or_zero("limit_speed")?,
        accepted_speed: fields.decimal_or_zero("accepted_speed")?,
        workers: fields.u64_or_zero("workers")?,
        end: fields.u64_or_zero("end")?,
    })
}

pub fn global_stat(value: &Value, path: &str) -> DecodeResult<GlobalStat> {
    let fields = Fields::new(value, path)?;
    Ok(GlobalStat {
        algo: fields.algo("algo")?,
        profitability_above_btc: fields.decimal_or_zero("profitability_above_btc")?,
        profitability_above_ltc: fields.decimal_or_zero("profitability_above_ltc")?,
        price: fields.decimal_or_zero("price")?,
        profitability_btc: fields.decimal_or_zero("profitability_btc")?,
        profitability_ltc: fields.decimal_or_zero("profitability_ltc")?,
        speed: fields.decimal_or_zero("speed")?,
    })
}

pub fn provider_stat(value: &Value, path: &str) -> DecodeResult<ProviderStat> {
    let fields = Fields::new(value, path)?;
    Ok(ProviderStat {
        algo: fields.algo("algo")?,
        balance: fields.decimal_or_zero("balance")?,
        accepted_speed: fields.decimal_or_zero("accepted_speed")?,
        rejected_speed: fields.decimal_or_zero("rejected_speed")?,
    })
}

// ### Records: keyed decode with a timestamp field

pub fn provider_payment(value: &Value, path: &str) -> DecodeResult<ProviderPayment> {
    let fields = Fields::new(value, path)?;
    Ok(ProviderPayment {
        amount: fields.decimal("amount")?,
        fee: fields.decimal_or_zero("fee")?,
        txid: fields.string_or_empty("TXID")?,
        time: formatted_time(fields.required("time")?, &fields.path_of("time"))?,
    })
}

pub fn provider_extended_payment(value: &Value, path: &str) -> DecodeResult<ProviderExtendedPayment> {
    let fields = Fields::new(value, path)?;
    Ok(ProviderExtendedPayment {
        amount: fields.decimal("amount")?,
        fee: fields.decimal_or_zero("fee")?,
        txid: fields.string_or_empty("TXID")?,
        time: epoch_time(fields.required("time")?, &fields.path_of("time"))?,
    })
}

// ### Records: positional-array decode

pub fn provider_extended_stat(value: &Value, path: &str) -> DecodeResult<ProviderExtendedStat> {
    let fields = Fields::new(value, path)?;
    let data = Positions::new(
        fields.required("data")?,
        &fields.path_of("data"),
        CURRENT_STAT_SCHEMA,
    )?;
    let speeds = data.speeds(0)?;

    Ok(ProviderExtendedStat {
        algo: fields.algo("algo")?,
        suffix: fields.string_or_empty("suffix")?,
        name: fields.string_or_empty("name")?,
        profitability: fields.decimal_or_zero("profitability")?,
        unpaid: data.decimal(1)?,
        accepted_speed: speeds.accepted,
        rejected_speed: speeds.rejected,
    })
}

/// Decode one history bucket; idle buckets come back as `None`.
fn history_bucket(
    value: &Value,
    path: &str,
) -> DecodeResult<Option<(DateTime<Utc>, ProviderExtendedHistoryPoint)>> {
    let bucket = Positions::new(value, path, HISTORY_BUCKET_SCHEMA)?;
    let (raw_index, index_path) = bucket.at(0);
    let index = bucket.u64(0)?;
    let secs = i64::try_from(index)
        .ok()
        .and_then(|index| index.checked_mul(HISTORY_BUCKET_SECS))
        .ok_or_else(|| DecodeError::InvalidTimestamp {
            path: index_path.to_string(),
            raw: preview(raw_index),
        })?;
    let start = epoch_secs(secs, index_path, raw_index)?;

    let speeds = bucket.speeds(1)?;
    let unpaid = bucket.decimal(2)?;
    if speeds.is_idle() {
        return Ok(None);
    }

    Ok(Some((
        start,
        ProviderExtendedHistoryPoint {
            unpaid,
            accepted_speed: speeds.accepted,
            rejected_speed: speeds.rejected,
        },
    )))
}

pub fn provider_extended_history(value: &Value, path: &str) -> DecodeResult<ProviderExtendedHistory> {
    let fields = Fields::new(value, path)?;
    let data_path = fields.path_of("data");
    let mut data = BTreeMap::new();
    for (index, element) in as_array(fields.required("data")?, &data_path)?
        .iter()
        .enumerate()
    {
        if let Some((start, point)) = history_bucket(element, &item(&data_path, index))? {
            data.insert(start, point);
        }
    }

    Ok(ProviderExtendedHistory {
        algo: fields.algo("algo")?,
        data,
    })
}

pub fn provider_worker(value: &Value, path: &str) -> DecodeResult<ProviderWorker> {
    let worker = Positions::new(value, path, WORKER_SCHEMA)?;
    let speeds = worker.speeds(1)?;

    Ok(ProviderWorker {
        name: worker.string(0)?,
        accepted_speed: speeds.accepted,
        rejected_speed: speeds.rejected,
        connected: worker.u64(2)?,
        xnsub_enabled: worker.at(3).0.as_f64() == Some(1.0),
        difficulty: worker.decimal(4)?,
        location: worker.location(5)?,
    })
}

// ### Method results

pub fn version_result(result: &Value) -> DecodeResult<String> {
    Fields::new(result, "result")?.string("api_version")
}

pub fn balance_result(result: &Value) -> DecodeResult<Balance> {
    balance(result, "result")
}

/// `result.success` message of the order-management methods.
pub fn success_result(result: &Value) -> DecodeResult<String> {
    Fields::new(result, "result")?.string("success")
}

pub fn orders_result(result: &Value) -> DecodeResult<Vec<Order>> {
    Fields::new(result, "result")?.list("orders", order)
}

pub fn my_orders_result(result: &Value) -> DecodeResult<Vec<MyOrder>> {
    Fields::new(result, "result")?.list("orders", my_order)
}

pub fn global_stats_result(result: &Value) -> DecodeResult<Vec<GlobalStat>> {
    Fields::new(result, "result")?.list("stats", global_stat)
}

pub fn provider_stats_result(result: &Value) -> DecodeResult<ProviderStats> {
    let fields = Fields::new(result, "result")?;
    Ok(ProviderStats {
        stats: fields.list("stats", provider_stat)?,
        payments: fields.list("payments", provider_payment)?,
    })
}

pub fn provider_extended_stats_result(result: &Value) -> DecodeResult<ProviderExtendedStats> {
    let fields = Fields::new(result, "result")?;
    Ok(ProviderExtendedStats {
        current: fields.list("current", provider_extended_stat)?,
        past: fields.list("past", provider_extended_history)?,
        payments: fields.list("payments", provider_extended_payment)?,
    })
}

pub fn provider_workers_result(result: &Value) -> DecodeResult<ProviderWorkers> {
    let fields = Fields::new(result, "result")?;
    Ok(ProviderWorkers {
        address: fields.string_or_empty("addr")?,
        algo: fields.optional_algo("algo")?,
        workers: fields.list("workers", provider_worker)?,
    })
}
