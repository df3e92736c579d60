/*
[INPUT]:  Caller-supplied call arguments
[OUTPUT]: Typed request values consumed by the parameter encoder
[POS]:    Data layer - request types (never decoded from the wire)
[UPDATE]: When a method gains a query parameter
*/

use super::enums::{AlgoType, ApiMethod, Location};

/// Order to place with `orders.create`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderRequest {
    pub algo: AlgoType,
    pub price: f64,
    pub amount: f64,
    pub pool_host: String,
    pub pool_port: u16,
    pub pool_user: String,
    pub pool_pass: String,
    pub alive: bool,
    /// Speed limit; `None` leaves the order unlimited.
    pub limit_speed: Option<f64>,
    pub code: Option<String>,
}

/// Query parameters of a single call.
///
/// Every `None` field and every empty credential is left out of the query
/// string, so one value type serves all methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    pub method: Option<ApiMethod>,
    pub id: String,
    pub key: String,
    pub addr: Option<String>,
    pub algo: Option<AlgoType>,
    pub location: Option<Location>,
    pub my: bool,
    pub order: Option<u64>,
    pub limit: Option<f64>,
    pub price: Option<f64>,
    pub amount: Option<f64>,
    pub pool_host: Option<String>,
    pub pool_port: Option<u16>,
    pub pool_user: Option<String>,
    pub pool_pass: Option<String>,
    pub alive: Option<bool>,
    pub code: Option<String>,
}

impl Params {
    pub fn new(method: ApiMethod) -> Self {
        Self {
            method: Some(method),
            ..Self::default()
        }
    }

    pub fn credentials(mut self, id: &str, key: &str) -> Self {
        self.id = id.to_string();
        self.key = key.to_string();
        self
    }

    pub fn addr(mut self, addr: &str) -> Self {
        self.addr = Some(addr.to_string());
        self
    }

    pub fn algo(mut self, algo: impl Into<Option<AlgoType>>) -> Self {
        self.algo = algo.into();
        self
    }

    pub fn location(mut self, location: impl Into<Option<Location>>) -> Self {
        self.location = location.into();
        self
    }

    pub fn my(mut self) -> Self {
        self.my = true;
        self
    }

    pub fn order(mut self, order: u64) -> Self {
        self.order = Some(order);
        self
    }

    pub fn limit(mut self, limit: f64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Fill the order-creation slots from a [`NewOrderRequest`].
    pub fn new_order(mut self, order: &NewOrderRequest) -> Self {
        self.algo = Some(order.algo);
        self.price = Some(order.price);
        self.amount = Some(order.amount);
        self.limit = order.limit_speed;
        self.pool_host = Some(order.pool_host.clone());
        self.pool_port = Some(order.pool_port);
        self.pool_user = Some(order.pool_user.clone());
        self.pool_pass = Some(order.pool_pass.clone());
        self.alive = Some(order.alive);
        self.code = order.code.clone();
        self
    }
}
