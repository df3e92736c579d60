/*
[INPUT]:  Order parameters and API id/key credentials
[OUTPUT]: Server confirmation messages
[POS]:    HTTP layer - order management endpoints (require API key)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::codec::decode;
use crate::http::{NicehashClient, Result};
use crate::types::{AlgoType, ApiMethod, Location, NewOrderRequest};

impl NicehashClient {
    /// Place a new order
    ///
    /// GET /api?method=orders.create&algo=..&price=..&amount=..&pool_host=..
    pub async fn order_create(&self, order: &NewOrderRequest) -> Result<String> {
        let params = self.signed(ApiMethod::OrdersCreate).new_order(order);
        self.call(params, decode::success_result).await
    }

    /// Add funds to an existing order
    ///
    /// GET /api?method=orders.refill&order={order}&amount={amount}
    pub async fn order_refill(
        &self,
        algo: AlgoType,
        location: Location,
        order: u64,
        amount: f64,
    ) -> Result<String> {
        let params = self
            .signed(ApiMethod::OrdersRefill)
            .algo(algo)
            .location(location)
            .order(order)
            .amount(amount);
        self.call(params, decode::success_result).await
    }

    /// Remove an order
    ///
    /// GET /api?method=orders.remove&order={order}
    pub async fn order_remove(&self, algo: AlgoType, location: Location, order: u64) -> Result<String> {
        let params = self
            .signed(ApiMethod::OrdersRemove)
            .algo(algo)
            .location(location)
            .order(order);
        self.call(params, decode::success_result).await
    }

    /// Set a new (higher) price
    ///
    /// GET /api?method=orders.set.price&order={order}&price={price}
    pub async fn order_set_price(
        &self,
        algo: AlgoType,
        location: Location,
        order: u64,
        price: f64,
    ) -> Result<String> {
        let params = self
            .signed(ApiMethod::OrdersSetPrice)
            .algo(algo)
            .location(location)
            .order(order)
            .price(price);
        self.call(params, decode::success_result).await
    }

    /// Decrease the price by the exchange's fixed step
    ///
    /// GET /api?method=orders.set.price.decrease&order={order}
    pub async fn order_set_price_decrease(
        &self,
        algo: AlgoType,
        location: Location,
        order: u64,
    ) -> Result<String> {
        let params = self
            .signed(ApiMethod::OrdersSetPriceDecrease)
            .algo(algo)
            .location(location)
            .order(order);
        self.call(params, decode::success_result).await
    }

    /// Change the speed limit; `0` removes the limit
    ///
    /// GET /api?method=orders.set.price.limit&order={order}&limit={limit}
    pub async fn order_set_limit(
        &self,
        algo: AlgoType,
        location: Location,
        order: u64,
        limit: f64,
    ) -> Result<String> {
        let params = self
            .signed(ApiMethod::OrdersSetPriceLimit)
            .algo(algo)
            .location(location)
            .order(order)
            .limit(limit);
        self.call(params, decode::success_result).await
    }
}
