/*
[INPUT]:  API id/key credentials
[OUTPUT]: Account data (balance, own orders)
[POS]:    HTTP layer - user data endpoints (require API key)
[UPDATE]: When adding new user endpoints or changing query parameters
*/

use crate::codec::decode;
use crate::http::{NicehashClient, Result};
use crate::types::{AlgoType, ApiMethod, Balance, Location, MyOrder};

impl NicehashClient {
    /// Query confirmed and pending balance
    ///
    /// GET /api?method=balance&id={id}&key={key}
    pub async fn get_balance(&self) -> Result<Balance> {
        self.call(self.signed(ApiMethod::Balance), decode::balance_result)
            .await
    }

    /// Query the caller's own orders, including pool details
    ///
    /// GET /api?method=orders.get&my=true&id={id}&key={key}&algo={algo}&location={location}
    pub async fn get_my_orders(
        &self,
        algo: impl Into<Option<AlgoType>>,
        location: impl Into<Option<Location>>,
    ) -> Result<Vec<MyOrder>> {
        let params = self
            .signed(ApiMethod::OrdersGet)
            .algo(algo)
            .location(location)
            .my();
        self.call(params, decode::my_orders_result).await
    }
}
