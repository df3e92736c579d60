/*
[INPUT]:  Typed call parameters (Params)
[OUTPUT]: Ordered query-string pairs and the encoded query string
[POS]:    Codec layer - parameter encoder
[UPDATE]: When a method gains a query parameter or an encoding rule changes
*/

use url::form_urlencoded;

use crate::http::{NicehashError, Result};
use crate::types::Params;

/// Render a float the way the API expects: shortest round-tripping
/// decimal, no exponent, no padding zeros (`2.1`, `1`, `0.00000001`).
pub fn format_decimal(name: &'static str, value: f64) -> Result<String> {
    if !value.is_finite() {
        return Err(NicehashError::InvalidParameter {
            name,
            reason: format!("{value} is not a finite number"),
        });
    }
    Ok(value.to_string())
}

impl Params {
    /// Query pairs in wire order, `method` first.
    ///
    /// Unset fields and empty credentials are omitted; `my` is only sent
    /// when set.
    pub fn to_query_pairs(&self) -> Result<Vec<(&'static str, String)>> {
        let mut pairs = Vec::new();

        if let Some(method) = self.method {
            pairs.push(("method", method.as_str().to_string()));
        }
        if !self.id.is_empty() {
            pairs.push(("id", self.id.clone()));
        }
        if !self.key.is_empty() {
            pairs.push(("key", self.key.clone()));
        }
        if let Some(addr) = &self.addr {
            pairs.push(("addr", addr.clone()));
        }
        if let Some(algo) = self.algo {
            pairs.push(("algo", algo.code().to_string()));
        }
        if let Some(location) = self.location {
            pairs.push(("location", location.code().to_string()));
        }
        if self.my {
            pairs.push(("my", "true".to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", format_decimal("limit", limit)?));
        }
        if let Some(price) = self.price {
            pairs.push(("price", format_decimal("price", price)?));
        }
        if let Some(amount) = self.amount {
            pairs.push(("amount", format_decimal("amount", amount)?));
        }
        if let Some(host) = &self.pool_host {
            pairs.push(("pool_host", host.clone()));
        }
        if let Some(port) = self.pool_port {
            pairs.push(("pool_port", port.to_string()));
        }
        if let Some(user) = &self.pool_user {
            pairs.push(("pool_user", user.clone()));
        }
        if let Some(pass) = &self.pool_pass {
            pairs.push(("pool_pass", pass.clone()));
        }
        if let Some(alive) = self.alive {
            pairs.push(("alive", alive.to_string()));
        }
        if let Some(code) = &self.code {
            pairs.push(("code", code.clone()));
        }

        Ok(pairs)
    }

    /// Percent-encoded query string (without the leading `?`).
    pub fn to_query_string(&self) -> Result<String> {
        let pairs = self.to_query_pairs()?;
        Ok(form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AlgoType, ApiMethod, Location, NewOrderRequest};
    use rstest::rstest;

    fn value_of<'a>(pairs: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn test_method_comes_first() {
        let pairs = Params::new(ApiMethod::OrdersRemove)
            .credentials("FAKEID", "FAKEKEY")
            .algo(AlgoType::Scrypt)
            .location(Location::NiceHash)
            .order(123)
            .to_query_pairs()
            .expect("pairs");

        let keys: Vec<_> = pairs.iter().map(|(name, _)| *name).collect();
        assert_eq!(keys, ["method", "id", "key", "algo", "location", "order"]);
        assert_eq!(value_of(&pairs, "method"), Some("orders.remove"));
    }

    #[test]
    fn test_every_algorithm_encodes_its_code() {
        for algo in AlgoType::ALL {
            let pairs = Params::new(ApiMethod::OrdersGet)
                .algo(algo)
                .to_query_pairs()
                .expect("pairs");
            assert_eq!(value_of(&pairs, "algo"), Some(algo.code().to_string().as_str()));
        }
    }

    #[rstest]
    #[case(Location::NiceHash, "0")]
    #[case(Location::WestHash, "1")]
    fn test_location_encodes_its_code(#[case] location: Location, #[case] expected: &str) {
        let pairs = Params::new(ApiMethod::OrdersGet)
            .location(location)
            .to_query_pairs()
            .expect("pairs");
        assert_eq!(value_of(&pairs, "location"), Some(expected));
    }

    #[test]
    fn test_unset_enums_are_omitted() {
        let pairs = Params::new(ApiMethod::StatsGlobalCurrent)
            .algo(Option::<AlgoType>::None)
            .location(Option::<Location>::None)
            .to_query_pairs()
            .expect("pairs");
        assert_eq!(pairs, vec![("method", "stats.global.current".to_string())]);
    }

    #[test]
    fn test_empty_credentials_are_omitted() {
        let pairs = Params::new(ApiMethod::Balance)
            .credentials("", "")
            .to_query_pairs()
            .expect("pairs");
        assert_eq!(value_of(&pairs, "id"), None);
        assert_eq!(value_of(&pairs, "key"), None);
    }

    #[test]
    fn test_my_flag_only_when_set() {
        let public = Params::new(ApiMethod::OrdersGet).to_query_pairs().expect("pairs");
        assert_eq!(value_of(&public, "my"), None);

        let mine = Params::new(ApiMethod::OrdersGet).my().to_query_pairs().expect("pairs");
        assert_eq!(value_of(&mine, "my"), Some("true"));
    }

    #[rstest]
    #[case(1.0, "1")]
    #[case(2.1, "2.1")]
    #[case(0.01, "0.01")]
    #[case(0.0505, "0.0505")]
    #[case(0.00000001, "0.00000001")]
    #[case(1e21, "1000000000000000000000")]
    #[case(0.0, "0")]
    fn test_format_decimal_is_minimal(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_decimal("price", value).expect("decimal"), expected);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_non_finite_decimal_is_rejected(#[case] value: f64) {
        let err = Params::new(ApiMethod::OrdersSetPrice)
            .price(value)
            .to_query_pairs()
            .unwrap_err();
        assert!(matches!(err, NicehashError::InvalidParameter { name: "price", .. }));
    }

    #[test]
    fn test_new_order_fields() {
        let order = NewOrderRequest {
            algo: AlgoType::X11,
            price: 0.5,
            amount: 0.01,
            pool_host: "testpool.com".to_string(),
            pool_port: 3333,
            pool_user: "worker".to_string(),
            pool_pass: "x".to_string(),
            alive: false,
            limit_speed: None,
            code: None,
        };
        let pairs = Params::new(ApiMethod::OrdersCreate)
            .new_order(&order)
            .to_query_pairs()
            .expect("pairs");

        let keys: Vec<_> = pairs.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            keys,
            [
                "method", "algo", "price", "amount", "pool_host", "pool_port", "pool_user",
                "pool_pass", "alive"
            ]
        );
        assert_eq!(value_of(&pairs, "algo"), Some("3"));
        assert_eq!(value_of(&pairs, "alive"), Some("false"));
        assert_eq!(value_of(&pairs, "pool_port"), Some("3333"));
    }

    #[test]
    fn test_query_string_percent_encodes_values() {
        let query = Params::new(ApiMethod::StatsProvider)
            .addr("a b&c+d")
            .to_query_string()
            .expect("query");
        assert_eq!(query, "method=stats.provider&addr=a+b%26c%2Bd");
    }

    #[test]
    fn test_version_call_has_empty_query() {
        assert_eq!(Params::default().to_query_string().expect("query"), "");
    }
}
