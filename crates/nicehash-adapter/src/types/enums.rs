/*
[INPUT]:  Protocol integer codes for algorithms, locations and order kinds
[OUTPUT]: Closed Rust enums with code conversion and display names
[POS]:    Data layer - enumerations shared by encoder and decoder
[UPDATE]: When the exchange adds an algorithm or a remote method
*/

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mining algorithm traded on the exchange.
///
/// The wire form is the variant's position in this list, starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlgoType {
    Scrypt,
    SHA256,
    ScryptNf,
    X11,
    X13,
    Keccak,
    X15,
    Nist5,
    NeoScrypt,
    Lyra2RE,
    WhirlpoolX,
    Qubit,
    Quark,
    Axiom,
    Lyra2REv2,
    ScryptJaneNf16,
    Blake256r8,
    Blake256r14,
    Blake256r8vnl,
    Hodl,
    DaggerHashimoto,
    Decred,
    CryptoNight,
    Lbry,
    Equihash,
    Pascal,
    X11Gost,
    Sia,
    Blake2s,
}

impl AlgoType {
    pub const ALL: [AlgoType; 29] = [
        AlgoType::Scrypt,
        AlgoType::SHA256,
        AlgoType::ScryptNf,
        AlgoType::X11,
        AlgoType::X13,
        AlgoType::Keccak,
        AlgoType::X15,
        AlgoType::Nist5,
        AlgoType::NeoScrypt,
        AlgoType::Lyra2RE,
        AlgoType::WhirlpoolX,
        AlgoType::Qubit,
        AlgoType::Quark,
        AlgoType::Axiom,
        AlgoType::Lyra2REv2,
        AlgoType::ScryptJaneNf16,
        AlgoType::Blake256r8,
        AlgoType::Blake256r14,
        AlgoType::Blake256r8vnl,
        AlgoType::Hodl,
        AlgoType::DaggerHashimoto,
        AlgoType::Decred,
        AlgoType::CryptoNight,
        AlgoType::Lbry,
        AlgoType::Equihash,
        AlgoType::Pascal,
        AlgoType::X11Gost,
        AlgoType::Sia,
        AlgoType::Blake2s,
    ];

    /// Integer sent as the `algo` query parameter.
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn name(self) -> &'static str {
        match self {
            AlgoType::Scrypt => "Scrypt",
            AlgoType::SHA256 => "SHA256",
            AlgoType::ScryptNf => "ScryptNf",
            AlgoType::X11 => "X11",
            AlgoType::X13 => "X13",
            AlgoType::Keccak => "Keccak",
            AlgoType::X15 => "X15",
            AlgoType::Nist5 => "Nist5",
            AlgoType::NeoScrypt => "NeoScrypt",
            AlgoType::Lyra2RE => "Lyra2RE",
            AlgoType::WhirlpoolX => "WhirlpoolX",
            AlgoType::Qubit => "Qubit",
            AlgoType::Quark => "Quark",
            AlgoType::Axiom => "Axiom",
            AlgoType::Lyra2REv2 => "Lyra2REv2",
            AlgoType::ScryptJaneNf16 => "ScryptJaneNf16",
            AlgoType::Blake256r8 => "Blake256r8",
            AlgoType::Blake256r14 => "Blake256r14",
            AlgoType::Blake256r8vnl => "Blake256r8vnl",
            AlgoType::Hodl => "Hodl",
            AlgoType::DaggerHashimoto => "DaggerHashimoto",
            AlgoType::Decred => "Decred",
            AlgoType::CryptoNight => "CryptoNight",
            AlgoType::Lbry => "Lbry",
            AlgoType::Equihash => "Equihash",
            AlgoType::Pascal => "Pascal",
            AlgoType::X11Gost => "X11Gost",
            AlgoType::Sia => "Sia",
            AlgoType::Blake2s => "Blake2s",
        }
    }
}

impl fmt::Display for AlgoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Stratum region an order is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    NiceHash,
    WestHash,
}

impl Location {
    pub const ALL: [Location; 2] = [Location::NiceHash, Location::WestHash];

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(Location::NiceHash),
            1 => Some(Location::WestHash),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Location::NiceHash => "NiceHash",
            Location::WestHash => "WestHash",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    Standard,
    Fixed,
}

impl OrderType {
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(OrderType::Standard),
            1 => Some(OrderType::Fixed),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OrderType::Standard => "Standard",
            OrderType::Fixed => "Fixed",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Remote procedure names accepted in the `method` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    Balance,
    OrdersGet,
    OrdersCreate,
    OrdersRefill,
    OrdersRemove,
    OrdersSetPrice,
    OrdersSetPriceDecrease,
    OrdersSetPriceLimit,
    StatsGlobalCurrent,
    StatsGlobalDay,
    StatsProvider,
    StatsProviderEx,
    StatsProviderWorkers,
}

impl ApiMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            ApiMethod::Balance => "balance",
            ApiMethod::OrdersGet => "orders.get",
            ApiMethod::OrdersCreate => "orders.create",
            ApiMethod::OrdersRefill => "orders.refill",
            ApiMethod::OrdersRemove => "orders.remove",
            ApiMethod::OrdersSetPrice => "orders.set.price",
            ApiMethod::OrdersSetPriceDecrease => "orders.set.price.decrease",
            ApiMethod::OrdersSetPriceLimit => "orders.set.price.limit",
            ApiMethod::StatsGlobalCurrent => "stats.global.current",
            ApiMethod::StatsGlobalDay => "stats.global.24h",
            ApiMethod::StatsProvider => "stats.provider",
            ApiMethod::StatsProviderEx => "stats.provider.ex",
            ApiMethod::StatsProviderWorkers => "stats.provider.workers",
        }
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_algo_codes_follow_declaration_order() {
        for (index, algo) in AlgoType::ALL.iter().enumerate() {
            assert_eq!(algo.code() as usize, index);
            assert_eq!(AlgoType::from_code(index as u64), Some(*algo));
        }
        assert_eq!(AlgoType::Blake2s.code(), 28);
    }

    #[rstest]
    #[case(29)]
    #[case(255)]
    #[case(u64::MAX)]
    fn test_algo_from_unknown_code(#[case] code: u64) {
        assert_eq!(AlgoType::from_code(code), None);
    }

    #[rstest]
    #[case(0, Some(Location::NiceHash))]
    #[case(1, Some(Location::WestHash))]
    #[case(2, None)]
    fn test_location_from_code(#[case] code: u64, #[case] expected: Option<Location>) {
        assert_eq!(Location::from_code(code), expected);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(AlgoType::DaggerHashimoto.to_string(), "DaggerHashimoto");
        assert_eq!(Location::WestHash.to_string(), "WestHash");
        assert_eq!(OrderType::Fixed.to_string(), "Fixed");
        assert_eq!(ApiMethod::StatsGlobalDay.to_string(), "stats.global.24h");
    }
}
