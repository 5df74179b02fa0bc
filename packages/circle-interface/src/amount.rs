use std::{fmt, num::IntErrorKind, str::FromStr};

use cosmwasm_std::{Decimal256, Uint128};
use rust_decimal::{prelude::FromPrimitive, Decimal as RustDecimal};
use serde::{
    de::{self, IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::AmountError;

/// Largest integer an `f64` holds without losing precision.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// An amount in a vault's raw share units, before the decimal shift.
///
/// The circle API hands these out in several shapes depending on who wrote
/// them: plain JSON numbers, decimal strings, `0x` hex strings, and serialized
/// ethers `BigNumber` objects. All of them land here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RawAmount(pub Uint128);

impl RawAmount {
    pub const fn new(value: u128) -> Self {
        RawAmount(Uint128::new(value))
    }

    pub const fn zero() -> Self {
        RawAmount(Uint128::zero())
    }

    pub fn u128(&self) -> u128 {
        self.0.u128()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<u128> for RawAmount {
    fn from(value: u128) -> Self {
        RawAmount::new(value)
    }
}

impl From<Uint128> for RawAmount {
    fn from(value: Uint128) -> Self {
        RawAmount(value)
    }
}

impl From<RawAmount> for Uint128 {
    fn from(value: RawAmount) -> Self {
        value.0
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RawAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountError::Empty {});
        }
        if s.starts_with('-') {
            return Err(AmountError::Negative {
                value: s.to_string(),
            });
        }

        let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u128::from_str_radix(hex, 16),
            None => s.parse::<u128>(),
        };

        parsed.map(RawAmount::new).map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => AmountError::Overflow {
                value: s.to_string(),
            },
            IntErrorKind::Empty => AmountError::Empty {},
            _ => AmountError::InvalidAmount {
                value: s.to_string(),
            },
        })
    }
}

impl Serialize for RawAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for RawAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawAmountVisitor)
    }
}

struct RawAmountVisitor;

impl<'de> Visitor<'de> for RawAmountVisitor {
    type Value = RawAmount;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an unsigned integer, a decimal or hex string, or a BigNumber object")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(RawAmount::new(v.into()))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(RawAmount::new(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(|v| RawAmount::new(v.into()))
            .map_err(|_| E::custom(AmountError::Negative {
                value: v.to_string(),
            }))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v < 0.0 {
            return Err(E::custom(AmountError::Negative {
                value: v.to_string(),
            }));
        }
        // Whole numbers past 2^53 have already lost digits in transit
        if v.fract() != 0.0 || !v.is_finite() || v > MAX_SAFE_INTEGER {
            return Err(E::custom(AmountError::InvalidAmount {
                value: v.to_string(),
            }));
        }

        Ok(RawAmount::new(v as u128))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut hex: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                // {"type":"BigNumber","hex":"0x.."} and {"_hex":"0x..","_isBigNumber":true}
                "hex" | "_hex" => {
                    if hex.is_some() {
                        return Err(de::Error::duplicate_field("hex"));
                    }
                    hex = Some(map.next_value()?);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let hex = hex.ok_or_else(|| de::Error::missing_field("hex"))?;
        hex.parse().map_err(de::Error::custom)
    }
}

/// Converts a binary float into a fixed-point decimal.
///
/// The float goes through `rust_decimal` first and is rounded to the 18
/// fractional digits `Decimal256` can hold, so representation noise past that
/// point is dropped instead of failing the parse.
pub fn decimal_from_f64(value: f64) -> Result<Decimal256, AmountError> {
    if !value.is_finite() {
        return Err(AmountError::InvalidDecimal {
            value: value.to_string(),
        });
    }
    if value < 0.0 {
        return Err(AmountError::Negative {
            value: value.to_string(),
        });
    }
    if value == 0.0 {
        return Ok(Decimal256::zero());
    }

    let rounded = RustDecimal::from_f64(value)
        .ok_or_else(|| AmountError::InvalidDecimal {
            value: value.to_string(),
        })?
        .round_dp(18)
        .normalize();

    Decimal256::from_str(&rounded.to_string()).map_err(|_| AmountError::InvalidDecimal {
        value: value.to_string(),
    })
}

fn decimal_from_str(value: &str) -> Result<Decimal256, AmountError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AmountError::Empty {});
    }
    if value.starts_with('-') {
        return Err(AmountError::Negative {
            value: value.to_string(),
        });
    }

    Decimal256::from_str(value).map_err(|_| AmountError::InvalidDecimal {
        value: value.to_string(),
    })
}

/// Serde adapter for optional decimals that may arrive as JSON numbers or
/// strings, e.g. `pricePerShare` and `fixed_payment_amount`.
pub mod optional_decimal {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<Decimal256>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(decimal) => serializer.serialize_some(decimal),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Decimal256>, D::Error> {
        deserializer.deserialize_option(OptionalDecimalVisitor)
    }

    struct OptionalDecimalVisitor;

    impl<'de> Visitor<'de> for OptionalDecimalVisitor {
        type Value = Option<Decimal256>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an optional non-negative decimal number or string")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(DecimalVisitor).map(Some)
        }
    }

    struct DecimalVisitor;

    impl<'de> Visitor<'de> for DecimalVisitor {
        type Value = Decimal256;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative decimal number or string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            decimal_from_str(&v.to_string()).map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            decimal_from_str(&v.to_string()).map_err(E::custom)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            decimal_from_f64(v).map_err(E::custom)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            decimal_from_str(v).map_err(E::custom)
        }
    }
}
