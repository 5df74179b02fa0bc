use std::str::FromStr;

use circle_interface::{normalize_address, RawAmount};
use cosmwasm_std::{Decimal256, Uint256};
use rust_decimal::{prelude::ToPrimitive, Decimal as RustDecimal, RoundingStrategy};

pub const DEFAULT_DISPLAY_DECIMALS: u32 = 6;

/// Decimals assumed for a vault's underlying token when none are known.
pub const DEFAULT_TOKEN_DECIMALS: u32 = 18;

/// Plain ETH has no vault behind it.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Converts a vault's raw on-chain `pricePerShare` into the multiplier
/// `unwrap_shares` expects: `pps / 10^decimals`, or one for the zero address.
///
/// USDC vaults report 6 decimals; anything without a known value uses 18.
pub fn normalize_price_per_share(
    token_address: &str,
    price_per_share: RawAmount,
    token_decimals: Option<u32>,
) -> Decimal256 {
    if normalize_address(token_address) == ZERO_ADDRESS {
        return Decimal256::one();
    }

    let decimals = token_decimals.unwrap_or(DEFAULT_TOKEN_DECIMALS);
    Decimal256::from_atomics(Uint256::from(price_per_share.0), decimals)
        .unwrap_or(Decimal256::MAX)
}

/// Converts raw vault shares into underlying tokens: `amount / 10^decimals * price_per_share`.
///
/// The decimal shift is exact up to 18 decimals and truncates past that. The
/// multiplication saturates at `Decimal256::MAX`.
pub fn unwrap_shares(amount: RawAmount, decimals: u32, price_per_share: Decimal256) -> Decimal256 {
    // atomics from a Uint128 never exceed the Decimal256 range
    let shares =
        Decimal256::from_atomics(Uint256::from(amount.0), decimals).unwrap_or(Decimal256::MAX);

    let tokens = shares.saturating_mul(price_per_share);
    if tokens == Decimal256::MAX {
        log::warn!(
            "unwrapping {} shares at {} decimals and price {} saturated",
            amount,
            decimals,
            price_per_share
        );
    }

    tokens
}

pub fn decimal256_to_rust(x: Decimal256) -> Option<RustDecimal> {
    RustDecimal::from_str(&x.to_string()).ok()
}

/// Converts a fixed-point amount to a float for display, rounded half away
/// from zero to `decimal_places`.
pub fn to_display_amount(amount: Decimal256, decimal_places: u32) -> f64 {
    match decimal256_to_rust(amount) {
        Some(x) => x
            .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .unwrap_or_default(),
        // beyond rust_decimal's 96-bit range
        None => amount.to_string().parse().unwrap_or(f64::MAX),
    }
}
