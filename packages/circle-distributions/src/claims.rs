use circle_interface::{FixedGifts, RawAmount};
use cosmwasm_std::Decimal256;

use crate::util::{to_display_amount, unwrap_shares};

/// A member's view of the epoch's gift circle and fixed payment distributions.
///
/// For a COMBINED distribution both sides come from the same record, and
/// `circle_fixed_gifts` carries its fixed gifts so they are folded into the
/// circle claim.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClaimsInput<'a> {
    pub address: &'a str,
    pub fixed_dist_decimals: Option<u32>,
    pub fixed_dist_price_per_share: Option<Decimal256>,
    pub fixed_gifts: Option<&'a FixedGifts>,
    pub circle_dist_decimals: Option<u32>,
    pub circle_dist_price_per_share: Option<Decimal256>,
    pub circle_dist_claim_amount: Option<RawAmount>,
    pub circle_fixed_gifts: Option<&'a FixedGifts>,
}

/// Claimed token amounts for each distribution leg.
///
/// `None` means the leg had nothing to convert, either because the
/// distribution is missing or because the member has no entry in it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClaimedAmounts {
    pub circle: Option<Decimal256>,
    pub fixed: Option<Decimal256>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayClaims {
    pub circle_claimed: f64,
    pub fixed_payment: f64,
}

impl ClaimedAmounts {
    pub fn circle_claimed(&self) -> Decimal256 {
        self.circle.unwrap_or_else(Decimal256::zero)
    }

    pub fn fixed_payment(&self) -> Decimal256 {
        self.fixed.unwrap_or_else(Decimal256::zero)
    }

    pub fn to_display(&self, decimal_places: u32) -> DisplayClaims {
        DisplayClaims {
            circle_claimed: to_display_amount(self.circle_claimed(), decimal_places),
            fixed_payment: to_display_amount(self.fixed_payment(), decimal_places),
        }
    }
}

fn unwrap_leg(
    amount: Option<RawAmount>,
    decimals: Option<u32>,
    price_per_share: Option<Decimal256>,
) -> Option<Decimal256> {
    Some(unwrap_shares(amount?, decimals?, price_per_share?))
}

pub fn claims_unwrapped_amount(input: &ClaimsInput) -> ClaimedAmounts {
    let fixed = unwrap_leg(
        input.fixed_gifts.and_then(|gifts| gifts.get(input.address)),
        input.fixed_dist_decimals,
        input.fixed_dist_price_per_share,
    );

    let circle_base = unwrap_leg(
        input.circle_dist_claim_amount,
        input.circle_dist_decimals,
        input.circle_dist_price_per_share,
    );

    // COMBINED shares the circle distribution's vault and price
    let circle_fixed = unwrap_leg(
        input
            .circle_fixed_gifts
            .and_then(|gifts| gifts.get(input.address)),
        input.circle_dist_decimals,
        input.circle_dist_price_per_share,
    );

    let circle = match (circle_base, circle_fixed) {
        (None, None) => None,
        (base, combined) => Some(
            base.unwrap_or_else(Decimal256::zero)
                .saturating_add(combined.unwrap_or_else(Decimal256::zero)),
        ),
    };

    if fixed.is_none() {
        log::debug!("no fixed payment to unwrap for {}", input.address);
    }
    if circle.is_none() {
        log::debug!("no gift circle claim to unwrap for {}", input.address);
    }

    ClaimedAmounts { circle, fixed }
}
