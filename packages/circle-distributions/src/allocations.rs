use circle_interface::{Circle, CircleUser, Distribution, Epoch, Membership, TokenGift, Vault};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{ensure, Decimal256};
use itertools::Itertools;

use crate::{claims_unwrapped_amount, ClaimsInput, DistributionError};

/// The distribution paying out peer allocations, if one was made.
pub fn circle_distribution(distributions: &[Distribution]) -> Option<&Distribution> {
    distributions
        .iter()
        .find(|distribution| distribution.distribution_type.is_gift_circle())
}

/// The distribution paying out fixed amounts, if one was made.
pub fn fixed_distribution(distributions: &[Distribution]) -> Option<&Distribution> {
    distributions
        .iter()
        .find(|distribution| distribution.distribution_type.is_fixed())
}

/// Checks that the viewing user may distribute for the epoch.
pub fn check_epoch(epoch: &Epoch) -> Result<&Circle, DistributionError> {
    let circle = epoch
        .circle
        .as_ref()
        .ok_or(DistributionError::CircleNotFound {})?;

    ensure!(
        circle.users.first().is_some_and(Membership::is_admin),
        DistributionError::NotAdmin {}
    );
    ensure!(epoch.ended, DistributionError::EpochNotEnded {});

    Ok(circle)
}

#[cw_serde]
pub struct MemberAllocation {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub avatar: Option<String>,
    pub fixed_payment_amount: Decimal256,
    pub fixed_payment_claimed: Decimal256,
    pub givers: u64,
    pub received: u64,
    pub circle_claimed: Decimal256,
    pub combined_claimed: Decimal256,
}

#[cw_serde]
pub struct ReceivedAmount {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub received: u64,
}

pub struct EpochAllocations<'a> {
    pub circle: &'a Circle,
    /// Gifts whose recipient still exists.
    pub gifts: Vec<&'a TokenGift>,
    pub total_give: u64,
    pub circle_dist: Option<&'a Distribution>,
    pub fixed_dist: Option<&'a Distribution>,
    pub token_name: String,
    pub fixed_token_name: String,
    pub members: Vec<MemberAllocation>,
    pub received_amounts: Vec<ReceivedAmount>,
}

impl<'a> EpochAllocations<'a> {
    pub fn new(
        epoch: &'a Epoch,
        circle_users: &[CircleUser],
        gift_vault_id: Option<u64>,
    ) -> Result<Self, DistributionError> {
        let circle = epoch
            .circle
            .as_ref()
            .ok_or(DistributionError::CircleNotFound {})?;

        let gifts: Vec<&TokenGift> = epoch
            .token_gifts()
            .iter()
            .filter(|gift| gift.recipient.is_some())
            .collect();
        let total_give = total_tokens(gifts.iter().copied());

        let circle_dist = circle_distribution(&epoch.distributions);
        let fixed_dist = fixed_distribution(&epoch.distributions);

        let members: Vec<MemberAllocation> = circle_users
            .iter()
            .filter(|user| is_allocated(epoch, circle, fixed_dist, user))
            .map(|user| member_allocation(epoch, circle_dist, fixed_dist, user))
            .collect();

        let received_amounts: Vec<ReceivedAmount> = gifts
            .iter()
            .filter_map(|gift| gift.recipient.as_ref())
            .unique_by(|recipient| recipient.id)
            .map(|recipient| ReceivedAmount {
                id: recipient.id,
                name: recipient.name.clone(),
                address: recipient.address.clone(),
                received: total_tokens(epoch.token_gifts().iter().filter(|gift| {
                    gift.recipient.as_ref().map(|r| r.id) == Some(recipient.id)
                })),
            })
            .collect();

        let gift_vault = gift_vault_id.and_then(|id| circle.vault(id));
        let fixed_vault = circle.fixed_payment_vault_id.and_then(|id| circle.vault(id));

        Ok(EpochAllocations {
            circle,
            gifts,
            total_give,
            circle_dist,
            fixed_dist,
            token_name: token_name(circle_dist, gift_vault),
            fixed_token_name: token_name(fixed_dist, fixed_vault),
            members,
            received_amounts,
        })
    }

    /// Whether one COMBINED record serves as both distributions.
    pub fn is_combined(&self) -> bool {
        is_same_combined(self.circle_dist, self.fixed_dist)
    }
}

/// GIVE totals clamp at `u64::MAX` instead of overflowing.
fn total_tokens<'g>(gifts: impl IntoIterator<Item = &'g TokenGift>) -> u64 {
    gifts
        .into_iter()
        .fold(0u64, |total, gift| total.saturating_add(gift.tokens))
}

fn token_name(distribution: Option<&Distribution>, configured: Option<&Vault>) -> String {
    distribution
        .map(|distribution| &distribution.vault)
        .or(configured)
        .map(Vault::display_symbol)
        .unwrap_or_default()
}

fn is_same_combined(circle_dist: Option<&Distribution>, fixed_dist: Option<&Distribution>) -> bool {
    match (circle_dist, fixed_dist) {
        (Some(circle), Some(fixed)) => {
            std::ptr::eq(circle, fixed) && circle.distribution_type.is_combined()
        }
        _ => false,
    }
}

fn is_allocated(
    epoch: &Epoch,
    circle: &Circle,
    fixed_dist: Option<&Distribution>,
    user: &CircleUser,
) -> bool {
    let has_fixed_claim =
        fixed_dist.is_some_and(|distribution| distribution.has_claim_for(user.profile_id()));

    let has_fixed_payment = circle
        .fixed_payment_token_type
        .as_deref()
        .is_some_and(|token_type| !token_type.is_empty())
        && user
            .fixed_payment_amount
            .is_some_and(|amount| !amount.is_zero());

    let has_gifts = epoch.token_gifts().iter().any(|gift| {
        gift.tokens > 0
            && gift
                .recipient
                .as_ref()
                .is_some_and(|recipient| recipient.id == user.id)
    });

    has_fixed_claim || has_fixed_payment || has_gifts
}

fn member_allocation(
    epoch: &Epoch,
    circle_dist: Option<&Distribution>,
    fixed_dist: Option<&Distribution>,
    user: &CircleUser,
) -> MemberAllocation {
    let received_gifts: Vec<&TokenGift> = epoch
        .token_gifts()
        .iter()
        .filter(|gift| gift.recipient_id == user.id)
        .collect();

    let claims = claims_unwrapped_amount(&ClaimsInput {
        address: &user.address,
        fixed_dist_decimals: fixed_dist.and_then(Distribution::decimals),
        fixed_dist_price_per_share: fixed_dist.and_then(|d| d.price_per_share),
        fixed_gifts: fixed_dist.and_then(Distribution::fixed_gifts),
        circle_dist_decimals: circle_dist.and_then(Distribution::decimals),
        circle_dist_price_per_share: circle_dist.and_then(|d| d.price_per_share),
        circle_dist_claim_amount: circle_dist.and_then(|d| d.claim_for(user.profile_id())),
        circle_fixed_gifts: circle_dist
            .filter(|d| d.distribution_type.is_combined())
            .and_then(Distribution::fixed_gifts),
    });

    let circle_claimed = claims.circle_claimed();
    let fixed_payment_claimed = claims.fixed_payment();
    // the combined record's fixed gifts are already part of circle_claimed
    let combined_claimed = if is_same_combined(circle_dist, fixed_dist) {
        circle_claimed
    } else {
        circle_claimed.saturating_add(fixed_payment_claimed)
    };

    MemberAllocation {
        id: user.id,
        name: user.name.clone(),
        address: user.address.clone(),
        avatar: user.avatar(),
        fixed_payment_amount: user.fixed_payment_amount.unwrap_or_else(Decimal256::zero),
        fixed_payment_claimed,
        givers: received_gifts.len() as u64,
        received: total_tokens(received_gifts.iter().copied()),
        circle_claimed,
        combined_claimed,
    }
}
