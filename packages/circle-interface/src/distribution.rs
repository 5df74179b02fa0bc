use std::collections::BTreeMap;

use cosmwasm_std::Decimal256;
use serde::{Deserialize, Serialize};

use crate::{optional_decimal, AmountError, RawAmount};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum DistributionType {
    Gift,
    Fixed,
    Combined,
}

impl DistributionType {
    /// Gift and combined distributions pay out peer allocations.
    pub fn is_gift_circle(&self) -> bool {
        matches!(self, DistributionType::Gift | DistributionType::Combined)
    }

    /// Fixed and combined distributions pay out flat per-member amounts.
    pub fn is_fixed(&self) -> bool {
        matches!(self, DistributionType::Fixed | DistributionType::Combined)
    }

    pub fn is_combined(&self) -> bool {
        matches!(self, DistributionType::Combined)
    }
}

impl TryFrom<u8> for DistributionType {
    type Error = AmountError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(DistributionType::Gift),
            2 => Ok(DistributionType::Fixed),
            3 => Ok(DistributionType::Combined),
            _ => Err(AmountError::UnknownDistributionType { code }),
        }
    }
}

impl From<DistributionType> for u8 {
    fn from(distribution_type: DistributionType) -> Self {
        match distribution_type {
            DistributionType::Gift => 1,
            DistributionType::Fixed => 2,
            DistributionType::Combined => 3,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Vault {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub decimals: Option<u32>,
}

impl Vault {
    pub fn display_symbol(&self) -> String {
        self.symbol.clone().unwrap_or_default()
    }
}

/// Wallet addresses are compared case-insensitively.
pub fn normalize_address(address: &str) -> String {
    address.trim().to_ascii_lowercase()
}

/// Raw fixed payment amounts keyed by member address.
///
/// Keys are stored normalized, so two spellings of one address are an error.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(try_from = "BTreeMap<String, RawAmount>")]
pub struct FixedGifts(BTreeMap<String, RawAmount>);

impl FixedGifts {
    pub fn get(&self, address: &str) -> Option<RawAmount> {
        self.0.get(&normalize_address(address)).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<BTreeMap<String, RawAmount>> for FixedGifts {
    type Error = AmountError;

    fn try_from(gifts: BTreeMap<String, RawAmount>) -> Result<Self, Self::Error> {
        let mut normalized = BTreeMap::new();
        for (address, amount) in gifts {
            let address = normalize_address(&address);
            if normalized.contains_key(&address) {
                return Err(AmountError::DuplicateAddress { address });
            }
            normalized.insert(address, amount);
        }

        Ok(FixedGifts(normalized))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DistributionJson {
    #[serde(rename = "fixedGifts", default)]
    pub fixed_gifts: Option<FixedGifts>,
}

/// The amount a member has claimed so far, as of their last claim.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Claim {
    pub profile_id: u64,
    pub new_amount: RawAmount,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Distribution {
    #[serde(default)]
    pub id: Option<u64>,
    pub distribution_type: DistributionType,
    #[serde(default)]
    pub vault: Vault,
    #[serde(rename = "pricePerShare", default, with = "optional_decimal")]
    pub price_per_share: Option<Decimal256>,
    #[serde(default)]
    pub distribution_json: DistributionJson,
    #[serde(default)]
    pub claims: Vec<Claim>,
}

impl Distribution {
    pub fn decimals(&self) -> Option<u32> {
        self.vault.decimals
    }

    pub fn fixed_gifts(&self) -> Option<&FixedGifts> {
        self.distribution_json.fixed_gifts.as_ref()
    }

    pub fn claim_for(&self, profile_id: Option<u64>) -> Option<RawAmount> {
        let profile_id = profile_id?;
        self.claims
            .iter()
            .find(|claim| claim.profile_id == profile_id)
            .map(|claim| claim.new_amount)
    }

    pub fn has_claim_for(&self, profile_id: Option<u64>) -> bool {
        self.claim_for(profile_id).is_some()
    }
}
