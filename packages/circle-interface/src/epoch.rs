use cosmwasm_std::Decimal256;
use serde::{Deserialize, Serialize};

use crate::{optional_decimal, Distribution, Vault};

pub const ADMIN_ROLE: u8 = 1;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub id: u64,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A member of the selected circle.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CircleUser {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub role: Option<u8>,
    #[serde(default, with = "optional_decimal")]
    pub fixed_payment_amount: Option<Decimal256>,
    #[serde(default)]
    pub profile: Option<Profile>,
}

impl CircleUser {
    pub fn profile_id(&self) -> Option<u64> {
        self.profile.as_ref().map(|profile| profile.id)
    }

    pub fn avatar(&self) -> Option<String> {
        self.profile.as_ref().and_then(|profile| profile.avatar.clone())
    }
}

/// The viewing user's own membership in the epoch's circle.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Membership {
    #[serde(default)]
    pub role: Option<u8>,
}

impl Membership {
    pub fn is_admin(&self) -> bool {
        self.role == Some(ADMIN_ROLE)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Recipient {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub profile: Option<Profile>,
}

/// GIVE sent to a member during the epoch. `recipient` is null once the
/// receiving user has been deleted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TokenGift {
    pub recipient_id: u64,
    #[serde(default)]
    pub recipient: Option<Recipient>,
    pub tokens: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Organization {
    #[serde(default)]
    pub vaults: Vec<Vault>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Circle {
    pub id: u64,
    #[serde(default)]
    pub token_name: String,
    #[serde(default)]
    pub fixed_payment_token_type: Option<String>,
    #[serde(default)]
    pub fixed_payment_vault_id: Option<u64>,
    #[serde(default)]
    pub users: Vec<Membership>,
    #[serde(default)]
    pub organization: Organization,
}

impl Circle {
    pub fn vault(&self, id: u64) -> Option<&Vault> {
        self.organization
            .vaults
            .iter()
            .find(|vault| vault.id == Some(id))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Epoch {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub ended: bool,
    #[serde(default)]
    pub token_gifts: Option<Vec<TokenGift>>,
    #[serde(default)]
    pub circle: Option<Circle>,
    #[serde(default)]
    pub distributions: Vec<Distribution>,
}

impl Epoch {
    pub fn token_gifts(&self) -> &[TokenGift] {
        self.token_gifts.as_deref().unwrap_or_default()
    }
}

/// Everything the distributions page loads for one epoch.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct EpochSnapshot {
    #[serde(default)]
    pub epoch: Option<Epoch>,
    #[serde(default)]
    pub circle_users: Vec<CircleUser>,
    #[serde(default)]
    pub gift_vault_id: Option<u64>,
}
