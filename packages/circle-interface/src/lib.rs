mod amount;
mod distribution;
mod epoch;
mod error;

pub use amount::{decimal_from_f64, optional_decimal, RawAmount};
pub use distribution::{
    normalize_address, Claim, Distribution, DistributionJson, DistributionType, FixedGifts, Vault,
};
pub use epoch::{
    Circle, CircleUser, Epoch, EpochSnapshot, Membership, Organization, Profile, Recipient,
    TokenGift, ADMIN_ROLE,
};
pub use error::AmountError;

#[cfg(test)]
mod tests;
