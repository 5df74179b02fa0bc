mod allocations;
mod claims;
mod error;
mod report;
mod util;

pub use allocations::{
    check_epoch, circle_distribution, fixed_distribution, EpochAllocations, MemberAllocation,
    ReceivedAmount,
};
pub use claims::{claims_unwrapped_amount, ClaimedAmounts, ClaimsInput, DisplayClaims};
pub use error::DistributionError;
pub use report::EpochReport;
pub use util::{
    normalize_price_per_share, to_display_amount, unwrap_shares, DEFAULT_DISPLAY_DECIMALS,
    DEFAULT_TOKEN_DECIMALS, ZERO_ADDRESS,
};
