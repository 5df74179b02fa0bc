use circle_interface::EpochSnapshot;
use cosmwasm_schema::cw_serde;

use crate::{check_epoch, DistributionError, EpochAllocations, MemberAllocation, ReceivedAmount};

#[cw_serde]
pub struct EpochReport {
    pub epoch_number: Option<u64>,
    pub start_date: String,
    pub end_date: String,
    /// Why the epoch cannot be distributed, if it cannot.
    pub notice: Option<String>,
    pub combined: bool,
    pub total_give: u64,
    pub give_token_name: String,
    pub token_name: String,
    pub fixed_token_name: String,
    pub members: Vec<MemberAllocation>,
    pub received_amounts: Vec<ReceivedAmount>,
}

impl EpochReport {
    pub fn from_snapshot(snapshot: &EpochSnapshot) -> Result<Self, DistributionError> {
        let epoch = snapshot
            .epoch
            .as_ref()
            .filter(|epoch| epoch.id.is_some())
            .ok_or(DistributionError::EpochNotFound {})?;

        let allocations =
            EpochAllocations::new(epoch, &snapshot.circle_users, snapshot.gift_vault_id)?;
        let notice = check_epoch(epoch).err().map(|e| e.to_string());
        let combined = allocations.is_combined();

        if let Some(notice) = &notice {
            log::info!("epoch {:?} cannot be distributed: {}", epoch.id, notice);
        }

        let (members, received_amounts) = match notice {
            Some(_) => (vec![], vec![]),
            None => (allocations.members, allocations.received_amounts),
        };

        Ok(EpochReport {
            epoch_number: epoch.number,
            start_date: epoch.start_date.clone(),
            end_date: epoch.end_date.clone(),
            notice,
            combined,
            total_give: allocations.total_give,
            give_token_name: allocations.circle.token_name.clone(),
            token_name: allocations.token_name,
            fixed_token_name: allocations.fixed_token_name,
            members,
            received_amounts,
        })
    }
}
