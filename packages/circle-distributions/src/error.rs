use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DistributionError {
    #[error("Epoch not found")]
    EpochNotFound {},

    #[error("Epoch is missing its circle")]
    CircleNotFound {},

    #[error("You are not an admin of this circle.")]
    NotAdmin {},

    #[error("This epoch has not ended yet.")]
    EpochNotEnded {},
}
