use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AmountError {
    #[error("Amount is empty")]
    Empty {},

    #[error("Invalid amount: {value}")]
    InvalidAmount { value: String },

    #[error("Amount does not fit in 128 bits: {value}")]
    Overflow { value: String },

    #[error("Amount cannot be negative: {value}")]
    Negative { value: String },

    #[error("Invalid decimal: {value}")]
    InvalidDecimal { value: String },

    #[error("Address appears more than once: {address}")]
    DuplicateAddress { address: String },

    #[error("Unknown distribution type: {code}")]
    UnknownDistributionType { code: u8 },
}
