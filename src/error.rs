use thiserror::Error;

/// Validation failures raised while constructing option symbols and orders.
///
/// Every variant aborts construction of the offending value; no partially
/// validated symbol or builder is ever returned.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("contract type must be one of 'C', 'CALL', 'P' or 'PUT', got '{0}'")]
    InvalidContractType(String),

    #[error(
        "expiration date must follow format \
         [Two digit year][Two digit month][Two digit day], got '{0}'"
    )]
    InvalidDateFormat(String),

    #[error("strike price must be a string representing a positive number, got '{0}'")]
    InvalidStrike(String),

    #[error("option symbol must have format [Underlying]_[Expiration][P/C][Strike]: {0}")]
    InvalidSymbolFormat(String),
}
