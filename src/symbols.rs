//! Option symbol codec.
//!
//! Option symbols follow the brokerage's fixed-width format:
//! `[Underlying][2 spaces][Two digit year][Two digit month][Two digit day]
//! ['P' or 'C'][Strike price]`.
//!
//! The strike field is the strike multiplied by 1000, truncated, and
//! prefixed with zeroes: two zeroes for strikes below 1000, one zero for
//! strikes at or above. Examples:
//!
//! * `QQQ  240420P00500000` — QQQ Apr 20, 2024 500 put
//! * `SPXW  240420C05040000` — SPX weekly Apr 20, 2024 5040 call
//!
//! Each constituent part is validated on its own, but a well-formed symbol
//! may still not correspond to a traded contract: not every underlying has
//! options, and not every date or strike is listed.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::OrderError;

/// Put or call, stored canonically as its single-letter tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    #[serde(rename = "C")]
    Call,
    #[serde(rename = "P")]
    Put,
}

impl ContractType {
    /// Accepts the long or short token, case-sensitively.
    pub fn from_token(token: &str) -> Result<Self, OrderError> {
        match token {
            "C" | "CALL" => Ok(Self::Call),
            "P" | "PUT" => Ok(Self::Put),
            other => Err(OrderError::InvalidContractType(other.to_string())),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::Call => 'C',
            Self::Put => 'P',
        }
    }
}

/// Expiration date input, resolved to a plain calendar date at the
/// constructor boundary. Datetime inputs drop their time-of-day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expiration {
    Raw(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Expiration {
    fn resolve(self) -> Result<NaiveDate, OrderError> {
        match self {
            Self::Raw(s) => parse_expiration_date(&s),
            Self::Date(d) => Ok(d),
            Self::DateTime(dt) => Ok(dt.date()),
        }
    }
}

impl From<&str> for Expiration {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<String> for Expiration {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<NaiveDate> for Expiration {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<NaiveDateTime> for Expiration {
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}

/// Strict `YYMMDD` parse; the calendar decides validity (e.g. month 13 fails).
///
/// The field is exactly six ASCII digits. chrono's `%y%m%d` alone also
/// accepts one-digit month/day fields, so the shape is checked first.
fn parse_expiration_date(s: &str) -> Result<NaiveDate, OrderError> {
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OrderError::InvalidDateFormat(s.to_string()));
    }
    NaiveDate::parse_from_str(s, "%y%m%d")
        .map_err(|_| OrderError::InvalidDateFormat(s.to_string()))
}

/// One option contract identity.
///
/// `strike` holds the already-encoded 8-digit field, not a float, so
/// formatting never reintroduces rounding error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSymbol {
    pub underlying: String,
    pub expiration: NaiveDate,
    pub contract_type: ContractType,
    pub strike: String,
}

impl OptionSymbol {
    /// Construct a symbol from its constituent parts.
    ///
    /// The underlying is not validated. `contract_type` accepts `C`, `CALL`,
    /// `P` or `PUT`. `strike` is a string representing a positive decimal
    /// number, as it would appear before encoding.
    pub fn new(
        underlying: &str,
        expiration: impl Into<Expiration>,
        contract_type: &str,
        strike: &str,
    ) -> Result<Self, OrderError> {
        let contract_type = ContractType::from_token(contract_type)?;
        let expiration = expiration.into().resolve()?;

        let value: f64 = strike
            .parse()
            .map_err(|_| OrderError::InvalidStrike(strike.to_string()))?;
        if !value.is_finite() || value <= 0.0 {
            return Err(OrderError::InvalidStrike(strike.to_string()));
        }

        // Truncating conversion, not rounding: 500 -> 00500000, 5040 -> 05040000.
        let encoded = if value < 1000.0 {
            format!("00{}", (value * 1000.0) as u64)
        } else {
            format!("0{}", (value * 1000.0) as u64)
        };

        Ok(Self {
            underlying: underlying.to_string(),
            expiration,
            contract_type,
            strike: encoded,
        })
    }

    /// Parse the underscore-delimited form `[Underlying]_[YYMMDD][P/C][Strike]`.
    ///
    /// This grammar is distinct from the fixed-width form [`build`](Self::build)
    /// emits. The remainder after the underscore is split on `P`, then on `C`;
    /// whichever yields exactly two pieces decides the contract type. A stray
    /// `P` or `C` elsewhere in the remainder yields more than two pieces and
    /// fails outright.
    pub fn parse(symbol: &str) -> Result<Self, OrderError> {
        let parts: Vec<&str> = symbol.split('_').collect();
        let [underlying, rest] = parts[..] else {
            return Err(OrderError::InvalidSymbolFormat(format!(
                "expected exactly one underscore in '{symbol}'"
            )));
        };

        let put_split: Vec<&str> = rest.split('P').collect();
        let (expiration, strike, contract_type) = if let [expiration, strike] = put_split[..] {
            (expiration, strike, "P")
        } else {
            let call_split: Vec<&str> = rest.split('C').collect();
            if let [expiration, strike] = call_split[..] {
                (expiration, strike, "C")
            } else {
                return Err(OrderError::InvalidSymbolFormat(format!(
                    "no contract type 'P' or 'C' found in '{symbol}'"
                )));
            }
        };

        let expiration = parse_expiration_date(expiration)?;

        // The strike piece goes back through the constructor, so the encoded
        // field is recomputed from the numeric value rather than preserved.
        Self::new(underlying, expiration, contract_type, strike)
    }

    /// Render the fixed-width symbol, with two literal spaces between the
    /// underlying and the expiration date.
    pub fn build(&self) -> String {
        format!(
            "{}  {}{}{}",
            self.underlying,
            self.expiration.format("%y%m%d"),
            self.contract_type.letter(),
            self.strike
        )
    }
}

impl fmt::Display for OptionSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
