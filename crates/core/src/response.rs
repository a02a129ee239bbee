//! Classification response shaping
//!
//! Parses the raw `number` query value and builds the two response bodies of
//! the classify endpoint: the full classification on success and the
//! `{"number": "<raw>", "error": true}` body on malformed input.

use crate::classify::{Classification, Property};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

/// Query string of `GET /api/classify-number`
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ClassificationRequest {
    pub number: Option<String>,
}

impl ClassificationRequest {
    /// Build from decoded query pairs, keeping the first `number` value
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            number: pairs
                .iter()
                .find(|(key, _)| key == "number")
                .map(|(_, value)| value.clone()),
        }
    }

    /// Raw token as sent by the client, empty when the parameter is absent
    pub fn raw(&self) -> &str {
        self.number.as_deref().unwrap_or("")
    }
}

/// Why a raw token is not a number
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseNumberError {
    #[error("missing number")]
    Empty,

    #[error("{0:?} is not a base-10 integer")]
    Invalid(String),

    #[error("{0} does not fit in a signed 64-bit integer")]
    OutOfRange(String),
}

/// Parse a base-10 signed integer
///
/// No trimming is done. Values outside the `i64` range are rejected instead of
/// wrapping.
pub fn parse_number(raw: &str) -> Result<i64, ParseNumberError> {
    raw.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::Empty => ParseNumberError::Empty,
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ParseNumberError::OutOfRange(raw.to_string())
        }
        _ => ParseNumberError::Invalid(raw.to_string()),
    })
}

/// Successful classification body
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClassificationResponse {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<Property>,
    pub digit_sum: u64,
    pub fun_fact: String,
}

/// Malformed input body
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct InvalidNumberResponse {
    pub number: String,
    pub error: bool,
}

/// Either body of the classify endpoint
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum NumberResponse {
    Classified(ClassificationResponse),
    Invalid(InvalidNumberResponse),
}

impl NumberResponse {
    /// HTTP status for this body: 200 or 400
    pub fn status_code(&self) -> u16 {
        match self {
            NumberResponse::Classified(_) => 200,
            NumberResponse::Invalid(_) => 400,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, NumberResponse::Invalid(_))
    }
}

pub fn build_classification_response(
    classification: Classification,
    fun_fact: String,
) -> ClassificationResponse {
    ClassificationResponse {
        number: classification.number,
        is_prime: classification.is_prime,
        is_perfect: classification.is_perfect,
        properties: classification.properties,
        digit_sum: classification.digit_sum,
        fun_fact,
    }
}

pub fn invalid_number_response(raw: &str) -> InvalidNumberResponse {
    InvalidNumberResponse {
        number: raw.to_string(),
        error: true,
    }
}
