//! Fun fact helpers
//!
//! Wire type for the number-facts service plus the local fallback used when
//! that service cannot provide a fact.

use crate::classify::{digits, parity, Classification};
use serde::{Deserialize, Serialize};

/// Default base URL of the number-facts service
pub const DEFAULT_FACTS_URL: &str = "http://numbersapi.com";

/// Body returned by `GET <base>/<n>/math?json`
///
/// Only `text` is used; any other field the service sends is ignored.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NumbersApiFact {
    #[serde(default)]
    pub text: String,
}

/// Build the math-fact URL for a number
///
/// A trailing slash on `base_url` is tolerated.
pub fn fact_url(base_url: &str, number: i64) -> String {
    format!("{}/{number}/math?json", base_url.trim_end_matches('/'))
}

/// Extract usable text from a fact body
///
/// Blank text counts as no fact at all.
pub fn extract_fact_text(fact: NumbersApiFact) -> Option<String> {
    if fact.text.trim().is_empty() {
        None
    } else {
        Some(fact.text)
    }
}

/// Explain why `n` is an Armstrong number
///
/// Produces `"371 is an Armstrong number because 3^3 + 7^3 + 1^3 = 371"`.
pub fn armstrong_explanation(n: i64) -> String {
    let digits = digits(n);
    let power = digits.len();
    let terms = digits
        .iter()
        .map(|d| format!("{d}^{power}"))
        .collect::<Vec<_>>()
        .join(" + ");

    format!("{n} is an Armstrong number because {terms} = {n}")
}

/// Synthesize a fact locally from a classification
///
/// Armstrong numbers get their digit-power expansion, everything else
/// `"<n> is <first property>"`.
pub fn fallback_fact(classification: &Classification) -> String {
    if classification.is_armstrong {
        return armstrong_explanation(classification.number);
    }

    let property = classification
        .properties
        .first()
        .copied()
        .unwrap_or_else(|| parity(classification.number));

    format!("{} is {property}", classification.number)
}

/// Pick the fetched fact when there is one, the fallback otherwise
pub fn fact_or_fallback(fetched: Option<String>, classification: &Classification) -> String {
    fetched
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| fallback_fact(classification))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    // ============================================================================
    // fact_url tests
    // ============================================================================

    #[test]
    fn test_fact_url_default_base() {
        assert_eq!(
            fact_url(DEFAULT_FACTS_URL, 371),
            "http://numbersapi.com/371/math?json"
        );
    }

    #[test]
    fn test_fact_url_trailing_slash() {
        assert_eq!(
            fact_url("http://localhost:9000/", 42),
            "http://localhost:9000/42/math?json"
        );
    }

    #[test]
    fn test_fact_url_negative() {
        assert_eq!(
            fact_url("http://localhost:9000", -7),
            "http://localhost:9000/-7/math?json"
        );
    }

    // ============================================================================
    // extract_fact_text tests
    // ============================================================================

    #[test]
    fn test_extract_fact_text_present() {
        let fact = NumbersApiFact {
            text: "42 is the answer.".to_string(),
        };
        assert_eq!(
            extract_fact_text(fact),
            Some("42 is the answer.".to_string())
        );
    }

    #[test]
    fn test_extract_fact_text_blank() {
        let fact = NumbersApiFact {
            text: "   ".to_string(),
        };
        assert_eq!(extract_fact_text(fact), None);
    }

    #[test]
    fn test_numbers_api_fact_ignores_extra_fields() {
        let json = r#"{"text":"6 is perfect.","number":6,"found":true,"type":"math"}"#;
        let fact: NumbersApiFact = serde_json::from_str(json).unwrap();
        assert_eq!(fact.text, "6 is perfect.");
    }

    #[test]
    fn test_numbers_api_fact_missing_text() {
        let fact: NumbersApiFact = serde_json::from_str(r#"{"found":false}"#).unwrap();
        assert_eq!(extract_fact_text(fact), None);
    }

    // ============================================================================
    // fallback tests
    // ============================================================================

    #[test]
    fn test_armstrong_explanation_three_digits() {
        assert_eq!(
            armstrong_explanation(371),
            "371 is an Armstrong number because 3^3 + 7^3 + 1^3 = 371"
        );
    }

    #[test]
    fn test_armstrong_explanation_single_digit() {
        assert_eq!(
            armstrong_explanation(7),
            "7 is an Armstrong number because 7^1 = 7"
        );
    }

    #[test]
    fn test_fallback_fact_armstrong() {
        assert_eq!(
            fallback_fact(&classify(9474)),
            "9474 is an Armstrong number because 9^4 + 4^4 + 7^4 + 4^4 = 9474"
        );
    }

    #[test]
    fn test_fallback_fact_parity() {
        assert_eq!(fallback_fact(&classify(100)), "100 is even");
        assert_eq!(fallback_fact(&classify(27)), "27 is odd");
        assert_eq!(fallback_fact(&classify(-15)), "-15 is odd");
    }

    #[test]
    fn test_fallback_fact_is_stable() {
        let first = fallback_fact(&classify(371));
        let second = fallback_fact(&classify(371));
        assert_eq!(first, second);
    }

    #[test]
    fn test_fact_or_fallback_prefers_fetched() {
        let fact = fact_or_fallback(Some("100 is a square.".to_string()), &classify(100));
        assert_eq!(fact, "100 is a square.");
    }

    #[test]
    fn test_fact_or_fallback_on_missing_or_blank() {
        assert_eq!(fact_or_fallback(None, &classify(100)), "100 is even");
        assert_eq!(
            fact_or_fallback(Some(String::new()), &classify(100)),
            "100 is even"
        );
    }
}
