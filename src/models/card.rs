use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardIssuer {
    #[serde(rename = "VISA")]
    Visa,
    #[serde(rename = "MASTERCARD")]
    MasterCard,
    #[serde(rename = "AMERICAN EXPRESS")]
    AmericanExpress,
    #[serde(rename = "SOME OTHER PAYMENT GATEWAY")]
    Other,
}

impl CardIssuer {
    /// Returns the label used on the wire
    pub fn label(&self) -> &'static str {
        match self {
            CardIssuer::Visa => "VISA",
            CardIssuer::MasterCard => "MASTERCARD",
            CardIssuer::AmericanExpress => "AMERICAN EXPRESS",
            CardIssuer::Other => "SOME OTHER PAYMENT GATEWAY",
        }
    }
}

impl fmt::Display for CardIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidateCardRequest {
    pub card_number: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardValidation {
    pub card_number: String,
    pub is_valid: bool,
    pub issuer: CardIssuer,
}

impl CardValidation {
    /// Runs the Luhn check and issuer classification for a card number
    pub fn evaluate(card_number: String) -> Self {
        let is_valid = crate::services::luhn::is_valid_luhn(&card_number);
        let issuer = crate::services::issuer::classify(&card_number);

        Self {
            card_number,
            is_valid,
            issuer,
        }
    }

    /// Fixed-width mask for logs: `****` followed by the last four digits.
    ///
    /// Non-digit characters in the tail are masked too, so arbitrary input never
    /// reaches the log verbatim.
    pub fn masked_number(&self) -> String {
        let tail: Vec<char> = self.card_number.chars().rev().take(4).collect();

        let last_four: String = tail
            .iter()
            .rev()
            .map(|c| if c.is_ascii_digit() { *c } else { '*' })
            .collect();

        format!("****{}", last_four)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issuer_serializes_to_label() {
        let json = serde_json::to_string(&CardIssuer::AmericanExpress).unwrap();
        assert_eq!(json, r#""AMERICAN EXPRESS""#);

        let json = serde_json::to_string(&CardIssuer::Other).unwrap();
        assert_eq!(json, r#""SOME OTHER PAYMENT GATEWAY""#);
    }

    #[test]
    fn test_issuer_display_matches_label() {
        for issuer in [
            CardIssuer::Visa,
            CardIssuer::MasterCard,
            CardIssuer::AmericanExpress,
            CardIssuer::Other,
        ] {
            let json = serde_json::to_string(&issuer).unwrap();
            assert_eq!(json, format!("\"{}\"", issuer));
        }
    }

    #[test]
    fn test_evaluate() {
        let result = CardValidation::evaluate("5105105105105100".to_string());
        assert!(result.is_valid);
        assert_eq!(result.issuer, CardIssuer::MasterCard);
        assert_eq!(result.card_number, "5105105105105100");
    }

    #[test]
    fn test_response_shape() {
        let result = CardValidation::evaluate("371449635398431".to_string());
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "card_number": "371449635398431",
                "is_valid": true,
                "issuer": "AMERICAN EXPRESS",
            })
        );
    }

    #[test]
    fn test_masked_number() {
        let result = CardValidation::evaluate("4539148803436467".to_string());
        assert_eq!(result.masked_number(), "****6467");

        let result = CardValidation::evaluate("123".to_string());
        assert_eq!(result.masked_number(), "****123");
    }

    #[test]
    fn test_masked_number_is_bounded() {
        let result = CardValidation::evaluate(format!("{}<script>", "9".repeat(16 * 1024)));
        let masked = result.masked_number();

        assert_eq!(masked, "********");
    }

    #[test]
    fn test_request_requires_card_number() {
        let result: Result<ValidateCardRequest, _> = serde_json::from_str(r#"{"other":"1"}"#);
        assert!(result.is_err());

        let parsed: ValidateCardRequest =
            serde_json::from_str(r#"{"card_number":"4012888888881881","extra":true}"#).unwrap();
        assert_eq!(parsed.card_number, "4012888888881881");
    }
}
