use crate::models::card::CardIssuer;

/// Visa numbers start with 4 and are 13 or 16 digits long
pub fn is_visa(card_number: &str) -> bool {
    card_number.starts_with('4') && matches!(card_number.len(), 13 | 16)
}

/// MasterCard numbers start with 51 through 55 and are 16 digits long
pub fn is_mastercard(card_number: &str) -> bool {
    let bytes = card_number.as_bytes();

    card_number.len() == 16
        && bytes.first() == Some(&b'5')
        && matches!(bytes.get(1), Some(&(b'1'..=b'5')))
}

/// American Express numbers start with 34 or 37 and are 15 digits long
pub fn is_american_express(card_number: &str) -> bool {
    (card_number.starts_with("34") || card_number.starts_with("37")) && card_number.len() == 15
}

/// Classifies a card number by prefix and length.
///
/// Rules are checked in order: Visa, MasterCard, American Express. Anything else,
/// including inputs too short to carry a prefix, falls back to `CardIssuer::Other`.
pub fn classify(card_number: &str) -> CardIssuer {
    if is_visa(card_number) {
        CardIssuer::Visa
    } else if is_mastercard(card_number) {
        CardIssuer::MasterCard
    } else if is_american_express(card_number) {
        CardIssuer::AmericanExpress
    } else {
        CardIssuer::Other
    }
}
