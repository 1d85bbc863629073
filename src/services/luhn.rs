/// Checks a card number against the Luhn checksum.
///
/// Digits are walked right to left and every second digit, starting from the
/// second-from-last, is doubled (minus 9 when the result exceeds 9). The number
/// passes when the digit sum is divisible by 10.
///
/// Any character outside ASCII `0`-`9` makes the number invalid. An empty string
/// has a digit sum of 0 and passes.
pub fn is_valid_luhn(card_number: &str) -> bool {
    // Only the sum modulo 10 matters, so keep it reduced
    let mut sum = 0u32;

    for (position, ch) in card_number.chars().rev().enumerate() {
        let Some(mut digit) = ch.to_digit(10) else {
            return false;
        };

        if position % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }

        sum = (sum + digit) % 10;
    }

    sum == 0
}
