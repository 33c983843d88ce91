/// Mask a stored card number for display, keeping only the last four digits:
/// "4111111111111111" -> "**** **** **** 1111".
pub fn mask_card_number(number: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    let start = digits.len().saturating_sub(4);
    format!("**** **** **** {}", &digits[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_all_but_last_four_digits() {
        assert_eq!(
            mask_card_number("4111111111111111"),
            "**** **** **** 1111"
        );
    }

    #[test]
    fn ignores_spacing_in_the_stored_number() {
        assert_eq!(
            mask_card_number("4111 1111 1111 1234"),
            "**** **** **** 1234"
        );
    }

    #[test]
    fn short_numbers_keep_whatever_digits_exist() {
        assert_eq!(mask_card_number("123"), "**** **** **** 123");
        assert_eq!(mask_card_number(""), "**** **** **** ");
    }
}
