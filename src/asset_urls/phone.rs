//! Display formatting for contact phone numbers.

/// Format a phone number for display, branching on the cleaned digit count.
///
/// More than ten digits is treated as an international number with a country
/// code prefix, exactly ten as a domestic number, and seven to nine digits
/// get a basic split. Shorter inputs are returned untouched since no grouping
/// applies.
pub fn format_phone_number(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        len if len > 10 => {
            let split = len - 10;
            format!(
                "+{} ({}) {}-{}",
                &digits[..split],
                &digits[split..split + 3],
                &digits[split + 3..split + 6],
                &digits[split + 6..],
            )
        }
        10 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        7..=9 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => input.to_string(),
    }
}
