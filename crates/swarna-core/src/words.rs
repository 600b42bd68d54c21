//! # Amount in Words
//!
//! Spells a whole-rupee amount in English on the Indian numbering scale, as
//! printed under the grand total ("Rupees Fifty-Three Thousand Five Hundred
//! Sixty Only").
//!
//! ## Scale
//! ```text
//!   1,23,45,67,890
//!   └┬─┘ └┬┘ └┬┘ │ └┬┘
//!    │    │   │  │  └── remainder (0-99)
//!    │    │   │  └───── hundred
//!    │    │   └──────── thousand
//!    │    └──────────── lakh
//!    └───────────────── crore (spelled recursively when ≥ 100)
//! ```
//!
//! Groups that are zero are skipped entirely, so no "Zero Lakh" is ever
//! produced.

const ONES: [&str; 20] = [
    "Zero",
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;
const HUNDRED: u64 = 100;

/// Words for 0-99.
fn below_hundred(n: u64) -> String {
    debug_assert!(n < 100);
    if n < 20 {
        return ONES[n as usize].to_string();
    }

    let tens = TENS[(n / 10) as usize];
    match n % 10 {
        0 => tens.to_string(),
        ones => format!("{}-{}", tens, ONES[ones as usize]),
    }
}

/// Appends the words for a non-zero amount to `parts`.
fn push_groups(amount: u64, parts: &mut Vec<String>) {
    let crores = amount / CRORE;
    let lakhs = (amount % CRORE) / LAKH;
    let thousands = (amount % LAKH) / THOUSAND;
    let hundreds = (amount % THOUSAND) / HUNDRED;
    let rest = amount % HUNDRED;

    if crores > 0 {
        push_groups(crores, parts);
        parts.push("Crore".to_string());
    }
    for (group, scale) in [(lakhs, "Lakh"), (thousands, "Thousand"), (hundreds, "Hundred")] {
        if group > 0 {
            parts.push(below_hundred(group));
            parts.push(scale.to_string());
        }
    }
    if rest > 0 {
        parts.push(below_hundred(rest));
    }
}

/// Converts a whole-rupee amount to words.
///
/// ## Example
/// ```rust
/// use swarna_core::words::to_words;
///
/// assert_eq!(to_words(0), "Zero");
/// assert_eq!(to_words(53560), "Fifty-Three Thousand Five Hundred Sixty");
/// assert_eq!(to_words(1234567), "Twelve Lakh Thirty-Four Thousand Five Hundred Sixty-Seven");
/// ```
pub fn to_words(amount: u64) -> String {
    if amount == 0 {
        return ONES[0].to_string();
    }

    let mut parts = Vec::new();
    push_groups(amount, &mut parts);
    parts.join(" ")
}

/// The phrase printed under an invoice's grand total.
///
/// ## Example
/// ```rust
/// use swarna_core::words::rupees_in_words;
///
/// assert_eq!(rupees_in_words(100000), "Rupees One Lakh Only");
/// ```
pub fn rupees_in_words(amount: u64) -> String {
    format!("Rupees {} Only", to_words(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(to_words(0), "Zero");
    }

    #[test]
    fn test_scale_words() {
        assert_eq!(to_words(100), "One Hundred");
        assert_eq!(to_words(1000), "One Thousand");
        assert_eq!(to_words(100000), "One Lakh");
        assert_eq!(to_words(10000000), "One Crore");
    }

    #[test]
    fn test_below_hundred() {
        assert_eq!(to_words(7), "Seven");
        assert_eq!(to_words(13), "Thirteen");
        assert_eq!(to_words(19), "Nineteen");
        assert_eq!(to_words(20), "Twenty");
        assert_eq!(to_words(21), "Twenty-One");
        assert_eq!(to_words(90), "Ninety");
        assert_eq!(to_words(99), "Ninety-Nine");
    }

    #[test]
    fn test_skips_zero_groups() {
        let words = to_words(1234567);
        assert_eq!(words, "Twelve Lakh Thirty-Four Thousand Five Hundred Sixty-Seven");
        assert!(!words.contains("Zero"));

        assert_eq!(to_words(10000005), "One Crore Five");
        assert_eq!(to_words(100100), "One Lakh One Hundred");
        assert_eq!(to_words(2005000), "Twenty Lakh Five Thousand");
    }

    #[test]
    fn test_large_crore_group_uses_indian_scale() {
        assert_eq!(to_words(1_230_000_000), "One Hundred Twenty-Three Crore");
        assert_eq!(
            to_words(1_000_000_000_000),
            "One Lakh Crore"
        );
    }

    #[test]
    fn test_invoice_totals() {
        assert_eq!(to_words(53560), "Fifty-Three Thousand Five Hundred Sixty");
        assert_eq!(
            to_words(20598),
            "Twenty Thousand Five Hundred Ninety-Eight"
        );
    }

    #[test]
    fn test_no_redundant_whitespace() {
        for amount in [1, 10, 101, 1001, 100001, 10000001, 987654321] {
            let words = to_words(amount);
            assert_eq!(words.trim(), words);
            assert!(!words.contains("  "), "{words:?}");
        }
    }

    #[test]
    fn test_every_word_is_title_cased() {
        let words = to_words(987654321);
        for word in words.split([' ', '-']) {
            let first = word.chars().next().unwrap();
            assert!(first.is_uppercase(), "{word} in {words}");
        }
    }

    #[test]
    fn test_rupees_in_words() {
        assert_eq!(
            rupees_in_words(53560),
            "Rupees Fifty-Three Thousand Five Hundred Sixty Only"
        );
        assert_eq!(rupees_in_words(0), "Rupees Zero Only");
    }
}
