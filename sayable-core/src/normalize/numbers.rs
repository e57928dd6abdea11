//! Number spelling
//!
//! Cardinals use a ones/teens/tens table and a scale ladder combined
//! recursively, so values beyond a billion read as "two thousand billion".

const ONES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [(u64, &str); 4] = [
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
    (100, "hundred"),
];

/// Word for a single decimal digit (0-9)
pub(crate) fn digit_word(digit: u32) -> &'static str {
    ONES[(digit % 10) as usize]
}

/// Spell a non-negative integer ("two thousand three hundred forty five")
pub fn number_to_words(n: u64) -> String {
    if n < 10 {
        return ONES[n as usize].to_string();
    }
    if n < 20 {
        return TEENS[(n - 10) as usize].to_string();
    }
    if n < 100 {
        let tens = TENS[(n / 10) as usize];
        return match n % 10 {
            0 => tens.to_string(),
            ones => format!("{tens} {}", ONES[ones as usize]),
        };
    }

    let (scale, name) = SCALES
        .iter()
        .copied()
        .find(|(scale, _)| n >= *scale)
        .unwrap_or((100, "hundred"));

    let lead = number_to_words(n / scale);
    match n % scale {
        0 => format!("{lead} {name}"),
        rest => format!("{lead} {name} {}", number_to_words(rest)),
    }
}

/// Spell a signed integer, prefixing "minus" for negatives
pub fn signed_number_to_words(n: i64) -> String {
    if n < 0 {
        format!("minus {}", number_to_words(n.unsigned_abs()))
    } else {
        number_to_words(n.unsigned_abs())
    }
}

/// Ending rule applied to a cardinal to derive its ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrdinalSuffix {
    /// Final word has its own ordinal form
    Irregular {
        cardinal: &'static str,
        ordinal: &'static str,
    },
    /// "twenty" -> "twentieth"
    TrailingY,
    /// Append "th"
    Regular,
}

/// Irregular endings, checked in order before the catch-all rules
const IRREGULAR_ORDINALS: [(&str, &str); 7] = [
    ("one", "first"),
    ("two", "second"),
    ("three", "third"),
    ("five", "fifth"),
    ("eight", "eighth"),
    ("nine", "ninth"),
    ("twelve", "twelfth"),
];

impl OrdinalSuffix {
    fn classify(cardinal: &str) -> Self {
        IRREGULAR_ORDINALS
            .iter()
            .find(|(ending, _)| cardinal.ends_with(ending))
            .map(|&(cardinal, ordinal)| OrdinalSuffix::Irregular { cardinal, ordinal })
            .unwrap_or(if cardinal.ends_with('y') {
                OrdinalSuffix::TrailingY
            } else {
                OrdinalSuffix::Regular
            })
    }
}

/// Spell an ordinal ("twenty first", "one hundredth")
pub fn ordinal_to_words(n: u64) -> String {
    let base = number_to_words(n);
    match OrdinalSuffix::classify(&base) {
        OrdinalSuffix::Irregular { cardinal, ordinal } => {
            format!("{}{ordinal}", &base[..base.len() - cardinal.len()])
        }
        OrdinalSuffix::TrailingY => format!("{}ieth", &base[..base.len() - 1]),
        OrdinalSuffix::Regular => format!("{base}th"),
    }
}

/// Spell each ASCII digit individually ("192" -> "one nine two")
///
/// Anything other than ASCII digits is returned as written.
pub fn digits_to_words(digits: &str) -> String {
    if !is_ascii_digits(digits) {
        return digits.to_string();
    }
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(digit_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spell an integer literal, digit by digit when it exceeds 64 bits
pub(crate) fn integer_literal_to_words(digits: &str) -> String {
    if !is_ascii_digits(digits) {
        return digits.to_string();
    }
    match digits.parse::<u64>() {
        Ok(n) => number_to_words(n),
        Err(_) => digits_to_words(digits),
    }
}

fn is_ascii_digits(literal: &str) -> bool {
    !literal.is_empty() && literal.bytes().all(|b| b.is_ascii_digit())
}

/// Spell a decimal literal: cardinal whole part, "point", then each
/// fractional digit ("3.14" -> "three point one four")
///
/// Returns `None` for anything that is not `digits.digits`.
pub fn decimal_to_words(literal: &str) -> Option<String> {
    let (whole, frac) = literal.split_once('.')?;
    if !is_ascii_digits(whole) || !is_ascii_digits(frac) {
        return None;
    }
    Some(format!(
        "{} point {}",
        integer_literal_to_words(whole),
        digits_to_words(frac)
    ))
}
