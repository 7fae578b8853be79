use crate::error::ParsingError;
use crate::few::few;
use crate::map::MapExt;
use crate::optional::optional;
use crate::parser::Parser;
use crate::pick::pick;
use crate::sequence::sequence;
use crate::text::chars::digit;
use crate::verbatim::verbatim;

fn too_large(digits: &str) -> ParsingError {
    ParsingError::custom(format!("number too large: {}", digits))
}

/// One or more decimal digits read as a non-negative integer
///
/// A leading sign is not part of the grammar, so `-1` is rejected. Values past
/// `u64::MAX` fail with a custom error.
pub fn nat() -> impl Parser<Output = u64> {
    verbatim(sequence(digit())).map("nat", |_, digits| {
        let digits: String = digits.into_iter().collect();
        digits.parse::<u64>().map_err(|_| too_large(&digits))
    })
}

/// A natural number with an optional `+` or `-` sign directly in front of it
pub fn int() -> impl Parser<Output = i64> {
    verbatim(few((optional(pick(("+", "-"))), sequence(digit())))).map(
        "int",
        |_, (sign, digits)| {
            let digits: String = digits.into_iter().collect();
            let magnitude: i128 = digits.parse().map_err(|_| too_large(&digits))?;
            let value = match sign.as_deref() {
                Some("-") => -magnitude,
                _ => magnitude,
            };
            i64::try_from(value).map_err(|_| too_large(&digits))
        },
    )
}
