use crate::internal::common::error::TresError;
use crate::internal::common::parser::p_count;
use crate::internal::tres::{TresEntry, TresList};

/// Longest TRES string that can be handed back to the scheduler.
pub const MAX_TRES_LENGTH: usize = 1024;

/// Splits a TRES string (`gpu:a10:2,gg:g3`) into entries.
///
/// A token is `name:count` only when the text after its last colon starts with a digit,
/// otherwise the whole token is the name and the count is an implied 1.
/// Empty tokens are skipped. The only failure is a count that does not fit into
/// [`TresCount`](crate::TresCount).
pub fn parse_tres(input: &str) -> crate::Result<TresList> {
    tokens(input).map(parse_entry).collect()
}

/// Names mentioned by a TRES string, in order. Counts are not decoded.
pub fn tres_names(input: &str) -> impl Iterator<Item = &str> {
    tokens(input).map(|token| split_count(token).map_or(token, |(name, _)| name))
}

fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input.split(',').filter(|token| !token.is_empty())
}

fn split_count(token: &str) -> Option<(&str, &str)> {
    token
        .rsplit_once(':')
        .filter(|(_, suffix)| suffix.starts_with(|c: char| c.is_ascii_digit()))
}

fn parse_entry(token: &str) -> crate::Result<TresEntry> {
    match split_count(token) {
        Some((name, suffix)) => {
            // Trailing garbage after the digits is ignored
            let (_, count) = p_count(suffix).map_err(|_| TresError::InvalidCount(token.into()))?;
            Ok(TresEntry::new(name, count))
        }
        None => Ok(TresEntry::implicit(token)),
    }
}

/// Renders entries back into a TRES string, keeping their order.
pub fn serialize_tres(list: &TresList) -> crate::Result<String> {
    let mut output = String::new();
    for (index, entry) in list.iter().enumerate() {
        if index > 0 {
            output.push(',');
        }
        output.push_str(&entry.to_string());
    }
    if output.len() > MAX_TRES_LENGTH {
        return Err(TresError::UnsupportedResourceSet {
            length: output.len(),
            limit: MAX_TRES_LENGTH,
        });
    }
    Ok(output)
}
