//! Recursive-descent scan of a hydrate-free formula fragment.

use crate::error::{FormulaError, FormulaResult};

/// One parsed token: element symbol plus its (possibly multiplied) count.
pub type ElementCount = (String, u32);

/// Parse one balanced, hydrate-free formula fragment into an ordered
/// sequence of (symbol, count) pairs.
///
/// Single left-to-right scan, recursive on nested parentheses, no
/// backtracking. A count or group multiplier is the maximal digit run
/// immediately after its token, defaulting to 1 when absent. Repeated
/// symbols are NOT folded here; that is the caller's job (see
/// [`Composition`](crate::Composition)).
///
/// The scan position is carried in the slices themselves: each step consumes
/// a prefix of the input and continues on the remainder, so recursive calls
/// share no cursor state.
pub fn parse_group(text: &str) -> FormulaResult<Vec<ElementCount>> {
    let mut pairs = Vec::new();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if ch == '(' {
            let (inner, after_group) = split_balanced(rest)?;
            let inner_pairs = parse_group(inner)?;
            let (multiplier, after_count) = take_count(after_group)?;
            let multiplier = multiplier.unwrap_or(1);
            for (symbol, count) in inner_pairs {
                pairs.push((symbol, scale_count(count, multiplier)?));
            }
            rest = after_count;
        } else if ch.is_ascii_uppercase() {
            let (symbol, after_symbol) = take_symbol(rest);
            let (count, after_count) = take_count(after_symbol)?;
            pairs.push((symbol.to_string(), count.unwrap_or(1)));
            rest = after_count;
        } else {
            return Err(FormulaError::InvalidCharacter { found: ch });
        }
    }

    Ok(pairs)
}

/// Multiply a count by a group or hydrate multiplier.
pub(crate) fn scale_count(count: u32, multiplier: u32) -> FormulaResult<u32> {
    count
        .checked_mul(multiplier)
        .ok_or_else(|| FormulaError::CountTooLarge {
            text: format!("{count}*{multiplier}"),
        })
}

/// Split `(...)rest` into the text inside the outermost parentheses and the
/// text after the matching `)`.
///
/// The first character of `text` must be `(`. Fails when nesting depth never
/// returns to zero before the fragment ends.
fn split_balanced(text: &str) -> FormulaResult<(&str, &str)> {
    let mut depth = 0usize;
    for (idx, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&text[1..idx], &text[idx + 1..]));
                }
            }
            _ => {}
        }
    }
    Err(FormulaError::UnbalancedParentheses)
}

/// Take the leading element symbol: one uppercase letter plus any
/// immediately following lowercase letters.
fn take_symbol(text: &str) -> (&str, &str) {
    // First char is known to be uppercase; extend over lowercase letters.
    let end = text
        .char_indices()
        .skip(1)
        .find(|(_, c)| !c.is_ascii_lowercase())
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    text.split_at(end)
}

/// Take the maximal leading digit run as a count.
///
/// Returns `None` when no digits are present so callers can apply their own
/// default.
fn take_count(text: &str) -> FormulaResult<(Option<u32>, &str)> {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        return Ok((None, text));
    }
    let (digits, rest) = text.split_at(end);
    let value = digits
        .parse::<u32>()
        .map_err(|_| FormulaError::CountTooLarge {
            text: digits.to_string(),
        })?;
    Ok((Some(value), rest))
}
