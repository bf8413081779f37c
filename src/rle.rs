use crate::error::ExpandError;
use crate::expand::MAX_EXPANDED_CHARS;
use tracing::debug;

/// Collapses maximal runs of identical characters into `<len><char>` tokens.
///
/// A run of length 1 is emitted as the bare character; longer runs get
/// their decimal length written immediately before the character
/// (`ЛЛЛЛ` becomes `4Л`). The scan is a single left-to-right pass with no
/// backtracking, and output order matches input order. Empty input yields
/// empty output.
///
/// The input is not required to be pre-validated: only identical adjacent
/// characters are ever merged, so foreign characters pass through intact.
pub fn compress_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        let mut run = 1usize;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }
        if run > 1 {
            out.push_str(&run.to_string());
        }
        out.push(c);
    }

    debug!(input_chars = s.chars().count(), output = %out, "run-length pass");
    out
}

/// Expands `<digits><char>` run tokens back into repeated characters.
///
/// This is the second phase of [`crate::expand`]: it must only ever see
/// text with no parentheses left in it. A digit run with nothing after it,
/// or a leftover parenthesis, is a malformed token stream.
pub(crate) fn expand_runs(s: &str) -> Result<String, ExpandError> {
    let mut out = String::with_capacity(s.len());
    let mut out_chars = 0usize;
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            let mut digits = String::from(c);
            while let Some(&d) = chars.peek() {
                if d.is_ascii_digit() {
                    digits.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            let count: usize = digits
                .parse()
                .map_err(|_| ExpandError::CountOverflow { digits: digits.clone() })?;
            let symbol = chars.next().ok_or(ExpandError::DanglingCount { digits })?;
            if symbol == '(' || symbol == ')' {
                return Err(ExpandError::UnbalancedParens);
            }
            out_chars = out_chars
                .checked_add(count)
                .filter(|&n| n <= MAX_EXPANDED_CHARS)
                .ok_or(ExpandError::TooLarge {
                    limit: MAX_EXPANDED_CHARS,
                })?;
            for _ in 0..count {
                out.push(symbol);
            }
        } else if c == '(' || c == ')' {
            return Err(ExpandError::UnbalancedParens);
        } else {
            out_chars += 1;
            out.push(c);
        }
    }

    Ok(out)
}
