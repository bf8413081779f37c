use crate::error::ExpandError;
use crate::rle::expand_runs;
use tracing::debug;

/// Ceiling on expanded output, in characters.
///
/// Compressor output expands back to exactly the string it was built
/// from, so anything near this limit can only come from a hand-written
/// token stream such as `99999999(9Л)`. Refusing it keeps [`expand`]
/// total on arbitrary text.
pub(crate) const MAX_EXPANDED_CHARS: usize = 1 << 22;

/// Expands a compressed token stream back into a bare command string.
///
/// This is the structural inverse of [`crate::optimize`]. Group tokens
/// `<count>(<stream>)` are unrolled first, innermost group first, until no
/// parentheses remain; only then are `<count><symbol>` run tokens
/// expanded. The order matters: a group's body may itself contain run
/// tokens (`2(3Л3Н)` must become `3Л3Н3Л3Н` before the runs inside it are
/// touched), and the compressor's restarting search can nest groups
/// arbitrarily deep.
///
/// The output contains only the characters the compressor was fed, with
/// no digits or parentheses, ready for [`crate::parse`].
///
/// Behavior is specified for strings produced by the compressor, for
/// which this function cannot fail, and the round trip
/// `expand(&optimize(raw))` reproduces the run-length/pattern input
/// exactly. Arbitrary other text is out of contract; rather than emit
/// silently wrong output, malformed streams (unbalanced parentheses,
/// counts with nothing to repeat, uncounted groups) are reported as
/// [`ExpandError`].
pub fn expand(compressed: &str) -> Result<String, ExpandError> {
    let mut text: Vec<char> = compressed.chars().collect();

    // Phase 1: unroll groups, innermost first. Each pass removes one pair
    // of parentheses, so the loop is bounded by their count.
    while let Some(close) = text.iter().position(|&c| c == ')') {
        // The matching ( is the last opener before the ), and the group
        // body between them is paren-free, so the group is innermost.
        let open = text[..close]
            .iter()
            .rposition(|&c| c == '(')
            .ok_or(ExpandError::UnbalancedParens)?;

        let mut digits_start = open;
        while digits_start > 0 && text[digits_start - 1].is_ascii_digit() {
            digits_start -= 1;
        }
        if digits_start == open {
            return Err(ExpandError::MissingCount { offset: open });
        }

        let digits: String = text[digits_start..open].iter().collect();
        let count: usize = digits
            .parse()
            .map_err(|_| ExpandError::CountOverflow { digits })?;

        let body = &text[open + 1..close];
        debug!(
            body = %body.iter().collect::<String>(),
            count,
            "unrolling group"
        );

        let unrolled = body
            .len()
            .checked_mul(count)
            .filter(|&n| n <= MAX_EXPANDED_CHARS)
            .ok_or(ExpandError::TooLarge {
                limit: MAX_EXPANDED_CHARS,
            })?;
        let kept = text.len() - (close + 1 - digits_start);
        if kept + unrolled > MAX_EXPANDED_CHARS {
            return Err(ExpandError::TooLarge {
                limit: MAX_EXPANDED_CHARS,
            });
        }

        let mut next = Vec::with_capacity(kept + unrolled);
        next.extend_from_slice(&text[..digits_start]);
        for _ in 0..count {
            next.extend_from_slice(body);
        }
        next.extend_from_slice(&text[close + 1..]);
        text = next;
    }

    if text.contains(&'(') {
        return Err(ExpandError::UnbalancedParens);
    }

    // Phase 2: expand the remaining run tokens.
    expand_runs(&text.into_iter().collect::<String>())
}
