use crate::rle::compress_runs;
use tracing::debug;

/// Folds repeating substrings into `<count>(<pattern>)` tokens.
///
/// Runs on the output of [`compress_runs`]. The search order is part of
/// the contract and must not change:
///
/// 1. candidate pattern length `L` from `floor(n / 2)` down to `2`,
///    longest first;
/// 2. for each `L`, start offset from `0` upward while `start + 2L <= n`;
/// 3. repetitions of `input[start..start + L]` are counted greedily,
///    contiguously and without overlap, immediately after `start`;
/// 4. the first candidate with two or more repetitions whose rewrite
///    strictly shortens the text rewrites it to
///    `prefix <count> ( pattern ) suffix`, and the whole search restarts
///    on the rewritten text;
/// 5. no such candidate anywhere is the fixed point: the input comes back
///    unchanged.
///
/// The restart deliberately operates on the flat string rather than a
/// token tree, so count digits and parentheses inserted by earlier
/// rewrites (and by run-length compression) take part in later matches as
/// ordinary characters. That is how nested tokens like `2(2(3Л3Н))`
/// arise; the expander resolves them innermost-first.
///
/// A candidate only fires when `reps * L` exceeds the rewritten token
/// (count digits + pattern + two parentheses). Without that guard the
/// restart can feed on its own output: in `2(2(ЛП)О)` the text `2(`
/// matches itself two characters later, and folding it grows the string
/// by one character per pass, forever. Every applied rewrite strictly
/// shortens the text, which bounds the loop.
///
/// Inputs shorter than 4 characters cannot hold two repetitions of length
/// 2 and come back unchanged. All offsets are `char` offsets.
pub fn compress_patterns(input: &str) -> String {
    let mut text: Vec<char> = input.chars().collect();

    'rewritten: loop {
        let n = text.len();
        if n < 4 {
            break;
        }

        for len in (2..=n / 2).rev() {
            let mut start = 0;
            while start + 2 * len <= n {
                let pattern = &text[start..start + len];
                let mut end = start + len;
                let mut reps = 1usize;

                while end + len <= n && &text[end..end + len] == pattern {
                    reps += 1;
                    end += len;
                }

                if reps >= 2 {
                    let count = reps.to_string();
                    // Only fold when the token is strictly shorter than
                    // the repetitions it replaces.
                    if count.len() + len + 2 < reps * len {
                        debug!(
                            pattern = %pattern.iter().collect::<String>(),
                            reps,
                            start,
                            "folding repeated pattern"
                        );

                        let mut next =
                            Vec::with_capacity(n - reps * len + count.len() + len + 2);
                        next.extend_from_slice(&text[..start]);
                        next.extend(count.chars());
                        next.push('(');
                        next.extend_from_slice(&text[start..start + len]);
                        next.push(')');
                        next.extend_from_slice(&text[end..]);

                        text = next;
                        continue 'rewritten;
                    }
                }

                start += 1;
            }
        }

        break;
    }

    text.into_iter().collect()
}

/// The top-level compression entry point: run-length compression followed
/// by pattern folding.
///
/// `optimize("ЛЛЛНННЛЛЛННН")` is `"2(3Л3Н)"`; feeding the result to
/// [`crate::expand`] and then [`crate::parse`] yields the executable
/// command sequence.
pub fn optimize(raw: &str) -> String {
    compress_patterns(&compress_runs(raw))
}
