use crate::command::{parse, Command};
use crate::expand::expand;
use crate::pattern::{compress_patterns, optimize};
use crate::rle::compress_runs;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

/// Strategy: strings over the 6-command wire alphabet.
fn command_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['Л', 'П', 'В', 'Н', 'О', 'Б']),
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Walks a compressed stream and checks it against the token grammar:
/// balanced parentheses, every count >= 2, every count attached to a
/// symbol or a group.
fn assert_well_formed(compressed: &str) -> Result<(), TestCaseError> {
    let chars: Vec<char> = compressed.chars().collect();
    let mut depth = 0i32;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let count: usize = chars[start..i]
                .iter()
                .collect::<String>()
                .parse()
                .expect("digit run parses");
            prop_assert!(count >= 2, "count {} below 2 in {:?}", count, compressed);
            prop_assert!(i < chars.len(), "dangling count in {:?}", compressed);
            prop_assert!(
                chars[i] == '(' || Command::is_wire_char(chars[i]),
                "count attached to {:?} in {:?}",
                chars[i],
                compressed
            );
        } else {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    prop_assert!(depth >= 0, "stray ) in {:?}", compressed);
                }
                _ => prop_assert!(
                    Command::is_wire_char(c),
                    "foreign char {:?} in {:?}",
                    c,
                    compressed
                ),
            }
            i += 1;
        }
    }

    prop_assert_eq!(depth, 0, "unbalanced parens in {:?}", compressed);
    Ok(())
}

proptest! {
    /// Property 1: Round-trip fidelity
    /// Expanding the compressed form reproduces the raw string exactly,
    /// and the parsed command sequences match.
    #[test]
    fn prop_roundtrip(raw in command_string()) {
        let compressed = optimize(&raw);
        let expanded = expand(&compressed).expect("compressor output expands");

        prop_assert_eq!(&expanded, &raw);
        prop_assert_eq!(parse(&expanded), parse(&raw));
    }

    /// Property 2: Run-length stage alone round-trips
    /// With no parentheses present, expansion is pure run expansion.
    #[test]
    fn prop_rle_roundtrip(raw in command_string()) {
        let rle = compress_runs(&raw);
        prop_assert_eq!(expand(&rle).expect("run tokens expand"), raw);
    }

    /// Property 3: Expansion is the identity on bare command strings
    /// No digits, no parentheses - nothing to expand.
    #[test]
    fn prop_expand_identity_on_raw(raw in command_string()) {
        prop_assert_eq!(expand(&raw).expect("bare text expands"), raw);
    }

    /// Property 4: Compressed output obeys the token grammar
    /// Counts are always >= 2 and always attached; parens balance.
    #[test]
    fn prop_compressed_well_formed(raw in command_string()) {
        assert_well_formed(&optimize(&raw))?;
    }

    /// Property 5: Determinism
    /// Identical input always yields identical output.
    #[test]
    fn prop_deterministic(raw in command_string()) {
        prop_assert_eq!(optimize(&raw), optimize(&raw));
        prop_assert_eq!(compress_patterns(&raw), compress_patterns(&raw));
    }

    /// Property 6: Parsing filters without reordering
    /// Over arbitrary Unicode input, parse keeps exactly the alphabet
    /// characters, in order.
    #[test]
    fn prop_parse_filters(input in ".*") {
        let parsed = parse(&input);
        let expected: Vec<Command> = input
            .chars()
            .filter_map(Command::from_char)
            .collect();

        prop_assert_eq!(&parsed, &expected);
        prop_assert!(parsed.len() <= input.chars().count());
    }

    /// Property 7: Compression never loses length information
    /// The expanded form has exactly as many characters as the input.
    #[test]
    fn prop_length_preserved(raw in command_string()) {
        let expanded = expand(&optimize(&raw)).expect("compressor output expands");
        prop_assert_eq!(expanded.chars().count(), raw.chars().count());
    }
}

/// Bolero fuzz test: the full pipeline never panics on arbitrary input.
#[test]
fn fuzz_pipeline_no_panic() {
    bolero::check!().with_type::<String>().for_each(|input| {
        let compressed = optimize(input);
        let _ = compress_runs(input);
        let _ = parse(input);

        // Whatever went in, the compressor's own output must expand.
        if input.chars().all(Command::is_wire_char) {
            let expanded = expand(&compressed).expect("compressor output expands");
            assert_eq!(&expanded, input);
        }
    });
}

/// Bolero fuzz test: the expander is total - arbitrary text either
/// expands or reports a malformed stream, without panicking.
#[test]
fn fuzz_expand_total() {
    bolero::check!().with_type::<String>().for_each(|input| {
        let _ = expand(input);
    });
}
