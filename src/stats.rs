use crate::command::{parse, Command};
use crate::pattern::optimize;
use ahash::AHashMap as HashMap;

/// Statistics about one compression.
#[derive(Debug, Clone)]
pub struct CompressionStats {
    /// Characters in the raw input.
    pub input_chars: usize,
    /// Characters in the compressed form.
    pub compressed_chars: usize,
    /// `<count>(...)` group tokens in the compressed form.
    pub groups: usize,
    /// `<count><symbol>` run tokens in the compressed form.
    pub runs: usize,
    /// How often each command occurs in the validated input.
    pub command_counts: HashMap<Command, usize>,
}

impl CompressionStats {
    /// Returns the compressed size as a percentage of the input size.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_chars == 0 {
            0.0
        } else {
            (self.compressed_chars as f64 / self.input_chars as f64) * 100.0
        }
    }
}

/// Compresses `raw` and reports statistics alongside the compressed form.
///
/// The compressed string is exactly what [`optimize`] returns.
pub fn optimize_with_stats(raw: &str) -> (String, CompressionStats) {
    let compressed = optimize(raw);

    let mut command_counts = HashMap::new();
    for cmd in parse(raw) {
        *command_counts.entry(cmd).or_insert(0) += 1;
    }

    let groups = compressed.chars().filter(|&c| c == '(').count();
    let mut runs = 0;
    let mut chars = compressed.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            while chars.peek().is_some_and(|d| d.is_ascii_digit()) {
                chars.next();
            }
            // A digit run prefixes either a group or a run token.
            if chars.peek() != Some(&'(') {
                runs += 1;
            }
        }
    }

    let stats = CompressionStats {
        input_chars: raw.chars().count(),
        compressed_chars: compressed.chars().count(),
        groups,
        runs,
        command_counts,
    };

    (compressed, stats)
}
