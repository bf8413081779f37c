use cmdcodec::{expand, optimize_with_stats, parse};
use std::env;

/// Demo program: compress a command string, expand it back, and show the
/// executable sequence.
///
/// Usage: cargo run --bin cmdcodec -- <command-string>
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <command-string>", args[0]);
        eprintln!("Commands: Л=left П=right В=up Н=down О=pick Б=drop");
        std::process::exit(1);
    }

    let raw = &args[1];

    let (compressed, stats) = optimize_with_stats(raw);
    let expanded = expand(&compressed).unwrap_or_else(|err| {
        eprintln!("Internal error: compressed form failed to expand: {err}");
        std::process::exit(1);
    });
    let commands = parse(&expanded);

    let dropped = raw.chars().count() - parse(raw).len();
    if dropped > 0 {
        eprintln!("Warning: {dropped} character(s) outside the alphabet were dropped");
    }

    println!("Raw:        {raw}");
    println!("Compressed: {compressed}");
    println!("Expanded:   {expanded}");
    println!(
        "Execution:  {} command(s): {}",
        commands.len(),
        commands
            .iter()
            .map(|c| format!("{c:?}"))
            .collect::<Vec<_>>()
            .join(" ")
    );

    println!("\n=== Statistics ===");
    println!("Input characters:      {}", stats.input_chars);
    println!("Compressed characters: {}", stats.compressed_chars);
    println!("Run tokens:            {}", stats.runs);
    println!("Group tokens:          {}", stats.groups);
    println!("Compression ratio:     {:.2}%", stats.compression_ratio());
}
