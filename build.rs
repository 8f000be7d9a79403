//! Build script to generate the embedded dictionary
//!
//! Reads the word list file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const WORD_FILE: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap_or_else(|e| panic!("OUT_DIR not set: {e}"));

    if let Err(e) = generate_word_list(
        WORD_FILE,
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Dictionary of guessable and target words",
    ) {
        panic!("Failed to generate word list from {WORD_FILE}: {e}");
    }

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed={WORD_FILE}");
}

fn generate_word_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) -> io::Result<()> {
    let content = fs::read_to_string(input_path)?;

    // Blank lines and `#` comments are skipped; entries are stored upper-case
    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_ascii_uppercase)
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)?;

    writeln!(output, "// Generated word list")?;
    writeln!(output, "//")?;
    writeln!(output, "// {doc_comment} ({count} words)")?;
    writeln!(output)?;
    writeln!(output, "/// {doc_comment}")?;
    writeln!(output, "pub const {const_name}: &[&str] = &[")?;

    for word in &words {
        writeln!(output, "    \"{word}\",")?;
    }

    writeln!(output, "];")?;
    writeln!(output)?;
    writeln!(output, "/// Number of words in {const_name}")?;
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};")?;

    Ok(())
}
