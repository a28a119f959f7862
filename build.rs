//! Build script to embed word lists
//!
//! Scans `data/` for `{solutions,guesses}_<lang>_<len>.txt` files and generates
//! a lookup table of `(name, contents)` pairs.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let data_dir = Path::new(&manifest_dir).join("data");

    let mut lists: Vec<(String, String)> = fs::read_dir(&data_dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", data_dir.display()))
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter_map(|path| {
            let name = path.file_stem()?.to_str()?.to_string();
            let is_txt = path.extension().is_some_and(|ext| ext == "txt");
            (is_txt && is_list_name(&name)).then(|| (name, path.display().to_string()))
        })
        .collect();
    lists.sort();

    let output_path = Path::new(&out_dir).join("word_lists.rs");
    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Embedded word lists as `(name, contents)` pairs").unwrap();
    writeln!(output, "pub const WORD_LISTS: &[(&str, &str)] = &[").unwrap();
    for (name, path) in &lists {
        writeln!(output, "    ({name:?}, include_str!({path:?})),").unwrap();
    }
    writeln!(output, "];").unwrap();

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data");
    for (_, path) in &lists {
        println!("cargo:rerun-if-changed={path}");
    }
}

/// Matches `solutions_en_5` / `guesses_pl_6` style names
fn is_list_name(name: &str) -> bool {
    let parts: Vec<&str> = name.split('_').collect();
    matches!(parts.as_slice(), [role, lang, len]
        if (*role == "solutions" || *role == "guesses")
            && !lang.is_empty()
            && len.parse::<usize>().is_ok())
}
