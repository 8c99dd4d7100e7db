//! Source width lint for the `ui` crate.
//!
//! Lines in `src/` must stay within rustfmt's default `max_width` of 100 columns; rustfmt
//! gives up silently on long lines inside `rsx!`, so this catches what formatting misses.

use std::fs;
use std::path::{Path, PathBuf};

const MAX_WIDTH: usize = 100;

fn rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| panic!("reading {dir:?}: {err}"));
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_files(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

#[test]
fn source_lines_fit_max_width() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut files = Vec::new();
    rust_files(&src, &mut files);
    assert!(!files.is_empty(), "no sources found under {src:?}");

    let mut long = Vec::new();
    for file in &files {
        let text = fs::read_to_string(file).unwrap();
        for (number, line) in text.lines().enumerate() {
            let width = line.chars().count();
            if width > MAX_WIDTH {
                long.push(format!("{}:{} ({width} columns)", file.display(), number + 1));
            }
        }
    }

    assert!(
        long.is_empty(),
        "Lines wider than {MAX_WIDTH} columns:\n  {}",
        long.join("\n  ")
    );
}
