//! I/O utilities shared across CLI commands: interactive stdin reads and
//! JSONL session-log ingestion.

use std::io::BufRead;
use std::path::Path;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Used by interactive commands. Trims whitespace and returns `None` on EOF
/// or read errors.
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            let trimmed = line.trim();
            Some(trimmed.to_string())
        }
        Err(_) => None, // Read error
    }
}

/// Collect the lines of one JSONL file, or of every `.jsonl` file in a
/// directory (sorted by name so aggregation is stable).
pub fn read_jsonl_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, String> {
    let path = path.as_ref();
    let mut files = Vec::new();
    if path.is_dir() {
        let entries = std::fs::read_dir(path)
            .map_err(|e| format!("Failed to read directory {}: {}", path.display(), e))?;
        for entry in entries.flatten() {
            let p = entry.path();
            if p.extension().is_some_and(|ext| ext == "jsonl") {
                files.push(p);
            }
        }
        files.sort();
        if files.is_empty() {
            return Err(format!("No .jsonl files found in {}", path.display()));
        }
    } else {
        files.push(path.to_path_buf());
    }

    let mut lines = Vec::new();
    for file in files {
        let content = std::fs::read_to_string(&file)
            .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
        lines.extend(
            content
                .lines()
                .filter(|l| !l.trim().is_empty())
                .map(|l| l.to_string()),
        );
    }
    Ok(lines)
}
