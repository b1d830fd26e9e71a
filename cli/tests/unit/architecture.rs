//! Structural tests for layer boundary enforcement.
//!
//! These tests scan source files to verify that domain and application code
//! stay independent of the ECS client, the terminal, and the CLI.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

/// Track brace depth and return whether a line is inside a `#[cfg(test)]` block.
struct CfgTestTracker {
    in_test_block: bool,
    brace_depth: i32,
    test_block_start_depth: i32,
}

impl CfgTestTracker {
    fn new() -> Self {
        Self {
            in_test_block: false,
            brace_depth: 0,
            test_block_start_depth: 0,
        }
    }

    /// Process a line and return `true` if it's inside a `#[cfg(test)]` block.
    fn process_line(&mut self, line: &str) -> bool {
        if line.trim().contains("#[cfg(test)]") {
            self.in_test_block = true;
            self.test_block_start_depth = self.brace_depth;
        }
        for ch in line.chars() {
            match ch {
                '{' => self.brace_depth += 1,
                '}' => {
                    self.brace_depth -= 1;
                    if self.in_test_block && self.brace_depth <= self.test_block_start_depth {
                        self.in_test_block = false;
                    }
                }
                _ => {}
            }
        }
        self.in_test_block
    }
}

/// Non-comment lines outside `#[cfg(test)]` blocks, with 1-based line numbers.
fn production_lines(path: &Path) -> Vec<(usize, String)> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    let mut tracker = CfgTestTracker::new();
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let in_test = tracker.process_line(line);
            let trimmed = line.trim();
            !in_test && !trimmed.starts_with("//") && !trimmed.is_empty()
        })
        .map(|(i, line)| (i + 1, line.to_string()))
        .collect()
}

fn src_dir(parts: &[&str]) -> PathBuf {
    parts
        .iter()
        .fold(Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), |p, s| {
            p.join(s)
        })
}

fn relative(file: &Path) -> String {
    file.strip_prefix(env!("CARGO_MANIFEST_DIR"))
        .unwrap_or(file)
        .display()
        .to_string()
}

/// Every line under `dir` containing one of `needles`.
fn find_violations(dir: &Path, needles: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();
    for file in collect_rs_files(dir) {
        let rel = relative(&file);
        for (lineno, line) in production_lines(&file) {
            for needle in needles {
                if line.contains(needle) {
                    violations.push(format!("{rel}:{lineno}: `{needle}`: {}", line.trim()));
                }
            }
        }
    }
    violations
}

// ── Layer imports ─────────────────────────────────────────────────────────────

#[test]
fn domain_imports_no_outer_layer() {
    let violations = find_violations(
        &src_dir(&["domain"]),
        &[
            "crate::application",
            "crate::infra",
            "crate::commands",
            "crate::output",
            "crate::app",
        ],
    );
    assert!(
        violations.is_empty(),
        "domain/ must only depend on itself:\n{}",
        violations.join("\n")
    );
}

#[test]
fn application_imports_no_infra_commands_or_output() {
    let violations = find_violations(
        &src_dir(&["application"]),
        &["crate::infra", "crate::commands", "crate::output", "reqwest"],
    );
    assert!(
        violations.is_empty(),
        "application/ must reach the provider and terminal through ports only:\n{}",
        violations.join("\n")
    );
}

#[test]
fn infra_has_no_imports_from_commands_or_output() {
    let violations = find_violations(&src_dir(&["infra"]), &["crate::commands", "crate::output"]);
    assert!(
        violations.is_empty(),
        "infra/ must not import from commands/ or output/:\n{}",
        violations.join("\n")
    );
}

// ── Terminal access ───────────────────────────────────────────────────────────

#[test]
fn only_output_and_entry_point_print() {
    let mut violations = Vec::new();
    for layer in ["domain", "application", "infra", "commands"] {
        violations.extend(find_violations(
            &src_dir(&[layer]),
            &["println!", "eprintln!", "print!("],
        ));
    }
    assert!(
        violations.is_empty(),
        "print macros outside output/ and main.rs:\n{}",
        violations.join("\n")
    );
}

#[test]
fn services_are_generic_over_ports() {
    let violations = find_violations(
        &src_dir(&["application", "services"]),
        &["OtcEcsClient", "TerminalReporter"],
    );
    assert!(
        violations.is_empty(),
        "services must take trait bounds, not concrete adapters:\n{}",
        violations.join("\n")
    );
}

// ── Tier sequences live in the domain ─────────────────────────────────────────

#[test]
fn tier_sequences_are_defined_in_domain() {
    let violations: Vec<String> = find_violations(&src_dir(&[]), &["[Tier::"])
        .into_iter()
        .filter(|v| !v.starts_with("src/domain/"))
        .collect();
    assert!(
        violations.is_empty(),
        "tier sequences must come from Action::tier_order or Tier::ALL:\n{}",
        violations.join("\n")
    );
}
