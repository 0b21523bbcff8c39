#![allow(dead_code)]

pub use dlt_launcher_test_utils::builders;
pub use dlt_launcher_test_utils::init_tracing;

/// Split captured console output into lines.
pub fn output_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Lines starting with `prefix`.
pub fn lines_with_prefix<'a>(lines: &'a [String], prefix: &str) -> Vec<&'a str> {
    lines
        .iter()
        .filter(|l| l.starts_with(prefix))
        .map(String::as_str)
        .collect()
}
