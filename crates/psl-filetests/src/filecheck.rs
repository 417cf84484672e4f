//! Filecheck directive parsing and matching using the filecheck crate.

use filecheck::{Checker, CheckerBuilder, NO_VARIABLES};

/// Build a filechecker from expected text containing directives.
///
/// Lines that are empty or start with `#` are comment/section markers and
/// do not become directives.
pub fn build_filechecker(expected_text: &str) -> Result<Checker, String> {
    let mut builder = CheckerBuilder::new();

    for line in expected_text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        builder
            .directive(trimmed)
            .map_err(|e| format!("Failed to parse filecheck directive '{}': {}", trimmed, e))?;
    }

    Ok(builder.finish())
}

/// Match actual output against filecheck directives.
pub fn match_filecheck(actual: &str, expected_text: &str) -> Result<(), String> {
    let checker = build_filechecker(expected_text)?;

    if checker.check(actual, NO_VARIABLES).map_err(|e| format!("Filecheck error: {}", e))? {
        Ok(())
    } else {
        let (_, explain) = checker
            .explain(actual, NO_VARIABLES)
            .map_err(|e| format!("Failed to get filecheck explanation: {}", e))?;

        Err(format!("Filecheck failed:\n{}", explain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_directives_pass() {
        let actual = "first line\nsecond line\n";
        let expected = "check: first line\nnextln: second line\n";
        assert!(match_filecheck(actual, expected).is_ok());
    }

    #[test]
    fn test_out_of_order_directives_fail() {
        let actual = "first line\nsecond line\n";
        let expected = "check: second line\ncheck: first line\n";
        assert!(match_filecheck(actual, expected).is_err());
    }

    #[test]
    fn test_comment_lines_are_skipped() {
        let actual = "only line\n";
        let expected = "# section marker\ncheck: only line\n";
        assert!(match_filecheck(actual, expected).is_ok());
    }
}
