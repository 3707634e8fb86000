use crate::rules::{Issue, IssueCategory, Language, Scanner, Severity};

/// Detects injection-prone idioms, insecure credential storage, unsafe
/// memory operations, path traversal and unprotected shared mutable state.
///
/// The web rules are whole-text and case-sensitive; the Swift rules run
/// line by line and skip comment lines. All checks are independent, so a
/// single line can accumulate several issues.
pub struct SecurityScanner;

fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("//") || trimmed.starts_with("/*")
}

impl Scanner for SecurityScanner {
    fn scan(&self, language: Language, source: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        if source.trim().is_empty() {
            return issues;
        }

        if language == Language::JavaScript {
            if source.contains("eval(") {
                issues.push(Issue::new(
                    "Use of eval() can execute arbitrary code (injection risk)",
                    Severity::High,
                    None,
                    IssueCategory::Security,
                ));
            }
            if source.contains("innerHTML") {
                issues.push(Issue::new(
                    "Assigning to innerHTML can introduce XSS vulnerabilities",
                    Severity::Medium,
                    None,
                    IssueCategory::Security,
                ));
            }
            if source.contains("document.write(") {
                issues.push(Issue::new(
                    "document.write() can introduce XSS vulnerabilities",
                    Severity::Medium,
                    None,
                    IssueCategory::Security,
                ));
            }
        }

        // Traversal segments are suspect no matter what language the text
        // claims to be. A single `./` is one level and does not count.
        if source.contains("../") || source.contains("..\\") {
            issues.push(Issue::new(
                "Path traversal pattern detected: validate and canonicalize file paths",
                Severity::High,
                None,
                IssueCategory::Security,
            ));
        }

        if language == Language::Swift {
            for (idx, line) in source.lines().enumerate() {
                if is_comment_line(line) {
                    continue;
                }
                let n = idx + 1;

                let touches_defaults = line.contains("UserDefaults")
                    || line.contains(".set(")
                    || line.contains(".standard");
                if touches_defaults && line.to_lowercase().contains("password") {
                    issues.push(Issue::new(
                        "Insecure storage: password written to UserDefaults, use the Keychain",
                        Severity::High,
                        Some(n),
                        IssueCategory::Security,
                    ));
                }

                if line.contains("unsafeBitCast") || line.contains("unsafeDowncast") {
                    issues.push(Issue::new(
                        "Unsafe type casting bypasses Swift type safety",
                        Severity::High,
                        Some(n),
                        IssueCategory::Security,
                    ));
                }

                if line.contains("UnsafeMutablePointer")
                    || line.contains("UnsafePointer")
                    || line.contains("UnsafeRawPointer")
                {
                    issues.push(Issue::new(
                        "Unsafe pointer usage: prefer safe Swift abstractions",
                        Severity::Medium,
                        Some(n),
                        IssueCategory::Security,
                    ));
                }

                if line.contains("var")
                    && (line.contains("static") || line.contains("class var"))
                    && !line.contains("private")
                {
                    issues.push(Issue::new(
                        "Shared mutable state without synchronization (race condition risk)",
                        Severity::Medium,
                        Some(n),
                        IssueCategory::Security,
                    ));
                }
            }
        }

        issues
    }
}
