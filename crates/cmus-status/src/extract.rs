//! Single-line field extraction for `cmus-remote -Q` output.
//!
//! Every helper takes an already trimmed line and the full prefix it must
//! start with (including the trailing space, e.g. `"tag artist "`).

use tracing::error;

/// Multi-word tag value: everything after `tag <name>`, whitespace collapsed.
pub fn extract_tag(line: &str, prefix: &str) -> Option<String> {
    if !line.starts_with(prefix) {
        return None;
    }
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return None;
    }
    Some(fields[2..].join(" "))
}

/// Second whitespace-separated token, verbatim.
pub fn extract_token<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    if !line.starts_with(prefix) {
        return None;
    }
    line.split_whitespace().nth(1)
}

/// Second token parsed as a non-negative base-10 integer.
pub fn extract_number(line: &str, prefix: &str) -> Option<u64> {
    let token = extract_token(line, prefix)?;
    match token.parse::<u64>() {
        Ok(value) => Some(value),
        Err(e) => {
            error!(err = %e, field = token, "conversion failed");
            None
        }
    }
}
