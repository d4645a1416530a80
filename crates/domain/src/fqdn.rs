//! Helpers for fully-qualified domain names.
//!
//! Names are handled in their textual presentation form. A name is fully
//! qualified when it ends with a trailing dot; the root is `"."`.

pub const ROOT: &str = ".";

pub fn is_fqdn(name: &str) -> bool {
    let Some(body) = name.strip_suffix('.') else {
        return false;
    };
    // An odd run of backslashes escapes the final dot.
    let backslashes = body.bytes().rev().take_while(|&b| b == b'\\').count();
    backslashes % 2 == 0
}

/// Appends the trailing dot when missing.
pub fn fqdn(name: &str) -> String {
    if is_fqdn(name) {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Lowercase fully-qualified form used for every record name and target.
pub fn to_lower_fqdn(name: &str) -> String {
    fqdn(&name.to_lowercase())
}

/// Strips the leftmost label.
///
/// Returns `None` once `name` is the root (or empty), so a walk up the
/// hierarchy always terminates.
pub fn parent(name: &str) -> Option<String> {
    if name.is_empty() || name == ROOT {
        return None;
    }

    let bytes = name.as_bytes();
    let mut escaped = false;
    for (i, &b) in bytes.iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' => escaped = true,
            b'.' => {
                let rest = &name[i + 1..];
                return Some(if rest.is_empty() {
                    ROOT.to_string()
                } else {
                    rest.to_string()
                });
            }
            _ => {}
        }
    }

    // Single relative label: its parent is the root.
    Some(ROOT.to_string())
}
