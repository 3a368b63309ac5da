//! Inline suppression directive parsing.
//!
//! A directive line has the shape `…polylint <directive>=<id>[,<id>…]`;
//! any comment prefix is permitted since parsing keys on the `polylint`
//! token alone.

use tracing::warn;

use crate::config::Scope;

use super::report::Ignore;

/// Any line containing this token is exempt from rule evaluation.
pub(crate) const DIRECTIVE_TOKEN: &str = "polylint";

const DISABLE_TOKEN: &str = "polylint disable";

/// Extract suppression records from one source line.
///
/// Returns one `Ignore` per comma-separated rule id. Unrecognized or
/// malformed directives produce a warning and no ignores.
pub(crate) fn extract_ignores(line: &str, source_line_no: usize) -> Vec<Ignore> {
    if !line.contains(DISABLE_TOKEN) {
        return Vec::new();
    }

    let Some((head, ids)) = line.split_once('=') else {
        warn!(line_no = source_line_no, "polylint directive has no '='");
        return Vec::new();
    };

    // head is everything up to the '=', e.g. `# polylint disable-next-line`
    let directive = head
        .split_once(DIRECTIVE_TOKEN)
        .map(|(_, rest)| rest.trim())
        .unwrap_or_default();
    let ids = ids.trim();

    let (scope, line_no) = match directive {
        "disable-for-file" => (Scope::File, 0),
        "disable-for-path" => (Scope::Path, 0),
        "disable-next-line" | "disable-line" | "disable" => (Scope::Line, source_line_no + 1),
        other => {
            warn!(
                line_no = source_line_no,
                directive = other,
                ids,
                "polylint directive not recognized"
            );
            return Vec::new();
        }
    };

    ids.split(',')
        .map(|id| Ignore {
            id: id.to_string(),
            scope,
            source_line_no,
            line_no,
        })
        .collect()
}

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;
