//! Documentation comment rendering.
//!
//! Two comment shapes appear in the generated header: the compact
//! `/* ... */` block used next to type and member declarations, and the
//! Doxygen `/**` block that precedes every interface typedef. Lines are
//! passed through verbatim; no wrapping, trimming, or escaping happens
//! here.

use std::fmt::Write;

/// Render doc lines as a C block comment at the given indentation.
///
/// A single line collapses to one physical line (`/* line */`); anything
/// else opens with `/* `, continues with ` * `, and closes with ` */` on
/// its own line.
pub fn write_block_comment(out: &mut String, lines: &[String], indent: &str) {
    if lines.len() == 1 {
        let _ = writeln!(out, "{indent}/* {} */", lines[0]);
        return;
    }

    let mut first = true;
    for line in lines {
        if first {
            let _ = write!(out, "{indent}/* ");
            first = false;
        } else {
            let _ = write!(out, "{indent} * ");
        }
        let _ = writeln!(out, "{line}");
    }

    let _ = writeln!(out, "{indent} */");
}

/// Render doc lines as a Doxygen comment block.
///
/// Always uses the explicit `/**` ... ` */` form regardless of line
/// count. An empty line renders as a bare ` *` continuation.
pub fn write_doxygen_comment(out: &mut String, lines: &[String]) {
    out.push_str("/**\n");
    for line in lines {
        if line.is_empty() {
            out.push_str(" *\n");
        } else {
            let _ = writeln!(out, " * {line}");
        }
    }
    out.push_str(" */\n");
}
