//! Interface entry emitter.
//!
//! Each interface entry becomes a structured Doxygen comment followed by
//! a function-pointer typedef under a derived C name, then one blank
//! line. The doc-tag assembly order is fixed: `@name`, `@since`,
//! `@deprecated`, the free-text description, `@param` tags, `@return`,
//! `@see`.

use crate::doc::write_doxygen_comment;
use crate::emit::write_function_pointer;
use crate::error::{GeneratorError, GeneratorResult};
use crate::naming::interface_type_name;
use crate::schema::InterfaceEntry;

/// Emit one interface entry into the output buffer.
pub fn write_interface(out: &mut String, entry: &InterfaceEntry) -> GeneratorResult<()> {
    let doc = assemble_doc_lines(entry)?;
    write_doxygen_comment(out, &doc);

    let type_name = match &entry.legacy_type_name {
        Some(name) => name.clone(),
        None => interface_type_name(&entry.name),
    };
    let ret_ty = entry.ret.as_ref().map(|ret| ret.ty.as_str()).unwrap_or("void");

    write_function_pointer(out, &type_name, ret_ty, entry.args.as_deref(), None);
    out.push('\n');

    Ok(())
}

/// Build the ordered doc lines for an interface entry.
///
/// An empty string denotes a blank separator line inside the comment.
/// The description loop inserts a blank before both its first and second
/// line, so a one-line description gets one separator while a longer one
/// gets two consecutive separators before its first line. That asymmetry
/// is long-standing upstream behavior and is kept as-is.
fn assemble_doc_lines(entry: &InterfaceEntry) -> GeneratorResult<Vec<String>> {
    let mut doc = vec![
        format!("@name {}", entry.name),
        format!("@since {}", entry.since),
    ];

    if let Some(deprecated) = &entry.deprecated {
        doc.push(format!("@deprecated {}", strip_deprecated_prefix(deprecated)));
    }

    for (index, line) in entry.doc.iter().enumerate() {
        if index < 2 {
            doc.push(String::new());
        }
        doc.push(line.clone());
    }

    if let Some(args) = entry.args.as_deref()
        && !args.is_empty()
    {
        doc.push(String::new());
        for arg in args {
            let name = arg.name.as_deref().ok_or_else(|| {
                GeneratorError::SchemaShape(format!(
                    "interface function {} has an argument without a name",
                    entry.name
                ))
            })?;
            match arg.doc.as_deref() {
                Some(lines) if !lines.is_empty() => {
                    doc.push(format!("@param {} {}", name, lines.join(" ")));
                }
                _ => doc.push(format!("@param {name}")),
            }
        }
    }

    if let Some(ret) = &entry.ret
        && ret.ty != "void"
    {
        doc.push(String::new());
        match ret.doc.as_deref() {
            Some(lines) if !lines.is_empty() => {
                doc.push(format!("@return {}", lines.join(" ")));
            }
            _ => doc.push("@return".to_string()),
        }
    }

    if let Some(see) = entry.see.as_deref()
        && !see.is_empty()
    {
        doc.push(String::new());
        for target in see {
            doc.push(format!("@see {target}"));
        }
    }

    Ok(doc)
}

/// Strip a leading "deprecated" word (any case) from a deprecation
/// notice, so the text reads naturally after the `@deprecated` tag.
fn strip_deprecated_prefix(text: &str) -> &str {
    match text.split_once(char::is_whitespace) {
        Some((first, rest)) if first.eq_ignore_ascii_case("deprecated") => rest.trim_start(),
        _ => text,
    }
}
