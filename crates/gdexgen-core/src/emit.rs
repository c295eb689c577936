//! C declaration emitters for the `types` section.
//!
//! One emitter per type-entry variant, each appending exactly one C
//! declaration (plus any preceding doc comment) to the output buffer.
//! Enum and struct emitters append a trailing blank line; simple and
//! function emitters do not, which is what produces the tight grouping
//! of one-line typedefs in the generated header.

use std::fmt::Write;

use crate::doc::write_block_comment;
use crate::schema::{ArgRef, EnumType, FunctionType, SimpleType, StructType, TypeEntry};

/// Separator between a C type expression and the following identifier.
///
/// Pointer types carry their `*` flush against the identifier, so
/// `void*` gets no space while `uint64_t` gets exactly one.
pub fn pointer_separator(ty: &str) -> &'static str {
    if ty.ends_with('*') { "" } else { " " }
}

/// Trailing deprecation note for a declaration line, or empty.
fn deprecated_note(deprecated: Option<&str>) -> String {
    match deprecated {
        Some(text) => format!(" /* {text} */"),
        None => String::new(),
    }
}

/// Render an argument list: `", "`-joined, each argument `type` alone or
/// `type name` under the pointer-suffix spacing rule.
pub fn make_args_text(args: &[ArgRef]) -> String {
    let combined: Vec<String> = args
        .iter()
        .map(|arg| match &arg.name {
            Some(name) => format!("{}{}{}", arg.ty, pointer_separator(&arg.ty), name),
            None => arg.ty.clone(),
        })
        .collect();
    combined.join(", ")
}

/// Emit one `types` entry, dispatching on its variant.
///
/// Unknown entries produce no output; the skip is deliberate so that a
/// schema from a newer host can still generate a header for the tags
/// this version understands.
pub fn write_type_entry(out: &mut String, entry: &TypeEntry) {
    match entry {
        TypeEntry::Simple(simple) => write_simple_type(out, simple),
        TypeEntry::Enum(decl) => write_enum_type(out, decl),
        TypeEntry::Function(func) => write_function_type(out, func),
        TypeEntry::Struct(decl) => write_struct_type(out, decl),
        TypeEntry::Unknown => {
            tracing::debug!("skipping types entry with unknown tag");
        }
    }
}

fn write_simple_type(out: &mut String, simple: &SimpleType) {
    if let Some(doc) = &simple.doc {
        write_block_comment(out, doc, "");
    }
    let _ = writeln!(
        out,
        "typedef {}{}{};{}",
        simple.def,
        pointer_separator(&simple.def),
        simple.name,
        deprecated_note(simple.deprecated.as_deref())
    );
}

fn write_enum_type(out: &mut String, decl: &EnumType) {
    if let Some(doc) = &decl.doc {
        write_block_comment(out, doc, "");
    }
    out.push_str("typedef enum {\n");
    for member in &decl.members {
        if let Some(doc) = &member.doc {
            write_block_comment(out, doc, "\t");
        }
        let _ = writeln!(out, "\t{} = {},", member.name, member.value);
    }
    let _ = writeln!(
        out,
        "}} {};{}\n",
        decl.name,
        deprecated_note(decl.deprecated.as_deref())
    );
}

fn write_function_type(out: &mut String, func: &FunctionType) {
    if let Some(doc) = &func.doc {
        write_block_comment(out, doc, "");
    }
    write_function_pointer(
        out,
        &func.name,
        &func.ret.ty,
        func.args.as_deref(),
        func.deprecated.as_deref(),
    );
}

fn write_struct_type(out: &mut String, decl: &StructType) {
    if let Some(doc) = &decl.doc {
        write_block_comment(out, doc, "");
    }
    out.push_str("typedef struct {\n");
    for member in &decl.members {
        if let Some(doc) = &member.doc {
            write_block_comment(out, doc, "\t");
        }
        let _ = writeln!(
            out,
            "\t{}{}{};",
            member.ty,
            pointer_separator(&member.ty),
            member.name
        );
    }
    let _ = writeln!(
        out,
        "}} {};{}\n",
        decl.name,
        deprecated_note(decl.deprecated.as_deref())
    );
}

/// Emit a function-pointer typedef line.
///
/// Shared between `"function"` type entries and the interface emitter,
/// which passes a derived typedef name and its own return/argument
/// records. No trailing blank line; callers that want one add it.
pub(crate) fn write_function_pointer(
    out: &mut String,
    name: &str,
    ret_ty: &str,
    args: Option<&[ArgRef]>,
    deprecated: Option<&str>,
) {
    let args_text = args.map(make_args_text).unwrap_or_default();
    let _ = writeln!(
        out,
        "typedef {}{}(*{})({});{}",
        ret_ty,
        pointer_separator(ret_ty),
        name,
        args_text,
        deprecated_note(deprecated)
    );
}

#[cfg(test)]
#[path = "emit/emit_tests.rs"]
mod emit_tests;
