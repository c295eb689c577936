//! Header assembly: fixed banner, preamble, and epilogue around the
//! schema-driven sections.
//!
//! Generation is a pure function from schema bytes to the complete
//! header text; callers decide where the text goes. Given identical
//! input the output is byte-identical.

use tracing::debug;

use crate::emit::write_type_entry;
use crate::error::GeneratorResult;
use crate::interface::write_interface;
use crate::schema::SchemaDocument;

/// Opening lines of the file banner; the copyright lines from the
/// schema complete the box.
const FILE_HEADER: &str = "\
/**************************************************************************/\n\
/*  gdextension_interface.h                                               */\n";

/// Fixed preamble between the banner and the first type declaration.
///
/// Plain C builds get fixed-width includes plus `char32_t`/`char16_t`
/// compatibility typedefs; C++ builds open an `extern \"C\"` block
/// instead.
const INTRO: &str = r#"
#pragma once

/* This is a C class header, you can copy it and use it directly in your own binders.
 * Together with the `extension_api.json` file, you should be able to generate any binder.
 */

#ifndef __cplusplus
#include <stddef.h>
#include <stdint.h>

typedef uint32_t char32_t;
typedef uint16_t char16_t;
#else
#include <cstddef>
#include <cstdint>

extern "C" {
#endif

"#;

/// Fixed epilogue closing the `extern "C"` block under C++.
const OUTRO: &str = r#"
#ifdef __cplusplus
}
#endif
"#;

/// Generate the complete header text from an already-decoded document.
pub fn generate(document: &SchemaDocument) -> GeneratorResult<String> {
    let mut out = String::new();

    out.push_str(FILE_HEADER);
    for line in &document.copyright {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(INTRO);

    for entry in &document.types {
        write_type_entry(&mut out, entry);
    }
    for entry in &document.interface {
        write_interface(&mut out, entry)?;
    }

    out.push_str(OUTRO);

    debug!(
        types = document.types.len(),
        interfaces = document.interface.len(),
        bytes = out.len(),
        "generated interface header"
    );

    Ok(out)
}

/// Decode a schema document from raw bytes and generate the header.
pub fn generate_from_slice(bytes: &[u8]) -> GeneratorResult<String> {
    let document = SchemaDocument::from_slice(bytes)?;
    generate(&document)
}
