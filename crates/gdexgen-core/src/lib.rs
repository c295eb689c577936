//! gdexgen-core - GDExtension interface header generation
//!
//! This crate turns a declarative JSON schema describing a native
//! extension ABI into the canonical `gdextension_interface.h` C header:
//! - [`SchemaDocument`] and friends: the typed schema model
//! - [`generate`] / [`generate_from_slice`]: the pure text transformation
//! - [`GeneratorError`] for error handling
//!
//! The transformation is deterministic: the same schema bytes always
//! produce byte-identical header text. File I/O lives in the callers
//! (see the `gdexgen` binary), keeping this crate a pure function from
//! bytes to text.

mod doc;
mod emit;
mod error;
mod header;
mod interface;
pub mod naming;
mod schema;

pub use emit::make_args_text;
pub use error::{GeneratorError, GeneratorResult};
pub use header::{generate, generate_from_slice};
pub use schema::{
    ArgRef, EnumMember, EnumType, FunctionType, InterfaceEntry, SchemaDocument, SimpleType,
    StructMember, StructType, TypeEntry, TypeRef,
};

/// Conventional file name for the generated header.
pub const HEADER_FILE_NAME: &str = "gdextension_interface.h";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        GeneratorError, GeneratorResult, InterfaceEntry, SchemaDocument, TypeEntry, generate,
        generate_from_slice,
    };
}
