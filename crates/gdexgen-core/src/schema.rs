//! Typed schema model for the interface description document.
//!
//! The schema arrives as JSON with three top-level keys: `_copyright`
//! (verbatim header lines), `types` (tagged type declarations), and
//! `interface` (described host-callable functions). Decoding happens in
//! one validating pass at this boundary; every emitter downstream works
//! on these records and never touches a dynamic JSON tree.

use serde::Deserialize;

use crate::error::{GeneratorError, GeneratorResult};

/// The root schema document.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaDocument {
    /// Copyright lines, passed through verbatim after the file banner.
    #[serde(default, rename = "_copyright")]
    pub copyright: Vec<String>,

    /// Type declarations, emitted in schema order.
    #[serde(default)]
    pub types: Vec<TypeEntry>,

    /// Interface functions, emitted in schema order after the types.
    #[serde(default)]
    pub interface: Vec<InterfaceEntry>,
}

impl SchemaDocument {
    /// Decode a schema document from raw UTF-8 bytes.
    ///
    /// Invalid UTF-8 and malformed JSON are [`GeneratorError::SchemaParse`];
    /// a well-formed tree that does not match the typed model is
    /// [`GeneratorError::SchemaShape`]; a document with no entries at all
    /// is [`GeneratorError::SchemaEmpty`].
    pub fn from_slice(bytes: &[u8]) -> GeneratorResult<Self> {
        let text = std::str::from_utf8(bytes)?;

        let tree: serde_json::Value = serde_json::from_str(text)
            .map_err(|err| GeneratorError::SchemaParse(err.to_string()))?;

        let document: SchemaDocument = serde_json::from_value(tree)
            .map_err(|err| GeneratorError::SchemaShape(err.to_string()))?;

        if document.is_empty() {
            return Err(GeneratorError::SchemaEmpty);
        }

        Ok(document)
    }

    /// True when the document carries no entries of any kind.
    pub fn is_empty(&self) -> bool {
        self.copyright.is_empty() && self.types.is_empty() && self.interface.is_empty()
    }
}

/// One entry of the `types` array, discriminated by its `type` tag.
///
/// Unrecognized tags decode to [`TypeEntry::Unknown`] and are skipped at
/// emit time; this is the one deliberate ignore-and-continue policy in
/// the generator. Every other shape mismatch is fatal.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TypeEntry {
    /// A plain `typedef` alias.
    Simple(SimpleType),

    /// A C `enum` with explicitly valued members.
    Enum(EnumType),

    /// A function-pointer `typedef`.
    Function(FunctionType),

    /// A C `struct` with named members.
    Struct(StructType),

    /// An entry with a tag this generator does not know.
    #[serde(other)]
    Unknown,
}

/// Payload of a `"type": "simple"` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SimpleType {
    /// The C identifier being defined.
    pub name: String,

    /// The underlying C type expression.
    pub def: String,

    /// Documentation lines preceding the declaration.
    #[serde(default)]
    pub doc: Option<Vec<String>>,

    /// Deprecation note appended after the declaration.
    #[serde(default)]
    pub deprecated: Option<String>,
}

/// Payload of a `"type": "enum"` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumType {
    pub name: String,
    pub members: Vec<EnumMember>,

    #[serde(default)]
    pub doc: Option<Vec<String>>,

    #[serde(default)]
    pub deprecated: Option<String>,
}

/// One member of an enum declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumMember {
    pub name: String,

    /// Rendered as a signed decimal integer.
    pub value: i64,

    #[serde(default)]
    pub doc: Option<Vec<String>>,
}

/// Payload of a `"type": "function"` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionType {
    pub name: String,

    /// Return type of the function pointer.
    pub ret: TypeRef,

    #[serde(default)]
    pub args: Option<Vec<ArgRef>>,

    #[serde(default)]
    pub doc: Option<Vec<String>>,

    #[serde(default)]
    pub deprecated: Option<String>,
}

/// Payload of a `"type": "struct"` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct StructType {
    pub name: String,
    pub members: Vec<StructMember>,

    #[serde(default)]
    pub doc: Option<Vec<String>>,

    #[serde(default)]
    pub deprecated: Option<String>,
}

/// One member of a struct declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct StructMember {
    #[serde(rename = "type")]
    pub ty: String,

    pub name: String,

    #[serde(default)]
    pub doc: Option<Vec<String>>,
}

/// A reference to a C type, with optional documentation.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeRef {
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub doc: Option<Vec<String>>,
}

/// One argument of a function-pointer signature.
#[derive(Debug, Clone, Deserialize)]
pub struct ArgRef {
    #[serde(rename = "type")]
    pub ty: String,

    /// Argument name; optional in plain function typedefs, required for
    /// interface entries (an `@param` tag needs a name).
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub doc: Option<Vec<String>>,
}

/// One entry of the `interface` array: a host-callable function exposed
/// through a generated function-pointer typedef.
#[derive(Debug, Clone, Deserialize)]
pub struct InterfaceEntry {
    /// snake_case schema identifier; the C typedef name is derived from it.
    pub name: String,

    /// Version tag for the `@since` doc tag.
    pub since: String,

    /// Free-text deprecation notice. A leading "deprecated" word (any
    /// case) is stripped before the text joins the `@deprecated` tag.
    #[serde(default)]
    pub deprecated: Option<String>,

    /// Free-text description lines. Required: an interface entry without
    /// documentation is a shape violation, though an explicitly empty
    /// array is accepted.
    pub doc: Vec<String>,

    #[serde(default)]
    pub args: Option<Vec<ArgRef>>,

    #[serde(default)]
    pub ret: Option<TypeRef>,

    /// Cross-references, one `@see` tag each.
    #[serde(default)]
    pub see: Option<Vec<String>>,

    /// Verbatim override for the derived C typedef name.
    #[serde(default)]
    pub legacy_type_name: Option<String>,
}
