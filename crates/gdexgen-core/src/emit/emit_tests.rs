#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn parse_entry(json: &str) -> TypeEntry {
    serde_json::from_str(json).unwrap()
}

fn emit(json: &str) -> String {
    let mut out = String::new();
    write_type_entry(&mut out, &parse_entry(json));
    out
}

#[test_case("uint64_t", " "; "plain type gets one space")]
#[test_case("void*", ""; "pointer type gets no space")]
#[test_case("const char*", ""; "qualified pointer gets no space")]
#[test_case("GDExtensionStringPtr", " "; "opaque handle gets one space")]
fn pointer_separator___follows_suffix_rule(ty: &str, expected: &str) {
    assert_eq!(pointer_separator(ty), expected);
}

#[test]
fn make_args_text___unnamed_and_named___joins_with_comma_space() {
    let args: Vec<ArgRef> = serde_json::from_str(
        r#"[{"type": "int"}, {"type": "const char*", "name": "label"}]"#,
    )
    .unwrap();

    assert_eq!(make_args_text(&args), "int, const char*label");
}

#[test]
fn make_args_text___empty___renders_empty_string() {
    assert_eq!(make_args_text(&[]), "");
}

#[test]
fn make_args_text___named_plain_type___separated_by_space() {
    let args: Vec<ArgRef> =
        serde_json::from_str(r#"[{"type": "uint64_t", "name": "p_amount"}]"#).unwrap();

    assert_eq!(make_args_text(&args), "uint64_t p_amount");
}

#[test]
fn write_type_entry___simple_pointer_type___no_space_before_name() {
    let out = emit(r#"{"type": "simple", "name": "GDExtensionPtr", "def": "void*"}"#);

    assert_eq!(out, "typedef void*GDExtensionPtr;\n");
}

#[test]
fn write_type_entry___simple_plain_type___one_space_before_name() {
    let out = emit(r#"{"type": "simple", "name": "GDExtensionBool", "def": "uint8_t"}"#);

    assert_eq!(out, "typedef uint8_t GDExtensionBool;\n");
}

#[test]
fn write_type_entry___simple_with_doc___doc_precedes_typedef() {
    let out = emit(
        r#"{"type": "simple", "name": "GDExtensionBool", "def": "uint8_t", "doc": ["A boolean."]}"#,
    );

    assert_eq!(out, "/* A boolean. */\ntypedef uint8_t GDExtensionBool;\n");
}

#[test]
fn write_type_entry___simple_with_deprecated___appends_trailing_note() {
    let out = emit(
        r#"{"type": "simple", "name": "GDExtensionOld", "def": "void*", "deprecated": "Use GDExtensionNew instead."}"#,
    );

    assert_eq!(
        out,
        "typedef void*GDExtensionOld; /* Use GDExtensionNew instead. */\n"
    );
}

#[test]
fn write_type_entry___enum___members_in_order_with_blank_line_after() {
    let out = emit(
        r#"{"type": "enum", "name": "GDExtensionCallErrorType", "members": [
            {"name": "GDEXTENSION_CALL_OK", "value": 0},
            {"name": "GDEXTENSION_CALL_ERROR_INVALID_METHOD", "value": 1}
        ]}"#,
    );

    assert_eq!(
        out,
        "typedef enum {\n\
         \tGDEXTENSION_CALL_OK = 0,\n\
         \tGDEXTENSION_CALL_ERROR_INVALID_METHOD = 1,\n\
         } GDExtensionCallErrorType;\n\n"
    );
}

#[test]
fn write_type_entry___enum_member_doc___indented_one_tab() {
    let out = emit(
        r#"{"type": "enum", "name": "E", "members": [
            {"name": "E_FIRST", "value": -1, "doc": ["Sentinel value."]}
        ]}"#,
    );

    assert_eq!(out, "typedef enum {\n\t/* Sentinel value. */\n\tE_FIRST = -1,\n} E;\n\n");
}

#[test]
fn write_type_entry___enum_value___rendered_as_signed_decimal() {
    let out = emit(
        r#"{"type": "enum", "name": "E", "members": [{"name": "E_NEG", "value": -2147483648}]}"#,
    );

    assert!(out.contains("\tE_NEG = -2147483648,\n"));
}

#[test]
fn write_type_entry___function___no_trailing_blank_line() {
    let out = emit(
        r#"{"type": "function", "name": "GDExtensionVariantFromTypeConstructorFunc",
           "ret": {"type": "void"},
           "args": [{"type": "GDExtensionUninitializedVariantPtr"}, {"type": "GDExtensionTypePtr"}]}"#,
    );

    assert_eq!(
        out,
        "typedef void (*GDExtensionVariantFromTypeConstructorFunc)(GDExtensionUninitializedVariantPtr, GDExtensionTypePtr);\n"
    );
}

#[test]
fn write_type_entry___function_pointer_return___no_space_after_return_type() {
    let out = emit(
        r#"{"type": "function", "name": "GDExtensionAllocFunc", "ret": {"type": "void*"},
           "args": [{"type": "size_t", "name": "p_size"}]}"#,
    );

    assert_eq!(out, "typedef void*(*GDExtensionAllocFunc)(size_t p_size);\n");
}

#[test]
fn write_type_entry___function_without_args___empty_parameter_list() {
    let out = emit(r#"{"type": "function", "name": "GDExtensionNopFunc", "ret": {"type": "void"}}"#);

    assert_eq!(out, "typedef void (*GDExtensionNopFunc)();\n");
}

#[test]
fn write_type_entry___struct___members_with_blank_line_after() {
    let out = emit(
        r#"{"type": "struct", "name": "GDExtensionCallError", "members": [
            {"type": "GDExtensionCallErrorType", "name": "error"},
            {"type": "int32_t", "name": "argument", "doc": ["Argument index."]}
        ]}"#,
    );

    assert_eq!(
        out,
        "typedef struct {\n\
         \tGDExtensionCallErrorType error;\n\
         \t/* Argument index. */\n\
         \tint32_t argument;\n\
         } GDExtensionCallError;\n\n"
    );
}

#[test]
fn write_type_entry___struct_pointer_member___no_space_before_member_name() {
    let out = emit(
        r#"{"type": "struct", "name": "S", "members": [{"type": "const char*", "name": "string"}]}"#,
    );

    assert!(out.contains("\tconst char*string;\n"));
}

#[test]
fn write_type_entry___unknown_tag___produces_no_output() {
    let out = emit(r#"{"type": "unknown_tag", "name": "whatever"}"#);

    assert!(out.is_empty());
}
