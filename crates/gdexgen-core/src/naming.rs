//! Naming rules for derived C identifiers.
//!
//! Interface entries carry snake_case schema names; the emitted
//! function-pointer typedef needs a camel-cased C identifier with the
//! `GDExtensionInterface` prefix. The derivation is deliberately dumb:
//! uppercase the first character of each underscore-delimited word and
//! concatenate. The rest of each word is left untouched, so a word that
//! begins with a digit passes through unchanged (`2d` stays `2d`, it
//! never becomes `2D`).

/// Fixed prefix for derived interface typedef names.
const INTERFACE_PREFIX: &str = "GDExtensionInterface";

/// Capitalize the first letter of a string, leaving the rest as-is.
///
/// # Examples
///
/// ```
/// use gdexgen_core::naming::capitalize;
///
/// assert_eq!(capitalize("method"), "Method");
/// assert_eq!(capitalize("2d"), "2d");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Derive the C typedef name for an interface entry.
///
/// # Examples
///
/// ```
/// use gdexgen_core::naming::interface_type_name;
///
/// assert_eq!(interface_type_name("get_proc_address"), "GDExtensionInterfaceGetProcAddress");
/// assert_eq!(interface_type_name("get_node_2d"), "GDExtensionInterfaceGetNode2d");
/// ```
pub fn interface_type_name(name: &str) -> String {
    let camel: String = name.split('_').map(capitalize).collect();
    format!("{INTERFACE_PREFIX}{camel}")
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn capitalize___capitalizes_first_letter() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize___preserves_rest_of_string() {
        assert_eq!(capitalize("helloWorld"), "HelloWorld");
        assert_eq!(capitalize("ALLCAPS"), "ALLCAPS");
    }

    #[test]
    fn capitalize___leaves_digit_leading_words_alone() {
        assert_eq!(capitalize("2d"), "2d");
        assert_eq!(capitalize("3x"), "3x");
    }

    #[test]
    fn interface_type_name___converts_snake_case() {
        assert_eq!(
            interface_type_name("object_method_bind_call"),
            "GDExtensionInterfaceObjectMethodBindCall"
        );
    }

    #[test]
    fn interface_type_name___does_not_uppercase_after_digits() {
        assert_eq!(interface_type_name("get_node_2d"), "GDExtensionInterfaceGetNode2d");
    }

    #[test]
    fn interface_type_name___single_word() {
        assert_eq!(interface_type_name("print"), "GDExtensionInterfacePrint");
    }
}
