use crate::core::Parameter;

use super::normalize_ws;

/// Split a raw parameter list into (name, type) pairs.
///
/// This is a heuristic, not a declarator grammar: fragments are split on
/// top-level commas, and the text after the last whitespace in a fragment
/// is taken as the parameter name. Commas nested inside bracketed type
/// expressions are not tracked.
pub fn split_parameters(params_raw: &str) -> Vec<Parameter> {
    let trimmed = params_raw.trim();
    if trimmed.is_empty() || trimmed == "void" {
        return Vec::new();
    }

    trimmed
        .split(',')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(decompose_fragment)
        .collect()
}

/// Separate one parameter fragment into its type and trailing name.
///
/// A fragment with no whitespace is all type, no name. Leading `*`s on the
/// name are pointer markers that belong to the type, so `int *ptr` comes
/// out as name `ptr`, type `int *`.
fn decompose_fragment(fragment: &str) -> Parameter {
    let (ty, name) = match fragment
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
    {
        Some((idx, ws)) => (
            fragment[..idx].trim(),
            fragment[idx + ws.len_utf8()..].trim(),
        ),
        None => (fragment, ""),
    };

    let stars = name.chars().take_while(|&c| c == '*').count();
    let (ty, name) = if stars > 0 {
        (format!("{} {}", ty, "*".repeat(stars)), &name[stars..])
    } else {
        (ty.to_string(), name)
    };

    Parameter::new(name, normalize_ws(&ty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_no_parameters() {
        assert!(split_parameters("").is_empty());
        assert!(split_parameters("   ").is_empty());
    }

    #[test]
    fn test_void_list_has_no_parameters() {
        assert!(split_parameters("void").is_empty());
        assert!(split_parameters("  void  ").is_empty());
    }

    #[test]
    fn test_single_parameter() {
        let params = split_parameters("H3Index h3");
        assert_eq!(params, vec![Parameter::new("h3", "H3Index")]);
    }

    #[test]
    fn test_multiple_parameters_in_order() {
        let params = split_parameters("H3Index h3, LatLng *g");
        assert_eq!(
            params,
            vec![
                Parameter::new("h3", "H3Index"),
                Parameter::new("g", "LatLng *"),
            ]
        );
    }

    #[test]
    fn test_pointer_star_attached_to_name() {
        let params = split_parameters("int *out");
        assert_eq!(params, vec![Parameter::new("out", "int *")]);
    }

    #[test]
    fn test_pointer_star_detached_from_name() {
        let params = split_parameters("int * out");
        assert_eq!(params, vec![Parameter::new("out", "int *")]);
    }

    #[test]
    fn test_double_pointer() {
        let params = split_parameters("char **out");
        assert_eq!(params, vec![Parameter::new("out", "char **")]);
    }

    #[test]
    fn test_const_pointer_type() {
        let params = split_parameters("const char *str");
        assert_eq!(params, vec![Parameter::new("str", "const char *")]);
    }

    #[test]
    fn test_fragment_without_name() {
        let params = split_parameters("size_t");
        assert_eq!(params, vec![Parameter::new("", "size_t")]);
    }

    #[test]
    fn test_whitespace_runs_collapse_in_type() {
        let params = split_parameters("const   char  * str");
        assert_eq!(params, vec![Parameter::new("str", "const char *")]);
    }

    #[test]
    fn test_trailing_comma_skipped() {
        let params = split_parameters("int a,");
        assert_eq!(params, vec![Parameter::new("a", "int")]);
    }
}
