//! Stub rendering by plain placeholder substitution.

/// Render a stub, replacing every `{{ key }}` occurrence with its value.
///
/// Pairs are applied in slice order, so the result is deterministic.
/// Placeholders with no matching key are left verbatim; keys that never
/// occur in the template are ignored. Writing the result to disk is the
/// caller's responsibility.
pub fn render_stub(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in vars {
        let placeholder = format!("{{{{ {} }}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}
