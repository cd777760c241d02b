/// Replace `{Key}` placeholders with their values, passing `decorate` each value.
/// Unknown placeholders stay as written.
pub fn render_template_with<F>(template: &str, values: &[(&str, &str)], decorate: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                match values.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(&decorate(value)),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Plain substitution.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    render_template_with(template, values, str::to_string)
}
