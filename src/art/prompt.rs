use super::styles;

// Joins the brand name, the description and the style suffix with `", "`.
// Empty parts are left out; the suffix is always there.
pub fn build_prompt(brand_name: &str, description: &str, style_key: &str) -> String {
    let style = styles::lookup(style_key);
    let brand_name = brand_name.trim();
    let description = description.trim();

    let mut parts = Vec::with_capacity(3);
    if !brand_name.is_empty() {
        parts.push(format!("logo for brand \"{}\"", brand_name));
    }
    if !description.is_empty() {
        parts.push(description.to_string());
    }
    parts.push(style.suffix.to_string());
    parts.join(", ")
}
