//! Composite postal address formatting.

/// Format address parts into one multi-line composite:
/// street lines, then `City, State Postal`, then country. Empty parts are
/// skipped and separators only appear between parts that are present.
#[must_use]
pub fn compose_address(
    line1: &str,
    line2: &str,
    city: &str,
    state_or_province: &str,
    postal_code: &str,
    country: &str,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !line1.is_empty() {
        lines.push(line1.to_string());
    }
    if !line2.is_empty() {
        lines.push(line2.to_string());
    }

    let mut locality = String::new();
    if !city.is_empty() {
        locality.push_str(city);
    }
    if !state_or_province.is_empty() {
        if !locality.is_empty() {
            locality.push_str(", ");
        }
        locality.push_str(state_or_province);
    }
    if !postal_code.is_empty() {
        if !locality.is_empty() {
            locality.push(' ');
        }
        locality.push_str(postal_code);
    }
    if !locality.is_empty() {
        lines.push(locality);
    }

    if !country.is_empty() {
        lines.push(country.to_string());
    }

    lines.join("\n")
}
