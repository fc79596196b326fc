use std::sync::OnceLock;

use regex::Regex;

const HIGHLIGHT_CLASS: &str = "pricing-amount";

fn amount_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(\$\d[\d,]*(?:\.\d+)?(?:\s*[+-]\s*\$?\d[\d,]*(?:\.\d+)?)?(?:\s*\+)?(?:\s*/\s*[^\s<]+)?)",
        )
        .expect("amount pattern is valid")
    })
}

/// Wrap dollar amounts in a pricing table cell with a highlight span
///
/// Cells without a `$` or that were already highlighted come back unchanged.
pub fn highlight_amounts(cell_html: &str) -> String {
    if cell_html.is_empty() || cell_html.contains(HIGHLIGHT_CLASS) || !cell_html.contains('$') {
        return cell_html.to_string();
    }

    amount_pattern()
        .replace_all(cell_html, format!(r#"<span class="{}">$1</span>"#, HIGHLIGHT_CLASS).as_str())
        .into_owned()
}
