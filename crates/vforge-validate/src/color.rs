//! Colour token syntax.

use std::sync::LazyLock;

use regex::Regex;

/// `#rgb` or `#rrggbb`.
static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("Invalid hex colour regex")
});

/// `rgb(r, g, b)` or `rgba(r, g, b, a)`; components are integers or decimals,
/// optionally percentages.
static FUNCTIONAL_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let component = r"\s*(?:\d+(?:\.\d+)?|\.\d+)%?\s*";
    Regex::new(&format!(
        r"^(?:rgb\({c},{c},{c}\)|rgba\({c},{c},{c},{c}\))$",
        c = component
    ))
    .expect("Invalid functional colour regex")
});

/// True when `token` is a hex or rgb/rgba functional colour.
pub fn is_valid_color(token: &str) -> bool {
    let token = token.trim();
    HEX_COLOR_REGEX.is_match(token) || FUNCTIONAL_COLOR_REGEX.is_match(&token.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms() {
        assert!(is_valid_color("#fff"));
        assert!(is_valid_color("#1D4ED8"));
        assert!(!is_valid_color("#12345"));
        assert!(!is_valid_color("#ggg"));
        assert!(!is_valid_color("fff"));
        assert!(!is_valid_color("#ffff"));
    }

    #[test]
    fn functional_forms() {
        assert!(is_valid_color("rgba(255,0,0,0.2)"));
        assert!(is_valid_color("rgb(255, 0, 0)"));
        assert!(is_valid_color("rgb(100%, 50%, 0%)"));
        assert!(is_valid_color("RGBA(0, 0, 0, .5)"));
        assert!(!is_valid_color("rgb(255,0)"));
        assert!(!is_valid_color("rgba(255,0,0)"));
        assert!(!is_valid_color("rgb(red,0,0)"));
        assert!(!is_valid_color("hsl(0, 100%, 50%)"));
        assert!(!is_valid_color(""));
    }
}
