//! Custom-property extraction from raw style text.
//!
//! This is not a CSS parser. It recognizes one declaration shape,
//! `--<identifier>: <value>;`, anywhere in the text and passes everything else
//! through untouched.

use std::sync::LazyLock;

use regex::Regex;

use crate::properties::PropertyMap;

/// Matches `--name: value;`.
///
/// The value runs up to the first `;` that is neither backslash-escaped nor
/// inside a quoted string, so data URLs and escaped semicolons survive. A
/// quote with no closing partner is an ordinary character.
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)--([A-Za-z0-9_-]+)\s*:((?:\\.|"(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'|[^;\\"']|["'])*);"#,
    )
    .expect("declaration pattern is valid")
});

/// Extract every custom-property declaration from `text`.
///
/// Values are trimmed but otherwise kept verbatim. When a name is declared
/// more than once the last value wins while the first position is kept.
/// Text without declarations yields an empty map.
pub fn extract(text: &str) -> PropertyMap {
    let mut properties = PropertyMap::new();

    for captures in DECLARATION.captures_iter(text) {
        let (Some(name), Some(value)) = (captures.get(1), captures.get(2)) else {
            continue;
        };
        let value = value.as_str().trim();
        tracing::trace!(name = name.as_str(), value, "extracted custom property");
        properties.set(name.as_str(), value);
    }

    properties
}

/// Raw style text together with the custom properties declared in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleBlock {
    raw_text: String,
    properties: PropertyMap,
}

impl StyleBlock {
    /// Scan `text` and keep it verbatim alongside its extracted properties.
    pub fn parse(text: impl Into<String>) -> Self {
        let raw_text = text.into();
        let properties = extract(&raw_text);
        Self {
            raw_text,
            properties,
        }
    }

    /// The original text, unmodified.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Properties declared in the text.
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(map: &PropertyMap) -> Vec<(&str, &str)> {
        map.iter().collect()
    }

    #[test]
    fn extracts_declarations() {
        let map = extract(
            r#"
            .component {
                --my-var: red;
                --another-var: 10px;
                color: var(--my-var);
            }
            "#,
        );

        assert_eq!(pairs(&map), vec![("my-var", "red"), ("another-var", "10px")]);
    }

    #[test]
    fn complex_values_pass_through() {
        let map = extract(
            r#"
            .component {
                --gradient: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
                --shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                --calc-value: calc(100% - 2rem);
            }
            "#,
        );

        assert_eq!(
            pairs(&map),
            vec![
                ("gradient", "linear-gradient(135deg, #667eea 0%, #764ba2 100%)"),
                ("shadow", "0 4px 6px rgba(0, 0, 0, 0.1)"),
                ("calc-value", "calc(100% - 2rem)"),
            ]
        );
    }

    #[test]
    fn url_values() {
        let map = extract(
            r#".c { --bg-image: url("data:image/svg+xml,%3csvg xmlns='http://www.w3.org/2000/svg'%3e%3c/svg%3e"); --bg-color: #fff; }"#,
        );

        assert_eq!(
            map.get("bg-image"),
            Some(r#"url("data:image/svg+xml,%3csvg xmlns='http://www.w3.org/2000/svg'%3e%3c/svg%3e")"#)
        );
        assert_eq!(map.get("bg-color"), Some("#fff"));
    }

    #[test]
    fn semicolons_inside_strings_and_escapes() {
        let map = extract(
            r#"--icon: url("data:image/png;base64,AAAA"); --sep: a\;b; --quote: ';';"#,
        );

        assert_eq!(map.get("icon"), Some(r#"url("data:image/png;base64,AAAA")"#));
        assert_eq!(map.get("sep"), Some(r"a\;b"));
        assert_eq!(map.get("quote"), Some("';'"));
    }

    #[test]
    fn unclosed_quote_is_plain_text() {
        let map = extract("--font: Homemade Apple's; --b: 1;");
        assert_eq!(pairs(&map), vec![("font", "Homemade Apple's"), ("b", "1")]);

        let map = extract(r#"--q: "x;y"; --open: 5" tall;"#);
        assert_eq!(map.get("q"), Some(r#""x;y""#));
        assert_eq!(map.get("open"), Some(r#"5" tall"#));
    }

    #[test]
    fn no_declarations_is_empty() {
        assert!(extract(".component { color: red; }").is_empty());
        assert!(extract("").is_empty());
        assert!(extract("--dangling: value").is_empty());
    }

    #[test]
    fn multiple_per_line() {
        let map = extract(".component { --var1: red; --var2: blue; }");
        assert_eq!(pairs(&map), vec![("var1", "red"), ("var2", "blue")]);
    }

    #[test]
    fn trims_values() {
        let map = extract(".c { --spaced-var:    lots of spaces   ; --normal-var: normal; }");
        assert_eq!(map.get("spaced-var"), Some("lots of spaces"));
        assert_eq!(map.get("normal-var"), Some("normal"));
    }

    #[test]
    fn identifiers_with_dashes_and_underscores() {
        let map = extract(".c { --component-main_color: #000; --component-bg-color_dark: #fff; }");
        assert_eq!(
            pairs(&map),
            vec![("component-main_color", "#000"), ("component-bg-color_dark", "#fff")]
        );
    }

    #[test]
    fn last_declaration_wins_in_first_position() {
        let map = extract(
            r#"
            .complex { --var1: red; --var2: blue; }
            .complex:hover { --var1: green; }
            "#,
        );
        assert_eq!(pairs(&map), vec![("var1", "green"), ("var2", "blue")]);
    }

    #[test]
    fn extraction_is_repeatable() {
        let text = ".a { --x: 1px; --y: calc(1px + 2px); } .b { --x: 3px; }";
        assert_eq!(extract(text), extract(text));
    }

    #[test]
    fn style_block_keeps_raw_text() {
        let text = "\n  .test {\n    --test-var: blue;\n  }\n";
        let block = StyleBlock::parse(text);

        assert_eq!(block.raw_text(), text);
        assert_eq!(block.properties().get("test-var"), Some("blue"));
    }
}
