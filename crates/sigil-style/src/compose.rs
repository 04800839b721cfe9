//! Stylesheet composition.
//!
//! Merges the style bundles of every active widget into one stylesheet:
//!
//! ```text
//! :root {
//!   <vars lines>
//! }
//!
//! <night selector>
//!   :root {
//!     <dark lines>
//!   }
//! }
//!
//! <day selector>
//!   :root {
//!     <light lines>
//!   }
//! }
//!
//! <base text>
//! ```
//!
//! Blocks are concatenated in widget order. The dark block is omitted when it
//! is empty or the chroma mode is disabled; the light block is omitted only
//! when empty.

use crate::chroma::ChromaMode;
use crate::descriptor::StyleDescriptor;
use crate::properties::DECLARATION_INDENT;

/// A widget's style bundle rendered to text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedStyles {
    /// Widget name.
    pub component: String,
    /// Default declarations, one `  --name: value;` per line.
    pub vars: String,
    /// Dark-mode declarations, empty when the widget has none.
    pub dark: String,
    /// Light-mode declarations, empty when the widget has none.
    pub light: String,
    /// Base style text, verbatim.
    pub base: String,
}

impl ExtractedStyles {
    /// Render a widget's descriptor.
    pub fn from_descriptor(component: impl Into<String>, style: &StyleDescriptor) -> Self {
        Self {
            component: component.into(),
            vars: style.vars().render(),
            dark: style.dark().map(|m| m.render()).unwrap_or_default(),
            light: style.light().map(|m| m.render()).unwrap_or_default(),
            base: style.base().raw_text().to_string(),
        }
    }
}

/// Compose one stylesheet from per-widget styles, in the given order.
pub fn compose(styles: &[ExtractedStyles], chroma: &ChromaMode) -> String {
    let vars = combine(styles.iter().map(|s| s.vars.as_str()));
    let dark = combine(styles.iter().map(|s| s.dark.as_str()));
    let light = combine(styles.iter().map(|s| s.light.as_str()));
    let base = combine(styles.iter().map(|s| s.base.as_str()));

    let mut sections = vec![format!(":root {{\n{vars}\n}}")];

    if !dark.is_empty() && chroma.is_enabled() {
        sections.push(wrapped(&chroma.night_selector(), &dark));
    }

    if !light.is_empty() {
        let selector = chroma.day_selector();
        if selector.is_empty() {
            sections.push(format!(":root {{\n{light}\n}}"));
        } else {
            sections.push(wrapped(&selector, &light));
        }
    }

    if !base.is_empty() {
        sections.push(base);
    }

    sections.join("\n\n")
}

/// Join non-empty blocks with newlines.
fn combine<'a>(blocks: impl Iterator<Item = &'a str>) -> String {
    blocks
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `<selector>` + nested `:root { }` + closing brace.
fn wrapped(selector: &str, declarations: &str) -> String {
    let nested = declarations
        .lines()
        .map(|line| format!("{DECLARATION_INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{selector}\n{DECLARATION_INDENT}:root {{\n{nested}\n{DECLARATION_INDENT}}}\n}}")
}
