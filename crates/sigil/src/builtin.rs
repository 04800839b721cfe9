//! Widgets bundled with Sigil.
//!
//! [`catalog`] returns a catalog holding every bundled widget:
//!
//! | Name           | Element          | Kind           |
//! |----------------|------------------|----------------|
//! | `slide-toggle` | [`SlideToggle`]  | custom element |
//! | `e-sig`        | [`ESignature`]   | custom element |

use sigil_style::descriptor::StyleConfig;

use crate::catalog::WidgetCatalog;
use crate::error::Result;
use crate::widget::{ElementRef, WidgetDescriptor};

/// Build a catalog with every bundled widget.
pub fn catalog() -> WidgetCatalog {
    let mut catalog = WidgetCatalog::new();
    catalog
        .register(SlideToggle::NAME, slide_toggle)
        .register(ESignature::NAME, e_sig);
    catalog
}

/// Switch-style checkbox.
///
/// Attributes: `checked`, `label`, `name`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlideToggle;

impl SlideToggle {
    /// Registered widget name.
    pub const NAME: &'static str = "slide-toggle";
}

const SLIDE_TOGGLE_CSS: &str = r##"
.slide-input {
  --st-check-bg: var(--st-body-bg);
  flex-shrink: 0;
  width: 1em;
  height: 1em;
  margin-top: .25em;
  vertical-align: top;
  appearance: none;
  background-color: var(--st-check-bg);
  background-image: var(--st-check-bg-image);
  background-repeat: no-repeat;
  background-position: center;
  background-size: contain;
  border: var(--st-border-width) solid var(--st-border-color);
  print-color-adjust: exact;
}

.SlideToggle {
  font-size: 1rem;
  line-height: 1.5;
  text-align: left;
  box-sizing: border-box;
  display: block;
  min-height: 1.5rem;
  margin-bottom: .125rem;
  padding-left: 2.5em;

  & .slide-input {
    width: 2em;
    margin-left: -2.5em;
    background-image: var(--st-switch-bg);
    background-position: left center;
    border-radius: 2em;
    transition: background-position .15s ease-in-out;
    float: left;

    &:focus {
      outline: 0;
    }

    &:checked {
      background-color: var(--st-checked-bg);
      border-color: var(--st-checked-bg);
      background-position: right center;
    }
  }

  & label {
    box-sizing: border-box;
    display: inline-block;
    color: var(--st-color);
  }
}
"##;

async fn slide_toggle() -> Result<Option<WidgetDescriptor>> {
    let style = StyleConfig::inline(SLIDE_TOGGLE_CSS)
        .vars([
            ("--st-check-bg", "var(--st-body-bg)"),
            (
                "--st-check-bg-image",
                r#"url("data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='-4 -4 8 8'%3E%3Ccircle r='3' fill='rgba(0, 0, 0,.25)'/%3E%3C/svg%3E")"#,
            ),
            ("--st-border-width", "1px"),
            ("--st-border-color", "rgba(0, 0, 0, .25)"),
        ])
        .theme(
            [
                ("--st-body-bg", "#212529"),
                ("--st-checked-bg", "#0d6efd"),
                ("--st-color", "#000"),
            ],
            [
                ("--st-body-bg", "#212529"),
                ("--st-checked-bg", "#0d6efd"),
                ("--st-color", "#fff"),
            ],
        )
        .build()?;

    Ok(Some(WidgetDescriptor::standalone(
        SlideToggle::NAME,
        ElementRef::new(SlideToggle),
        style,
    )))
}

/// Signature display rendered in a script font.
///
/// Attributes: `font`, `icon`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ESignature;

impl ESignature {
    /// Registered widget name.
    pub const NAME: &'static str = "e-sig";
}

const E_SIG_CSS: &str = r##"
@keyframes Rotate {
  0% { transform: rotate(0deg); }
  100% { transform: rotate(360deg); }
}

.ESignature {
  height: auto;
  max-height: 100%;
  max-width: 100%;
  padding: var(--eSig-padding);
  border: var(--eSig-border-width) var(--eSig-border-style) var(--eSig-border-color);
  background-color: var(--eSig-bg);
  line-height: var(--eSig-line-height);
  overflow: hidden;
  text-overflow: ellipsis;
  margin-bottom: var(--eSig-margin-bottom);
  display: flex;
  align-items: center;
  justify-content: center;

  span {
    color: var(--eSig-color);
    font-size: clamp(2rem, calc(2.25rem + (2.25 - 1.25) * (100vw - 768px)/(1920 - 768)), 3rem);
    text-wrap: balance;
  }

  i, svg {
    color: var(--eSig-color);
    position: absolute;

    &:hover {
      cursor: pointer;
      animation: Rotate 4s linear infinite;
    }
  }

  .dancing-script { font-family: 'Dancing Script', cursive; }
  .great-vibes { font-family: 'Great Vibes', cursive; }
  .homemade-apple { font-family: 'Homemade Apple', cursive; }
  .marck-script { font-family: 'Marck Script', cursive; }
  .sacramento { font-family: 'Sacramento', cursive; }
  .satisfy { font-family: 'Satisfy', cursive; }
}
"##;

async fn e_sig() -> Result<Option<WidgetDescriptor>> {
    let style = StyleConfig::inline(E_SIG_CSS)
        .vars([
            ("--eSig-border-style", "solid"),
            ("--eSig-border-radius", "0.25rem"),
            ("--eSig-border-width", "1px"),
            ("--eSig-line-height", "4rem"),
            ("--eSig-padding", "0.35rem"),
            ("--eSig-margin-bottom", "0.25rem"),
        ])
        .theme(
            [
                ("--eSig-bg", "#f8f9fa"),
                ("--eSig-border-color", "rgba(0, 0, 0, 0.25)"),
                ("--eSig-color", "#000"),
            ],
            [
                ("--eSig-bg", "#212529"),
                ("--eSig-border-color", "rgba(255, 255, 255, 0.25)"),
                ("--eSig-color", "#fff"),
            ],
        )
        .build()?;

    Ok(Some(WidgetDescriptor::standalone(
        ESignature::NAME,
        ElementRef::new(ESignature),
        style,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::ElementKind;

    #[test]
    fn catalog_lists_bundled_widgets() {
        let catalog = catalog();
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["slide-toggle", "e-sig"]);
    }

    #[tokio::test]
    async fn slide_toggle_descriptor() {
        let descriptor = catalog().resolve("slide-toggle").await.unwrap();
        assert_eq!(descriptor.kind(), ElementKind::Standalone);
        assert!(descriptor.element().downcast_ref::<SlideToggle>().is_some());
        assert!(descriptor.style().base().raw_text().contains(".slide-input"));
        assert_eq!(descriptor.style().vars().get("st-border-width"), Some("1px"));
        assert_eq!(
            descriptor.style().dark().and_then(|d| d.get("st-color")),
            Some("#fff")
        );
    }

    #[tokio::test]
    async fn e_sig_descriptor() {
        let descriptor = catalog().resolve("e-sig").await.unwrap();
        assert!(descriptor.element().downcast_ref::<ESignature>().is_some());
        assert!(descriptor.style().base().raw_text().contains("ESignature"));
        assert!(descriptor.style().base().raw_text().contains(".satisfy { font-family:"));
        assert_eq!(
            descriptor.style().light().and_then(|l| l.get("eSig-bg")),
            Some("#f8f9fa")
        );
        assert_eq!(
            descriptor.style().dark().and_then(|d| d.get("eSig-bg")),
            Some("#212529")
        );
    }
}
