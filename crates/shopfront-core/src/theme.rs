//! # Theme Resolver
//!
//! Two-valued display mode plus the total mapping from (mode, element kind)
//! to concrete style attributes.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Theme State Machine                              │
//! │                                                                         │
//! │                    toggle                                               │
//! │          ┌───────────────────────────┐                                  │
//! │          │                           ▼                                  │
//! │      ┌───────┐                   ┌───────┐                              │
//! │      │ Light │                   │ Dark  │                              │
//! │      └───────┘                   └───────┘                              │
//! │          ▲                           │                                  │
//! │          └───────────────────────────┘                                  │
//! │                    toggle                                               │
//! │                                                                         │
//! │  • Initial state: Light                                                 │
//! │  • Exactly two states; no third value is reachable                      │
//! │  • No terminal state (process-lifetime)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Resolution Table
//! `resolve_style` is an exhaustive match over a closed set of element kinds.
//! Every (mode, kind) pair has a defined value and there is deliberately no
//! fallback arm: adding an element kind without styling it is a compile
//! error, not a runtime default.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Theme Mode
// =============================================================================

/// Global two-valued display mode.
///
/// One instance exists per application (the app layer owns it and publishes
/// changes to every consumer); this type itself is a plain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light backgrounds, dark text. The process-start default.
    Light,
    /// Dark backgrounds, light text.
    Dark,
}

impl ThemeMode {
    /// The two-state cycle: Light→Dark, Dark→Light.
    ///
    /// `m.toggled().toggled() == m` for both modes.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Light
    }
}

// =============================================================================
// Element Kinds
// =============================================================================

/// The closed set of themeable UI element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    /// Screen-level container.
    Container,
    /// Product tile on the home grid.
    ProductCard,
    /// Search text input.
    SearchBar,
    /// Category selector chip.
    CategoryButton,
    /// Category selector label.
    CategoryText,
    /// Cart total footer.
    CartTotal,
    /// One line in the cart list.
    CartItem,
    /// One row in the orders list.
    OrderItem,
}

impl ElementKind {
    /// Every element kind, for exhaustive iteration in consumers and tests.
    pub const ALL: [ElementKind; 8] = [
        ElementKind::Container,
        ElementKind::ProductCard,
        ElementKind::SearchBar,
        ElementKind::CategoryButton,
        ElementKind::CategoryText,
        ElementKind::CartTotal,
        ElementKind::CartItem,
        ElementKind::OrderItem,
    ];
}

// =============================================================================
// Style
// =============================================================================

/// Resolved style attributes for one element kind under one mode.
///
/// Colors are CSS hex strings; the frontend applies them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Style {
    /// Background color.
    pub background: &'static str,
    /// Foreground/text color.
    pub text: &'static str,
    /// Secondary surface color (card interiors, input fills).
    pub surface: &'static str,
}

// Palette constants. The dark container background (#2C2C2C) is a documented
// value the orders/cart/home screens all key off; change it everywhere or
// nowhere.
const LIGHT_BG: &str = "#FFFFFF";
const LIGHT_SURFACE: &str = "#F6F6F6";
const LIGHT_CARD: &str = "#F9F9F9";
const LIGHT_CHIP: &str = "#E8E8E8";
const INK: &str = "#000000";
const INK_MUTED: &str = "#555555";

const DARK_BG: &str = "#2C2C2C";
const DARK_SURFACE: &str = "#3D3D3D";
const DARK_CHIP: &str = "#4A4A4A";
const PAPER: &str = "#FFFFFF";
const PAPER_MUTED: &str = "#CCCCCC";

/// Resolves the style attributes for an element kind under a mode.
///
/// ## Contract
/// - Total: every (mode, kind) pair has a defined value
/// - Deterministic: same inputs always yield the identical output
/// - Pure: no allocation, no state, safe to call per frame
pub const fn resolve_style(mode: ThemeMode, kind: ElementKind) -> Style {
    match (mode, kind) {
        // --------------------------------------------------------- light ----
        (ThemeMode::Light, ElementKind::Container) => Style {
            background: LIGHT_BG,
            text: INK,
            surface: LIGHT_SURFACE,
        },
        (ThemeMode::Light, ElementKind::ProductCard) => Style {
            background: LIGHT_CARD,
            text: INK,
            surface: LIGHT_BG,
        },
        (ThemeMode::Light, ElementKind::SearchBar) => Style {
            background: LIGHT_SURFACE,
            text: INK,
            surface: LIGHT_BG,
        },
        (ThemeMode::Light, ElementKind::CategoryButton) => Style {
            background: LIGHT_CHIP,
            text: INK,
            surface: LIGHT_BG,
        },
        (ThemeMode::Light, ElementKind::CategoryText) => Style {
            background: LIGHT_BG,
            text: INK_MUTED,
            surface: LIGHT_BG,
        },
        (ThemeMode::Light, ElementKind::CartTotal) => Style {
            background: LIGHT_CARD,
            text: INK,
            surface: LIGHT_SURFACE,
        },
        (ThemeMode::Light, ElementKind::CartItem) => Style {
            background: LIGHT_BG,
            text: INK,
            surface: LIGHT_CARD,
        },
        (ThemeMode::Light, ElementKind::OrderItem) => Style {
            background: LIGHT_BG,
            text: INK,
            surface: LIGHT_CARD,
        },
        // ---------------------------------------------------------- dark ----
        (ThemeMode::Dark, ElementKind::Container) => Style {
            background: DARK_BG,
            text: PAPER,
            surface: DARK_SURFACE,
        },
        (ThemeMode::Dark, ElementKind::ProductCard) => Style {
            background: DARK_SURFACE,
            text: PAPER,
            surface: DARK_CHIP,
        },
        (ThemeMode::Dark, ElementKind::SearchBar) => Style {
            background: DARK_SURFACE,
            text: PAPER,
            surface: DARK_BG,
        },
        (ThemeMode::Dark, ElementKind::CategoryButton) => Style {
            background: DARK_CHIP,
            text: PAPER,
            surface: DARK_SURFACE,
        },
        (ThemeMode::Dark, ElementKind::CategoryText) => Style {
            background: DARK_BG,
            text: PAPER_MUTED,
            surface: DARK_BG,
        },
        (ThemeMode::Dark, ElementKind::CartTotal) => Style {
            background: DARK_SURFACE,
            text: PAPER,
            surface: DARK_CHIP,
        },
        (ThemeMode::Dark, ElementKind::CartItem) => Style {
            background: DARK_BG,
            text: PAPER,
            surface: DARK_SURFACE,
        },
        (ThemeMode::Dark, ElementKind::OrderItem) => Style {
            background: DARK_BG,
            text: PAPER,
            surface: DARK_SURFACE,
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);

        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_resolve_is_total_and_deterministic() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            for kind in ElementKind::ALL {
                let a = resolve_style(mode, kind);
                let b = resolve_style(mode, kind);
                assert_eq!(a, b, "{mode:?}/{kind:?} must resolve identically");
                // Every attribute is a populated hex color
                for color in [a.background, a.text, a.surface] {
                    assert!(color.starts_with('#'), "{mode:?}/{kind:?}: {color}");
                    assert_eq!(color.len(), 7);
                }
            }
        }
    }

    #[test]
    fn test_dark_container_background_documented_value() {
        let light = resolve_style(ThemeMode::Light, ElementKind::Container);
        let dark = resolve_style(ThemeMode::Dark, ElementKind::Container);

        assert_ne!(light.background, dark.background);
        assert_eq!(dark.background, "#2C2C2C");
    }

    #[test]
    fn test_element_kind_serde_names() {
        let json = serde_json::to_string(&ElementKind::ProductCard).unwrap();
        assert_eq!(json, "\"product-card\"");
        let json = serde_json::to_string(&ElementKind::CartTotal).unwrap();
        assert_eq!(json, "\"cart-total\"");
    }

    #[test]
    fn test_theme_mode_serde_names() {
        assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
    }
}
