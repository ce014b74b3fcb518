//! Page navigation model
//!
//! Pure helpers behind the navbar: mobile menu state, smooth-scroll targets,
//! scroll-position section highlighting and the navbar shadow.

/// Distance below the viewport top at which a section counts as current
pub const SECTION_PROBE_OFFSET: f64 = 100.0;

/// Scroll depth past which the navbar gets its heavier shadow
pub const SHADOW_SCROLL_THRESHOLD: f64 = 50.0;

pub const SHADOW_RESTING: &str = "0 2px 10px rgba(0, 0, 0, 0.1)";
pub const SHADOW_SCROLLED: &str = "0 2px 15px rgba(0, 0, 0, 0.3)";

/// Selectors of elements that fade in the first time they scroll into view
pub const FADE_IN_SELECTORS: &str = ".services__card, .about__box, .projects__item, .contact__item";

/// Inline styles of the three hamburger bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleBarStyles {
    pub top_transform: &'static str,
    pub middle_opacity: &'static str,
    pub bottom_transform: &'static str,
}

/// Mobile menu open/closed state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Bars form an X while the menu is open
    pub fn bar_styles(&self) -> ToggleBarStyles {
        if self.open {
            ToggleBarStyles {
                top_transform: "rotate(45deg) translateY(10px)",
                middle_opacity: "0",
                bottom_transform: "rotate(-45deg) translateY(-10px)",
            }
        } else {
            ToggleBarStyles {
                top_transform: "none",
                middle_opacity: "1",
                bottom_transform: "none",
            }
        }
    }
}

/// Vertical extent of a page section, in document pixels
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section to highlight for a given scroll position.
///
/// Probes `scroll_y + SECTION_PROBE_OFFSET`; when several sections overlap
/// the probe the last one in document order wins. `None` means no section
/// matched and the current highlight should be left alone.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_y + SECTION_PROBE_OFFSET;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(probe))
        .map(|section| section.id.as_str())
}

/// Scroll position that puts a section just below the fixed navbar
pub fn scroll_target(section_top: f64, nav_height: f64) -> f64 {
    (section_top - nav_height).max(0.0)
}

pub fn navbar_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > SHADOW_SCROLL_THRESHOLD {
        SHADOW_SCROLLED
    } else {
        SHADOW_RESTING
    }
}

/// Section id behind an in-page link (`#about` -> `about`)
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
