//! Scroll- and resize-driven navigation state.

use crate::config::UiConfig;

/// A page section as laid out in the document: its id and top offset.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

/// Everything the page derives from one scroll position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
    pub active_section: Option<String>,
}

impl ScrollState {
    pub fn measure(scroll_y: f64, sections: &[SectionOffset], config: &UiConfig) -> Self {
        Self {
            navbar_scrolled: scroll_y > config.navbar_scroll_threshold_px,
            back_to_top_visible: scroll_y > config.back_to_top_threshold_px,
            active_section: active_section(sections, scroll_y, config.active_section_offset_px)
                .map(str::to_string),
        }
    }

    pub fn is_link_active(&self, href: &str) -> bool {
        match (&self.active_section, anchor_target(href)) {
            (Some(active), Some(target)) => active == target,
            _ => false,
        }
    }
}

/// Last section, in document order, whose top minus `offset` has been
/// scrolled past. Sections are not assumed to be sorted by offset.
pub fn active_section(sections: &[SectionOffset], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - offset)
        .map(|section| section.id.as_str())
}

pub fn should_collapse_menu(viewport_width: f64, config: &UiConfig) -> bool {
    viewport_width > config.menu_collapse_width_px
}

/// The element id a same-page anchor points at, if any.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|target| !target.is_empty())
}
