use serde::Serialize;

/// Selectors used to discover the interactive regions of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    pub menu_toggle: &'static str,
    pub menu_panel: &'static str,
    pub main_nav: &'static str,
    pub nav_links: &'static str,
    pub cta_buttons: &'static str,
    pub scroll_top: &'static str,
    pub sections: &'static str,
    pub hero_video: &'static str,
    pub video_source: &'static str,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu_toggle: "#hamburgerBtn",
            menu_panel: ".nav-right",
            main_nav: "#mainNav",
            nav_links: ".nav-link",
            cta_buttons: ".nav-cta-btn",
            scroll_top: "#scrollToTopBtn",
            sections: "section:not(.hero)",
            hero_video: ".hero video",
            video_source: "source",
        }
    }
}

/// CSS classes toggled by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    pub menu_open: &'static str,
    pub nav_scrolled: &'static str,
    pub scroll_top_shown: &'static str,
    pub section_revealed: &'static str,
    pub progress_bar: &'static str,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            menu_open: "active",
            nav_scrolled: "scrolled",
            scroll_top_shown: "show",
            section_revealed: "visible",
            progress_bar: "scroll-progress",
        }
    }
}

/// Options for the section reveal observer.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the section's area that must be visible.
    pub threshold: f64,
    /// Root margin; the negative bottom inset fires the reveal a little early.
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px",
        }
    }
}

/// Initialization options handed to the animate-on-scroll library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AosConfig {
    pub duration: u32,
    pub once: bool,
    pub offset: u32,
    pub disable: bool,
    pub throttle_delay: u32,
    pub anchor_placement: &'static str,
}

impl Default for AosConfig {
    fn default() -> Self {
        Self {
            duration: 600,
            once: true,
            offset: 100,
            disable: false,
            throttle_delay: 99,
            anchor_placement: "top-bottom",
        }
    }
}

/// Everything the controller needs to know about the page, fixed at compile time.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub classes: ClassNames,
    pub reveal: RevealOptions,
    pub aos: AosConfig,
    /// Scroll offset past which the main nav is styled as scrolled.
    pub nav_scrolled_after: f64,
    /// Scroll offset past which the scroll-to-top control is shown.
    pub scroll_top_after: f64,
    pub preload_images: Vec<&'static str>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: ClassNames::default(),
            reveal: RevealOptions::default(),
            aos: AosConfig::default(),
            nav_scrolled_after: 50.0,
            scroll_top_after: 300.0,
            preload_images: vec![
                "./Images/exp.jpg",
                "./Images/partnership.jpg",
                "./Images/Service_Img.jpg",
            ],
        }
    }
}
