use page_core::{PageConfig, PageLayout, ScrollMetrics, SectionId, Selectors};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlSourceElement, HtmlVideoElement, Window};

use super::error::{JsResultExt, PageError};
use crate::ui::render::{DomCommand, Region};

/// Handles to every interactive region, discovered once at startup.
pub(crate) struct PageElements {
    pub window: Window,
    pub document: Document,
    pub menu_toggle: Option<Element>,
    pub menu_panel: Option<Element>,
    pub main_nav: Option<Element>,
    pub nav_links: Vec<Element>,
    pub cta_buttons: Vec<Element>,
    pub scroll_top: Option<Element>,
    pub sections: Vec<Element>,
    pub video: Option<HtmlVideoElement>,
    pub progress_bar: Option<HtmlElement>,
}

impl PageElements {
    /// Queries the document and injects the scroll progress bar.
    pub fn discover(window: Window, config: &PageConfig) -> Result<Self, PageError> {
        let document = window.document().ok_or(PageError::MissingDocument)?;
        let selectors: &Selectors = &config.selectors;

        let video = query_one(&document, selectors.hero_video)?
            .and_then(|element| element.dyn_into::<HtmlVideoElement>().ok());
        let progress_bar = create_progress_bar(&document, config.classes.progress_bar)?;

        Ok(Self {
            menu_toggle: query_one(&document, selectors.menu_toggle)?,
            menu_panel: query_one(&document, selectors.menu_panel)?,
            main_nav: query_one(&document, selectors.main_nav)?,
            nav_links: query_all(&document, selectors.nav_links)?,
            cta_buttons: query_all(&document, selectors.cta_buttons)?,
            scroll_top: query_one(&document, selectors.scroll_top)?,
            sections: query_all(&document, selectors.sections)?,
            video,
            progress_bar,
            window,
            document,
        })
    }

    pub fn layout(&self) -> PageLayout {
        PageLayout {
            has_menu_toggle: self.menu_toggle.is_some(),
            has_menu_panel: self.menu_panel.is_some(),
            has_main_nav: self.main_nav.is_some(),
            has_scroll_top: self.scroll_top.is_some(),
            section_count: self.sections.len(),
            has_video: self.video.is_some(),
        }
    }

    fn region(&self, region: Region) -> Option<&Element> {
        match region {
            Region::MenuToggle => self.menu_toggle.as_ref(),
            Region::MenuPanel => self.menu_panel.as_ref(),
            Region::MainNav => self.main_nav.as_ref(),
            Region::ScrollTop => self.scroll_top.as_ref(),
            Region::ProgressBar => self.progress_bar.as_deref(),
        }
    }

    pub fn section(&self, section: SectionId) -> Option<&Element> {
        self.sections.get(section.0)
    }

    pub fn section_id(&self, target: &Element) -> Option<SectionId> {
        self.sections
            .iter()
            .position(|section| section == target)
            .map(SectionId)
    }

    /// True when `target` lies inside neither the menu toggle nor the menu
    /// panel. `None` when either element is missing.
    pub fn is_outside_menu(&self, target: &web_sys::Node) -> Option<bool> {
        let toggle = self.menu_toggle.as_ref()?;
        let panel = self.menu_panel.as_ref()?;
        Some(!panel.contains(Some(target)) && !toggle.contains(Some(target)))
    }

    pub fn scroll_metrics(&self) -> ScrollMetrics {
        let scroll_top = self.window.scroll_y().unwrap_or(0.0);
        let document_height = self
            .document
            .document_element()
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(0.0);
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0);
        ScrollMetrics::new(scroll_top, document_height, viewport_height)
    }

    /// The `src` of the video's first `<source>`, falling back to the
    /// element's current source.
    pub fn video_source(&self, source_selector: &str) -> Option<String> {
        let video = self.video.as_ref()?;
        let declared = video
            .query_selector(source_selector)
            .ok()
            .flatten()
            .and_then(|source| source.dyn_into::<HtmlSourceElement>().ok())
            .map(|source| source.src())
            .filter(|src| !src.is_empty());
        declared.or_else(|| Some(video.current_src()).filter(|src| !src.is_empty()))
    }

    /// Applies rendered commands; regions absent from the page are skipped.
    pub fn apply(&self, commands: Vec<DomCommand>) -> Result<(), PageError> {
        for command in commands {
            match command {
                DomCommand::SetClass {
                    region,
                    class,
                    enabled,
                } => {
                    if let Some(element) = self.region(region) {
                        element
                            .class_list()
                            .toggle_with_force(class, enabled)
                            .context("classList.toggle")?;
                    }
                }
                DomCommand::SetTransform { region, value } => {
                    let element = self
                        .region(region)
                        .and_then(|element| element.dyn_ref::<HtmlElement>());
                    if let Some(element) = element {
                        element
                            .style()
                            .set_property("transform", &value)
                            .context("style.transform")?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn query_one(document: &Document, selector: &str) -> Result<Option<Element>, PageError> {
    document.query_selector(selector).context("querySelector")
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let nodes = document
        .query_selector_all(selector)
        .context("querySelectorAll")?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Prepends the progress bar to `<body>` so it renders above the content.
fn create_progress_bar(document: &Document, class: &str) -> Result<Option<HtmlElement>, PageError> {
    let Some(body) = document.body() else {
        return Ok(None);
    };
    let bar = document
        .create_element("div")
        .context("createElement(div)")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PageError::UnexpectedType("createElement(div)"))?;
    bar.set_class_name(class);
    body.prepend_with_node_1(&bar).context("body.prepend")?;
    Ok(Some(bar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn bare_page() -> PageElements {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        PageElements {
            window,
            document,
            menu_toggle: None,
            menu_panel: None,
            main_nav: None,
            nav_links: Vec::new(),
            cta_buttons: Vec::new(),
            scroll_top: None,
            sections: Vec::new(),
            video: None,
            progress_bar: None,
        }
    }

    fn element(page: &PageElements, tag: &str) -> Element {
        page.document.create_element(tag).unwrap()
    }

    #[wasm_bindgen_test]
    fn outside_menu_distinguishes_menu_descendants() {
        let mut page = bare_page();
        let toggle = element(&page, "button");
        let toggle_icon = element(&page, "span");
        toggle.append_child(&toggle_icon).unwrap();
        let panel = element(&page, "div");
        let link = element(&page, "a");
        panel.append_child(&link).unwrap();
        let elsewhere = element(&page, "p");
        page.menu_toggle = Some(toggle.clone());
        page.menu_panel = Some(panel.clone());

        assert_eq!(page.is_outside_menu(&elsewhere), Some(true));
        assert_eq!(page.is_outside_menu(&link), Some(false));
        assert_eq!(page.is_outside_menu(&panel), Some(false));
        assert_eq!(page.is_outside_menu(&toggle_icon), Some(false));
    }

    #[wasm_bindgen_test]
    fn outside_menu_is_undecided_without_both_elements() {
        let mut page = bare_page();
        let elsewhere = element(&page, "p");
        assert_eq!(page.is_outside_menu(&elsewhere), None);

        page.menu_toggle = Some(element(&page, "button"));
        assert_eq!(page.is_outside_menu(&elsewhere), None);

        page.menu_toggle = None;
        page.menu_panel = Some(element(&page, "div"));
        assert_eq!(page.is_outside_menu(&elsewhere), None);
    }

    fn hero_video(page: &PageElements) -> HtmlVideoElement {
        element(page, "video").dyn_into::<HtmlVideoElement>().unwrap()
    }

    #[wasm_bindgen_test]
    fn video_source_prefers_the_declared_source() {
        let mut page = bare_page();
        let video = hero_video(&page);
        let source = element(&page, "source")
            .dyn_into::<HtmlSourceElement>()
            .unwrap();
        source.set_src("media/hero.mp4");
        video.append_child(&source).unwrap();
        page.video = Some(video);

        let src = page.video_source("source").unwrap();
        assert!(src.ends_with("/media/hero.mp4"), "{src}");
    }

    #[wasm_bindgen_test]
    fn video_source_is_none_when_nothing_was_selected() {
        let mut page = bare_page();
        assert_eq!(page.video_source("source"), None);

        let video = hero_video(&page);
        video
            .append_child(&element(&page, "source"))
            .unwrap();
        page.video = Some(video);
        assert_eq!(page.video_source("source"), None);
    }
}
