use std::cell::OnceCell;
use std::rc::{Rc, Weak};

use js_sys::{Function, Reflect};
use page_core::{AosConfig, Effect, Msg, PlayTrigger, PlaybackOutcome};
use page_logging::{page_debug, page_error, page_info, page_warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlLinkElement, ScrollBehavior, ScrollToOptions};

use super::app::PageController;
use super::error::{describe, JsResultExt, PageError};

/// Executes effects emitted by `page_core::update` against the live page.
pub(crate) struct EffectRunner {
    frame_callback: OnceCell<Closure<dyn FnMut(f64)>>,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self {
            frame_callback: OnceCell::new(),
        }
    }

    pub fn run(&self, controller: &Rc<PageController>, effects: Vec<Effect>) {
        for effect in effects {
            let label = effect_label(&effect);
            if let Err(err) = self.run_one(controller, effect) {
                page_warn!("{} failed: {}", label, err);
            }
        }
    }

    fn run_one(&self, controller: &Rc<PageController>, effect: Effect) -> Result<(), PageError> {
        let elements = controller.elements();
        match effect {
            Effect::RequestAnimationFrame => {
                if let Err(err) = self.request_frame(controller) {
                    // A lost frame would leave the pending flag stuck; run it now.
                    page_warn!("animation frame unavailable, updating inline: {}", err);
                    controller.on_animation_frame();
                }
            }
            Effect::RevealSection(section) => {
                if let Some(element) = elements.section(section) {
                    element
                        .class_list()
                        .add_1(controller.config().classes.section_revealed)
                        .context("classList.add")?;
                    page_debug!("revealed {}", section);
                }
            }
            Effect::ScrollToTop => {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                elements.window.scroll_to_with_scroll_to_options(&options);
            }
            Effect::ReloadVideo => {
                if let Some(video) = &elements.video {
                    video
                        .remove_attribute("preload")
                        .context("removeAttribute(preload)")?;
                    video.load();
                }
            }
            Effect::HideVideo { failed_source } => {
                page_error!(
                    "hero video failed to load: {}",
                    failed_source.as_deref().unwrap_or("<unknown source>")
                );
                if let Some(video) = &elements.video {
                    video
                        .style()
                        .set_property("display", "none")
                        .context("style.display")?;
                }
            }
            Effect::PlayVideo { trigger } => self.play_video(controller, trigger),
            Effect::InitScrollAnimations(config) => init_scroll_animations(controller, &config)?,
            Effect::PreloadImage { href } => {
                let document = &elements.document;
                let head = document.head().ok_or(PageError::MissingElement("head"))?;
                let link = document
                    .create_element("link")
                    .context("createElement(link)")?
                    .dyn_into::<HtmlLinkElement>()
                    .map_err(|_| PageError::UnexpectedType("createElement(link)"))?;
                link.set_rel("preload");
                link.set_as("image");
                link.set_href(&href);
                link.set_attribute("fetchpriority", "high")
                    .context("setAttribute(fetchpriority)")?;
                head.append_child(&link).context("head.appendChild")?;
            }
        }
        Ok(())
    }

    fn request_frame(&self, controller: &Rc<PageController>) -> Result<(), PageError> {
        let callback = self.frame_callback.get_or_init(|| {
            let controller: Weak<PageController> = Rc::downgrade(controller);
            Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
                if let Some(controller) = controller.upgrade() {
                    controller.on_animation_frame();
                }
            })
        });
        controller
            .elements()
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .context("requestAnimationFrame")?;
        Ok(())
    }

    /// Starts playback and feeds the promise outcome back as a message.
    fn play_video(&self, controller: &Rc<PageController>, trigger: PlayTrigger) {
        let Some(video) = controller.elements().video.clone() else {
            return;
        };
        let promise = match video.play() {
            Ok(promise) => promise,
            Err(err) => {
                settle(controller, trigger, PlaybackOutcome::Rejected(describe(&err)));
                return;
            }
        };
        let controller = Rc::clone(controller);
        spawn_local(async move {
            let outcome = match JsFuture::from(promise).await {
                Ok(_) => PlaybackOutcome::Started,
                Err(err) => PlaybackOutcome::Rejected(describe(&err)),
            };
            settle(&controller, trigger, outcome);
        });
    }
}

fn settle(controller: &Rc<PageController>, trigger: PlayTrigger, outcome: PlaybackOutcome) {
    match &outcome {
        PlaybackOutcome::Started => page_info!("hero video playing after {}", trigger),
        PlaybackOutcome::Rejected(reason) => {
            page_warn!("hero video playback prevented after {}: {}", trigger, reason)
        }
    }
    controller.dispatch(Msg::PlaybackSettled { trigger, outcome });
}

/// Calls `AOS.init(config)` when the page loaded the library.
fn init_scroll_animations(
    controller: &Rc<PageController>,
    config: &AosConfig,
) -> Result<(), PageError> {
    let window = &controller.elements().window;
    let aos = Reflect::get(window, &JsValue::from_str("AOS")).context("window.AOS")?;
    if aos.is_undefined() || aos.is_null() {
        page_debug!("AOS not loaded; skipping scroll animations");
        return Ok(());
    }
    let Ok(init) = Reflect::get(&aos, &JsValue::from_str("init"))
        .context("AOS.init")?
        .dyn_into::<Function>()
    else {
        page_debug!("AOS has no init function; skipping scroll animations");
        return Ok(());
    };
    let options = serde_wasm_bindgen::to_value(config).map_err(|err| PageError::Js {
        context: "AOS options",
        message: err.to_string(),
    })?;
    init.call1(&aos, &options).context("AOS.init")?;
    page_info!("AOS initialized");
    Ok(())
}

fn effect_label(effect: &Effect) -> &'static str {
    match effect {
        Effect::RequestAnimationFrame => "request animation frame",
        Effect::RevealSection(_) => "reveal section",
        Effect::ScrollToTop => "scroll to top",
        Effect::ReloadVideo => "reload video",
        Effect::HideVideo { .. } => "hide video",
        Effect::PlayVideo { .. } => "play video",
        Effect::InitScrollAnimations(_) => "init scroll animations",
        Effect::PreloadImage { .. } => "preload image",
    }
}
