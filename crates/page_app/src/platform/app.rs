use std::cell::RefCell;
use std::rc::Rc;

use page_core::{update, Interaction, Msg, PageConfig, PageState, PageViewModel};
use page_logging::{page_error, page_info, page_warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, Node, Window};

use super::dom::PageElements;
use super::effects::EffectRunner;
use super::error::PageError;
use super::listener::EventListener;
use super::reveal::RevealObserver;
use crate::ui;

/// Starts the controller now, or on `DOMContentLoaded` while the document
/// is still parsing.
pub fn run_when_ready() -> Result<(), PageError> {
    let window = web_sys::window().ok_or(PageError::MissingWindow)?;
    let document = window.document().ok_or(PageError::MissingDocument)?;

    if document.ready_state() != "loading" {
        return run_app(window);
    }

    let listener = EventListener::once(&document, "DOMContentLoaded", move |_| {
        if let Err(err) = run_app(window) {
            page_error!("page controller failed to start: {}", err);
        }
    })?;
    Registrations {
        listeners: vec![listener],
        observers: Vec::new(),
    }
    .keep_alive();
    Ok(())
}

pub fn run_app(window: Window) -> Result<(), PageError> {
    let config = PageConfig::default();
    let elements = PageElements::discover(window, &config)?;
    let layout = elements.layout();
    page_info!("page controller starting: {:?}", layout);

    let controller = Rc::new(PageController {
        state: RefCell::new(PageState::with_config(layout, config.clone())),
        config,
        elements,
        effects: EffectRunner::new(),
    });

    let mut registrations = Registrations::default();
    let wiring: [(&str, WireFn); 5] = [
        ("navigation menu", wire_menu),
        ("scroll coordinator", wire_scroll),
        ("scroll-to-top control", wire_scroll_top),
        ("section reveal", wire_reveal),
        ("hero video", wire_video),
    ];
    for (behavior, wire) in wiring {
        if let Err(err) = wire(&controller, &mut registrations) {
            page_error!("failed to wire {}: {}", behavior, err);
        }
    }

    let initial_view = controller.state.borrow().view();
    controller.render(&initial_view);
    controller.dispatch(Msg::Ready);
    registrations.keep_alive();
    Ok(())
}

/// Owns the page's DOM handles and its state machine.
pub(crate) struct PageController {
    config: PageConfig,
    elements: PageElements,
    state: RefCell<PageState>,
    effects: EffectRunner,
}

impl PageController {
    pub fn elements(&self) -> &PageElements {
        &self.elements
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Runs one message through `update`, renders if the view changed, then
    /// executes effects with the state borrow released.
    pub fn dispatch(self: &Rc<Self>, msg: Msg) {
        let (view, effects) = {
            let Ok(mut guard) = self.state.try_borrow_mut() else {
                page_warn!("dropping re-entrant message {:?}", msg);
                return;
            };
            let state = std::mem::take(&mut *guard);
            let (mut state, effects) = update(state, msg);
            let view = state.consume_dirty().then(|| state.view());
            *guard = state;
            (view, effects)
        };

        if let Some(view) = view {
            self.render(&view);
        }
        self.effects.run(self, effects);
    }

    pub fn on_animation_frame(self: &Rc<Self>) {
        let next_frame = self.state.borrow().frames_run() + 1;
        page_logging::set_frame(next_frame);
        let metrics = self.elements.scroll_metrics();
        self.dispatch(Msg::AnimationFrame(metrics));
    }

    fn render(&self, view: &PageViewModel) {
        let commands = ui::render::render(view, &self.config.classes);
        if let Err(err) = self.elements.apply(commands) {
            page_warn!("render failed: {}", err);
        }
    }
}

/// Listeners and observers that must stay registered for the page's lifetime.
#[derive(Default)]
struct Registrations {
    listeners: Vec<EventListener>,
    observers: Vec<RevealObserver>,
}

impl Registrations {
    /// Leaves everything registered; the page never tears the controller down.
    fn keep_alive(self) {
        std::mem::forget(self);
    }
}

type WireFn = fn(&Rc<PageController>, &mut Registrations) -> Result<(), PageError>;

fn wire_menu(
    controller: &Rc<PageController>,
    registrations: &mut Registrations,
) -> Result<(), PageError> {
    let elements = controller.elements();

    if let Some(toggle) = &elements.menu_toggle {
        let controller = Rc::clone(controller);
        registrations.listeners.push(EventListener::new(toggle, "click", move |_| {
            controller.dispatch(Msg::MenuToggleClicked)
        })?);
    }
    for link in &elements.nav_links {
        let controller = Rc::clone(controller);
        registrations.listeners.push(EventListener::new(link, "click", move |_| {
            controller.dispatch(Msg::NavLinkClicked)
        })?);
    }
    for button in &elements.cta_buttons {
        let controller = Rc::clone(controller);
        registrations.listeners.push(EventListener::new(button, "click", move |_| {
            controller.dispatch(Msg::CtaClicked)
        })?);
    }

    let handle = Rc::clone(controller);
    registrations.listeners.push(EventListener::new(
        &elements.document,
        "click",
        move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            if let Some(outside_menu) = handle.elements().is_outside_menu(&target) {
                handle.dispatch(Msg::DocumentClicked { outside_menu });
            }
        },
    )?);
    Ok(())
}

fn wire_scroll(
    controller: &Rc<PageController>,
    registrations: &mut Registrations,
) -> Result<(), PageError> {
    let handle = Rc::clone(controller);
    registrations.listeners.push(EventListener::passive(
        &controller.elements().window,
        "scroll",
        move |_| handle.dispatch(Msg::Scrolled),
    )?);
    Ok(())
}

fn wire_scroll_top(
    controller: &Rc<PageController>,
    registrations: &mut Registrations,
) -> Result<(), PageError> {
    let Some(button) = &controller.elements().scroll_top else {
        return Ok(());
    };
    let handle = Rc::clone(controller);
    registrations.listeners.push(EventListener::new(button, "click", move |_| {
        handle.dispatch(Msg::ScrollTopClicked)
    })?);
    Ok(())
}

fn wire_reveal(
    controller: &Rc<PageController>,
    registrations: &mut Registrations,
) -> Result<(), PageError> {
    let sections = &controller.elements().sections;
    if sections.is_empty() {
        return Ok(());
    }

    let handle = Rc::downgrade(controller);
    let on_entry = move |target: &Element, is_intersecting: bool| {
        let Some(controller) = handle.upgrade() else {
            return;
        };
        if let Some(section) = controller.elements().section_id(target) {
            controller.dispatch(Msg::SectionIntersected {
                section,
                is_intersecting,
            });
        }
    };
    let observer = RevealObserver::new(&controller.config().reveal, on_entry)?;
    for section in sections {
        observer.observe(section);
    }
    registrations.observers.push(observer);
    Ok(())
}

fn wire_video(
    controller: &Rc<PageController>,
    registrations: &mut Registrations,
) -> Result<(), PageError> {
    let elements = controller.elements();
    let Some(video) = &elements.video else {
        return Ok(());
    };

    let handle = Rc::clone(controller);
    registrations.listeners.push(EventListener::new(video, "error", move |_| {
        let source_selector = handle.config().selectors.video_source;
        let source = handle.elements().video_source(source_selector);
        handle.dispatch(Msg::VideoLoadFailed { source });
    })?);

    let handle = Rc::clone(controller);
    registrations.listeners.push(EventListener::new(video, "loadeddata", move |_| {
        handle.dispatch(Msg::VideoDataLoaded)
    })?);

    for (event, kind) in [("click", Interaction::Click), ("scroll", Interaction::Scroll)] {
        let handle = Rc::clone(controller);
        registrations.listeners.push(EventListener::once(
            &elements.document,
            event,
            move |_| {
                let video_paused = handle.elements().video.as_ref().is_some_and(|v| v.paused());
                handle.dispatch(Msg::FirstInteraction { kind, video_paused });
            },
        )?);
    }
    Ok(())
}
