use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use page_core::FireOnce;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use super::error::{JsResultExt, PageError};

/// A registered DOM event listener. Dropping it unregisters the callback.
pub(crate) struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
    /// Set for one-shot listeners; emptied once the listener removed itself.
    self_removing: Option<Rc<RefCell<Option<Function>>>>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, PageError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .context("addEventListener")?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
            self_removing: None,
        })
    }

    /// Registers a listener that promises never to call `preventDefault`,
    /// letting the browser scroll without waiting on it.
    pub fn passive(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, PageError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .context("addEventListener(passive)")?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
            self_removing: None,
        })
    }

    /// Registers a handler that runs on the first event only and then
    /// removes itself from `target`.
    pub fn once(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnOnce(Event) + 'static,
    ) -> Result<Self, PageError> {
        let registration: Rc<RefCell<Option<Function>>> = Rc::default();
        let registered = Rc::clone(&registration);
        let remove_from = target.clone();
        let mut handler = FireOnce::new(handler);
        let event_type = event;

        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(function) = registered.borrow_mut().take() {
                let _ = remove_from.remove_event_listener_with_callback(event_type, &function);
            }
            handler.fire(event);
        });
        let function: Function = callback.as_ref().unchecked_ref::<Function>().clone();
        target
            .add_event_listener_with_callback(event, &function)
            .context("addEventListener(once)")?;
        *registration.borrow_mut() = Some(function);

        Ok(Self {
            target: target.clone(),
            event,
            callback,
            self_removing: Some(registration),
        })
    }

    pub fn is_registered(&self) -> bool {
        self.self_removing
            .as_ref()
            .is_none_or(|registration| registration.borrow().is_some())
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if !self.is_registered() {
            return;
        }
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn detached_div() -> EventTarget {
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .create_element("div")
            .unwrap()
            .into()
    }

    fn click(target: &EventTarget) {
        let event = Event::new("click").unwrap();
        target.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn once_listener_runs_on_first_click_and_unregisters() {
        let target = detached_div();
        let clicks = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&clicks);
        let listener = EventListener::once(&target, "click", move |_| {
            counter.set(counter.get() + 1);
        })
        .unwrap();
        assert!(listener.is_registered());

        click(&target);
        assert_eq!(clicks.get(), 1);
        assert!(!listener.is_registered());

        click(&target);
        click(&target);
        assert_eq!(clicks.get(), 1);
    }

    #[wasm_bindgen_test]
    fn dropped_listener_no_longer_fires() {
        let target = detached_div();
        let clicks = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&clicks);
        let listener = EventListener::new(&target, "click", move |_| {
            counter.set(counter.get() + 1);
        })
        .unwrap();

        click(&target);
        drop(listener);
        click(&target);
        assert_eq!(clicks.get(), 1);
    }
}
