use crate::shared::paged_list::Handler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// An event listener that is removed from its target when dropped
pub struct DomBinding {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl DomBinding {
    pub fn attach(target: EventTarget, event: &'static str, handler: Handler) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(move |_: Event| handler());
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| log::warn!("Failed to attach `{}` listener: {:?}", event, e))
            .ok()?;
        Some(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for DomBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
