/// Attaches and detaches the content-script listeners as one unit
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::UnwrapThrowExt;
use web_sys::{AbortController, AddEventListenerOptions, MouseEvent};

use crate::handler::Handler;
use crate::util;

/// A live registration: aborting the controller revokes every listener it
/// was created with, and the closures must outlive it
struct Registration {
    controller: AbortController,
    _callbacks: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

/// Listener lifecycle, driven by the persisted enabled flag.
///
/// The dispatch table (event type to handler) is built once at construction;
/// `enable` flips between zero and one registration. Attaching while already
/// attached is a no-op, so a repeated enable notification can never leak a
/// second listener pair.
pub struct EventListeners {
    handlers: Vec<(&'static str, Rc<dyn Handler>)>,
    registration: Option<Registration>,
}

impl EventListeners {
    pub fn new(mouseover: Rc<dyn Handler>, click: Rc<dyn Handler>) -> EventListeners {
        EventListeners {
            handlers: vec![("mouseover", mouseover), ("click", click)],
            registration: None,
        }
    }

    pub fn enable(&mut self, enable: bool) -> Result<(), JsValue> {
        if enable {
            self.attach()
        } else {
            self.detach();
            Ok(())
        }
    }

    pub fn is_attached(&self) -> bool {
        self.registration.is_some()
    }

    fn attach(&mut self) -> Result<(), JsValue> {
        if self.registration.is_some() {
            return Ok(());
        }

        let document = util::document()?;
        let controller = AbortController::new()?;
        let options = AddEventListenerOptions::new();
        options.set_signal(&controller.signal());

        let mut callbacks = Vec::with_capacity(self.handlers.len());
        for (event_type, handler) in &self.handlers {
            let handler = Rc::clone(handler);
            let callback = Closure::wrap(Box::new(move |event: MouseEvent| {
                // Handler errors are broken invariants; surface them to the
                // host instead of papering over.
                handler.handle(&event).unwrap_throw();
            }) as Box<dyn FnMut(MouseEvent)>);
            document.add_event_listener_with_callback_and_add_event_listener_options(
                event_type,
                callback.as_ref().unchecked_ref(),
                &options,
            )?;
            callbacks.push(callback);
        }

        self.registration = Some(Registration {
            controller,
            _callbacks: callbacks,
        });
        Ok(())
    }

    fn detach(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.controller.abort();
        }
    }
}
