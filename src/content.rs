/// Content-script wiring: one shared slot, one tooltip, two handlers, and a
/// listener lifecycle driven by the persisted flag
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::UnwrapThrowExt;

use crate::active_target::ActiveTarget;
use crate::handler::{ClickHandler, Handler, MouseOverHandler};
use crate::listeners::EventListeners;
use crate::storage::EnabledFlag;
use crate::tooltip::Tooltip;

pub fn run() {
    let active_target = ActiveTarget::new();
    let mouseover: Rc<dyn Handler> =
        Rc::new(MouseOverHandler::new(Tooltip::default(), active_target.clone()));
    let click: Rc<dyn Handler> = Rc::new(ClickHandler::new(active_target));
    let listeners = Rc::new(RefCell::new(EventListeners::new(mouseover, click)));

    EnabledFlag::watch(move |enabled| {
        log::debug!("link copier {}", if enabled { "enabled" } else { "disabled" });
        listeners.borrow_mut().enable(enabled).unwrap_throw();
    });
}
