use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use scrapbook_core::key_command;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, MouseEvent, TouchEvent};

use crate::dom::{closest, document_loaded, event_target_element, FULLSCREEN_BUTTON_SELECTOR};
use crate::fullscreen::handle_fullscreen_click;
use crate::gallery::Gallery;

const ACTIVE_OPTIONS: EventListenerOptions = EventListenerOptions {
    phase: EventListenerPhase::Bubble,
    passive: false,
};

pub(crate) fn install(gallery: &Rc<Gallery>) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    install_layout_triggers(gallery, &mut listeners);
    install_click_handlers(gallery, &mut listeners);
    install_keyboard(gallery, &mut listeners);
    install_touch(gallery, &mut listeners);
    install_mouse_drag(gallery, &mut listeners);
    listeners
}

fn install_layout_triggers(gallery: &Rc<Gallery>, listeners: &mut Vec<EventListener>) {
    if document_loaded(&gallery.document) {
        gallery.render();
    } else {
        let view = Rc::clone(gallery);
        listeners.push(EventListener::new(&gallery.window, "load", move |_event: &Event| {
            view.render();
        }));
    }

    // Every resize recomputes the whole layout; there is no debounce.
    let view = Rc::clone(gallery);
    listeners.push(EventListener::new(&gallery.window, "resize", move |_event: &Event| {
        view.render();
    }));
}

fn install_click_handlers(gallery: &Rc<Gallery>, listeners: &mut Vec<EventListener>) {
    let fullscreen = gallery.fullscreen;
    listeners.push(EventListener::new(&gallery.document, "click", move |event: &Event| {
        if let Some(target) = event_target_element(event) {
            handle_fullscreen_click(fullscreen, &target);
        }
    }));

    for (idx, element) in gallery.renderer.entries().iter().enumerate() {
        let view = Rc::clone(gallery);
        let listener = EventListener::new_with_options(
            element,
            "click",
            ACTIVE_OPTIONS,
            move |event: &Event| {
                let on_fullscreen_button = event_target_element(event)
                    .and_then(|target| closest(&target, FULLSCREEN_BUTTON_SELECTOR))
                    .is_some();
                if on_fullscreen_button {
                    return;
                }
                event.prevent_default();
                view.lightbox.show(idx as i64);
            },
        );
        listeners.push(listener);
    }

    let view = Rc::clone(gallery);
    listeners.push(EventListener::new(&gallery.backdrop, "click", move |_event: &Event| {
        view.lightbox.close();
    }));
}

fn install_keyboard(gallery: &Rc<Gallery>, listeners: &mut Vec<EventListener>) {
    let view = Rc::clone(gallery);
    let listener = EventListener::new_with_options(
        &gallery.document,
        "keydown",
        ACTIVE_OPTIONS,
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(command) = key_command(&event.key()) else {
                return;
            };
            if view.lightbox.handle_key(command) {
                event.prevent_default();
            }
        },
    );
    listeners.push(listener);
}

fn install_touch(gallery: &Rc<Gallery>, listeners: &mut Vec<EventListener>) {
    let view = Rc::clone(gallery);
    listeners.push(EventListener::new(&gallery.frame, "touchstart", move |event: &Event| {
        if !view.lightbox.is_open() {
            return;
        }
        let Some(event) = event.dyn_ref::<TouchEvent>() else {
            return;
        };
        let touches = event.touches();
        if touches.length() != 1 {
            return;
        }
        if let Some(touch) = touches.get(0) {
            view.touch.borrow_mut().begin(f64::from(touch.client_x()));
        }
    }));

    let view = Rc::clone(gallery);
    listeners.push(EventListener::new(&gallery.frame, "touchend", move |event: &Event| {
        if !view.lightbox.is_open() || !view.touch.borrow().is_tracking() {
            return;
        }
        let end_x = event
            .dyn_ref::<TouchEvent>()
            .and_then(|event| event.changed_touches().get(0))
            .map(|touch| f64::from(touch.client_x()));
        let Some(end_x) = end_x else {
            view.touch.borrow_mut().reset();
            return;
        };
        let navigation = view.touch.borrow_mut().finish(end_x);
        if let Some(navigation) = navigation {
            view.lightbox.navigate(navigation);
        }
    }));
}

fn install_mouse_drag(gallery: &Rc<Gallery>, listeners: &mut Vec<EventListener>) {
    let view = Rc::clone(gallery);
    listeners.push(EventListener::new(&gallery.frame, "mousedown", move |event: &Event| {
        if !view.lightbox.is_open() {
            return;
        }
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            view.drag.borrow_mut().begin(f64::from(event.client_x()));
        }
    }));

    let view = Rc::clone(gallery);
    listeners.push(EventListener::new(&gallery.window, "mouseup", move |event: &Event| {
        if !view.drag.borrow().is_tracking() {
            return;
        }
        if !view.lightbox.is_open() {
            view.drag.borrow_mut().reset();
            return;
        }
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            view.drag.borrow_mut().reset();
            return;
        };
        let navigation = view.drag.borrow_mut().finish(f64::from(event.client_x()));
        if let Some(navigation) = navigation {
            view.lightbox.navigate(navigation);
        }
    }));
}
