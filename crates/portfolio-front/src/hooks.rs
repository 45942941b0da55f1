use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use portfolio_common::ModalAction;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Forwards close-key presses to one card's modal while that card is mounted.
#[derive(Clone)]
pub struct CloseKeyHandler {
    live: Rc<Cell<bool>>,
    on_action: Callback<ModalAction>,
}

/// Keeps the handler live. Dropping it detaches the window listener and
/// silences any handler clone still held elsewhere.
pub struct CloseKeyGuard {
    live: Rc<Cell<bool>>,
    _listener: Option<EventListener>,
}

impl CloseKeyHandler {
    pub fn new(on_action: Callback<ModalAction>) -> (Self, CloseKeyGuard) {
        let live = Rc::new(Cell::new(true));
        let handler = Self {
            live: live.clone(),
            on_action,
        };
        let guard = CloseKeyGuard {
            live,
            _listener: None,
        };
        (handler, guard)
    }

    /// Returns whether an action was dispatched.
    pub fn handle_key(&self, key: &str) -> bool {
        if !self.live.get() {
            return false;
        }
        match ModalAction::from_key(key) {
            Some(action) => {
                self.on_action.emit(action);
                true
            }
            None => false,
        }
    }
}

impl CloseKeyGuard {
    fn attach(mut self, handler: CloseKeyHandler) -> Self {
        self._listener = web_sys::window().map(|window| {
            EventListener::new(&window, "keydown", move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    handler.handle_key(&event.key());
                }
            })
        });
        self
    }
}

impl Drop for CloseKeyGuard {
    fn drop(&mut self) {
        self.live.set(false);
    }
}

/// Registers one window `keydown` listener per mount and removes it on
/// unmount.
#[hook]
pub fn use_close_key(card_id: u32, on_action: Callback<ModalAction>) {
    use_effect_with(card_id, move |id| {
        let id = *id;
        let (handler, guard) = CloseKeyHandler::new(on_action);
        let guard = guard.attach(handler);
        log::debug!("Card {} registered keydown listener", id);
        move || {
            drop(guard);
            log::debug!("Card {} removed keydown listener", id);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_common::ModalState;
    use std::cell::RefCell;

    fn card_state(initial: ModalState) -> (Rc<RefCell<ModalState>>, Callback<ModalAction>) {
        let state = Rc::new(RefCell::new(initial));
        let on_action = {
            let state = state.clone();
            Callback::from(move |action: ModalAction| {
                let next = state.borrow().apply(action);
                *state.borrow_mut() = next;
            })
        };
        (state, on_action)
    }

    #[test]
    fn test_escape_closes_mounted_card() {
        let (state, on_action) = card_state(ModalState::OpenImage("/images/a.png".into()));
        let (handler, _guard) = CloseKeyHandler::new(on_action);

        assert!(handler.handle_key("Escape"));
        assert_eq!(*state.borrow(), ModalState::Closed);
    }

    #[test]
    fn test_other_keys_not_dispatched() {
        let (state, on_action) = card_state(ModalState::OpenEmbed("https://bzhang.org".into()));
        let (handler, _guard) = CloseKeyHandler::new(on_action);

        assert!(!handler.handle_key("Enter"));
        assert_eq!(*state.borrow(), ModalState::OpenEmbed("https://bzhang.org".into()));
    }

    #[test]
    fn test_handler_silent_after_teardown() {
        let (state, on_action) = card_state(ModalState::OpenImage("/images/a.png".into()));
        let (handler, guard) = CloseKeyHandler::new(on_action);

        drop(guard);

        assert!(!handler.handle_key("Escape"));
        assert_eq!(*state.borrow(), ModalState::OpenImage("/images/a.png".into()));
    }

    #[test]
    fn test_cards_only_touch_their_own_state() {
        let (first, first_action) = card_state(ModalState::OpenImage("/images/a.png".into()));
        let (second, second_action) = card_state(ModalState::OpenEmbed("https://bzhang.org".into()));
        let (first_handler, first_guard) = CloseKeyHandler::new(first_action);
        let (second_handler, _second_guard) = CloseKeyHandler::new(second_action);

        drop(first_guard);
        assert!(!first_handler.handle_key("Escape"));
        assert!(second_handler.handle_key("Escape"));

        assert_eq!(*first.borrow(), ModalState::OpenImage("/images/a.png".into()));
        assert_eq!(*second.borrow(), ModalState::Closed);
    }
}
