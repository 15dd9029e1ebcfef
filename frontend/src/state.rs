use futures_signals::signal::{Mutable, Signal};
use once_cell::unsync::OnceCell;

thread_local! {
    static MODAL: OnceCell<ModalState> = OnceCell::new();
}

/// Page-wide "is the contact dialog open" flag. Clones share the same flag;
/// the only way to change it is `toggle`.
#[derive(Clone, Debug, Default)]
pub struct ModalState {
    is_open: Mutable<bool>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&self) {
        let mut is_open = self.is_open.lock_mut();
        *is_open = !*is_open;
    }

    pub fn is_open(&self) -> bool {
        self.is_open.get()
    }

    pub fn signal(&self) -> impl Signal<Item=bool> {
        self.is_open.signal()
    }
}

/// Installs the page-wide modal handle. A second call keeps the first handle.
pub fn provide_modal(state: ModalState) -> ModalState {
    MODAL.with(|slot| slot.get_or_init(|| state).clone())
}

/// Panics when called before `provide_modal`: that is a wiring bug, not a
/// state the page can recover from.
pub fn use_modal() -> ModalState {
    MODAL.with(|slot| slot.get().cloned())
        .unwrap_or_else(|| panic!("use_modal must be called within a modal provider"))
}
