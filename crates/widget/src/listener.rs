//! Document-level listeners the widget holds while open
//!
//! All three are attached together on open and detached together on close,
//! so no listener outlives an open/close cycle and reopening never stacks
//! duplicates.

/// A document-level listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    /// Closes the widget on clicks outside it
    OutsideClick,
    /// Arrow navigation and Escape
    KeyDown,
    /// Re-query on typing
    KeyUp,
}

impl Listener {
    /// Every listener, in attach order
    pub const ALL: [Listener; 3] = [Listener::OutsideClick, Listener::KeyDown, Listener::KeyUp];
}

/// Which listeners are currently attached
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerSet {
    outside_click: bool,
    key_down: bool,
    key_up: bool,
}

impl ListenerSet {
    fn slot(&mut self, listener: Listener) -> &mut bool {
        match listener {
            Listener::OutsideClick => &mut self.outside_click,
            Listener::KeyDown => &mut self.key_down,
            Listener::KeyUp => &mut self.key_up,
        }
    }

    /// Whether `listener` is attached
    pub fn is_attached(&self, listener: Listener) -> bool {
        match listener {
            Listener::OutsideClick => self.outside_click,
            Listener::KeyDown => self.key_down,
            Listener::KeyUp => self.key_up,
        }
    }

    /// Attach one listener; attaching twice is a no-op
    pub fn attach(&mut self, listener: Listener) {
        *self.slot(listener) = true;
    }

    /// Detach one listener
    pub fn detach(&mut self, listener: Listener) {
        *self.slot(listener) = false;
    }

    /// Attach every listener
    pub fn attach_all(&mut self) {
        for listener in Listener::ALL {
            self.attach(listener);
        }
    }

    /// Detach every listener
    pub fn detach_all(&mut self) {
        *self = ListenerSet::default();
    }

    /// Whether nothing is attached
    pub fn is_empty(&self) -> bool {
        !(self.outside_click || self.key_down || self.key_up)
    }

    /// Attached listeners, in attach order
    pub fn attached(&self) -> Vec<Listener> {
        Listener::ALL
            .into_iter()
            .filter(|l| self.is_attached(*l))
            .collect()
    }
}
