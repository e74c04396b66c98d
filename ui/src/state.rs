use yew::AttrValue;
use yewdux::prelude::*;

/// State shared by the layout and widgets on every page.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub waitlist_open: bool,
    /// Id of the tooltip currently shown. At most one is open at a time.
    pub active_tooltip: Option<AttrValue>,
}

impl State {
    pub fn open_waitlist(&mut self) {
        self.waitlist_open = true;
        self.active_tooltip = None;
    }

    pub fn close_waitlist(&mut self) {
        self.waitlist_open = false;
    }

    pub fn is_tooltip_open(&self, id: &str) -> bool {
        self.active_tooltip.as_deref() == Some(id)
    }

    pub fn show_tooltip(&mut self, id: AttrValue) {
        self.active_tooltip = Some(id);
    }

    /// Hide tooltip `id`, leaving any other open tooltip alone.
    pub fn hide_tooltip(&mut self, id: &str) {
        if self.is_tooltip_open(id) {
            self.active_tooltip = None;
        }
    }

    pub fn toggle_tooltip(&mut self, id: AttrValue) {
        if self.is_tooltip_open(&id) {
            self.active_tooltip = None;
        } else {
            self.active_tooltip = Some(id);
        }
    }
}
