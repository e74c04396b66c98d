use yew::prelude::*;

/// Which sections of an accordion are expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionState {
    open: Vec<bool>,
    allow_multiple: bool,
}

impl AccordionState {
    /// With `allow_multiple` off only the first of `initially_open` is kept.
    pub fn new(initially_open: Vec<bool>, allow_multiple: bool) -> Self {
        let mut state = Self {
            open: vec![false; initially_open.len()],
            allow_multiple,
        };
        for (index, open) in initially_open.into_iter().enumerate() {
            if open && (allow_multiple || !state.open.contains(&true)) {
                state.open[index] = true;
            }
        }
        state
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, index: usize) {
        let Some(was_open) = self.open.get(index).copied() else {
            return;
        };
        if !self.allow_multiple {
            self.open.fill(false);
        }
        self.open[index] = !was_open;
    }
}

/// Keys that toggle a focused section header.
pub fn is_toggle_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

pub fn content_id(accordion_id: &str, index: usize) -> String {
    format!("accordion-content-{accordion_id}-{index}")
}

#[derive(Clone, PartialEq)]
pub struct AccordionItem {
    pub title: AttrValue,
    pub content: Html,
    pub open: bool,
}

impl AccordionItem {
    pub fn new(title: impl Into<AttrValue>, content: Html) -> Self {
        Self {
            title: title.into(),
            content,
            open: false,
        }
    }

    pub fn opened(mut self) -> Self {
        self.open = true;
        self
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub id: AttrValue,
    pub items: Vec<AccordionItem>,
    #[prop_or_default]
    pub allow_multiple: bool,
}

#[function_component]
pub fn Accordion(props: &AccordionProps) -> Html {
    let state = use_state(|| {
        AccordionState::new(
            props.items.iter().map(|item| item.open).collect(),
            props.allow_multiple,
        )
    });

    let sections = props.items.iter().enumerate().map(|(index, item)| {
        let open = state.is_open(index);
        let panel_id = content_id(&props.id, index);

        let toggle = {
            let state = state.clone();
            move || {
                let mut next = (*state).clone();
                next.toggle(index);
                state.set(next);
            }
        };
        let onclick = {
            let toggle = toggle.clone();
            Callback::from(move |_: MouseEvent| toggle())
        };
        let onkeydown = Callback::from(move |e: KeyboardEvent| {
            if is_toggle_key(&e.key()) {
                e.prevent_default();
                toggle();
            }
        });

        html! {
            <div class="border-b border-slate-200">
                <button
                    type="button"
                    {onclick}
                    {onkeydown}
                    aria-expanded={open.to_string()}
                    aria-controls={panel_id.clone()}
                    class="w-full flex justify-between items-center py-4 text-left
                           font-medium text-slate-900 hover:text-brand-600"
                >
                    <span>{item.title.clone()}</span>
                    <span class={classes!(
                        "material-symbols-rounded", "transition-transform",
                        open.then_some("rotate-180")
                    )}>
                        {"expand_more"}
                    </span>
                </button>
                <div
                    id={panel_id}
                    role="region"
                    hidden={!open}
                    class="pb-4 text-slate-600"
                >
                    {item.content.clone()}
                </div>
            </div>
        }
    });

    html! {
        <div class="divide-y divide-slate-200">
            {for sections}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_mode_closes_the_others() {
        let mut state = AccordionState::new(vec![false; 3], false);
        state.toggle(0);
        state.toggle(2);
        assert!(!state.is_open(0));
        assert!(state.is_open(2));

        state.toggle(2);
        assert!((0..3).all(|i| !state.is_open(i)));
    }

    #[test]
    fn multiple_mode_keeps_sections_open() {
        let mut state = AccordionState::new(vec![true, false, true], true);
        assert!(state.is_open(0) && state.is_open(2));
        state.toggle(1);
        assert!((0..3).all(|i| state.is_open(i)));
    }

    #[test]
    fn single_mode_starts_with_at_most_one_open() {
        let state = AccordionState::new(vec![false, true, true], false);
        assert!(state.is_open(1));
        assert!(!state.is_open(2));
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut state = AccordionState::new(vec![true], false);
        state.toggle(5);
        assert!(state.is_open(0));
        assert!(!state.is_open(5));
    }

    #[test]
    fn keyboard_and_ids() {
        assert!(is_toggle_key("Enter"));
        assert!(is_toggle_key(" "));
        assert!(!is_toggle_key("Tab"));
        assert_eq!(content_id("faq", 2), "accordion-content-faq-2");
    }
}
