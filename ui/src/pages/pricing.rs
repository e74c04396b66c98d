use crate::components::{Accordion, AccordionItem, Tooltip};
use crate::hooks::use_title;
use crate::pricing::{
    CONTACT_US_COPY, FOUNDER, MAX_STUDENTS, PRESETS, PricingTab, Quote, SPARK, StudentCount,
    format_usd, quote,
};
use crate::State;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

const DEFAULT_STUDENTS: u32 = 25;

fn faq() -> Vec<AccordionItem> {
    vec![
        AccordionItem::new(
            "What counts as an active student?",
            html! { {"Anyone who opens a lesson or submits work during the billing month. \
                       Students who sit out a month are not billed."} },
        )
        .opened(),
        AccordionItem::new(
            "What is founder pricing?",
            html! { {format!(
                "Teachers who join from the waitlist keep {} a month plus {} per extra student \
                 for as long as they stay.",
                format_usd(FOUNDER.base_fee),
                format_usd(FOUNDER.per_extra_student)
            )} },
        ),
        AccordionItem::new(
            "Can I cancel any time?",
            html! { {"Yes. Plans are month to month and your course content stays yours."} },
        ),
    ]
}

#[function_component]
pub fn PricingPage() -> Html {
    use_title("Pricing");

    let (_, dispatch) = use_store::<State>();
    let tab = use_state(PricingTab::default);
    let count = use_state(|| StudentCount::Exact(DEFAULT_STUDENTS));
    let raw = use_state(|| DEFAULT_STUDENTS.to_string());

    let set_count = {
        let count = count.clone();
        let raw = raw.clone();
        Callback::from(move |next: StudentCount| {
            raw.set(next.label());
            count.set(next);
        })
    };

    let on_slider = {
        let set_count = set_count.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            set_count.emit(StudentCount::from_value(input.value_as_number()));
        })
    };

    let on_text = {
        let count = count.clone();
        let raw = raw.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            if let Some(parsed) = StudentCount::parse(&value) {
                count.set(parsed);
            }
            raw.set(value);
        })
    };

    let open_waitlist = dispatch.reduce_mut_callback(|state| state.open_waitlist());

    let tabs = PricingTab::ALL.iter().map(|option| {
        let selected = *option == *tab;
        let onclick = {
            let tab = tab.clone();
            let option = *option;
            Callback::from(move |_: MouseEvent| tab.set(option))
        };
        html! {
            <button
                type="button"
                role="tab"
                aria-selected={selected.to_string()}
                aria-controls={option.panel_id()}
                {onclick}
                class={classes!(
                    "px-5", "py-2", "rounded-full", "text-sm", "font-medium", "transition-colors",
                    if selected { "bg-white text-slate-900 shadow" } else { "text-slate-600 hover:text-slate-900" }
                )}
            >
                {option.to_string()}
            </button>
        }
    });

    let presets = PRESETS.iter().map(|preset| {
        let active = count.is_preset(*preset);
        let onclick = {
            let set_count = set_count.clone();
            let preset = *preset;
            Callback::from(move |_: MouseEvent| set_count.emit(StudentCount::Exact(preset)))
        };
        html! {
            <button
                type="button"
                {onclick}
                aria-pressed={active.to_string()}
                class={classes!(
                    "px-3", "py-1", "rounded-full", "border", "text-sm",
                    if active {
                        "border-brand-600 bg-brand-50 text-brand-700"
                    } else {
                        "border-slate-200 text-slate-600 hover:border-slate-300"
                    }
                )}
            >
                {preset.to_string()}
            </button>
        }
    });

    let over_max = {
        let set_count = set_count.clone();
        Callback::from(move |_: MouseEvent| set_count.emit(StudentCount::OverMax))
    };

    let estimate = match quote(*count) {
        Quote::Priced { price, founder_price, breakdown } => html! {
            <div class="space-y-3">
                <p class="text-5xl font-bold text-slate-900">
                    {price}
                    <span class="text-lg font-medium text-slate-500">{" / month"}</span>
                </p>
                <p class="text-sm text-slate-600">
                    {"From month 2: "}{breakdown}
                </p>
                <p class="text-sm text-emerald-700">
                    {format!("Founder pricing: {founder_price} / month")}
                </p>
            </div>
        },
        Quote::ContactUs => html! {
            <div class="space-y-3">
                <p class="text-3xl font-bold text-slate-900">{"Let's talk"}</p>
                <p class="text-sm text-slate-600">{CONTACT_US_COPY}</p>
            </div>
        },
    };

    html! {
        <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-16 space-y-16">
            <div class="text-center space-y-4">
                <h1 class="text-4xl font-bold tracking-tight text-slate-900">{"Simple, elastic pricing"}</h1>
                <p class="text-lg text-slate-600">
                    {format!(
                        "{} a month covers your first {} ",
                        format_usd(SPARK.base_fee),
                        SPARK.included_students
                    )}
                    <Tooltip id="active-students" text="Students who open a lesson or submit work in a given month.">
                        <span class="underline decoration-dotted">{"active students"}</span>
                    </Tooltip>
                    {format!(". Each extra student is {}.", format_usd(SPARK.per_extra_student))}
                </p>
                <div role="tablist" class="inline-flex p-1 rounded-full bg-slate-100">
                    {for tabs}
                </div>
            </div>

            <section
                id={PricingTab::Spark.panel_id()}
                role="tabpanel"
                hidden={*tab != PricingTab::Spark}
                class="grid md:grid-cols-2 gap-10 items-start"
            >
                <div class="space-y-6">
                    <p class="block text-sm font-medium text-slate-900">
                        {"How many active students do you teach?"}
                    </p>
                    <div class="flex items-center gap-4">
                        <input
                            type="range"
                            min="0"
                            max={MAX_STUDENTS.to_string()}
                            value={count.slider_value().to_string()}
                            oninput={on_slider}
                            class="flex-1 accent-brand-600"
                            aria-label="Active students"
                        />
                        <input
                            aria-label="Number of active students"
                            type="text"
                            inputmode="numeric"
                            value={(*raw).clone()}
                            oninput={on_text}
                            class="w-20 px-3 py-2 rounded-lg border border-slate-300 text-center"
                        />
                    </div>
                    <div class="flex flex-wrap gap-2">
                        {for presets}
                        <button
                            type="button"
                            onclick={over_max}
                            aria-pressed={(*count == StudentCount::OverMax).to_string()}
                            class="px-3 py-1 rounded-full border border-slate-200 text-sm text-slate-600
                                   hover:border-slate-300"
                        >
                            {format!("{MAX_STUDENTS}+")}
                        </button>
                    </div>
                </div>
                <div class="rounded-2xl border border-slate-200 p-8 space-y-6">
                    {estimate}
                    <button
                        type="button"
                        onclick={open_waitlist.clone()}
                        class="w-full px-4 py-3 rounded-lg bg-brand-600 text-white font-semibold
                               hover:bg-brand-700"
                    >
                        {"Join the waitlist"}
                    </button>
                </div>
            </section>

            <section
                id={PricingTab::SparkLive.panel_id()}
                role="tabpanel"
                hidden={*tab != PricingTab::SparkLive}
                class="rounded-2xl border border-slate-200 p-8 text-center space-y-4"
            >
                <h2 class="text-2xl font-bold text-slate-900">{"Spark Live"}</h2>
                <p class="text-slate-600">
                    {"Live cohorts with scheduling, attendance and replays. Priced per cohort; \
                      tell us about your classes and we'll send a quote."}
                </p>
                <button
                    type="button"
                    onclick={open_waitlist}
                    class="px-6 py-3 rounded-lg bg-slate-900 text-white font-semibold hover:bg-slate-800"
                >
                    {"Talk to us"}
                </button>
            </section>

            <section class="max-w-3xl mx-auto">
                <h2 class="text-2xl font-bold text-slate-900 mb-6">{"Questions"}</h2>
                <Accordion id="pricing-faq" items={faq()} />
            </section>
        </div>
    }
}
