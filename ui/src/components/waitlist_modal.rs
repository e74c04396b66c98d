use crate::components::Modal;
use crate::site_config;
use crate::waitlist::{
    COURSE_TYPES, EMPLOYEE_RANGES, ERROR_VISIBLE_MS, Field, RESET_DELAY_MS, Role,
    SUBSCRIBER_RANGES, SUCCESS_BODY, SUCCESS_CLOSE_MS, SUCCESS_TITLE, Step, WaitlistAction,
    WaitlistFlow, failure_message,
};
use gloo_timers::future::TimeoutFuture;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-slate-300 \
                           focus:ring-2 focus:ring-brand-500 focus:border-brand-500 \
                           disabled:bg-slate-100";

#[derive(Properties, PartialEq)]
pub struct WaitlistModalProps {
    pub on_close: Callback<()>,
}

#[function_component]
pub fn WaitlistModal(props: &WaitlistModalProps) -> Html {
    let flow = use_reducer(WaitlistFlow::default);

    // Errors fade after a while unless replaced by a newer one.
    use_effect_with(flow.error_seq, {
        let flow = flow.dispatcher();
        move |seq| {
            let seq = *seq;
            yew::platform::spawn_local(async move {
                TimeoutFuture::new(ERROR_VISIBLE_MS).await;
                flow.dispatch(WaitlistAction::ExpireError(seq));
            });
        }
    });

    let set_field = |field: Field| {
        let flow = flow.dispatcher();
        Callback::from(move |value: String| flow.dispatch(WaitlistAction::Set(field, value)))
    };
    let on_input = |field: Field| {
        set_field(field).reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())
    };
    let on_select = |field: Field| {
        set_field(field).reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value())
    };

    let on_role = {
        let flow = flow.dispatcher();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            flow.dispatch(WaitlistAction::SetRole(Role::from_value(&value)));
        })
    };
    let on_info = set_field(Field::AdditionalInfo)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlTextAreaElement>().value());

    let on_back = {
        let flow = flow.dispatcher();
        Callback::from(move |_: MouseEvent| flow.dispatch(WaitlistAction::Back))
    };

    let on_submit = {
        let flow = flow.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if flow.is_disabled() {
                return;
            }
            if flow.step != Step::Details {
                flow.dispatch(WaitlistAction::Next);
                return;
            }
            let signup = match flow.form.signup() {
                Ok(signup) => signup,
                Err(error) => {
                    flow.dispatch(WaitlistAction::Invalid(error));
                    return;
                }
            };

            flow.dispatch(WaitlistAction::BeginSubmit);
            let flow = flow.dispatcher();
            let on_close = on_close.clone();
            yew::platform::spawn_local(async move {
                match site_config().api_client().join_waitlist(&signup).await {
                    Ok(()) => {
                        tracing::info!("Joined waitlist");
                        flow.dispatch(WaitlistAction::Finished(Ok(())));
                        TimeoutFuture::new(SUCCESS_CLOSE_MS).await;
                        on_close.emit(());
                        TimeoutFuture::new(RESET_DELAY_MS).await;
                        flow.dispatch(WaitlistAction::Reset);
                    }
                    Err(error) => {
                        tracing::error!(%error, "Waitlist submission failed");
                        flow.dispatch(WaitlistAction::Finished(Err(failure_message(&error))));
                    }
                }
            });
        })
    };

    let disabled = flow.is_disabled();
    let form = &flow.form;

    let step_fields = match flow.step {
        Step::Contact => html! {
            <>
                <input
                    type="email"
                    name="email"
                    placeholder="you@example.com"
                    value={form.email.clone()}
                    oninput={on_input(Field::Email)}
                    {disabled}
                    class={INPUT_CLASS}
                />
                <input
                    type="text"
                    name="name"
                    placeholder="Your name (optional)"
                    value={form.name.clone()}
                    oninput={on_input(Field::Name)}
                    {disabled}
                    class={INPUT_CLASS}
                />
            </>
        },
        Step::Profile => html! {
            <>
                <select name="role" onchange={on_role} {disabled} class={INPUT_CLASS}>
                    <option value="" selected={form.role.is_none()}>{"What best describes you?"}</option>
                    {for Role::ALL.iter().map(|role| html! {
                        <option value={role.to_string()} selected={form.role == Some(*role)}>
                            {role.label()}
                        </option>
                    })}
                </select>
                if form.role == Some(Role::Creator) {
                    {choice_list("subscriber_range", "Audience size", SUBSCRIBER_RANGES,
                        &form.subscriber_range, on_select(Field::SubscriberRange), disabled)}
                    <input
                        type="url"
                        name="youtube_channel_url"
                        placeholder="YouTube channel (optional)"
                        value={form.youtube_channel_url.clone()}
                        oninput={on_input(Field::YoutubeChannelUrl)}
                        {disabled}
                        class={INPUT_CLASS}
                    />
                }
                if form.role == Some(Role::Team) {
                    {choice_list("employee_range", "Team size", EMPLOYEE_RANGES,
                        &form.employee_range, on_select(Field::EmployeeRange), disabled)}
                }
            </>
        },
        Step::Details => html! {
            <>
                {choice_list("course_type", "What kind of course?", COURSE_TYPES,
                    &form.course_type, on_select(Field::CourseType), disabled)}
                <textarea
                    name="additional_info"
                    rows="3"
                    placeholder="Anything else we should know? (optional)"
                    value={form.additional_info.clone()}
                    oninput={on_info}
                    {disabled}
                    class={INPUT_CLASS}
                />
            </>
        },
    };

    let primary_label = if flow.step == Step::Details {
        flow.submit_label()
    } else {
        "Continue"
    };

    html! {
        <Modal on_close={props.on_close.clone()} label="Join the waitlist">
            <div class="relative">
                <button
                    type="button"
                    onclick={props.on_close.reform(|_: MouseEvent| ())}
                    aria-label="Close"
                    class="absolute -top-2 -right-2 p-2 text-slate-400 hover:text-slate-600"
                >
                    <span class="material-symbols-rounded">{"close"}</span>
                </button>
                <h3 class="text-2xl font-bold text-slate-900 mb-2">{"Join the waitlist"}</h3>
                if flow.succeeded {
                    <div class="text-center py-4">
                        <span class="material-symbols-rounded text-6xl text-emerald-500">{"check_circle"}</span>
                        <h4 class="text-xl font-bold text-slate-900 mb-2">{SUCCESS_TITLE}</h4>
                        <p class="text-slate-600">{SUCCESS_BODY}</p>
                    </div>
                } else {
                    <p class="text-slate-600 mb-6">
                        {"Spark is opening up to new educators in small batches. Leave your \
                          details and we'll be in touch."}
                    </p>
                    <form id="waitlist-form" onsubmit={on_submit} class="space-y-4" novalidate={true}>
                        if let Some(error) = &flow.error {
                            <div
                                role="alert"
                                class="p-3 bg-red-50 border border-red-200 rounded-lg text-red-700 text-sm"
                            >
                                {error.clone()}
                            </div>
                        }
                        <p class="text-xs font-medium text-slate-400 uppercase tracking-wider">
                            {format!("Step {} of {}", flow.step.number(), Step::COUNT)}
                        </p>
                        {step_fields}
                        <div class="flex gap-3">
                            if flow.step != Step::Contact {
                                <button
                                    type="button"
                                    onclick={on_back}
                                    {disabled}
                                    class="px-4 py-3 rounded-lg border border-slate-300 text-slate-700
                                           hover:bg-slate-50 disabled:opacity-50"
                                >
                                    {"Back"}
                                </button>
                            }
                            <button
                                type="submit"
                                {disabled}
                                class="flex-1 px-4 py-3 rounded-lg bg-brand-600 text-white font-semibold
                                       hover:bg-brand-700 disabled:opacity-50"
                            >
                                {primary_label}
                            </button>
                        </div>
                    </form>
                }
            </div>
        </Modal>
    }
}

fn choice_list(
    name: &'static str,
    prompt: &'static str,
    options: &'static [&'static str],
    current: &str,
    onchange: Callback<Event>,
    disabled: bool,
) -> Html {
    html! {
        <select {name} {onchange} {disabled} class={INPUT_CLASS}>
            <option value="" selected={current.is_empty()}>{prompt}</option>
            {for options.iter().map(|option| html! {
                <option value={*option} selected={current == *option}>{*option}</option>
            })}
        </select>
    }
}
