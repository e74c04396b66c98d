use crate::components::{Accordion, AccordionItem, Carousel, Pipeline, PipelineStep, Slide, Tooltip};
use crate::hooks::use_title;
use crate::{State, base_path};
use yew::prelude::*;
use yewdux::prelude::*;

fn slides(base: &str) -> Vec<Slide> {
    [
        ("upload", "Drop in a video", "Start from a lesson you've already recorded."),
        ("outline", "Review the outline", "Spark drafts modules and checkpoints for you to edit."),
        ("publish", "Publish the course", "Share one link with your students."),
    ]
    .into_iter()
    .map(|(file, alt, caption)| Slide {
        src: AttrValue::from(format!("{base}/img/screens/{file}.png")),
        alt: AttrValue::from(alt),
        caption: Some(AttrValue::from(caption)),
    })
    .collect()
}

fn pipeline() -> Vec<PipelineStep> {
    [
        ("Upload your lessons", "Drop in recordings, slides or a YouTube playlist."),
        ("Transcribe", "Every video is transcribed and split into topics."),
        ("Outline", "Spark proposes modules in a sensible teaching order."),
        ("Edit the plan", "Reorder, rename and trim until it reads like you."),
        ("Add checkpoints", "Short questions are drafted after each key idea."),
        ("Write exercises", "Practice tasks grow out of your own examples."),
        ("Build the course page", "A landing page is laid out from your outline."),
        ("Invite students", "Share a link or import a class list."),
        ("Track progress", "See who is stuck and where, lesson by lesson."),
        ("Improve", "Weak spots feed back into the next version."),
    ]
    .into_iter()
    .map(|(title, body)| PipelineStep {
        title: AttrValue::from(title),
        body: AttrValue::from(body),
    })
    .collect()
}

fn faq() -> Vec<AccordionItem> {
    vec![
        AccordionItem::new(
            "Who is Spark for?",
            html! { {"Independent teachers, creators with a video library, and small teams \
                       who run courses."} },
        ),
        AccordionItem::new(
            "Do I keep ownership of my content?",
            html! { {"Always. You can export everything Spark generates at any time."} },
        ),
        AccordionItem::new(
            "When can I start?",
            html! { {"We are onboarding teachers from the waitlist in small batches."} },
        ),
    ]
}

#[function_component]
pub fn HomePage() -> Html {
    use_title("");

    let (_, dispatch) = use_store::<State>();
    let open_waitlist = dispatch.reduce_mut_callback(|state| state.open_waitlist());
    let base = base_path();

    html! {
        <>
            <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 text-center space-y-6">
                <h1 class="text-5xl font-bold tracking-tight text-slate-900">
                    {"From video to a course — without the grind."}
                </h1>
                <p class="max-w-2xl mx-auto text-lg text-slate-600">
                    {"Spark turns the lessons you've already recorded into a structured course with "}
                    <Tooltip id="checkpoints" text="Short questions that check understanding before moving on.">
                        <span class="underline decoration-dotted">{"checkpoints"}</span>
                    </Tooltip>
                    {", reporting, and a place for your students to learn."}
                </p>
                <button
                    type="button"
                    onclick={open_waitlist}
                    class="inline-flex items-center justify-center px-6 py-3 rounded-lg shadow-sm
                           text-base font-semibold text-white bg-brand-600 hover:bg-brand-700"
                >
                    {"Join Waitlist"}
                </button>
            </section>

            <section class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 pb-24">
                <Carousel slides={slides(&base)} label="How Spark works" />
            </section>

            <section class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 pb-24">
                <h2 class="text-3xl font-bold text-slate-900 mb-12">{"From recording to classroom"}</h2>
                <Pipeline steps={pipeline()} />
            </section>

            <section class="bg-slate-50 py-24">
                <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl font-bold text-slate-900 mb-8">{"Frequently asked questions"}</h2>
                    <Accordion id="home-faq" items={faq()} allow_multiple=true />
                </div>
            </section>
        </>
    }
}
