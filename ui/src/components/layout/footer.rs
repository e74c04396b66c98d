use super::nav::{self, FOOTER_COLUMNS};
use crate::base_path;
use yew::prelude::*;

#[function_component]
pub fn Footer() -> Html {
    let base = base_path();
    let year = jiff::Zoned::now().year();

    let columns = FOOTER_COLUMNS.iter().map(|column| {
        html! {
            <div>
                <h3 class="text-sm font-semibold text-slate-900 tracking-wider uppercase mb-4">
                    {column.title}
                </h3>
                <ul class="space-y-3">
                    {for column.links.iter().map(|link| html! {
                        <li>
                            <a
                                href={nav::href(&base, link.path)}
                                class="text-sm text-slate-500 hover:text-brand-600"
                            >
                                {link.name}
                            </a>
                        </li>
                    })}
                </ul>
            </div>
        }
    });

    html! {
        <footer class="bg-slate-50 border-t border-slate-200 mt-auto">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                    <div class="col-span-2 md:col-span-1">
                        <a href={nav::href(&base, "/")} class="flex items-center gap-2 mb-4">
                            <div class="w-6 h-6 bg-slate-900 rounded-md flex items-center justify-center
                                        text-white font-bold text-sm">
                                {"S"}
                            </div>
                            <span class="font-bold text-lg text-slate-900">{"Spark"}</span>
                        </a>
                        <p class="text-sm text-slate-500 mb-4">
                            {"From video to a course — without the grind."}
                        </p>
                        <div class="text-sm text-slate-400">
                            {"Built by a team obsessed with long-term learning, retention, and \
                              high-trust relationships with teachers."}
                        </div>
                    </div>
                    {for columns}
                </div>
                <div class="mt-12 border-t border-slate-200 pt-8 flex flex-col md:flex-row
                            justify-between items-center">
                    <p class="text-base text-slate-400 text-center md:text-left">
                        {format!("© {year} Spark. All rights reserved.")}
                    </p>
                </div>
            </div>
        </footer>
    }
}
