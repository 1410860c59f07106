use leptos::prelude::*;
use leptos_router::components::A;
use leptos_use::use_window_scroll;

use super::browser::scroll_to_top;
use crate::content::{copyright_year, OWNER};
use crate::sections::{is_scrolled, BACK_TO_TOP_THRESHOLD};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full px-4 md:px-8 lg:px-[94px] pb-[31px] max-w-[1440px] mx-auto">
            <hr class="w-full h-[5px] border-0 bg-gray-100" />
            <div class="mt-[30px] flex flex-col md:flex-row items-center justify-between gap-4">
                <p class="font-poppins text-black text-sm md:text-xl text-center md:text-left">
                    {format!("© {} – Built with ", copyright_year())}
                    <span class="inline-block text-accent animate-pulse">"♥"</span>
                    {format!(" by {OWNER}")}
                </p>
                <div class="flex gap-6 text-sm text-ink/70 font-poppins">
                    <A href="/imprint" attr:class="hover:text-accent transition-colors duration-300">
                        "Imprint"
                    </A>
                    <A href="/imprint" attr:class="hover:text-accent transition-colors duration-300">
                        "Privacy Policy"
                    </A>
                </div>
            </div>
        </footer>
    }
}

#[component]
pub fn ScrollToTopButton() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let visible = Memo::new(move |_| is_scrolled(scroll_y.get(), BACK_TO_TOP_THRESHOLD));

    view! {
        <button
            aria-label="Scroll to top"
            class=move || {
                if visible.get() {
                    "fixed bottom-6 right-6 z-50 p-3 rounded-full shadow-lg bg-gradient-accent text-white transition-opacity duration-300 hover:opacity-90 opacity-100"
                } else {
                    "fixed bottom-6 right-6 z-50 p-3 rounded-full shadow-lg bg-gradient-accent text-white transition-opacity duration-300 opacity-0 pointer-events-none"
                }
            }
            on:click=move |_| scroll_to_top()
        >
            <i class="extra-arrow-up"></i>
        </button>
    }
}
