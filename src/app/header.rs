use leptos::{ev, prelude::*};
use leptos_use::{
    use_event_listener_with_options, use_window, use_window_scroll, UseEventListenerOptions,
};

use super::browser::{scroll_to_section, BrowserViewport};
use crate::scroll::ActiveSectionTracker;
use crate::sections::{
    is_scrolled, CONTACT, HEADER_OFFSET, SCROLLED_THRESHOLD, SCROLL_LISTENER_PASSIVE, SECTIONS,
};

#[component]
pub fn Header() -> impl IntoView {
    let tracker = RwSignal::new(ActiveSectionTracker::new(&SECTIONS, HEADER_OFFSET));
    let active = Memo::new(move |_| tracker.with(|t| t.active()));
    let menu_open = RwSignal::new(false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get(), SCROLLED_THRESHOLD));

    let sample = move || {
        let Some(viewport) = BrowserViewport::new() else {
            return;
        };
        let mut next = tracker.get_untracked();
        if next.recompute(&viewport) {
            log::debug!("active section: {:?}", next.active());
            tracker.set(next);
        }
    };

    // initial sample once hydrated; effects never run on the server
    Effect::new(move |_| sample());
    // removed again when the header is disposed
    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| sample(),
        UseEventListenerOptions::default().passive(SCROLL_LISTENER_PASSIVE),
    );

    let go_to = move |id: &'static str| {
        scroll_to_section(id);
        menu_open.set(false);
    };

    let nav_class = move |id: &'static str| {
        if tracker.with(|t| t.is_active(id)) {
            "font-montserrat font-semibold text-base transition-all duration-300 text-accent scale-110"
        } else {
            "font-montserrat font-semibold text-base transition-all duration-300 text-ink hover:text-blue-600"
        }
    };

    view! {
        <header class=move || {
            if scrolled.get() {
                "fixed top-0 inset-x-0 z-50 transition-all duration-500 backdrop-blur-md bg-white/80 border-b border-gray-200 shadow-lg"
            } else {
                "fixed top-0 inset-x-0 z-50 transition-all duration-500 bg-transparent"
            }
        }>
            <nav class="flex justify-between items-center px-4 md:px-8 lg:px-[94px] py-4 md:py-6 max-w-[1440px] mx-auto">
                <div class="hidden md:flex items-center gap-8 mx-auto">
                    {SECTIONS
                        .iter()
                        .map(|section| {
                            let id = section.id;
                            view! {
                                <button class=move || nav_class(id) on:click=move |_| go_to(id)>
                                    {section.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="hidden md:inline-flex w-[148px] h-[35px] rounded-[5px] bg-gradient-accent text-white text-sm font-semibold items-center justify-center transition-all duration-300 hover:scale-105 hover:shadow-lg"
                    on:click=move |_| go_to(CONTACT)
                >
                    "Hire me"
                </button>
                <div class="md:hidden ml-auto">
                    <button
                        class="flex flex-col items-end gap-1 p-2"
                        aria-label="Toggle menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        <span class=move || {
                            if menu_open.get() {
                                "block w-4 h-[3px] rounded-full bg-gradient-accent transition-all duration-300 translate-y-1.5 rotate-45"
                            } else {
                                "block w-4 h-[3px] rounded-full bg-gradient-accent transition-all duration-300"
                            }
                        }></span>
                        <span class=move || {
                            if menu_open.get() {
                                "block w-6 h-[3px] rounded-full bg-gradient-accent transition-all duration-300 -translate-y-1.5 -rotate-45"
                            } else {
                                "block w-6 h-[3px] rounded-full bg-gradient-accent transition-all duration-300"
                            }
                        }></span>
                    </button>
                </div>
            </nav>
            <Show when=move || menu_open.get()>
                <MobileMenu active go_to />
            </Show>
        </header>
    }
}

#[component]
fn MobileMenu<F>(active: Memo<Option<&'static str>>, go_to: F) -> impl IntoView
where
    F: Fn(&'static str) + Copy + Send + Sync + 'static,
{
    view! {
        <div class="absolute top-full left-1/2 -translate-x-1/2 w-full max-w-[95%] px-4 py-5 z-40 rounded-b-2xl bg-white/90 backdrop-blur-xl shadow-2xl animate-drop-in">
            <div class="flex flex-col space-y-5 text-center">
                {SECTIONS
                    .iter()
                    .map(|section| {
                        let id = section.id;
                        view! {
                            <button
                                class=move || {
                                    if active.get() == Some(id) {
                                        "text-base font-semibold transition-all duration-300 text-accent"
                                    } else {
                                        "text-base font-semibold transition-all duration-300 text-ink hover:text-blue-600"
                                    }
                                }
                                on:click=move |_| go_to(id)
                            >
                                {section.label}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    class="mt-4 block w-full rounded-md bg-gradient-accent text-white text-sm font-semibold py-3 shadow-md transition-all duration-300 hover:opacity-90"
                    on:click=move |_| go_to(CONTACT)
                >
                    "Hire me"
                </button>
            </div>
        </div>
    }
}
