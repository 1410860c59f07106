use leptos::{html, prelude::*};
use leptos_use::use_interval_fn;

use super::reveal::{reveal_class, use_reveal};
use crate::content::{COUNT_UP_MS, SOCIAL_LINKS, STATS};
use crate::motion::count_up;
use crate::sections::ABOUT;

const TICK_MS: u64 = 50;

#[component]
pub fn AboutSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, 0.3, false);

    view! {
        <section
            node_ref=section_ref
            id=ABOUT
            class="relative w-full py-16 md:py-24 px-4 md:px-8 lg:px-24 xl:px-48"
        >
            <div class="flex flex-col lg:flex-row gap-12 items-center max-w-[1440px] mx-auto">
                <div class="flex flex-col gap-8 lg:w-1/2">
                    <h2 class=move || reveal_class(visible.get(), "text-4xl md:text-6xl font-bold text-ink")>
                        "About " <span class="text-gradient">"me"</span>
                    </h2>
                    <p class=move || {
                        reveal_class(visible.get(), "text-base md:text-lg font-light text-ink leading-relaxed delay-200")
                    }>
                        "Hi, I'm Nikola, a frontend developer with a knack for turning ideas into fast, intuitive web apps."
                        <br />
                        <br />
                        "I recently graduated from "
                        <span class="text-gradient font-medium">
                            "HTL St. Pölten (Informatik - Software Engineering)"
                        </span>
                        ", where I honed my skills in clean architecture and collaborative coding. Now I craft performant UIs with Flutter, React, and TypeScript."
                    </p>
                    <div class=move || {
                        reveal_class(visible.get(), "flex justify-around rounded-[20px] shadow-lg bg-white py-6 delay-300")
                    }>
                        {STATS
                            .iter()
                            .enumerate()
                            .map(|(i, stat)| {
                                view! {
                                    <div class="flex flex-col items-center">
                                        <div class="text-3xl md:text-5xl font-bold text-gradient">
                                            <CountUp target=stat.value active=visible />
                                        </div>
                                        <div class="text-sm md:text-base text-ink">{stat.label}</div>
                                    </div>
                                    {(i + 1 < STATS.len())
                                        .then(|| view! { <div class="w-px bg-gray-200"></div> })}
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class=move || reveal_class(visible.get(), "flex gap-4 delay-500")>
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.name
                                        class="w-10 h-10 rounded-full flex items-center justify-center border border-gray-200 bg-white text-gray-700 transition-all duration-500 hover:scale-110 hover:bg-gradient-accent hover:text-white"
                                    >
                                        <i class=link.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <p class=move || reveal_class(visible.get(), "text-lg font-medium text-gradient delay-700")>
                        "Let's build something cool together!"
                    </p>
                </div>
                <div class=move || reveal_class(visible.get(), "lg:w-1/2 flex justify-center delay-300")>
                    <img
                        src="/portrait.png"
                        alt="Portrait of Nikola"
                        class="w-full max-w-[480px] rounded-[35px] shadow-2xl"
                        loading="lazy"
                    />
                </div>
            </div>
        </section>
    }
}

/// Eased counter that restarts whenever it comes back into view.
#[component]
fn CountUp(target: u32, #[prop(into)] active: Signal<bool>) -> impl IntoView {
    let elapsed = RwSignal::new(0u64);
    let _ = use_interval_fn(
        move || {
            if active.get_untracked() && elapsed.get_untracked() < COUNT_UP_MS {
                elapsed.update(|ms| *ms += TICK_MS);
            }
        },
        TICK_MS,
    );
    Effect::watch(
        move || active.get(),
        move |on, _, _| {
            if !*on {
                elapsed.set(0);
            }
        },
        false,
    );

    move || {
        if active.get() {
            format!("{}+", count_up(target, elapsed.get(), COUNT_UP_MS))
        } else {
            "0+".to_string()
        }
    }
}
