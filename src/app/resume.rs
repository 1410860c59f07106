use leptos::{html, prelude::*};

use super::browser::scroll_to_section;
use super::reveal::{reveal_class, use_reveal};
use crate::content::{Highlight, RESUME_DOWNLOAD_NAME, RESUME_HIGHLIGHTS, RESUME_PATH};
use crate::sections::{CONTACT, RESUME};

#[component]
pub fn ResumeSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, 0.3, false);

    view! {
        <section
            node_ref=section_ref
            id=RESUME
            class="flex items-center relative w-full min-h-screen py-12 md:py-20 px-4 md:px-8 xl:px-24 2xl:px-32 scroll-mt-[120px]"
        >
            <div class="absolute top-32 right-20 w-16 h-16 bg-[#3827ff] rounded-full blur-[80px] opacity-40"></div>
            <div class="absolute bottom-32 left-20 w-20 h-20 bg-[#0077ff] rounded-full blur-[100px] opacity-40"></div>
            <div class="max-w-[1440px] mx-auto flex flex-col lg:flex-row items-center gap-12">
                <div class=move || {
                    reveal_class(visible.get(), "w-full lg:w-1/2 text-center lg:text-left")
                }>
                    <h2 class="text-3xl md:text-5xl xl:text-6xl font-bold mb-6 text-ink">
                        "Download My " <span class="text-gradient">"Resume"</span>
                    </h2>
                    <p class="font-light font-poppins text-sm md:text-base xl:text-lg text-ink mb-8 leading-relaxed">
                        "Get a comprehensive overview of my experience, skills, and achievements in frontend development."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 items-center lg:items-start">
                        <a
                            href=RESUME_PATH
                            download=RESUME_DOWNLOAD_NAME
                            class="relative h-[60px] md:h-[70px] w-full max-w-[294px] rounded-[20px] p-[3px] bg-gradient-accent transition-all duration-300 hover:scale-[1.03]"
                        >
                            <div class="flex h-full w-full items-center justify-center gap-3 rounded-[17px] bg-white">
                                <i class="extra-download text-accent"></i>
                                <span class="text-gradient font-semibold text-lg md:text-xl">
                                    "Download Resume"
                                </span>
                            </div>
                        </a>
                        <button
                            class="h-[60px] md:h-[70px] px-8 rounded-[20px] border-2 border-ink/20 text-ink font-semibold transition-all duration-300 hover:border-accent hover:text-accent"
                            on:click=move |_| scroll_to_section(CONTACT)
                        >
                            "Contact me"
                        </button>
                    </div>
                </div>
                <div class=move || reveal_class(visible.get(), "w-full lg:w-1/2 grid gap-6 delay-200")>
                    {RESUME_HIGHLIGHTS
                        .iter()
                        .map(|highlight| view! { <HighlightCard highlight=*highlight /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn HighlightCard(highlight: Highlight) -> impl IntoView {
    view! {
        <div class="relative group rounded-[20px] overflow-hidden transition-transform duration-300 hover:scale-[1.03]">
            <div class="absolute inset-0 opacity-0 group-hover:opacity-100 transition-opacity duration-500 pointer-events-none">
                <div class="absolute inset-0 bg-gradient-accent blur-2xl opacity-30 scale-105"></div>
            </div>
            <div class="relative z-10 rounded-[20px] shadow-lg bg-white/90 backdrop-blur-sm p-6 flex items-center gap-4">
                <div class="w-12 h-12 rounded-full bg-gradient-accent flex items-center justify-center text-white text-xl">
                    {highlight.icon}
                </div>
                <div>
                    <h3 class="text-lg font-semibold font-poppins text-ink mb-1">{highlight.title}</h3>
                    <p class="text-sm font-poppins text-ink/70">{highlight.description}</p>
                </div>
            </div>
        </div>
    }
}
