use leptos::{html, prelude::*};
use leptos_use::use_interval_fn;

use super::browser::scroll_to_section;
use super::reveal::{reveal_class, use_reveal};
use crate::content::{
    HERO_COMMAND, HERO_COMMAND_CHAR_MS, HERO_FIRST_LINE, HERO_GREETINGS, HERO_RUN_LINES,
    HERO_SERVER_LINE,
};
use crate::motion::typed_prefix;
use crate::sections::{HOME, PROJECTS};
use crate::typewriter::{Timing, Typewriter};

const TICK_MS: u64 = 20;

#[component]
pub fn HeroSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, 0.1, true);

    view! {
        <section
            node_ref=section_ref
            id=HOME
            class="min-h-[calc(100vh-80px)] scroll-mt-[80px] w-full py-12 md:py-20 px-4 md:px-8 xl:px-24 2xl:px-32 relative"
        >
            <div class="flex items-center flex-col lg:flex-row gap-12 max-w-[1440px] mx-auto w-full">
                <div class=move || {
                    reveal_class(
                        visible.get(),
                        "w-full lg:w-1/2 relative space-y-6 md:space-y-8 text-center lg:text-left",
                    )
                }>
                    <h1 class="text-4xl md:text-5xl xl:text-6xl font-bold leading-tight">
                        "Hey, I'm " <span class="text-gradient caret">"Nikola"</span>
                    </h1>
                    <h2 class="text-lg md:text-xl xl:text-2xl text-ink font-medium">
                        "A Frontend Developer"
                    </h2>
                    <p class="text-sm md:text-base xl:text-lg font-light text-ink max-w-[540px] mx-auto lg:mx-0">
                        "From pixel-perfect designs to scalable frontend architectures, I bridge creativity and functionality to solve real problems with code."
                    </p>
                    <button
                        class="relative h-[60px] md:h-[70px] w-full max-w-[294px] rounded-[20px] p-[3px] bg-gradient-accent transition-all duration-300 hover:scale-[1.03]"
                        on:click=move |_| scroll_to_section(PROJECTS)
                    >
                        <div class="flex h-full w-full items-center justify-center rounded-[17px] bg-white">
                            <span class="text-gradient font-semibold text-lg md:text-xl">
                                "View My Work"
                            </span>
                        </div>
                    </button>
                </div>
                <div class=move || {
                    reveal_class(visible.get(), "w-full lg:w-1/2 flex flex-col items-center gap-6 delay-200")
                }>
                    <DevTerminal />
                    <Finder />
                    <CodeEditor />
                </div>
            </div>
        </section>
    }
}

/// Shell window that types out the dev-server command.
#[component]
fn DevTerminal() -> impl IntoView {
    let full_ms = HERO_COMMAND.chars().count() as u64 * HERO_COMMAND_CHAR_MS;
    let elapsed = RwSignal::new(0u64);
    let _ = use_interval_fn(
        move || {
            if elapsed.get_untracked() < full_ms {
                elapsed.update(|ms| *ms += HERO_COMMAND_CHAR_MS);
            }
        },
        HERO_COMMAND_CHAR_MS,
    );
    let typed = move || typed_prefix(HERO_COMMAND, elapsed.get(), HERO_COMMAND_CHAR_MS);

    view! {
        <div class="w-full max-w-md rounded-lg shadow-xl border border-ink/10 bg-gradient-to-br from-[#1e1e2e] to-[#2a324b] overflow-hidden">
            <WindowBar title="nikola-portfolio" dark=true />
            <div class="p-4 font-mono text-green-400 bg-[#1e1e2e] min-h-[160px] text-sm leading-relaxed">
                <p class="text-white">
                    <span class="text-blue-400">"~/portfolio"</span>
                    " ➜ "
                    {typed}
                </p>
                <Show when=move || typed() == HERO_COMMAND>
                    <p class="text-white mt-2 animate-pulse">{HERO_SERVER_LINE}</p>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn Finder() -> impl IntoView {
    view! {
        <div class="w-full max-w-md bg-white border border-gray-200 rounded-lg shadow-xl overflow-hidden">
            <WindowBar title="Finder" dark=false />
            <div class="p-4 text-sm text-ink">
                <p>"📁 Portfolio"</p>
                <ul class="mt-2 list-disc ml-6 space-y-1">
                    <li>"🧠 AboutMe.md"</li>
                    <li>"📸 Projects.png"</li>
                    <li>"📄 Resume.pdf"</li>
                    <li>"📬 Contact.txt"</li>
                </ul>
            </div>
        </div>
    }
}

/// Editor mock with a looping typewriter greeting and a "Run" button.
#[component]
fn CodeEditor() -> impl IntoView {
    let writer = RwSignal::new(Typewriter::new(&HERO_GREETINGS, Timing::default()));
    let _ = use_interval_fn(move || writer.update(|w| w.advance(TICK_MS)), TICK_MS);
    let lines = RwSignal::new(vec![HERO_FIRST_LINE.to_string()]);

    let run = move |_| {
        lines.update(|l| l.extend(HERO_RUN_LINES.iter().map(|s| s.to_string())));
    };

    view! {
        <div class="w-full max-w-[480px] h-[520px] bg-[#1e1e1e] rounded-[20px] shadow-2xl text-white flex flex-col overflow-hidden border border-[#2d2d2d]">
            <div class="bg-[#2d2d2d] px-4 py-2 flex justify-between text-xs font-mono">
                <button
                    class="text-xs bg-[#007acc] px-2 py-1 rounded hover:bg-[#1591db] transition"
                    on:click=run
                >
                    "Run"
                </button>
                <span>"App.tsx"</span>
                <TrafficLights />
            </div>
            <div class="flex bg-[#252526] px-4 text-sm">
                <div class="py-2 px-3 border-b-2 border-blue-400">"App.tsx"</div>
                <div class="py-2 px-3 opacity-50">"styles.css"</div>
            </div>
            <div class="flex-1 p-4 font-mono text-sm leading-relaxed overflow-auto">
                <code class="text-[#9CDCFE]">
                    <span class="text-[#C586C0]">"function"</span>
                    " "
                    <span class="text-[#DCDCAA]">"greet"</span>
                    "() {"
                    <br />
                    "\u{a0}\u{a0}"
                    <span class="text-[#CE9178]">"return \""</span>
                    {move || writer.with(|w| w.text())}
                    <span class="animate-pulse">"_"</span>
                    <span class="text-[#CE9178]">"\""</span>
                    ";"
                    <br />
                    "}"
                    <br />
                    <br />
                    <span class="text-[#569CD6]">"console"</span>
                    "."
                    <span class="text-[#DCDCAA]">"log"</span>
                    "(greet());"
                </code>
            </div>
            <div class="bg-[#1a1a1a] text-xs font-mono p-3 border-t border-[#333] h-[90px] overflow-y-auto">
                <For each=move || lines.get().into_iter().enumerate() key=|(i, _)| *i let:entry>
                    <div>
                        <span class="text-green-400">"> "</span>
                        <span class="text-white">{entry.1}</span>
                    </div>
                </For>
            </div>
        </div>
    }
}

#[component]
fn WindowBar(title: &'static str, dark: bool) -> impl IntoView {
    view! {
        <div class=if dark {
            "flex justify-between items-center bg-[#15151d] px-4 py-2 text-sm font-mono text-[#9fa8da]"
        } else {
            "flex justify-between items-center bg-gray-100 px-4 py-2 border-b text-sm font-semibold text-ink"
        }>
            <span>{title}</span>
            <TrafficLights />
        </div>
    }
}

#[component]
fn TrafficLights() -> impl IntoView {
    view! {
        <div class="flex gap-2">
            <span class="w-3 h-3 bg-red-500 rounded-full"></span>
            <span class="w-3 h-3 bg-yellow-400 rounded-full"></span>
            <span class="w-3 h-3 bg-green-500 rounded-full"></span>
        </div>
    }
}
