use leptos::{html, prelude::*};

use super::reveal::{reveal_class, use_reveal};
use crate::content::{Project, MORE_PROJECTS_URL, PROJECTS};
use crate::sections::PROJECTS as PROJECTS_ID;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, 0.2, false);

    view! {
        <section
            node_ref=section_ref
            id=PROJECTS_ID
            class="scroll-mt-[120px] w-full min-h-[calc(100vh-80px)] py-12 md:py-20 px-4 md:px-8 xl:px-24 2xl:px-32 relative flex items-start justify-center"
        >
            <div class="flex flex-col items-center max-w-[1440px] mx-auto w-full">
                <div class="absolute top-40 left-20 w-16 h-16 bg-[#3827ff] rounded-full blur-[100px] opacity-30"></div>
                <div class="absolute bottom-40 right-20 w-20 h-20 bg-[#0077ff] rounded-full blur-[120px] opacity-30"></div>
                <div class=move || reveal_class(visible.get(), "text-center mb-16")>
                    <h2 class="text-3xl md:text-5xl xl:text-6xl font-bold mb-6 text-ink">
                        "My " <span class="text-gradient">"Projects"</span>
                    </h2>
                    <p class="font-light font-poppins text-sm md:text-base xl:text-lg text-ink max-w-md">
                        "Selected work, from concept to deployed product."
                    </p>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 md:gap-6 w-full mb-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            let delay = format!("transition-delay: {}ms", 200 + i * 100);
                            view! {
                                <div
                                    class=move || reveal_class(visible.get(), "")
                                    style=delay
                                >
                                    <ProjectCard project=*project />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href=MORE_PROJECTS_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class=move || {
                        reveal_class(
                            visible.get(),
                            "text-gradient font-semibold text-sm md:text-base transition-all duration-300 hover:opacity-80 hover:scale-105",
                        )
                    }
                >
                    "SHOW MORE"
                </a>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let body = match (project.image, project.url) {
        (Some(image), url) => view! {
            <a href=url target="_blank" rel="noopener noreferrer">
                <div class="relative overflow-hidden">
                    <img
                        class="w-full h-[300px] md:h-[360px] xl:h-[400px] object-cover group-hover:scale-110 transition-transform duration-700"
                        alt=project.alt
                        src=image
                        loading="lazy"
                        decoding="async"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                    <div class="absolute bottom-4 left-4 text-white font-semibold text-lg opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                        {project.title}
                    </div>
                </div>
            </a>
        }
        .into_any(),
        (None, _) => view! {
            <div class="w-full h-[300px] md:h-[360px] xl:h-[400px] flex items-center justify-center bg-gradient-to-br from-gray-50 to-gray-100">
                <div class="text-center">
                    <div class="w-16 h-16 mx-auto mb-4 bg-gradient-accent rounded-full flex items-center justify-center">
                        <span class="text-white text-2xl">"+"</span>
                    </div>
                    <span class="text-gray-400 text-sm md:text-base font-medium">
                        {project.title}
                    </span>
                </div>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="overflow-hidden rounded-[15px] shadow-md hover:shadow-xl transition-all duration-500 cursor-pointer group bg-white/80 backdrop-blur-sm hover:bg-white">
            {body}
        </div>
    }
}
