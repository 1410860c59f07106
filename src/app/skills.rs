use leptos::{html, prelude::*};

use super::reveal::{reveal_class, use_reveal};
use crate::content::{Skill, SkillCategory, SKILL_CATEGORIES};
use crate::sections::SKILLS;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, 0.3, false);

    view! {
        <section
            node_ref=section_ref
            id=SKILLS
            class=move || {
                reveal_class(
                    visible.get(),
                    "w-full min-h-screen py-8 md:py-12 scroll-mt-[120px] bg-gradient-to-b from-[#0077FF] to-[#3827FF] flex items-center relative overflow-hidden",
                )
            }
        >
            <div class="absolute top-20 left-20 w-32 h-32 bg-white/10 rounded-full blur-3xl animate-drift"></div>
            <div class="absolute bottom-20 right-20 w-24 h-24 bg-white/10 rounded-full blur-2xl animate-drift-slow"></div>
            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center mb-8 md:mb-12">
                    <h2 class="text-3xl md:text-5xl lg:text-6xl text-white mb-2 leading-tight">
                        <span class="font-semibold">"My "</span>
                        <span class="font-bold">"Skills"</span>
                    </h2>
                    <p class="text-sm md:text-base lg:text-lg text-white font-light">
                        "Tools that ship products, not just code"
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4 md:gap-6">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! { <CategoryCard category=*category delay_ms={i * 100} /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: SkillCategory, delay_ms: usize) -> impl IntoView {
    let style = format!("transition-delay: {delay_ms}ms");

    if let Some(banner) = category.banner {
        return view! {
            <div class="md:col-span-3" style=style>
                <div class="rounded-[15px] shadow-md h-[150px] bg-white flex items-center justify-center transition-all duration-300 hover:shadow-xl hover:scale-[1.02]">
                    <img class="w-[80px] h-[80px] object-cover rounded-lg" alt=category.title src=banner />
                </div>
            </div>
        }
        .into_any();
    }

    // three-item categories lay their tiles out in a row of three
    let tiles = if category.items.len() > 2 {
        "grid grid-cols-3 gap-3"
    } else {
        "grid grid-cols-2 gap-3"
    };

    view! {
        <div class="space-y-4" style=style>
            <div class="rounded-[15px] shadow-md bg-white h-[101px] flex items-center justify-center px-4 transition-transform duration-300 hover:scale-105 hover:shadow-xl">
                <h3 class="font-poppins font-semibold text-ink text-xl text-center tracking-[10px]">
                    {category.title}
                </h3>
            </div>
            <div class=tiles>
                {category.items.iter().map(|skill| view! { <SkillTile skill=*skill /> }).collect_view()}
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn SkillTile(skill: Skill) -> impl IntoView {
    view! {
        <div class="rounded-[15px] shadow-md bg-white h-[101px] flex flex-col items-center justify-center px-2 transition-all duration-300 hover:shadow-xl hover:-translate-y-1">
            <img class="w-[60px] h-[60px] object-cover mb-1 rounded-lg" alt=skill.name src=skill.icon />
            <p class="font-poppins text-ink text-[11px] text-center">{skill.name}</p>
        </div>
    }
}
