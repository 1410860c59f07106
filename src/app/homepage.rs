use leptos::prelude::*;
use leptos_meta::Title;

use super::about::AboutSection;
use super::contact::ContactSection;
use super::footer::{Footer, ScrollToTopButton};
use super::hero::HeroSection;
use super::projects::ProjectsSection;
use super::resume::ResumeSection;
use super::skills::SkillsSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        // drifting background glows
        <div class="fixed inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="absolute top-1/4 left-1/4 w-64 h-64 rounded-full blur-3xl bg-gradient-accent opacity-10 animate-drift"></div>
            <div class="absolute top-3/4 right-1/4 w-48 h-48 rounded-full blur-3xl bg-gradient-accent-reverse opacity-10 animate-drift-slow"></div>
        </div>
        <main class="relative flex flex-col w-full pt-[100px]">
            <HeroSection />
            <AboutSection />
            <ProjectsSection />
            <SkillsSection />
            <ResumeSection />
            <ContactSection />
        </main>
        <Footer />
        <ScrollToTopButton />
    }
}
