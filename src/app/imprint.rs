use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::content::{EMAIL, LOCATION, OWNER, PHONE, ROLE};

#[component]
pub fn ImprintPage() -> impl IntoView {
    view! {
        <Title text="Imprint" />
        <div class="min-h-screen bg-white pt-[100px] pb-16">
            <div class="max-w-4xl mx-auto px-4 md:px-8 animate-drop-in">
                <div class="mb-8">
                    <A
                        href="/"
                        attr:class="inline-flex items-center gap-2 text-ink hover:text-accent transition-colors"
                    >
                        <i class="extra-arrow-left"></i>
                        "Back to Portfolio"
                    </A>
                </div>
                <div class="text-center mb-12">
                    <h1 class="text-4xl md:text-6xl font-bold text-ink mb-4">
                        "Legal " <span class="text-gradient">"Notice"</span>
                    </h1>
                    <p class="text-lg text-ink/70 font-poppins">"Imprint & Legal Information"</p>
                </div>
                <div class="grid gap-8 md:gap-12">
                    <Card title="Contact Information">
                        <div class="space-y-4">
                            <ContactRow icon="extra-email" label="Email" value=EMAIL />
                            <ContactRow icon="extra-phone" label="Phone" value=PHONE />
                            <ContactRow icon="extra-location" label="Address" value=LOCATION />
                        </div>
                    </Card>
                    <Card title="Legal Information">
                        <Clause title="Responsible for Content">
                            {OWNER} <br /> {ROLE} <br /> {LOCATION}
                        </Clause>
                        <Clause title="Disclaimer">
                            "The content of this website has been created with the utmost care. However, I cannot guarantee the accuracy, completeness, or timeliness of the content. As a service provider, I am responsible for my own content on these pages according to general law."
                        </Clause>
                        <Clause title="Copyright">
                            "The content and works on these pages created by the site operator are subject to Austrian copyright law. Duplication, processing, distribution, and any form of commercialization of such material beyond the scope of copyright law requires written consent from the author or creator."
                        </Clause>
                        <Clause title="External Links">
                            "This website contains links to external websites of third parties. I have no influence on the content of these websites, therefore I cannot assume any liability for this external content. The respective provider or operator of the pages is always responsible for the content of the linked pages."
                        </Clause>
                    </Card>
                    <Card title="Privacy Notice">
                        <Clause title="Data Collection">
                            "This website does not collect personal data unless you voluntarily provide it through the contact form. Any data you provide will only be used to respond to your inquiry and will not be shared with third parties."
                        </Clause>
                        <Clause title="Cookies">
                            "This website uses minimal technical cookies necessary for basic functionality. No tracking or analytics cookies are used."
                        </Clause>
                        <Clause title="Your Rights">
                            "You have the right to request information about your personal data, correction, deletion, or restriction of processing. Please contact me using the information provided above."
                        </Clause>
                    </Card>
                </div>
                <div class="text-center mt-12 pt-8 border-t border-gray-200">
                    <p class="text-ink/60 font-poppins">"Last updated: January 2025"</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Card(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="p-8 rounded-[15px] shadow-md bg-white/80 backdrop-blur-sm transition-all duration-300 hover:shadow-lg">
            <h2 class="text-2xl font-bold text-ink mb-6 font-poppins">{title}</h2>
            <div class="space-y-6 text-ink/80 font-poppins leading-relaxed">{children()}</div>
        </div>
    }
}

#[component]
fn Clause(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <h3 class="font-semibold text-ink mb-2">{title}</h3>
            <p>{children()}</p>
        </div>
    }
}

#[component]
fn ContactRow(icon: &'static str, label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <div class="w-10 h-10 rounded-full bg-gradient-accent flex items-center justify-center text-white">
                <i class=icon></i>
            </div>
            <div>
                <p class="font-semibold text-ink">{label}</p>
                <p class="text-ink/70">{value}</p>
            </div>
        </div>
    }
}
