mod about;
mod browser;
mod contact;
mod footer;
mod header;
mod hero;
mod homepage;
mod imprint;
mod projects;
mod resume;
mod reveal;
mod skills;

pub use contact::send_contact;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::OWNER;
use header::Header;
use homepage::HomePage;
use imprint::ImprintPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-poppins bg-white text-ink">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Meta name="description" content="Portfolio of a frontend developer: projects, skills, resume and contact." />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/imprint") view=ImprintPage />
            </Routes>
        </Router>
    }
}

#[component]
fn LandingPage() -> impl IntoView {
    view! {
        <div class="relative overflow-x-hidden scroll-smooth">
            <Header />
            <HomePage />
        </div>
    }
}
