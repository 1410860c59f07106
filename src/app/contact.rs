use leptos::{html, prelude::*, task::spawn_local};

use super::reveal::{reveal_class, use_reveal};
use crate::contact::{ContactError, ContactForm};
use crate::content::{EMAIL, INSTAGRAM, PHONE};
use crate::sections::CONTACT;

/// Forwards a contact submission to the configured mail service.
#[server]
pub async fn send_contact(
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    use crate::contact::{ContactMessage, Mailer};
    use crate::mail::EmailJsMailer;

    let mailer = use_context::<EmailJsMailer>()
        .ok_or_else(|| ServerFnError::new("mailer missing from context"))?;
    let message = ContactMessage {
        name,
        email,
        message,
    };
    mailer.send(&message).await.map_err(|e| {
        tracing::warn!(error = %e, "contact submission failed");
        ServerFnError::new(e.to_string())
    })
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, 0.3, false);
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(message) = form.try_update(ContactForm::begin_submit) else {
            return;
        };
        spawn_local(async move {
            let outcome = send_contact(message.name, message.email, message.message)
                .await
                .map_err(|e| ContactError::Server(e.to_string()));
            form.update(|f| f.complete(outcome));
        });
    };

    view! {
        <section
            node_ref=section_ref
            id=CONTACT
            class="relative flex flex-col lg:flex-row w-full justify-between items-center py-12 md:py-16 xl:py-24 px-4 md:px-8 lg:px-24 xl:px-48 gap-8"
        >
            <div class="absolute top-20 left-10 w-20 h-20 bg-[#3827ff] rounded-full blur-[100px] opacity-20"></div>
            <div class="absolute bottom-20 right-10 w-24 h-24 bg-[#0077ff] rounded-full blur-[120px] opacity-20"></div>
            <div class="max-w-[1440px] mx-auto w-full flex flex-col lg:flex-row gap-8 items-center">
                <div class=move || {
                    reveal_class(visible.get(), "flex flex-col justify-between lg:w-1/2 text-center lg:text-left")
                }>
                    <h2 class="text-3xl md:text-5xl xl:text-6xl font-bold mb-4 text-ink">
                        "LET'S GET IN" <br /> <span class="text-gradient">"TOUCH"</span>
                    </h2>
                    <p class="text-sm md:text-base xl:text-lg text-ink mb-6 md:mb-8 font-poppins font-light">
                        "I appreciate your interest in connecting with me. Whether you have "
                        <span class="text-gradient">"questions"</span>
                        ", "
                        <span class="text-gradient">"opportunities"</span>
                        ", or just want to "
                        <span class="text-gradient">"network"</span>
                        ", I am always open to hearing from you."
                    </p>
                    <p class="text-sm md:text-base xl:text-lg text-ink mb-6 md:mb-8 font-poppins font-light">
                        "Use the " <span class="text-gradient">"contact"</span>
                        " form or reach out " <span class="text-gradient">"directly"</span>
                        " via email or phone. I look forward to engaging with you."
                    </p>
                    <div class="flex gap-4 justify-center lg:justify-start">
                        <ContactLink href=format!("tel:{}", PHONE.replace(' ', "")) label="Phone" icon="extra-phone" />
                        <ContactLink href=format!("mailto:{EMAIL}") label="Email" icon="extra-email" />
                        <ContactLink
                            href=INSTAGRAM.url.to_string()
                            label=INSTAGRAM.name
                            icon=INSTAGRAM.icon
                        />
                    </div>
                </div>
                <form
                    class=move || {
                        reveal_class(
                            visible.get(),
                            "w-full lg:w-1/2 rounded-[20px] shadow-2xl bg-white p-6 md:p-10 space-y-6 md:space-y-8 delay-200",
                        )
                    }
                    on:submit=on_submit
                >
                    <h3 class="font-bold font-montserrat text-3xl md:text-5xl text-center text-ink">
                        "CONTACT FORM"
                    </h3>
                    <label class="block space-y-2">
                        <span class="font-bold text-sm md:text-base font-poppins">
                            "FULL NAME / COMPANY NAME"
                        </span>
                        <input
                            type="text"
                            name="name"
                            required
                            placeholder="Example: Max Mustermann (GmbH)"
                            class="w-full h-12 md:h-14 rounded-[10px] border border-gray-200 px-4 focus:border-accent focus:outline-none"
                            prop:value=move || form.with(|f| f.fields.name.clone())
                            on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
                        />
                    </label>
                    <label class="block space-y-2">
                        <span class="font-bold text-sm md:text-base font-poppins">"EMAIL"</span>
                        <input
                            type="email"
                            name="email"
                            required
                            placeholder="Example: max.mustermann@email.com"
                            class="w-full h-12 md:h-14 rounded-[10px] border border-gray-200 px-4 focus:border-accent focus:outline-none"
                            prop:value=move || form.with(|f| f.fields.email.clone())
                            on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                        />
                    </label>
                    <label class="block space-y-2">
                        <span class="font-bold text-sm md:text-base font-poppins">"YOUR MESSAGE"</span>
                        <textarea
                            name="message"
                            required
                            placeholder="Type your message here...."
                            class="w-full min-h-[150px] rounded-[10px] border border-gray-200 p-4 focus:border-accent focus:outline-none"
                            prop:value=move || form.with(|f| f.fields.message.clone())
                            on:input=move |ev| form.update(|f| f.set_message(event_target_value(&ev)))
                        ></textarea>
                    </label>
                    <button
                        type="submit"
                        class="w-full h-12 md:h-14 rounded-[10px] bg-gradient-accent text-white font-semibold transition-all duration-300 hover:opacity-90"
                    >
                        {move || if form.with(ContactForm::is_sending) { "SENDING..." } else { "SEND MESSAGE" }}
                    </button>
                    {move || {
                        form.with(|f| f.status().notice())
                            .map(|notice| {
                                view! { <p class="text-center text-sm font-poppins text-ink" role="status">{notice}</p> }
                            })
                    }}
                </form>
            </div>
        </section>
    }
}

#[component]
fn ContactLink(href: String, label: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            aria-label=label
            class="w-10 h-10 rounded-full flex items-center justify-center border border-gray-200 bg-white text-gray-700 transition-all duration-300 hover:scale-110 hover:bg-gradient-accent hover:text-white"
        >
            <i class=icon></i>
        </a>
    }
}
