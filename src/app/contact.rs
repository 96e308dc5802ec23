use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::contact::{ContactSubmission, FormRelay, HttpRelay, SubmitStatus};
use crate::content::CONTACT_LINKS;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-6 bg-white dark:bg-gray-900">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-4xl font-bold text-gray-900 dark:text-white mb-4">
                    "Let's Connect"
                </h2>
                <p class="text-xl text-gray-600 dark:text-gray-400 mb-8">
                    "Looking for data-driven insights? Let's discuss how I can help transform your data into actionable strategies"
                </p>
                <div class="flex gap-6 justify-center flex-wrap mb-12">
                    {CONTACT_LINKS
                        .into_iter()
                        .enumerate()
                        .map(|(i, link)| {
                            let class = if i == 0 {
                                "px-8 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 active:scale-95 transition-all duration-200 font-medium"
                            } else {
                                "px-8 py-3 border-2 border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300 rounded-lg hover:bg-gray-50 dark:hover:bg-gray-800 active:scale-95 transition-all duration-200 font-medium"
                            };
                            view! {
                                <a
                                    href=link.href
                                    target=link.external.then_some("_blank")
                                    rel=link.external.then_some("noopener noreferrer")
                                    class=class
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <ContactFormView />
            </div>
        </section>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let submission = RwSignal::new(ContactSubmission::default());
    let status = Memo::new(move |_| submission.with(|s| s.status()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = match submission.try_update(ContactSubmission::begin) {
            Some(Ok(payload)) => payload,
            Some(Err(e)) => {
                log::info!("contact form not sent: {e}");
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let outcome = HttpRelay::default().relay(&payload).await;
            // discarded if the form was torn down while the request was in flight
            submission.try_update(|s| s.complete(outcome));
        });
    };

    let input_class = "w-full px-4 py-3 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-blue-500 transition";

    view! {
        <form on:submit=on_submit class="max-w-xl mx-auto text-left space-y-4">
            <div>
                <label for="contact_name" class="block mb-1 font-medium text-gray-700 dark:text-gray-300">
                    "Name"
                </label>
                <input
                    id="contact_name"
                    type="text"
                    required
                    class=input_class
                    prop:value=move || submission.with(|s| s.form.name.clone())
                    on:input=move |ev| submission.update(|s| s.form.name = event_target_value(&ev))
                />
            </div>
            <div>
                <label for="contact_email" class="block mb-1 font-medium text-gray-700 dark:text-gray-300">
                    "Email"
                </label>
                <input
                    id="contact_email"
                    type="email"
                    required
                    class=input_class
                    prop:value=move || submission.with(|s| s.form.email.clone())
                    on:input=move |ev| submission.update(|s| s.form.email = event_target_value(&ev))
                />
            </div>
            <div>
                <label for="contact_message" class="block mb-1 font-medium text-gray-700 dark:text-gray-300">
                    "Message"
                </label>
                <textarea
                    id="contact_message"
                    rows="5"
                    required
                    class=input_class
                    prop:value=move || submission.with(|s| s.form.message.clone())
                    on:input=move |ev| {
                        submission.update(|s| s.form.message = event_target_value(&ev))
                    }
                ></textarea>
            </div>
            <button
                type="submit"
                disabled=move || status.get().is_loading()
                class="w-full px-8 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 active:scale-95 transition-all duration-200 font-medium disabled:opacity-50 disabled:cursor-not-allowed"
            >
                {move || if status.get().is_loading() { "Sending..." } else { "Send Message" }}
            </button>
            {move || {
                let (status, feedback) = submission.with(|s| (s.status(), s.feedback()));
                feedback
                    .map(|msg| {
                        let class = if status == SubmitStatus::Success {
                            "text-green-600 dark:text-green-400"
                        } else {
                            "text-red-600 dark:text-red-400"
                        };
                        view! { <p class=class>{msg}</p> }
                    })
            }}
        </form>
    }
}
