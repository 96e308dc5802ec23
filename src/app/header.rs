use leptos::{ev, prelude::*};

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use crate::config::SITE_TITLE;
use crate::content::NAV_LINKS;
#[cfg(feature = "hydrate")]
use crate::theme::{self, ThemeHost, DARK_CLASS, THEME_STORAGE_KEY};
use crate::theme::Theme;

/// Theme state backed by local storage, the `prefers-color-scheme` query
/// and the `<html>` class list.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
struct BrowserTheme {
    stored: Signal<String>,
    set_stored: WriteSignal<String>,
    prefers_dark: Signal<bool>,
}

#[cfg(feature = "hydrate")]
impl ThemeHost for BrowserTheme {
    fn stored(&self) -> Option<String> {
        Some(self.stored.get_untracked()).filter(|s| !s.is_empty())
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get_untracked()
    }

    fn persist(&mut self, theme: Theme) {
        self.set_stored.set(theme.to_string());
    }

    fn apply(&mut self, theme: Theme) {
        let Some(root) = document().document_element() else {
            return;
        };
        let classes = root.class_list();
        let res = if theme.is_dark() {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        if let Err(e) = res {
            log::warn!("couldn't update root class list: {e:?}");
        }
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="fixed top-0 w-full bg-white/90 dark:bg-gray-900/90 backdrop-blur-md shadow-sm z-50 border-b border-gray-200 dark:border-gray-800">
            <div class="max-w-6xl mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <a
                        href="#"
                        class="text-2xl font-bold text-gray-900 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 transition cursor-pointer"
                    >
                        {SITE_TITLE}
                    </a>
                    <div class="flex items-center gap-6">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=href
                                        class="text-gray-600 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition"
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle />
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let (current, set_current) = signal(Theme::default());

    #[cfg(feature = "hydrate")]
    let host = {
        let (stored, set_stored, _) =
            use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
        BrowserTheme {
            stored,
            set_stored,
            prefers_dark: use_preferred_dark(),
        }
    };

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            let mut host = host;
            set_current(theme::init(&mut host));
        },
        true,
    );

    let on_click = move |_: ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let mut host = host;
            set_current(theme::toggle(current.get_untracked(), &mut host));
        }
        #[cfg(not(feature = "hydrate"))]
        set_current.set(current.get_untracked().toggled());
    };

    view! {
        <button
            on:click=on_click
            class="p-2 rounded-lg bg-gray-200 dark:bg-gray-700 hover:bg-gray-300 dark:hover:bg-gray-600 transition-colors"
            aria-label="Toggle dark mode"
        >
            {move || {
                if current.get().is_dark() {
                    view! {
                        <svg class="w-5 h-5 text-yellow-500" fill="currentColor" viewBox="0 0 20 20">
                            <path
                                fill-rule="evenodd"
                                d="M10 2a1 1 0 011 1v1a1 1 0 11-2 0V3a1 1 0 011-1zm4 8a4 4 0 11-8 0 4 4 0 018 0zm-.464 4.95l.707.707a1 1 0 001.414-1.414l-.707-.707a1 1 0 00-1.414 1.414zm2.12-10.607a1 1 0 010 1.414l-.706.707a1 1 0 11-1.414-1.414l.707-.707a1 1 0 011.414 0zM17 11a1 1 0 100-2h-1a1 1 0 100 2h1zm-7 4a1 1 0 011 1v1a1 1 0 11-2 0v-1a1 1 0 011-1zM5.05 6.464A1 1 0 106.465 5.05l-.708-.707a1 1 0 00-1.414 1.414l.707.707zm1.414 8.486l-.707.707a1 1 0 01-1.414-1.414l.707-.707a1 1 0 011.414 1.414zM4 11a1 1 0 100-2H3a1 1 0 000 2h1z"
                                clip-rule="evenodd"
                            />
                        </svg>
                    }
                        .into_any()
                } else {
                    view! {
                        <svg class="w-5 h-5 text-gray-700" fill="currentColor" viewBox="0 0 20 20">
                            <path d="M17.293 13.293A8 8 0 016.707 2.707a8.001 8.001 0 1010.586 10.586z" />
                        </svg>
                    }
                        .into_any()
                }
            }}
        </button>
    }
}
