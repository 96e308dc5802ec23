mod avatar;
mod contact;
mod header;
mod homepage;
mod stats;

use header::NavBar;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SITE_TITLE;
use crate::content::{LINE_POINTS, SCATTER_POINTS};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
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
        <Title formatter=|title| format!("{SITE_TITLE} - {title}") />
        <Meta
            name="description"
            content="Data analyst portfolio: projects, current learning, and contact."
        />

        <Router>
            <div class="min-h-screen bg-gradient-to-br from-blue-50 via-purple-50 to-pink-50 dark:from-gray-900 dark:to-gray-800 relative overflow-hidden">
                <BackgroundCharts />
                <NavBar />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Faint chart shapes drawn behind every section.
#[component]
fn BackgroundCharts() -> impl IntoView {
    view! {
        <div class="fixed inset-0 pointer-events-none opacity-40 dark:opacity-20">
            <div class="absolute inset-0 bg-grid-pattern"></div>
            <svg
                class="absolute top-20 right-10 w-96 h-96 opacity-30 dark:opacity-20"
                viewBox="0 0 200 200"
            >
                <rect x="20" y="140" width="20" height="40" fill="#3b82f6" rx="2" />
                <rect x="50" y="110" width="20" height="70" fill="#3b82f6" rx="2" />
                <rect x="80" y="130" width="20" height="50" fill="#3b82f6" rx="2" />
                <rect x="110" y="90" width="20" height="90" fill="#3b82f6" rx="2" />
                <rect x="140" y="120" width="20" height="60" fill="#3b82f6" rx="2" />
            </svg>
            <svg
                class="absolute bottom-20 left-10 w-96 h-96 opacity-30 dark:opacity-20"
                viewBox="0 0 200 200"
            >
                <polyline
                    points="20,150 50,120 80,140 110,80 140,100 170,60"
                    fill="none"
                    stroke="#8b5cf6"
                    stroke-width="3"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
                {LINE_POINTS
                    .into_iter()
                    .map(|(cx, cy)| {
                        view! {
                            <circle cx=cx.to_string() cy=cy.to_string() r="4" fill="#8b5cf6" />
                        }
                    })
                    .collect_view()}
            </svg>
            <svg
                class="absolute top-1/2 left-1/4 w-64 h-64 opacity-25 dark:opacity-15"
                viewBox="0 0 100 100"
            >
                <circle
                    cx="50"
                    cy="50"
                    r="40"
                    fill="none"
                    stroke="#10b981"
                    stroke-width="20"
                    stroke-dasharray="75 25"
                    transform="rotate(-90 50 50)"
                />
                <circle
                    cx="50"
                    cy="50"
                    r="40"
                    fill="none"
                    stroke="#f59e0b"
                    stroke-width="20"
                    stroke-dasharray="25 75"
                    stroke-dashoffset="-75"
                    transform="rotate(-90 50 50)"
                />
            </svg>
            <svg
                class="absolute top-1/3 right-1/4 w-80 h-80 opacity-25 dark:opacity-15"
                viewBox="0 0 200 200"
            >
                {SCATTER_POINTS
                    .into_iter()
                    .map(|(cx, cy)| {
                        view! {
                            <circle cx=cx.to_string() cy=cy.to_string() r="3" fill="#ec4899" />
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}
