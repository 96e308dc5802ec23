use leptos::prelude::*;
use leptos_meta::Title;

use super::{avatar::Avatar, contact::Contact, stats::StatsSection};
use crate::config::{copyright_year, OWNER};
use crate::content::{LearningItem, Project, LEARNING, PROJECTS};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <StatsSection />
        <Projects />
        <Learning />
        <Contact />
        <Footer />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="pt-32 pb-20 px-6 relative overflow-hidden">
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="absolute top-20 left-10 w-72 h-72 bg-blue-400 rounded-full mix-blend-multiply filter blur-xl opacity-20 animate-blob"></div>
                <div class="absolute top-40 right-10 w-72 h-72 bg-purple-400 rounded-full mix-blend-multiply filter blur-xl opacity-20 animate-blob animation-delay-2000"></div>
                <div class="absolute -bottom-8 left-20 w-72 h-72 bg-pink-400 rounded-full mix-blend-multiply filter blur-xl opacity-20 animate-blob animation-delay-4000"></div>
            </div>
            <div class="max-w-4xl mx-auto text-center relative z-10">
                <Avatar />
                <h2 class="text-5xl md:text-6xl font-bold text-gray-900 dark:text-white mb-6 animate-fade-in-up">
                    "I am a "
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600 animate-gradient">
                        "Data Analyst"
                    </span>
                </h2>
                <p class="text-xl text-gray-600 dark:text-gray-300 mb-8 max-w-2xl mx-auto animate-fade-in-up animation-delay-200">
                    "Transforming raw data into actionable insights through statistical analysis, visualization, and storytelling"
                </p>
                <div class="flex gap-4 justify-center">
                    <a
                        href="#projects"
                        class="px-8 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 hover:scale-105 active:scale-95 transition-all duration-200 font-medium shadow-lg hover:shadow-xl"
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-3 border-2 border-blue-600 text-blue-600 dark:text-blue-400 rounded-lg hover:bg-blue-50 dark:hover:bg-gray-800 hover:scale-105 active:scale-95 transition-all duration-200 font-medium"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-6 bg-white dark:bg-gray-900">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold text-gray-900 dark:text-white mb-4 text-center">
                    "Featured Projects"
                </h2>
                <p class="text-center text-gray-600 dark:text-gray-400 mb-12 max-w-2xl mx-auto">
                    "Three projects that demonstrate my journey: what I know, what I learned, and what I'm aspiring to build"
                </p>
                <div class="grid md:grid-cols-3 gap-8">
                    {PROJECTS.into_iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let accent = project.accent;
    view! {
        <div class=format!(
            "bg-gradient-to-br {} dark:from-gray-800 dark:to-gray-700 rounded-xl shadow-lg hover:shadow-2xl hover:-translate-y-3 transition-all duration-300 overflow-hidden group",
            accent.card_class(),
        )>
            <div class=format!(
                "relative h-48 bg-gradient-to-br {} overflow-hidden",
                accent.banner_class(),
            )>
                <div class="absolute inset-0 flex items-center justify-center transition-transform group-hover:scale-110 duration-300">
                    <div class="text-white text-6xl group-hover:rotate-12 transition-transform duration-300">
                        {project.emoji}
                    </div>
                </div>
                <div class="absolute inset-0 bg-black opacity-0 group-hover:opacity-10 transition-opacity"></div>
            </div>
            <div class="p-6">
                <div class=format!(
                    "{} text-sm font-semibold mb-2 group-hover:animate-pulse",
                    accent.label_class(),
                )>{project.label}</div>
                <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-3">
                    {project.title}
                </h3>
                <p class="text-gray-600 dark:text-gray-300 mb-4">{project.summary}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class=format!(
                                    "px-3 py-1 {} rounded-full text-sm hover:scale-110 transition-transform",
                                    accent.tag_class(),
                                )>{*tag}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-3">
                    <a
                        href=project.demo_url
                        class=format!(
                            "{} hover:underline font-medium hover:translate-x-1 transition-transform inline-block",
                            accent.label_class(),
                        )
                    >
                        "View Demo →"
                    </a>
                    <a
                        href=project.source_url
                        class="text-gray-600 dark:text-gray-400 hover:underline font-medium hover:translate-x-1 transition-transform inline-block"
                    >
                        "GitHub →"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Learning() -> impl IntoView {
    view! {
        <section
            id="learning"
            class="py-20 px-6 bg-gradient-to-br from-slate-50 to-slate-100 dark:from-gray-900 dark:to-gray-800"
        >
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl font-bold text-gray-900 dark:text-white mb-4 text-center">
                    "Currently Learning"
                </h2>
                <p class="text-center text-gray-600 dark:text-gray-400 mb-12">
                    "Expanding my data analytics toolkit with new technologies and methodologies"
                </p>
                <div class="grid md:grid-cols-2 gap-6">
                    {LEARNING.into_iter().map(|item| view! { <LearningCard item /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn LearningCard(item: LearningItem) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 p-6 rounded-xl shadow-md hover:shadow-xl hover:-translate-y-1 transition-all duration-300">
            <div class="flex items-start gap-4">
                <div class=format!(
                    "w-12 h-12 bg-gradient-to-br {} rounded-lg flex items-center justify-center flex-shrink-0 shadow-lg",
                    item.accent.icon_class(),
                )>
                    <span class="text-2xl">{item.emoji}</span>
                </div>
                <div>
                    <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-2">
                        {item.title}
                    </h3>
                    <p class="text-gray-600 dark:text-gray-400">{item.summary}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-6 bg-gray-900 text-center text-gray-400">
            <p>{format!("© {} {OWNER}. Built with Leptos & Tailwind CSS", copyright_year())}</p>
        </footer>
    }
}
