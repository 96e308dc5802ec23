use leptos::prelude::*;

use crate::config::{OWNER, PROFILE_IMAGE};

#[component]
pub fn Avatar() -> impl IntoView {
    view! {
        <div class="flex justify-center mb-8">
            <div class="relative group">
                <div class="absolute -inset-1 bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600 rounded-full blur opacity-75 group-hover:opacity-100 transition duration-300 animate-pulse"></div>
                <div class="relative bg-white dark:bg-gray-900 rounded-full p-2">
                    <div class="relative w-48 h-48 overflow-hidden rounded-full ring-4 ring-white dark:ring-gray-800 shadow-2xl">
                        <img
                            src=PROFILE_IMAGE
                            alt=OWNER
                            class="w-full h-full object-cover hover:scale-110 transition-transform duration-300"
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
