use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

use crate::profile::{NAV_LINKS, OWNER};

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let location = use_location();

    // close the mobile menu whenever the route changes
    Effect::watch(
        move || location.pathname.track(),
        move |_, _, _| set_menu_open(false),
        false,
    );

    view! {
        <nav class="sticky top-0 z-40 backdrop-blur-md bg-black/20 border-b border-cyan-500/30">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <A href="/" attr:class="text-2xl font-bold font-mono text-white">
                        <span>{OWNER.short_name}</span>
                        <span class="text-cyan-400">"."</span>
                        <span>"EXE"</span>
                    </A>
                    <div class="hidden md:flex space-x-2">
                        {NAV_LINKS
                            .iter()
                            .skip(1)
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        class="px-6 py-3 font-mono text-sm font-medium text-gray-300 hover:text-white transition-colors duration-300"
                                    >
                                        {link.label.to_uppercase()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden text-white hover:text-cyan-400 transition-colors neon-glow"
                        aria-label="Toggle navigation menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=menu_open>
                <MobileMenu on_close=move || set_menu_open(false) />
            </Show>
        </nav>
    }
}

#[component]
fn MobileMenu(on_close: impl Fn() + Clone + Send + Sync + 'static) -> impl IntoView {
    let pathname = use_location().pathname;
    view! {
        <div class="md:hidden cyber-glass border-t border-cyan-500/30 px-4 py-4 space-y-2">
            {NAV_LINKS
                .iter()
                .map(|link| {
                    let on_close = on_close.clone();
                    let is_current = move || pathname.get() == link.href;
                    view! {
                        <a
                            href=link.href
                            on:click=move |_| on_close()
                            class=move || {
                                if is_current() {
                                    "block px-4 py-3 rounded-lg font-mono bg-cyan-500/20 text-cyan-300"
                                } else {
                                    "block px-4 py-3 rounded-lg font-mono text-gray-300 hover:bg-cyan-500/10"
                                }
                            }
                        >
                            {link.label}
                        </a>
                    }
                })
                .collect_view()}
            <a
                href=OWNER.mailto()
                class="block px-4 py-3 rounded-lg font-mono text-cyan-400 border border-cyan-500/30"
            >
                "✉ " {OWNER.email}
            </a>
        </div>
    }
}
