mod homepage;
mod nav;
mod projects;
mod reveal;

use chrono::{DateTime, Datelike};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::profile::OWNER;
use homepage::HomePage;
use nav::Nav;
use projects::{ProjectDetail, ProjectsPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased min-h-screen cyber-bg text-white">
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
        <Title formatter=|title| format!("{} - {title}", OWNER.name) />
        <Meta name="description" content=format!("{} - {}", OWNER.name, OWNER.headline) />
        <Meta property="og:title" content=format!("{} - {}", OWNER.name, OWNER.headline) />
        <Meta property="og:type" content="website" />

        <Router>
            <Nav />
            <main class="relative z-10">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/projects/:id") view=ProjectDetail />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// Build date and year, from the timestamp stamped in by build.rs.
fn build_stamp() -> Option<(String, i32)> {
    let built = DateTime::parse_from_rfc3339(env!("BUILD_TIME")).ok()?;
    Some((built.format("%b %e %Y").to_string(), built.year()))
}

#[component]
fn Footer() -> impl IntoView {
    let stamp = build_stamp();
    let year = stamp.as_ref().map(|(_, y)| y.to_string()).unwrap_or_default();
    view! {
        <footer class="py-8 px-4 border-t border-white/10">
            <div class="max-w-6xl mx-auto text-center text-gray-400">
                <p>{format!("© {year} {}. All rights reserved.", OWNER.name)}</p>
                {stamp
                    .map(|(date, _)| {
                        view! { <p class="text-xs font-mono mt-2">"last built: " {date}</p> }
                    })}
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_stamp() {
        let (date, year) = build_stamp().expect("build.rs should stamp an RFC 3339 time");
        assert!(year >= 2024);
        assert!(date.ends_with(&year.to_string()));
    }
}
