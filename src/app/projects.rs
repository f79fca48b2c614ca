use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::{
    components::*,
    hooks::{use_navigate, use_params_map, use_query_map},
    NavigateOptions,
};

use crate::catalog::{catalog, Category, ProjectRecord, Status};
use crate::filter::{categories, CategoryFilter, ProjectFilter, CATEGORY_PARAM};

const TECH_PREVIEW: usize = 3;

const FILTER_ACTIVE: &str =
    "px-6 py-3 rounded-lg text-sm font-mono font-medium transition-all duration-300 cyber-button text-black neon-glow";
const FILTER_INACTIVE: &str = "px-6 py-3 rounded-lg text-sm font-mono font-medium transition-all duration-300 cyber-glass text-cyan-300 hover:bg-cyan-500/20 border border-cyan-500/50";

#[component]
pub fn CategoryBadge(category: Category) -> impl IntoView {
    view! {
        <span class=format!(
            "{} text-black px-3 py-1 rounded-full text-xs font-mono font-bold",
            category.badge_class(),
        )>{category.label().to_uppercase()}</span>
    }
}

#[component]
fn StatusIndicator(status: Status) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <span class=format!(
                "w-3 h-3 rounded-full animate-pulse {}",
                status.indicator_class(),
            )></span>
            <span class="text-gray-400 text-xs font-mono">{status.label().to_uppercase()}</span>
        </div>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    // the view-model owns the selection, the `?category=` query mirrors it both ways
    let query = use_query_map();
    let mut view_model = ProjectFilter::new();
    query.with_untracked(|q| view_model.sync_from_query(q.get(CATEGORY_PARAM).as_deref()));
    let filter = RwSignal::new(view_model);
    provide_context(filter);

    // URL -> view-model, e.g. the nav link back to a bare `/projects`
    Effect::watch(
        move || query.with(|q| q.get(CATEGORY_PARAM)),
        move |value, _, _| {
            let changed = filter
                .try_update_untracked(|vm| vm.sync_from_query(value.as_deref()))
                .unwrap_or(false);
            if changed {
                filter.notify();
            }
        },
        false,
    );

    // view-model -> URL
    Effect::watch(
        move || filter.with(|vm| vm.selected().clone()),
        move |selected, _, _| {
            let in_url =
                query.with_untracked(|q| CategoryFilter::from_query(q.get(CATEGORY_PARAM).as_deref()));
            if &in_url == selected {
                return;
            }
            let navigate = use_navigate();
            navigate(
                &selected.listing_href(),
                NavigateOptions {
                    replace: true,
                    scroll: false,
                    ..Default::default()
                },
            );
        },
        false,
    );

    view! {
        <Title text="Projects" />
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <FilterBar />
            <div class="text-center mb-16">
                <h1 class="text-4xl md:text-6xl font-bold mb-6 gradient-text glitch float">
                    "Project Archive"
                </h1>
                <div class="cyber-glass neon-border rounded-xl p-6 max-w-4xl mx-auto">
                    <p class="text-xl text-cyan-300 font-mono mb-4">
                        "> ACCESSING_PROJECT_DATABASE..."
                    </p>
                    <p class="text-lg text-gray-300">
                        "A comprehensive showcase of DevOps, infrastructure, and development projects featuring cutting-edge technologies and automation practices."
                    </p>
                </div>
                <ResultCounter />
            </div>
            <ProjectGrid />
            <div class="text-center mt-16">
                <div class="cyber-glass neon-border rounded-xl p-8">
                    <h3 class="text-2xl font-semibold mb-4 text-cyan-400 font-mono">
                        "COLLABORATION_REQUEST?"
                    </h3>
                    <p class="text-gray-300 mb-6 max-w-2xl mx-auto font-mono">
                        "> Ready to discuss innovative projects and breakthrough solutions."
                    </p>
                    <a
                        href="/#contact"
                        class="cyber-button text-black px-8 py-3 rounded-full font-semibold font-mono"
                    >
                        "ESTABLISH_CONNECTION"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FilterBar() -> impl IntoView {
    view! {
        <div class="mb-12 flex justify-center">
            <div class="cyber-glass rounded-xl p-4 border border-cyan-500/30">
                <div class="flex flex-wrap gap-3">
                    <FilterButton target=CategoryFilter::All label="ALL_PROJECTS".to_string() />
                    {categories(catalog())
                        .into_iter()
                        .map(|category| {
                            let label = category.filter_label();
                            view! { <FilterButton target=CategoryFilter::Only(category) label /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn FilterButton(target: CategoryFilter, label: String) -> impl IntoView {
    let filter = expect_context::<RwSignal<ProjectFilter>>();
    let active = {
        let target = target.clone();
        Memo::new(move |_| filter.with(|vm| vm.selected() == &target))
    };
    view! {
        <button
            class=move || if active() { FILTER_ACTIVE } else { FILTER_INACTIVE }
            on:click=move |_| filter.update(|vm| vm.set_category(target.clone()))
        >
            {label}
        </button>
    }
}

#[component]
fn ResultCounter() -> impl IntoView {
    let filter = expect_context::<RwSignal<ProjectFilter>>();
    move || {
        filter.with(|vm| match vm.selected() {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => {
                let count = vm.visible(catalog()).len();
                Some(view! {
                    <div class="mt-8">
                        <span class="cyber-glass border border-cyan-500/50 text-cyan-300 px-6 py-3 rounded-full text-sm font-mono">
                            {format!(
                                "FILTER: {} | RESULTS: {count}",
                                category.label().to_uppercase(),
                            )}
                        </span>
                    </div>
                })
            }
        })
    }
}

#[component]
fn ProjectGrid() -> impl IntoView {
    let filter = expect_context::<RwSignal<ProjectFilter>>();
    let visible = Memo::new(move |_| {
        filter.with(|vm| {
            vm.visible(catalog())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
            <For
                each=move || visible.get()
                key=|project| project.id.clone()
                children=move |project| view! { <ProjectCard project /> }
            />
        </div>
        <Show when=move || visible.with(|v| v.is_empty())>
            <div class="text-center py-12">
                <div class="cyber-glass rounded-xl p-8 border border-red-500/30">
                    <div class="text-red-400 text-lg mb-4 font-mono">"ERROR: NO_DATA_FOUND"</div>
                    <button
                        class="text-cyan-400 hover:text-cyan-300 transition-colors font-mono"
                        on:click=move |_| filter.update(|vm| vm.reset())
                    >
                        "RESET_FILTERS"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let href = format!("/projects/{}", project.id);
    let (tech, more) = project.tech_preview(TECH_PREVIEW);
    let tech = tech.into_iter().map(str::to_string).collect::<Vec<_>>();
    view! {
        <div class="cyber-glass rounded-xl p-6 hover-lift group border border-cyan-500/30 relative overflow-hidden">
            <div class="flex justify-between items-start mb-4">
                <CategoryBadge category=project.category.clone() />
                <StatusIndicator status=project.status />
            </div>
            <h3 class="text-xl font-semibold text-white mb-3 group-hover:text-cyan-400 transition-colors font-mono">
                {project.title.clone()}
            </h3>
            <p class="text-gray-300 text-sm mb-4 leading-relaxed">
                {project.short_description.clone()}
            </p>
            <div class="space-y-2 mb-4 text-xs text-cyan-400 font-mono">
                <div>"DURATION: " {project.duration.to_uppercase()}</div>
                <div>"TEAM_SIZE: " {project.team_size.to_uppercase()}</div>
            </div>
            <div class="flex flex-wrap gap-1 mb-4">
                {tech
                    .into_iter()
                    .map(|t| {
                        view! {
                            <span class="bg-gray-800/50 border border-cyan-500/30 px-2 py-1 rounded text-xs text-cyan-300 font-mono">
                                {t}
                            </span>
                        }
                    })
                    .collect_view()}
                {(more > 0)
                    .then(|| {
                        view! {
                            <span class="bg-gray-800/30 border border-cyan-500/20 px-2 py-1 rounded text-xs text-gray-400 font-mono">
                                {format!("+{more}_MORE")}
                            </span>
                        }
                    })}
            </div>
            <A
                href=href
                attr:class="inline-flex items-center gap-2 text-cyan-400 hover:text-cyan-300 transition-colors text-sm font-mono font-medium w-full justify-center py-3 border border-cyan-500/50 rounded-lg hover:bg-cyan-500/10"
            >
                "ACCESS_DATA ↗"
            </A>
        </div>
    }
}

#[component]
pub fn ProjectDetail() -> impl IntoView {
    let params = use_params_map();
    let project_id = move || params.get().get("id").unwrap_or_default();

    move || match catalog().by_id(&project_id()) {
        Ok(project) => Either::Left(view! { <CaseStudy project=project.clone() /> }),
        Err(e) => {
            log::warn!("{e}");
            Either::Right(view! { <ProjectNotFound /> })
        }
    }
}

#[component]
fn ProjectNotFound() -> impl IntoView {
    view! {
        <Title text="Project Not Found" />
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-white mb-4">"Project Not Found"</h1>
                <A href="/projects" attr:class="text-blue-400 hover:text-blue-300">
                    "← Back to Projects"
                </A>
            </div>
        </div>
    }
}

#[component]
fn BulletSection(title: &'static str, items: Vec<String>, marker: &'static str) -> impl IntoView {
    view! {
        <div class="glass rounded-xl p-8">
            <h2 class="text-3xl font-bold mb-8 text-blue-400">{title}</h2>
            <div class="grid md:grid-cols-2 gap-6">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <div class="flex items-center gap-4">
                                <span class="text-blue-400 flex-shrink-0">{marker}</span>
                                <span class="text-gray-300 text-lg">{item}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CaseStudy(project: ProjectRecord) -> impl IntoView {
    let stats = [
        ("Duration", project.duration.clone()),
        ("Team Size", project.team_size.clone()),
        ("Category", project.category.label().to_string()),
        ("Status", project.status.label().to_string()),
    ];
    let category_href = CategoryFilter::Only(project.category.clone()).listing_href();

    view! {
        <Title text=project.title.clone() />
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <div class="flex flex-wrap justify-between items-center mb-12 gap-4">
                <A href="/projects" attr:class="text-lg font-semibold hover:text-blue-400 transition-colors">
                    "← Back to Projects"
                </A>
                <div class="flex items-center gap-4">
                    <A href=category_href>
                        <CategoryBadge category=project.category.clone() />
                    </A>
                    <StatusIndicator status=project.status />
                </div>
            </div>
            <div class="text-center mb-16">
                <h1 class="text-4xl md:text-6xl font-bold mb-6 gradient-text">
                    {project.title.clone()}
                </h1>
                <p class="text-xl text-gray-300 mb-8 leading-relaxed max-w-4xl mx-auto">
                    {project.long_description.clone()}
                </p>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 max-w-4xl mx-auto">
                    {stats
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="glass rounded-lg p-6 text-center">
                                    <div class="text-white font-semibold text-lg">{value}</div>
                                    <div class="text-gray-400 text-sm">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="grid lg:grid-cols-3 gap-12">
                <div class="lg:col-span-2 space-y-12">
                    <div class="glass rounded-xl p-8">
                        <h2 class="text-3xl font-bold mb-8 text-blue-400">"Challenge & Solution"</h2>
                        <div class="space-y-8">
                            <div>
                                <h3 class="text-xl font-semibold mb-4 text-white">"The Problem"</h3>
                                <p class="text-gray-300 leading-relaxed text-lg">
                                    {project.problem.clone()}
                                </p>
                            </div>
                            <div>
                                <h3 class="text-xl font-semibold mb-4 text-white">"Our Solution"</h3>
                                <p class="text-gray-300 leading-relaxed text-lg">
                                    {project.solution.clone()}
                                </p>
                            </div>
                        </div>
                    </div>
                    <BulletSection title="Results & Impact" items=project.results.clone() marker="✔" />
                    <BulletSection title="Key Features" items=project.features.clone() marker="●" />
                    <div class="glass rounded-xl p-8">
                        <h2 class="text-3xl font-bold mb-8 text-blue-400">"Architecture Overview"</h2>
                        <div class="space-y-4">
                            {project
                                .architecture
                                .iter()
                                .map(|item| {
                                    view! {
                                        <div class="text-gray-300 leading-relaxed text-lg">
                                            "• " {item.clone()}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="space-y-8">
                    <div class="glass rounded-xl p-8">
                        <h3 class="text-2xl font-bold mb-6 text-blue-400">"Technologies Used"</h3>
                        <div class="space-y-4">
                            {project
                                .technologies
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <div class="flex items-center gap-4 p-4 bg-gray-800/30 rounded-lg">
                                            <span class="text-3xl">{tech.icon.clone()}</span>
                                            <div>
                                                <div class="text-white font-medium text-lg">
                                                    {tech.name.clone()}
                                                </div>
                                                <div class="text-gray-400 text-sm">
                                                    {tech.category.clone()}
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="glass rounded-xl p-8 text-center">
                        <h3 class="text-xl font-bold mb-4 text-blue-400">"Interested in Similar Work?"</h3>
                        <p class="text-gray-300 mb-6">"Let's discuss how I can help with your project."</p>
                        <a
                            href="/#contact"
                            class="inline-flex items-center gap-2 bg-gradient-to-r from-blue-600 to-cyan-600 text-white px-6 py-3 rounded-lg font-medium hover:scale-105 transition-transform"
                        >
                            "Get In Touch"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
