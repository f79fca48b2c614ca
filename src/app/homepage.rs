use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::projects::CategoryBadge;
use super::reveal::Reveal;
use crate::catalog::catalog;
use crate::profile::{
    SkillGroup, CONTACTS, EXPERIENCE, EXPERTISE, OWNER, SKILL_GROUPS, STATS, TECH_STACK,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <ExperienceSection />
        <FeaturedProjects />
        <Skills />
        <ContactSection />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center pt-20 px-4">
            <div class="max-w-4xl mx-auto text-center">
                <h1 class="text-5xl md:text-7xl font-bold mb-6 gradient-text glitch float">
                    {OWNER.name}
                </h1>
                <div class="cyber-glass neon-border rounded-xl p-6 mb-8">
                    <p class="text-xl md:text-2xl text-cyan-300 mb-4">"> " {OWNER.headline}</p>
                    <p class="text-lg text-gray-300 leading-relaxed">"> " {OWNER.tagline}</p>
                </div>
                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-12">
                    <a
                        href="#contact"
                        class="cyber-button text-black px-8 py-3 rounded-full font-semibold font-mono"
                    >
                        "INITIATE_CONTACT"
                    </a>
                    <a
                        href="#projects"
                        class="cyber-glass border border-cyan-500/50 text-cyan-300 px-8 py-3 rounded-full font-semibold font-mono"
                    >
                        "VIEW_PROJECTS"
                    </a>
                </div>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="cyber-glass rounded-xl p-6 hover-lift border border-cyan-500/30">
                                    <div class="text-3xl mb-2">{stat.icon}</div>
                                    <h3 class="text-2xl md:text-3xl font-bold text-cyan-400">
                                        {stat.number}
                                    </h3>
                                    <p class="text-gray-300 text-sm font-mono">{stat.label}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-4">
            <Reveal class="max-w-6xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-16 gradient-text">
                    "About Me"
                </h2>
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <h3 class="text-2xl font-semibold mb-4 text-blue-400">
                            "DevOps & Development Expert"
                        </h3>
                        <p class="text-gray-300 mb-4 leading-relaxed">
                            "Hi! I'm Abdullah, a DevOps Engineer and Full Stack Developer with 3+ years of experience. I specialize in Kubernetes, CI/CD pipelines, and modern web technologies."
                        </p>
                        <p class="text-gray-300 mb-6 leading-relaxed">
                            "Currently working at "
                            <strong class="text-blue-400">{OWNER.employer}</strong>
                            ", developing infrastructure automation, microservice architectures, and secure deployment processes."
                        </p>
                        <p class="text-gray-300 mb-6">
                            <i class="extra-location mr-2"></i>
                            {OWNER.location}
                        </p>
                    </div>
                    <div class="space-y-6">
                        <h3 class="text-2xl font-semibold mb-6 text-blue-400">
                            "Areas of Expertise"
                        </h3>
                        {EXPERTISE
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class="glass rounded-xl p-6 hover-lift">
                                        <h4 class="text-lg font-semibold mb-2">{item.title}</h4>
                                        <p class="text-gray-300 text-sm">{item.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="mt-16 text-center">
                    <h3 class="text-2xl font-semibold mb-6 text-blue-400">"My Approach"</h3>
                    <p class="text-gray-300 max-w-3xl mx-auto leading-relaxed">
                        "I work with Infrastructure as Code principles and automate everything. With a security-first approach, I design and implement scalable and reliable systems."
                    </p>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 px-4">
            <Reveal class="max-w-6xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-16 gradient-text">
                    "Experience"
                </h2>
                {EXPERIENCE
                    .iter()
                    .map(|job| {
                        view! {
                            <div class="glass rounded-xl p-8 mb-8">
                                <div class="flex flex-wrap justify-between items-baseline mb-4">
                                    <h3 class="text-2xl font-semibold text-white">{job.role}</h3>
                                    <span class="text-gray-400 font-mono text-sm">{job.period}</span>
                                </div>
                                <p class="text-blue-400 font-medium mb-4">{job.company}</p>
                                <p class="text-gray-300 mb-4 leading-relaxed">{job.summary}</p>
                                <div class="grid md:grid-cols-2 gap-6">
                                    <div>
                                        <h4 class="font-semibold text-blue-400 mb-2">
                                            "Key Responsibilities:"
                                        </h4>
                                        <ul class="text-gray-300 space-y-1 text-sm">
                                            {job
                                                .responsibilities
                                                .iter()
                                                .map(|r| view! { <li>"• " {*r}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                    <div>
                                        <h4 class="font-semibold text-blue-400 mb-2">
                                            "Technologies Used:"
                                        </h4>
                                        <div class="flex flex-wrap gap-2">
                                            {job
                                                .technologies
                                                .iter()
                                                .map(|t| view! { <TechChip name=*t /> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </Reveal>
        </section>
    }
}

#[component]
fn TechChip(name: &'static str) -> impl IntoView {
    view! { <span class="bg-gray-700/50 px-2 py-1 rounded text-xs text-gray-300">{name}</span> }
}

#[component]
fn FeaturedProjects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-4 bg-black/20">
            <Reveal class="max-w-6xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-16 gradient-text">
                    "Projects"
                </h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {catalog()
                        .all()
                        .iter()
                        .map(|project| {
                            let href = format!("/projects/{}", project.id);
                            let (tech, _) = project.tech_preview(4);
                            view! {
                                <div class="glass rounded-xl p-8 hover-lift group">
                                    <div class="flex justify-between items-start mb-4">
                                        <CategoryBadge category=project.category.clone() />
                                    </div>
                                    <h3 class="text-xl font-semibold text-white mb-3">
                                        {project.title.clone()}
                                    </h3>
                                    <p class="text-gray-300 text-sm mb-4 leading-relaxed">
                                        {project.long_description.clone()}
                                    </p>
                                    <div class="flex flex-wrap gap-2 mb-4">
                                        {tech
                                            .into_iter()
                                            .map(|t| {
                                                view! {
                                                    <span class="bg-gray-700/50 px-2 py-1 rounded text-xs text-gray-300">
                                                        {t.to_string()}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <A
                                        href=href
                                        attr:class="inline-flex items-center gap-2 text-blue-400 hover:text-blue-300 transition-colors text-sm font-medium"
                                    >
                                        "View Details →"
                                    </A>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-center mt-12">
                    <A
                        href="/projects"
                        attr:class="cyber-button text-black px-8 py-3 rounded-full font-semibold font-mono"
                    >
                        "VIEW_ALL_PROJECTS"
                    </A>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-4 bg-black/20">
            <Reveal class="max-w-6xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold text-center mb-16 gradient-text">
                    "Skills"
                </h2>
                <div class="grid md:grid-cols-2 gap-12">
                    {SKILL_GROUPS.iter().map(|group| view! { <SkillBars group /> }).collect_view()}
                </div>
                <div class="mt-16">
                    <h3 class="text-2xl font-semibold mb-8 text-center text-blue-400">
                        "Technology Stack"
                    </h3>
                    <div class="grid grid-cols-2 md:grid-cols-4 lg:grid-cols-6 gap-4">
                        {TECH_STACK
                            .iter()
                            .map(|tech| {
                                view! {
                                    <div class="glass rounded-lg p-4 text-center hover-lift group">
                                        <span class="text-white group-hover:text-blue-400 transition-colors text-sm">
                                            {*tech}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn SkillBars(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-2xl font-semibold mb-8 text-blue-400">{group.title}</h3>
            <div class="space-y-6">
                {group
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <div>
                                <div class="flex justify-between mb-2">
                                    <span class="text-white font-medium">{skill.name}</span>
                                    <span class="text-gray-400 text-sm">
                                        {format!("{}%", skill.percent())}
                                    </span>
                                </div>
                                <div class="w-full bg-gray-700 rounded-full h-2">
                                    <div
                                        class="skill-bar bg-gradient-to-r from-blue-500 to-cyan-500 h-2 rounded-full"
                                        style=skill.width_style()
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-4">
            <Reveal class="max-w-4xl mx-auto text-center">
                <h2 class="text-4xl md:text-5xl font-bold mb-8 gradient-text">"Get In Touch"</h2>
                <p class="text-xl text-gray-300 mb-12">
                    "If you'd like to collaborate on DevOps, infrastructure projects, or development, feel free to reach out!"
                </p>
                <div class="grid md:grid-cols-3 gap-8 mb-12">
                    {CONTACTS
                        .iter()
                        .map(|contact| {
                            view! {
                                <div class="glass rounded-xl p-6 hover-lift group">
                                    <div class="text-blue-400 text-3xl mb-4">
                                        <i class=contact.icon_class></i>
                                    </div>
                                    <h3 class="text-xl font-semibold mb-2 text-white">
                                        {contact.title}
                                    </h3>
                                    <a
                                        href=contact.link
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-gray-300 hover:text-blue-400 transition-colors text-sm"
                                    >
                                        {contact.content}
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href=OWNER.mailto()
                    class="bg-gradient-to-r from-blue-600 to-cyan-600 text-white px-8 py-4 rounded-full font-semibold inline-flex items-center gap-2"
                >
                    "✉ Contact Me Now"
                </a>
            </Reveal>
        </section>
    }
}
