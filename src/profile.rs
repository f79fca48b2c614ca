//! Static content for the home page sections.

pub const OWNER: Owner = Owner {
    name: "Abdullah Keleş",
    short_name: "AK",
    headline: "DevOps Engineer & Full Stack Developer",
    tagline: "Building scalable systems with Kubernetes, CI/CD, cloud infrastructure, and modern web technologies while implementing DevSecOps practices.",
    location: "Ankara, Turkey",
    employer: "Ankasoft",
    email: "contact@kelesabdullah.com",
};

pub struct Owner {
    pub name: &'static str,
    pub short_name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub employer: &'static str,
    pub email: &'static str,
}

impl Owner {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "/" },
    NavLink { label: "About", href: "/#about" },
    NavLink { label: "Experience", href: "/#experience" },
    NavLink { label: "Skills", href: "/#skills" },
    NavLink { label: "Projects", href: "/projects" },
    NavLink { label: "Contact", href: "/#contact" },
];

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { number: "3+", label: "YEARS_DEVOPS", icon: "⚡" },
    Stat { number: "15+", label: "TECHNOLOGIES", icon: "🚀" },
    Stat { number: "5+", label: "MAJOR_PROJECTS", icon: "📈" },
    Stat { number: "100%", label: "AUTOMATION_RATE", icon: "🎯" },
];

pub struct Expertise {
    pub title: &'static str,
    pub description: &'static str,
}

pub const EXPERTISE: &[Expertise] = &[
    Expertise {
        title: "DevOps & Infrastructure",
        description: "Infrastructure management and automation with Kubernetes, Docker, and Ansible",
    },
    Expertise {
        title: "DevSecOps",
        description: "Secure development and deployment with SonarQube, Trivy and Notary",
    },
    Expertise {
        title: "Full Stack Development",
        description: "Modern web applications with NestJS, NextJS, and TypeScript",
    },
    Expertise {
        title: "Cloud & CI/CD",
        description: "Continuous deployment with Azure Cloud, GitLab, and ArgoCD",
    },
];

pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub responsibilities: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub const EXPERIENCE: &[Experience] = &[Experience {
    role: "DevOps Engineer & Full Stack Developer",
    company: "Ankasoft",
    period: "2022 - Present",
    summary: "Working in DevOps engineering and full-stack development areas, developing Kubernetes cluster management, CI/CD pipeline automation, and secure microservice architectures.",
    responsibilities: &[
        "Kubernetes cluster management and automation",
        "CI/CD pipeline design and implementation",
        "Microservice architecture development",
        "DevSecOps practices implementation",
    ],
    technologies: &["Kubernetes", "Docker", "GitLab", "ArgoCD", "NestJS", "NextJS", "Azure"],
}];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

impl Skill {
    /// Percentage shown on the bar, capped at 100.
    pub fn percent(&self) -> u8 {
        self.level.min(100)
    }

    pub fn width_style(&self) -> String {
        format!("width: {}%", self.percent())
    }
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "DevOps & Infrastructure",
        skills: &[
            Skill { name: "Kubernetes", level: 90 },
            Skill { name: "Docker & Containerization", level: 95 },
            Skill { name: "CI/CD (GitLab/ArgoCD)", level: 85 },
            Skill { name: "Ansible Automation", level: 80 },
            Skill { name: "Azure Cloud", level: 75 },
        ],
    },
    SkillGroup {
        title: "Development",
        skills: &[
            Skill { name: "TypeScript/JavaScript", level: 90 },
            Skill { name: "NestJS (Backend)", level: 85 },
            Skill { name: "NextJS (Frontend)", level: 80 },
            Skill { name: "Python", level: 85 },
            Skill { name: "Microservices Architecture", level: 80 },
            Skill { name: "Database Management", level: 75 },
        ],
    },
];

pub const TECH_STACK: &[&str] = &[
    "Kubernetes",
    "Docker",
    "GitLab",
    "ArgoCD",
    "SonarQube",
    "NestJS",
    "NextJS",
    "TypeScript",
    "Python",
    "Ansible",
    "Azure",
    "Velero",
    "Longhorn",
    "DevSecOps",
    "Terraform",
];

pub struct Contact {
    pub title: &'static str,
    pub content: &'static str,
    pub link: &'static str,
    pub icon_class: &'static str,
}

pub const CONTACTS: &[Contact] = &[
    Contact {
        title: "Email",
        content: "contact@kelesabdullah.com",
        link: "mailto:contact@kelesabdullah.com",
        icon_class: "extra-email",
    },
    Contact {
        title: "LinkedIn",
        content: "linkedin.com/in/kelesabdullah",
        link: "https://linkedin.com/in/kelesabdullah",
        icon_class: "devicon-linkedin-plain",
    },
    Contact {
        title: "GitHub",
        content: "github.com/kelesabdullah",
        link: "https://github.com/kelesabdullah",
        icon_class: "devicon-github-plain",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_width() {
        let skill = Skill { name: "Kubernetes", level: 90 };
        assert_eq!(skill.width_style(), "width: 90%");
        let over = Skill { name: "Over", level: 180 };
        assert_eq!(over.percent(), 100);
    }

    #[test]
    fn test_skill_levels_in_range() {
        for group in SKILL_GROUPS {
            assert!(!group.skills.is_empty());
            assert!(group.skills.iter().all(|s| s.level <= 100));
        }
    }

    #[test]
    fn test_contact_is_mail_link() {
        assert_eq!(OWNER.mailto(), "mailto:contact@kelesabdullah.com");
        assert_eq!(CONTACTS[0].link, OWNER.mailto());
    }
}
