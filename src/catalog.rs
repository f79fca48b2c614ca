use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;
use thiserror::Error;

const PROJECTS_FILE: &str = "projects.json";

static GLOBAL_CATALOG: LazyLock<Catalog> =
    LazyLock::new(|| load_embedded().expect("Should be able to load project catalog"));

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Project not found: {id}")]
    NotFound { id: String },
    #[error("Missing catalog file: {0}")]
    MissingFile(String),
    #[error("Couldn't parse project catalog: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Production,
    Development,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Production => "Production",
            Self::Development => "Development",
        }
    }

    /// Tailwind classes for the status dot.
    pub fn indicator_class(&self) -> &'static str {
        match self {
            Self::Production => "bg-green-400 shadow-lg shadow-green-400/50",
            Self::Development => "bg-yellow-400 shadow-lg shadow-yellow-400/50",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Single-valued classification of a project.
///
/// Known labels always map to their own variant, anything else lands in
/// `Other`. Equality and hashing go through `label()`, so a hand-built
/// `Other("Cloud")` is the same category as `Cloud`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Infrastructure,
    Backend,
    DevOps,
    Cloud,
    Other(String),
}

impl Category {
    pub fn label(&self) -> &str {
        match self {
            Self::Infrastructure => "Infrastructure",
            Self::Backend => "Backend",
            Self::DevOps => "DevOps",
            Self::Cloud => "Cloud",
            Self::Other(s) => s,
        }
    }

    /// Label as shown on the filter buttons, e.g. `MACHINE_LEARNING`.
    pub fn filter_label(&self) -> String {
        self.label().to_uppercase().replace(' ', "_")
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Infrastructure => "bg-gradient-to-r from-cyan-500 to-blue-500",
            Self::Backend => "bg-gradient-to-r from-purple-500 to-blue-500",
            Self::DevOps => "bg-gradient-to-r from-green-500 to-cyan-500",
            Self::Cloud => "bg-gradient-to-r from-sky-400 to-indigo-500",
            Self::Other(_) => "bg-gradient-to-r from-gray-400 to-gray-500",
        }
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.label() == other.label()
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label().hash(state);
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "Infrastructure" => Self::Infrastructure,
            "Backend" => Self::Backend,
            "DevOps" => Self::DevOps,
            "Cloud" => Self::Cloud,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Other(s) => s,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    pub icon: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub solution: String,
    pub category: Category,
    pub status: Status,
    pub duration: String,
    pub team_size: String,
    #[serde(default)]
    pub technologies: Vec<Technology>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub architecture: Vec<String>,
}

impl ProjectRecord {
    /// First `n` technology names and how many were left out.
    pub fn tech_preview(&self, n: usize) -> (Vec<&str>, usize) {
        let shown = self
            .technologies
            .iter()
            .take(n)
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>();
        let rest = self.technologies.len().saturating_sub(n);
        (shown, rest)
    }
}

/// Immutable, ordered collection of project records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let projects = serde_json::from_str::<Vec<ProjectRecord>>(raw)
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self::new(projects))
    }

    pub fn all(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Exact-match lookup by slug.
    pub fn by_id(&self, id: &str) -> Result<&ProjectRecord, CatalogError> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

fn load_embedded() -> Result<Catalog, CatalogError> {
    let file = Content::get(PROJECTS_FILE)
        .ok_or_else(|| CatalogError::MissingFile(PROJECTS_FILE.to_string()))?;
    let raw = String::from_utf8(file.data.into_owned())
        .map_err(|e| CatalogError::Parse(e.to_string()))?;
    let catalog = Catalog::from_json(&raw)?;
    log::debug!("loaded {} projects from {PROJECTS_FILE}", catalog.len());
    Ok(catalog)
}

/// The site-wide catalog, parsed from the embedded content on first use.
pub fn catalog() -> &'static Catalog {
    &GLOBAL_CATALOG
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashSet;

    pub(crate) fn record(id: &str, category: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: format!("Project {id}"),
            short_description: String::new(),
            long_description: String::new(),
            problem: String::new(),
            solution: String::new(),
            category: Category::from(category),
            status: Status::Production,
            duration: "1 month".to_string(),
            team_size: "1 developer".to_string(),
            technologies: vec![],
            features: vec![],
            results: vec![],
            architecture: vec![],
        }
    }

    pub(crate) fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            record("a", "Infra"),
            record("b", "Cloud"),
            record("c", "Infra"),
        ])
    }

    #[test]
    fn test_by_id_found() {
        let catalog = sample_catalog();
        let b = catalog.by_id("b").expect("b should exist");
        assert_eq!(b.id, "b");
        assert_eq!(b.category, Category::Cloud);
    }

    #[test]
    fn test_by_id_not_found() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.by_id("z"),
            Err(CatalogError::NotFound { id: "z".to_string() })
        );
        // lookup is exact, not prefix or case-insensitive
        assert!(catalog.by_id("A").is_err());
        assert!(catalog.by_id("").is_err());
    }

    #[test]
    fn test_by_id_total_over_catalog() {
        let catalog = catalog();
        for project in catalog.all() {
            let found = catalog.by_id(&project.id).expect("every id should resolve");
            assert_eq!(found, project);
        }
    }

    #[test]
    fn test_embedded_catalog() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 4);
        let ids = catalog.all().iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec![
                "kubernetes-platform",
                "microservices-platform",
                "cicd-automation",
                "azure-infrastructure"
            ]
        );
        let micro = catalog.by_id("microservices-platform").unwrap();
        assert_eq!(micro.status, Status::Development);
        assert_eq!(micro.category, Category::Backend);
        assert_eq!(micro.technologies.len(), 8);
    }

    #[test]
    fn test_embedded_ids_unique() {
        let catalog = catalog();
        let ids = catalog.all().iter().map(|p| &p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_category_from_label() {
        assert_eq!(Category::from("DevOps"), Category::DevOps);
        assert_eq!(Category::from("Cloud".to_string()), Category::Cloud);
        assert_eq!(
            Category::from("Machine Learning"),
            Category::Other("Machine Learning".to_string())
        );
        assert_eq!(
            Category::from("Machine Learning").filter_label(),
            "MACHINE_LEARNING"
        );
        assert_eq!(String::from(Category::Infrastructure), "Infrastructure");
    }

    #[test]
    fn test_category_equality_by_label() {
        let hand_built = Category::Other("Cloud".to_string());
        assert_eq!(hand_built, Category::Cloud);
        assert_ne!(Category::Other("cloud".to_string()), Category::Cloud);

        let set = [Category::Cloud, hand_built, Category::from("Cloud")]
            .into_iter()
            .collect::<HashSet<_>>();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_json() {
        let raw = r#"[{
            "id": "x",
            "title": "X",
            "short_description": "short",
            "long_description": "long",
            "category": "Data",
            "status": "Development",
            "duration": "2 weeks",
            "team_size": "solo"
        }]"#;
        let catalog = Catalog::from_json(raw).unwrap();
        let x = catalog.by_id("x").unwrap();
        assert_eq!(x.category, Category::Other("Data".to_string()));
        assert_eq!(x.status, Status::Development);
        assert!(x.technologies.is_empty());

        let bad = Catalog::from_json(r#"[{"id": "x"}]"#);
        assert!(matches!(bad, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_tech_preview() {
        let k8s = catalog().by_id("kubernetes-platform").unwrap();
        let (shown, rest) = k8s.tech_preview(3);
        assert_eq!(shown, vec!["Kubernetes", "NextJS", "NestJS"]);
        assert_eq!(rest, 5);

        let empty = record("e", "Cloud");
        assert_eq!(empty.tech_preview(3), (vec![], 0));
    }
}
