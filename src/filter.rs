use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::catalog::{Catalog, Category, ProjectRecord};

const ALL: &str = "all";
const LISTING_PATH: &str = "/projects";
pub const CATEGORY_PARAM: &str = "category";

/// Distinct categories of the catalog, in the order they first appear.
pub fn categories(catalog: &Catalog) -> Vec<Category> {
    let mut seen = Vec::new();
    for project in catalog.all() {
        if !seen.contains(&project.category) {
            seen.push(project.category.clone());
        }
    }
    seen
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, project: &ProjectRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => &project.category == c,
        }
    }

    /// Value used in the `category` query parameter.
    pub fn query_value(&self) -> String {
        match self {
            Self::All => ALL.to_string(),
            Self::Only(c) => c.label().to_string(),
        }
    }

    /// Selection carried by an already-decoded `category` query value.
    pub fn from_query(value: Option<&str>) -> Self {
        value
            .map(|v| v.parse::<Self>().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Link to the project listing with this selection applied.
    pub fn listing_href(&self) -> String {
        match self {
            Self::All => LISTING_PATH.to_string(),
            f => format!(
                "{LISTING_PATH}?{CATEGORY_PARAM}={}",
                urlencoding::encode(&f.query_value())
            ),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        Self::Only(value)
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // no validation against the catalog, unknown labels just match nothing
        Ok(match s {
            "" | ALL => Self::All,
            label => Self::Only(Category::from(label)),
        })
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query_value())
    }
}

/// Stable filter over the catalog; never re-sorts.
pub fn visible_projects<'a>(catalog: &'a Catalog, filter: &CategoryFilter) -> Vec<&'a ProjectRecord> {
    catalog.all().iter().filter(|p| filter.matches(p)).collect()
}

/// Selection state for the project listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    selected: CategoryFilter,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn set_category(&mut self, filter: impl Into<CategoryFilter>) {
        let filter = filter.into();
        log::debug!("project filter set to {filter}");
        self.selected = filter;
    }

    pub fn reset(&mut self) {
        self.set_category(CategoryFilter::All);
    }

    pub fn is_filtered(&self) -> bool {
        self.selected != CategoryFilter::All
    }

    /// Adopts the selection carried by the URL. Returns whether it changed.
    pub fn sync_from_query(&mut self, value: Option<&str>) -> bool {
        let from_url = CategoryFilter::from_query(value);
        if from_url == self.selected {
            return false;
        }
        self.set_category(from_url);
        true
    }

    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ProjectRecord> {
        visible_projects(catalog, &self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{catalog, tests::sample_catalog};

    fn ids<'a>(projects: &[&'a ProjectRecord]) -> Vec<&'a str> {
        projects.iter().map(|p| p.id.as_str()).collect()
    }

    fn only(label: &str) -> CategoryFilter {
        CategoryFilter::Only(Category::from(label))
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = sample_catalog();
        assert_eq!(
            categories(&catalog),
            vec![Category::from("Infra"), Category::Cloud]
        );
        assert!(categories(&Catalog::default()).is_empty());
    }

    #[test]
    fn test_visible_projects_scenario() {
        let catalog = sample_catalog();
        assert_eq!(ids(&visible_projects(&catalog, &only("Infra"))), vec!["a", "c"]);
        assert_eq!(ids(&visible_projects(&catalog, &only("Cloud"))), vec!["b"]);
        assert!(visible_projects(&catalog, &only("Nonexistent")).is_empty());
    }

    #[test]
    fn test_all_is_identity() {
        let catalog = catalog();
        let visible = visible_projects(catalog, &CategoryFilter::All);
        assert_eq!(visible.len(), catalog.len());
        for (v, p) in visible.iter().zip(catalog.all()) {
            assert_eq!(*v, p);
        }
    }

    #[test]
    fn test_partition_by_category() {
        for catalog in [sample_catalog(), catalog().clone()] {
            let mut covered = Vec::new();
            for category in categories(&catalog) {
                let filter = CategoryFilter::Only(category.clone());
                let visible = visible_projects(&catalog, &filter);
                assert!(!visible.is_empty());
                assert!(visible.iter().all(|p| p.category == category));
                covered.extend(ids(&visible));
            }
            covered.sort();
            let mut all = catalog.all().iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
            all.sort();
            assert_eq!(covered, all);
        }
    }

    #[test]
    fn test_filter_preserves_order() {
        let catalog = Catalog::new(vec![
            crate::catalog::tests::record("z", "Cloud"),
            crate::catalog::tests::record("m", "Backend"),
            crate::catalog::tests::record("a", "Cloud"),
            crate::catalog::tests::record("k", "Cloud"),
        ]);
        assert_eq!(
            ids(&visible_projects(&catalog, &only("Cloud"))),
            vec!["z", "a", "k"]
        );
    }

    #[test]
    fn test_view_model() {
        let catalog = sample_catalog();
        let mut vm = ProjectFilter::new();
        assert_eq!(vm.selected(), &CategoryFilter::All);
        assert!(!vm.is_filtered());
        assert_eq!(vm.visible(&catalog).len(), 3);

        vm.set_category(Category::Cloud);
        assert!(vm.is_filtered());
        assert_eq!(ids(&vm.visible(&catalog)), vec!["b"]);

        // unknown category is a legal selection with an empty result
        vm.set_category(only("Nonexistent"));
        assert!(vm.visible(&catalog).is_empty());

        vm.reset();
        assert_eq!(vm.selected(), &CategoryFilter::All);
        assert_eq!(ids(&vm.visible(&catalog)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_set_category_idempotent() {
        let catalog = sample_catalog();
        let mut once = ProjectFilter::new();
        once.set_category(only("Infra"));
        let mut twice = ProjectFilter::new();
        twice.set_category(only("Infra"));
        twice.set_category(only("Infra"));
        assert_eq!(once, twice);
        assert_eq!(ids(&once.visible(&catalog)), ids(&twice.visible(&catalog)));
    }

    #[test]
    fn test_parse_query_value() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!("".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "DevOps".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::DevOps))
        );
        let filter = CategoryFilter::Only(Category::Cloud);
        assert_eq!(filter.query_value().parse::<CategoryFilter>(), Ok(filter));
    }

    fn decoded_query(href: &str) -> Option<String> {
        let (_, query) = href.split_once('?')?;
        let (key, value) = query.split_once('=')?;
        assert_eq!(key, CATEGORY_PARAM);
        assert!(!value.contains(['&', '#', '+', ' ']));
        urlencoding::decode(value).ok().map(|v| v.into_owned())
    }

    #[test]
    fn test_listing_href() {
        assert_eq!(CategoryFilter::All.listing_href(), "/projects");
        assert_eq!(
            CategoryFilter::Only(Category::DevOps).listing_href(),
            "/projects?category=DevOps"
        );
        assert_eq!(only("R&D").listing_href(), "/projects?category=R%26D");
        assert_eq!(only("C#").listing_href(), "/projects?category=C%23");
        assert_eq!(only("C++").listing_href(), "/projects?category=C%2B%2B");
        assert_eq!(
            only("100% Uptime").listing_href(),
            "/projects?category=100%25%20Uptime"
        );
    }

    #[test]
    fn test_listing_href_round_trip() {
        for label in ["Cloud", "R&D", "C#", "C++", "100% Uptime", "Machine Learning"] {
            let filter = only(label);
            let value = decoded_query(&filter.listing_href());
            assert_eq!(value.as_deref(), Some(label));
            assert_eq!(CategoryFilter::from_query(value.as_deref()), filter);
        }
        assert_eq!(CategoryFilter::from_query(None), CategoryFilter::All);
        assert_eq!(decoded_query(&CategoryFilter::All.listing_href()), None);
    }

    #[test]
    fn test_sync_from_query() {
        let mut vm = ProjectFilter::new();
        assert!(vm.sync_from_query(Some("Cloud")));
        assert_eq!(vm.selected(), &CategoryFilter::Only(Category::Cloud));
        // same value again, e.g. after our own navigation
        assert!(!vm.sync_from_query(Some("Cloud")));

        // the URL lost its query, e.g. the nav "Projects" link
        assert!(vm.sync_from_query(None));
        assert_eq!(vm.selected(), &CategoryFilter::All);
        assert!(!vm.sync_from_query(Some("all")));
    }
}
