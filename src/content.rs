use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::engine::carousel::next_ordinal;

const EMBEDDED_PORTFOLIO: &str = include_str!("../assets/portfolio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("portfolio document is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project id `{0}` is used more than once")]
    DuplicateProjectId(String),
    #[error("{what} must not be empty")]
    EmptyField { what: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Philosophy", href: "#about" },
    NavLink { label: "Selected Work", href: "#work" },
    NavLink { label: "Process", href: "#process" },
];

pub const CASE_NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Overview", href: "#overview" },
    NavLink { label: "Challenges", href: "#challenges" },
    NavLink { label: "Solution", href: "#solution" },
];

pub const MOBILE_NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Philosophy", href: "#about" },
    NavLink { label: "Selected Work", href: "#work" },
    NavLink { label: "Process", href: "#process" },
    NavLink { label: "Contact", href: "#contact" },
];

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub brand_name: String,
    pub name: String,
    pub role: String,
    pub description: String,
    pub location: String,
    pub experience: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub headline: String,
    pub headline_italic: String,
    pub cta_text: String,
    pub cta_href: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PhilosophyParagraph {
    #[serde(default)]
    pub emphasis: String,
    pub paragraph: String,
}

impl PhilosophyParagraph {
    pub fn has_emphasis(&self) -> bool {
        !self.emphasis.is_empty()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Principle {
    pub title: String,
    pub subtitle: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Philosophy {
    pub title: String,
    pub subtitle: String,
    pub quote: String,
    pub content: Vec<PhilosophyParagraph>,
    #[serde(default)]
    pub principles: Vec<Principle>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub role: String,
    pub focus: String,
    pub outcome: String,
    pub link: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Project {
    /// Address of the detail view for this project.
    pub fn case_study_path(&self) -> String {
        format!("/case-study/{}", self.id)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Tool {
    pub name: String,
    pub category: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub time: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ContactInfo {
    pub email: String,
    pub linkedin: String,
    pub status: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub external: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FooterInfo {
    pub copyright_year: String,
    pub copyright_name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// The whole site content, loaded once at startup and never mutated.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Portfolio {
    pub personal: Personal,
    pub seo: Seo,
    pub hero: Hero,
    pub philosophy: Philosophy,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    pub contact: ContactInfo,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    pub footer: FooterInfo,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl Portfolio {
    /// Parses the document compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_PORTFOLIO)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(raw)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.personal.brand_name.trim().is_empty() {
            return Err(ContentError::EmptyField { what: "personal.brandName" });
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.id.trim().is_empty() {
                return Err(ContentError::EmptyField { what: "project id" });
            }
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProjectId(project.id.clone()));
            }
            if project.link != project.case_study_path() {
                log::debug!("Project {} links to {} instead of its case study", project.id, project.link);
            }
        }

        let mut seen = HashSet::new();
        for recommendation in &self.recommendations {
            if !seen.insert(recommendation.id.as_str()) {
                log::warn!(
                    "Recommendation id {} appears twice, carousel expand state will be shared",
                    recommendation.id
                );
            }
        }
        Ok(())
    }

    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The project after `id` in showcase order, wrapping around, together
    /// with its 1-based position for display.
    pub fn next_project(&self, id: &str) -> Option<(usize, &Project)> {
        let index = self.projects.iter().position(|p| p.id == id)?;
        let ordinal = next_ordinal(index, self.projects.len())?;
        self.projects.get(ordinal - 1).map(|p| (ordinal, p))
    }

    pub fn recommendation_keys(&self) -> Vec<String> {
        self.recommendations.iter().map(|r| r.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_projects(ids: &[&str]) -> String {
        let mut doc: serde_json::Value =
            serde_json::from_str(EMBEDDED_PORTFOLIO).expect("embedded json");
        let projects: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "category": "c",
                    "title": format!("Project {}", id),
                    "description": "d",
                    "role": "r",
                    "focus": "f",
                    "outcome": "o",
                    "link": format!("/case-study/{}", id)
                })
            })
            .collect();
        doc["projects"] = serde_json::Value::Array(projects);
        doc.to_string()
    }

    #[test]
    fn embedded_document_loads() {
        let portfolio = Portfolio::embedded().expect("embedded portfolio");
        assert!(!portfolio.projects.is_empty());
        assert_eq!(portfolio.recommendations.len(), 6);
        assert_eq!(portfolio.projects[1].image, None);
    }

    #[test]
    fn unknown_project_is_none() {
        let portfolio = Portfolio::from_json(&with_projects(&["a", "b", "c"])).unwrap();
        assert!(portfolio.find_project("z").is_none());
        assert_eq!(portfolio.find_project("b").map(|p| p.title.as_str()), Some("Project b"));
    }

    #[test]
    fn duplicate_project_ids_are_rejected() {
        let err = Portfolio::from_json(&with_projects(&["a", "a"])).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateProjectId(id) if id == "a"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Portfolio::from_json("{ \"personal\": ").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn next_project_wraps_to_first() {
        let portfolio = Portfolio::from_json(&with_projects(&["a", "b", "c"])).unwrap();
        let (ordinal, next) = portfolio.next_project("c").unwrap();
        assert_eq!(ordinal, 1);
        assert_eq!(next.id, "a");

        let (ordinal, next) = portfolio.next_project("a").unwrap();
        assert_eq!(ordinal, 2);
        assert_eq!(next.id, "b");

        assert!(portfolio.next_project("z").is_none());
    }

    #[test]
    fn case_study_path_uses_id() {
        let portfolio = Portfolio::from_json(&with_projects(&["a"])).unwrap();
        assert_eq!(portfolio.projects[0].case_study_path(), "/case-study/a");
    }
}
