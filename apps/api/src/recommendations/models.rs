//! Wire document returned by the model, and the view model built from it.

use serde::{Deserialize, Serialize};

use crate::recommendations::catalog::{color_for, icon_for, Icon, APPLICATION_ICON};

// ────────────────────────────────────────────────────────────────────────────
// Model output (parsed from choices[0].message.content)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationDocument {
    pub categories: Vec<RawCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    pub name: String,
    pub applications: Vec<RawApplication>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawApplication {
    pub title: String,
    pub description: String,
    pub prompt: Option<String>,
    /// Absent or null examples map to an empty list.
    #[serde(default)]
    pub examples: Option<Vec<String>>,
}

// ────────────────────────────────────────────────────────────────────────────
// View model
// ────────────────────────────────────────────────────────────────────────────

/// One suggested use case, rendered as a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Application {
    /// `<category>-<index>`
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub icon: Icon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub name: String,
    pub icon: Icon,
    pub color: String,
    pub applications: Vec<Application>,
}

impl Category {
    /// Builds a category with resolved icon and colour. Application ids are
    /// assigned from their position in `applications`.
    pub fn new(name: &str, applications: Vec<RawApplication>) -> Self {
        let applications = applications
            .into_iter()
            .enumerate()
            .map(|(index, app)| Application {
                id: format!("{name}-{index}"),
                title: app.title,
                description: app.description,
                category: name.to_string(),
                icon: APPLICATION_ICON,
                prompt: app.prompt,
                examples: app.examples.unwrap_or_default(),
            })
            .collect();

        Self {
            name: name.to_string(),
            icon: icon_for(name),
            color: color_for(name).to_string(),
            applications,
        }
    }
}

/// Categories repeated under the same name are merged in order of first
/// appearance, so `<category>-<index>` ids stay unique within the result set.
impl From<RecommendationDocument> for Vec<Category> {
    fn from(doc: RecommendationDocument) -> Self {
        let mut merged: Vec<RawCategory> = Vec::with_capacity(doc.categories.len());
        for category in doc.categories {
            match merged.iter_mut().find(|c| c.name == category.name) {
                Some(existing) => existing.applications.extend(category.applications),
                None => merged.push(category),
            }
        }
        merged
            .into_iter()
            .map(|c| Category::new(&c.name, c.applications))
            .collect()
    }
}
