//! Production entity model and draft DTOs.

use serde::{Deserialize, Serialize};

use crate::types::{Id, Timestamp};

/// Canonical genres accepted by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Drama,
    Musical,
    Opera,
}

impl Genre {
    /// Allowed genre strings, in display order.
    pub const ALL: &'static [&'static str] = &["Drama", "Musical", "Opera"];

    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Drama => "Drama",
            Genre::Musical => "Musical",
            Genre::Opera => "Opera",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A staged production as returned by the server.
///
/// The list endpoint omits `crew_members`; the detail endpoint includes
/// it. Timestamps are server-set and absent on older rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Production {
    pub id: Id,
    pub title: String,
    pub genre: String,
    pub director: String,
    #[serde(default)]
    pub description: String,
    pub budget: f64,
    pub image: String,
    pub ongoing: bool,
    #[serde(default)]
    pub crew_members: Vec<CastMember>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// A cast or crew member attached to a production.
///
/// Nested data only -- the client never manages these independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: Id,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub production_id: Option<Id>,
}

/// Client-owned draft for the production create/edit form.
///
/// `ongoing` defaults to `true`: the create flow submits every new
/// production as a currently running show.
#[derive(Debug, Clone, Serialize)]
pub struct ProductionDraft {
    pub title: String,
    pub genre: String,
    /// `None` until the user has entered a number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    pub image: String,
    pub director: String,
    pub description: String,
    pub ongoing: bool,
}

impl Default for ProductionDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            genre: String::new(),
            budget: None,
            image: String::new(),
            director: String::new(),
            description: String::new(),
            ongoing: true,
        }
    }
}

/// Prefill a draft from an existing record (the edit flow).
impl From<&Production> for ProductionDraft {
    fn from(production: &Production) -> Self {
        Self {
            title: production.title.clone(),
            genre: production.genre.clone(),
            budget: Some(production.budget),
            image: production.image.clone(),
            director: production.director.clone(),
            description: production.description.clone(),
            ongoing: production.ongoing,
        }
    }
}
