use serde::{Deserialize, Serialize};

/// A catalog entry, built fresh on every fetch from the spreadsheet export.
///
/// Products are immutable value objects; the spreadsheet is the sole source
/// of truth and there is no update or delete path. JSON field names follow
/// the source's native (Portuguese) column naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    pub tags: String,
    #[serde(rename = "imagem_url")]
    pub image_url: String,
    #[serde(rename = "descricao")]
    pub description: String,
    pub status: String,
    #[serde(rename = "data_criacao")]
    pub created_at: String,
    pub drive_file_id: String,
}

impl Product {
    /// Status value a product must carry to pass the active-only policy.
    pub const ACTIVE_STATUS: &'static str = "Ativo";

    /// A product is published only when both name and image are present.
    pub fn is_publishable(&self) -> bool {
        !self.name.is_empty() && !self.image_url.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.status == Self::ACTIVE_STATUS
    }
}
