use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wing {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

/// Reference to a catalog entity by id, as sent in submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdRef {
    pub id: i64,
}

impl From<i64> for IdRef {
    fn from(id: i64) -> Self {
        Self { id }
    }
}

/// Lookup lists owned by the backend. The client only reads them.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn skills(&self) -> Result<Vec<Skill>, anyhow::Error>;
    async fn wings(&self) -> Result<Vec<Wing>, anyhow::Error>;
    async fn departments(&self, wing_id: i64) -> Result<Vec<Department>, anyhow::Error>;
}
