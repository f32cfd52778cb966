//! Category domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shopsmith_core::{BillboardId, CategoryId, StoreId};

use super::Billboard;

/// A product category belonging to one store, fronted by one billboard.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub store_id: StoreId,
    pub billboard_id: BillboardId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A category with its billboard embedded, as returned by single-category
/// reads.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryWithBillboard {
    #[serde(flatten)]
    pub category: Category,
    pub billboard: Billboard,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_billboard_is_flattened() {
        let now = Utc::now();
        let with_billboard = CategoryWithBillboard {
            category: Category {
                id: CategoryId::new("c1"),
                store_id: StoreId::new("s1"),
                billboard_id: BillboardId::new("b1"),
                name: "Shirts".to_string(),
                created_at: now,
                updated_at: now,
            },
            billboard: Billboard {
                id: BillboardId::new("b1"),
                store_id: StoreId::new("s1"),
                label: "Summer".to_string(),
                image_url: "http://x/y.png".to_string(),
                created_at: now,
                updated_at: now,
            },
        };

        let json = serde_json::to_value(&with_billboard).unwrap();
        // Category fields at the top level, billboard nested
        assert_eq!(json["name"], "Shirts");
        assert_eq!(json["billboardId"], "b1");
        assert_eq!(json["billboard"]["label"], "Summer");
    }
}
