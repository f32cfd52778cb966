//! Product domain types.
//!
//! A product belongs to one store and references one category, size, and
//! color. Its images are owned rows created and replaced together with the
//! product itself.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use shopsmith_core::{CategoryId, ColorId, ImageId, ProductId, SizeId, StoreId};

use super::{Category, Color, Size};

/// A product row without its relations.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub store_id: StoreId,
    pub category_id: CategoryId,
    pub size_id: SizeId,
    pub color_id: ColorId,
    pub name: String,
    /// Decimal price, serialized as a string to avoid float rounding.
    pub price: Decimal,
    pub is_featured: bool,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An image attached to a product.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: ImageId,
    pub product_id: ProductId,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A product with its images and joined category/size/color, as returned by
/// product reads and listings.
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithRelations {
    #[serde(flatten)]
    pub product: Product,
    pub images: Vec<Image>,
    pub category: Category,
    pub size: Size,
    pub color: Color,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_product(now: DateTime<Utc>) -> Product {
        Product {
            id: ProductId::new("p1"),
            store_id: StoreId::new("s1"),
            category_id: CategoryId::new("c1"),
            size_id: SizeId::new("sz1"),
            color_id: ColorId::new("col1"),
            name: "Linen Shirt".to_string(),
            price: Decimal::new(1999, 2),
            is_featured: true,
            is_archived: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_price_serializes_as_string() {
        let json = serde_json::to_value(sample_product(Utc::now())).unwrap();
        assert_eq!(json["price"], "19.99");
        assert_eq!(json["isFeatured"], true);
        assert_eq!(json["isArchived"], false);
    }

    #[test]
    fn test_relations_are_embedded_beside_product_fields() {
        let now = Utc::now();
        let with_relations = ProductWithRelations {
            product: sample_product(now),
            images: vec![Image {
                id: ImageId::new("i1"),
                product_id: ProductId::new("p1"),
                url: "http://x/1.png".to_string(),
                created_at: now,
                updated_at: now,
            }],
            category: Category {
                id: CategoryId::new("c1"),
                store_id: StoreId::new("s1"),
                billboard_id: shopsmith_core::BillboardId::new("b1"),
                name: "Shirts".to_string(),
                created_at: now,
                updated_at: now,
            },
            size: Size {
                id: SizeId::new("sz1"),
                store_id: StoreId::new("s1"),
                name: "Small".to_string(),
                value: "S".to_string(),
                created_at: now,
                updated_at: now,
            },
            color: Color {
                id: ColorId::new("col1"),
                store_id: StoreId::new("s1"),
                name: "Crimson".to_string(),
                value: "#DC143C".to_string(),
                created_at: now,
                updated_at: now,
            },
        };

        let json = serde_json::to_value(&with_relations).unwrap();
        assert_eq!(json["name"], "Linen Shirt");
        assert_eq!(json["images"][0]["url"], "http://x/1.png");
        assert_eq!(json["category"]["name"], "Shirts");
        assert_eq!(json["size"]["value"], "S");
        assert_eq!(json["color"]["value"], "#DC143C");
    }
}
