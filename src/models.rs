use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub warehouse_id: i32,
    pub name: String,
    pub location: String,
    pub maximum_capacity: i64,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_id: i32,
    pub warehouse_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub variants: Vec<Variant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: i32,
    pub item_id: i32,
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity_variant: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warehouse_serializes_nested_items_in_camel_case() {
        let warehouse = Warehouse {
            warehouse_id: 1,
            name: "W1".into(),
            location: "X".into(),
            maximum_capacity: 100,
            items: vec![Item {
                item_id: 2,
                warehouse_id: 1,
                name: "Shirt".into(),
                description: None,
                quantity: 5,
                variants: vec![Variant {
                    id: 3,
                    item_id: 2,
                    size: Some("M".into()),
                    color: Some("Red".into()),
                    quantity_variant: 5,
                }],
            }],
        };

        let json = serde_json::to_value(&warehouse).unwrap();
        assert_eq!(json["warehouseId"], 1);
        assert_eq!(json["maximumCapacity"], 100);
        assert_eq!(json["items"][0]["itemId"], 2);
        assert_eq!(json["items"][0]["variants"][0]["quantityVariant"], 5);
        assert_eq!(json["items"][0]["variants"][0]["itemId"], 2);
        assert!(json["items"][0].get("warehouse").is_none());
    }
}
