use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WarehousePayload {
    pub name: String,
    pub location: String,
    pub maximum_capacity: i64,
}
