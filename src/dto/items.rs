use serde::Deserialize;
use utoipa::ToSchema;

/// Item body for create and update.
///
/// `quantity` is never read from the client; it is derived from `variants`.
/// On update the variant list replaces whatever the item held before.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub variants: Vec<VariantPayload>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariantPayload {
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity_variant: Option<i64>,
}
