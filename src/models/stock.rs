// src/models/stock.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::coerce::{lenient_id, lenient_quantity, lenient_string};

/// Nível do estoque em relação ao limite crítico do produto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    /// quantidade <= limite
    Critical,
    /// quantidade <= 2 x limite
    Low,
    Healthy,
}

impl StockLevel {
    pub fn classify(quantity: Decimal, threshold: Decimal) -> Self {
        if quantity <= threshold {
            StockLevel::Critical
        } else if quantity <= threshold * Decimal::TWO {
            StockLevel::Low
        } else {
            StockLevel::Healthy
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    #[serde(alias = "id_produit", deserialize_with = "lenient_id")]
    #[schema(example = 5)]
    pub id: i64,

    #[serde(default, alias = "nom_produit", deserialize_with = "lenient_string")]
    #[schema(example = "Farinha")]
    pub name: String,

    #[serde(default, alias = "quantite_disponible", deserialize_with = "lenient_quantity")]
    #[schema(example = "12")]
    pub quantity: Decimal,

    #[serde(default, alias = "seuil_critique", deserialize_with = "lenient_quantity")]
    #[schema(example = "10")]
    pub threshold: Decimal,
}

impl StockItem {
    pub fn level(&self) -> StockLevel {
        StockLevel::classify(self.quantity, self.threshold)
    }
}

// Item + nível calculado, como a tela de estoque consome
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockItemView {
    #[serde(flatten)]
    pub item: StockItem,
    pub level: StockLevel,
}

impl From<StockItem> for StockItemView {
    fn from(item: StockItem) -> Self {
        let level = item.level();
        Self { item, level }
    }
}
