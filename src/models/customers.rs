// src/models/customers.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::coerce::{lenient_id, lenient_int, lenient_string, lenient_tag};

/// Faixa de fidelidade derivada do rank do cliente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoyaltyTier {
    Gold,
    Silver,
    Bronze,
    Unranked,
}

impl LoyaltyTier {
    pub fn from_rank(rank: Option<&str>) -> Self {
        match rank.map(str::trim) {
            Some("1") => LoyaltyTier::Gold,
            Some("2") => LoyaltyTier::Silver,
            Some("3") => LoyaltyTier::Bronze,
            _ => LoyaltyTier::Unranked,
        }
    }

    // Cor do selo pintado na tela de clientes
    pub fn badge_color(self) -> &'static str {
        match self {
            LoyaltyTier::Gold => "#FFD700",
            LoyaltyTier::Silver => "#C0C0C0",
            LoyaltyTier::Bronze => "#CD7F32",
            LoyaltyTier::Unranked => "#E0E0E0",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(alias = "id_client", deserialize_with = "lenient_id")]
    #[schema(example = 7)]
    pub id: i64,

    #[serde(default, alias = "last_name", alias = "nom", deserialize_with = "lenient_string")]
    #[schema(example = "Dupont")]
    pub last_name: String,

    #[serde(default, alias = "first_name", alias = "prenom", deserialize_with = "lenient_string")]
    #[schema(example = "Marie")]
    pub first_name: String,

    #[serde(default, deserialize_with = "lenient_tag")]
    pub contact: Option<String>,

    #[serde(default, alias = "loyalty_points", alias = "points_fidelite", deserialize_with = "lenient_int")]
    #[schema(example = 120)]
    pub loyalty_points: i64,

    // Pode chegar como "1" ou 1
    #[serde(default, deserialize_with = "lenient_tag")]
    #[schema(example = "1")]
    pub rank: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    #[serde(flatten)]
    pub customer: Customer,
    pub tier: LoyaltyTier,
    #[schema(example = "#FFD700")]
    pub badge_color: String,
}

impl From<Customer> for CustomerView {
    fn from(customer: Customer) -> Self {
        let tier = LoyaltyTier::from_rank(customer.rank.as_deref());
        Self {
            customer,
            tier,
            badge_color: tier.badge_color().to_string(),
        }
    }
}
