// src/models/orders.rs

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::coerce::{lenient_amount, lenient_datetime, lenient_id, lenient_opt_int};

// --- Enums ---

/// O que a situação significa para o dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    InProgress,
    Settled,
    Cancelled,
    Other,
}

/// Situação do pedido: a tag exatamente como chegou + o significado dela.
/// A API do restaurante usa as tags francesas (`EN_COURS`, `PAYE`, `ANNULE`);
/// as tags canônicas também são reconhecidas. A comparação é exata, com
/// maiúsculas e minúsculas. Tags desconhecidas viram `StatusKind::Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct OrderStatus {
    tag: String,
    kind: StatusKind,
}

impl OrderStatus {
    pub fn from_tag(tag: &str) -> Self {
        let kind = match tag {
            "in-progress" | "EN_COURS" => StatusKind::InProgress,
            "settled" | "PAYE" => StatusKind::Settled,
            "cancelled" | "ANNULE" => StatusKind::Cancelled,
            _ => StatusKind::Other,
        };
        Self {
            tag: tag.to_string(),
            kind,
        }
    }

    // A distribuição agrupa por esta tag, sem normalizar
    pub fn as_tag(&self) -> &str {
        &self.tag
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    /// Conta no card de pedidos ativos
    pub fn is_active(&self) -> bool {
        self.kind == StatusKind::InProgress
    }

    /// Conta nas somas de faturamento
    pub fn counts_as_revenue(&self) -> bool {
        self.kind == StatusKind::Settled
    }
}

impl From<String> for OrderStatus {
    fn from(tag: String) -> Self {
        OrderStatus::from_tag(&tag)
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.tag
    }
}

// --- Structs ---

/// Pedido como chega de `GET /order`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "id_commande", deserialize_with = "lenient_id")]
    #[schema(example = 42)]
    pub id: i64,

    #[serde(default, alias = "customer_id", alias = "id_client", deserialize_with = "lenient_opt_int")]
    #[schema(example = 7)]
    pub customer_id: Option<i64>,

    #[serde(default, alias = "staff_id", alias = "id_employe", deserialize_with = "lenient_opt_int")]
    pub staff_id: Option<i64>,

    // Data ilegível vira None: o pedido sai das somas mensais mas continua contado
    #[serde(default, alias = "order_date", alias = "date_commande", deserialize_with = "lenient_datetime")]
    pub order_date: Option<NaiveDateTime>,

    #[serde(default, alias = "total_amount", alias = "total_commande", deserialize_with = "lenient_amount")]
    #[schema(example = "150.00")]
    pub total_amount: Decimal,

    #[serde(alias = "statut")]
    #[schema(value_type = String, example = "settled")]
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use serde_json::json;

    #[test]
    fn decodes_the_restaurant_api_shape() {
        let raw = json!({
            "id_commande": 12,
            "id_client": 3,
            "id_employe": 1,
            "date_commande": "2024-03-05T12:00:00.000Z",
            "total_commande": "150.00",
            "statut": "PAYE"
        });

        let order: Order = serde_json::from_value(raw).unwrap();
        assert_eq!(order.id, 12);
        assert_eq!(order.customer_id, Some(3));
        assert_eq!(order.staff_id, Some(1));
        assert_eq!(order.order_date.unwrap().month(), 3);
        assert_eq!(order.total_amount, "150.00".parse::<Decimal>().unwrap());
        assert_eq!(order.status.kind(), StatusKind::Settled);
        assert_eq!(order.status.as_tag(), "PAYE");
    }

    #[test]
    fn loose_fields_degrade_instead_of_failing() {
        let raw = json!({
            "id": 1,
            "orderDate": "não sei",
            "totalAmount": "abc",
            "status": "in-progress"
        });

        let order: Order = serde_json::from_value(raw).unwrap();
        assert!(order.order_date.is_none());
        assert!(order.customer_id.is_none());
        assert_eq!(order.total_amount, Decimal::ZERO);
        assert!(order.status.is_active());
    }

    #[test]
    fn status_tags_are_matched_exactly() {
        assert_eq!(OrderStatus::from_tag("EN_COURS").kind(), StatusKind::InProgress);
        assert_eq!(OrderStatus::from_tag("ANNULE").kind(), StatusKind::Cancelled);
        assert_eq!(OrderStatus::from_tag("Settled").kind(), StatusKind::Other);
        assert_eq!(OrderStatus::from_tag("paye").kind(), StatusKind::Other);
        assert!(!OrderStatus::from_tag("cancelled").counts_as_revenue());
    }

    #[test]
    fn raw_tag_is_kept_for_both_vocabularies() {
        let paye = OrderStatus::from_tag("PAYE");
        let settled = OrderStatus::from_tag("settled");

        assert!(paye.counts_as_revenue() && settled.counts_as_revenue());
        assert_eq!(paye.as_tag(), "PAYE");
        assert_eq!(settled.as_tag(), "settled");
        assert_ne!(paye, settled);
        assert_eq!(String::from(paye), "PAYE");
    }

    #[test]
    fn loose_ids_do_not_reject_the_record() {
        let raw = json!({
            "id_commande": "12",
            "id_client": "3",
            "id_employe": null,
            "date_commande": "2024-03-05",
            "total_commande": 10,
            "statut": "EN_COURS"
        });

        let order: Order = serde_json::from_value(raw).unwrap();
        assert_eq!(order.id, 12);
        assert_eq!(order.customer_id, Some(3));
        assert!(order.staff_id.is_none());

        let raw = json!({ "id": 1, "id_client": "x", "statut": "PAYE" });
        let order: Order = serde_json::from_value(raw).unwrap();
        assert!(order.customer_id.is_none());
    }

    #[test]
    fn missing_status_is_a_structural_error() {
        let raw = json!({ "id": 1, "totalAmount": 10 });
        assert!(serde_json::from_value::<Order>(raw).is_err());
    }
}
