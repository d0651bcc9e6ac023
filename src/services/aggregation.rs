// src/services/aggregation.rs

//! Motor de agregação do dashboard.
//!
//! Função pura: recebe os pedidos e a data de referência e devolve o resumo.
//! Não lê relógio, não faz I/O e não guarda estado entre chamadas.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{
    dashboard::{DashboardSummary, MonthlyRevenueEntry, StatusCountEntry},
    orders::Order,
};

pub fn summarize(orders: &[Order], reference: NaiveDate) -> DashboardSummary {
    let year = reference.year();

    let mut active_orders = 0;
    let mut revenue_by_month = [Decimal::ZERO; 12];
    let mut status_distribution: Vec<StatusCountEntry> = Vec::new();
    let mut status_index: HashMap<&str, usize> = HashMap::new();

    for order in orders {
        if order.status.is_active() {
            active_orders += 1;
        }

        let tag = order.status.as_tag();
        match status_index.get(tag).copied() {
            Some(i) => status_distribution[i].count += 1,
            None => {
                status_index.insert(tag, status_distribution.len());
                status_distribution.push(StatusCountEntry {
                    status: tag.to_string(),
                    count: 1,
                });
            }
        }

        if !order.status.counts_as_revenue() {
            continue;
        }
        // Sem data legível o pedido não entra em nenhum mês
        if let Some(date) = order.order_date {
            if date.year() == year {
                // Satura em Decimal::MAX em vez de estourar
                let bucket = &mut revenue_by_month[date.month0() as usize];
                *bucket = bucket.saturating_add(order.total_amount);
            }
        }
    }

    let monthly_revenue = revenue_by_month
        .iter()
        .zip(1u32..)
        .map(|(revenue, month)| MonthlyRevenueEntry {
            year,
            month,
            revenue: *revenue,
        })
        .collect();

    DashboardSummary {
        reference_year: year,
        reference_month: reference.month(),
        active_orders,
        monthly_revenue,
        status_distribution,
        // Lido da própria série: o card e o gráfico nunca divergem
        current_month_revenue: revenue_by_month[reference.month0() as usize],
    }
}
