// src/common/coerce.rs

//! Coerções tolerantes aplicadas na fronteira de entrada.
//!
//! A API do restaurante manda campos com tipos soltos (`"150.00"`, `150`, `null`...).
//! A política é disponibilidade antes de rigor: um valor ruim vira zero (ou `None`)
//! e o registro continua participando do resto da agregação.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::common::error::AppError;

/// Converte um valor JSON em valor monetário. Qualquer coisa que não seja número vira 0.
pub fn coerce_amount(value: &Value) -> Decimal {
    let parsed = match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    };

    match parsed {
        Some(amount) if amount.is_sign_negative() => {
            tracing::warn!("Valor negativo recebido ({}), considerado 0", amount);
            Decimal::ZERO
        }
        Some(amount) => amount,
        None => {
            if !value.is_null() {
                tracing::warn!("Valor monetário ilegível ({}), considerado 0", value);
            }
            Decimal::ZERO
        }
    }
}

/// Quantidade de estoque. Diferente de dinheiro, negativo é mantido
/// (estoque furado aparece como crítico); só o ilegível vira 0.
pub fn coerce_quantity(value: &Value) -> Decimal {
    let parsed = match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    };

    parsed.unwrap_or_else(|| {
        if !value.is_null() {
            tracing::warn!("Quantidade de estoque ilegível ({}), considerada 0", value);
        }
        Decimal::ZERO
    })
}

// Sem leitura de prefixo: "12abc" e "12,50" não são números
fn parse_decimal(raw: &str) -> Option<Decimal> {
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Lê a data de um pedido. Formatos desconhecidos retornam `None`.
pub fn parse_order_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    // Horário de parede no fuso do próprio registro
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Data de referência vinda da query string. Aqui o erro é do cliente, então não há fallback.
pub fn parse_reference_date(raw: &str) -> Result<NaiveDate, AppError> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|_| AppError::InvalidReferenceDate(raw.to_string()))
}

// --- Adaptadores para #[serde(deserialize_with = ...)] ---

pub fn lenient_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null);
    Ok(coerce_amount(&value))
}

pub fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => {
            let parsed = parse_order_datetime(&s);
            if parsed.is_none() {
                tracing::warn!("Data ilegível ({}), pedido fora das somas mensais", s);
            }
            parsed
        }
        _ => None,
    })
}

/// Aceita string ou número (o rank do cliente chega dos dois jeitos).
pub fn lenient_tag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn int_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Inteiro vindo como número ou string numérica. Ilegível vira 0.
pub fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(int_from_value).unwrap_or(0))
}

/// Referência opcional (cliente, funcionário). Ilegível vira `None`.
pub fn lenient_opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = value.as_ref().and_then(int_from_value);
    if let (None, Some(raw)) = (parsed, value.as_ref().filter(|v| !v.is_null())) {
        tracing::warn!("Referência ilegível ({}), ignorada", raw);
    }
    Ok(parsed)
}

/// Identificador do registro: aceita `12` ou `"12"`, mas sem id legível o
/// registro não tem identidade e a decodificação falha.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    int_from_value(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("identificador inválido: {value}")))
}

/// Texto livre (nomes). `null` vira vazio e número vira texto.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

pub fn lenient_quantity<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null);
    Ok(coerce_quantity(&value))
}
