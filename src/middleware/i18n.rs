// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

// Extrator de idioma (Accept-Language). Só o código primário importa: "pt-BR" -> "pt".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(pub String);

impl Default for Locale {
    fn default() -> Self {
        Locale("en".to_string())
    }
}

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.", "déc.",
];
const MONTHS_PT: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

impl Locale {
    pub fn from_header(header_str: &str) -> Self {
        accept_language::parse(header_str)
            .first()
            .map(|tag_string| {
                tag_string
                    .split('-')
                    .next()
                    .unwrap_or(tag_string)
                    .to_lowercase()
            })
            .map(Locale)
            .unwrap_or_default()
    }

    /// Nome curto do mês (1..=12) para o eixo do gráfico.
    pub fn month_short(&self, month: u32) -> &'static str {
        let table = match self.0.as_str() {
            "fr" => &MONTHS_FR,
            "pt" => &MONTHS_PT,
            _ => &MONTHS_EN,
        };
        let index = month.clamp(1, 12) as usize - 1;
        table[index]
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let locale = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .map(Locale::from_header)
            .unwrap_or_default();

        Ok(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_subtag_is_kept() {
        assert_eq!(Locale::from_header("pt-BR,pt;q=0.9,en;q=0.8").0, "pt");
        assert_eq!(Locale::from_header("fr-FR").0, "fr");
        assert_eq!(Locale::from_header("").0, "en");
    }

    #[test]
    fn month_labels_follow_the_language() {
        assert_eq!(Locale("fr".to_string()).month_short(2), "févr.");
        assert_eq!(Locale("pt".to_string()).month_short(12), "dez.");
        assert_eq!(Locale("de".to_string()).month_short(3), "Mar");
    }
}
