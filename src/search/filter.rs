//! Filtros de búsqueda del inventario
//!
//! Traduce los query params de la API a una lista cerrada de predicados.
//! La función de parseo es pura: misma entrada, misma salida, sin tocar
//! los params originales. Los valores inválidos degradan por campo en vez
//! de descartar la búsqueda completa.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::models::classified::{
    BodyType, ClassifiedStatus, Colour, CurrencyCode, FuelType, OdoUnit, Transmission,
    UlezCompliance,
};

/// Resultados por página del inventario
pub const CLASSIFIEDS_PER_PAGE: i64 = 9;

/// Predicado individual sobre la tabla classifieds
///
/// Cada variante mapea a exactamente una cláusula SQL. El renderizado
/// hace match exhaustivo, así que añadir un filtro nuevo obliga a
/// decidir su cláusula.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedFilter {
    Status(ClassifiedStatus),
    MakeId(i32),
    ModelId(i32),
    ModelVariantId(i32),
    MinYear(i32),
    MaxYear(i32),
    MinPrice(i32),
    MaxPrice(i32),
    MinReading(i32),
    MaxReading(i32),
    Doors(i32),
    Seats(i32),
    OdoUnit(OdoUnit),
    Currency(CurrencyCode),
    Transmission(Transmission),
    BodyType(BodyType),
    FuelType(FuelType),
    Colour(Colour),
    UlezCompliance(UlezCompliance),
    /// Búsqueda libre: substring sin case sobre título o descripción
    TextSearch(String),
    /// Un param numérico ilegible no debe ampliar resultados: no matchea nada
    MatchNothing,
}

/// Parsear los query params a la lista de predicados.
///
/// Siempre ancla `status = LIVE` como primer predicado; el cliente no
/// puede pedir otro estado. Params desconocidos y valores vacíos se
/// ignoran. El orden de salida es fijo para que el SQL resultante sea
/// determinista independientemente del orden de los params.
pub fn parse_filters(params: &HashMap<String, String>) -> Vec<ClassifiedFilter> {
    let mut filters = vec![ClassifiedFilter::Status(ClassifiedStatus::Live)];

    push_numeric(params, "make", ClassifiedFilter::MakeId, &mut filters);
    push_numeric(params, "model", ClassifiedFilter::ModelId, &mut filters);
    push_numeric(
        params,
        "modelVariant",
        ClassifiedFilter::ModelVariantId,
        &mut filters,
    );

    push_numeric(params, "minYear", ClassifiedFilter::MinYear, &mut filters);
    push_numeric(params, "maxYear", ClassifiedFilter::MaxYear, &mut filters);
    push_numeric(params, "minPrice", ClassifiedFilter::MinPrice, &mut filters);
    push_numeric(params, "maxPrice", ClassifiedFilter::MaxPrice, &mut filters);
    push_numeric(
        params,
        "minReading",
        ClassifiedFilter::MinReading,
        &mut filters,
    );
    push_numeric(
        params,
        "maxReading",
        ClassifiedFilter::MaxReading,
        &mut filters,
    );

    push_numeric(params, "doors", ClassifiedFilter::Doors, &mut filters);
    push_numeric(params, "seats", ClassifiedFilter::Seats, &mut filters);

    push_enum(params, "odoUnit", ClassifiedFilter::OdoUnit, &mut filters);
    push_enum(params, "currency", ClassifiedFilter::Currency, &mut filters);
    push_enum(
        params,
        "transmission",
        ClassifiedFilter::Transmission,
        &mut filters,
    );
    push_enum(params, "bodyType", ClassifiedFilter::BodyType, &mut filters);
    push_enum(params, "fuelType", ClassifiedFilter::FuelType, &mut filters);
    push_enum(params, "colour", ClassifiedFilter::Colour, &mut filters);
    push_enum(
        params,
        "ulezCompliant",
        ClassifiedFilter::UlezCompliance,
        &mut filters,
    );

    if let Some(q) = non_empty(params, "q") {
        filters.push(ClassifiedFilter::TextSearch(q.to_string()));
    }

    filters
}

/// Parsear el número de página (1-based); valores ausentes o ilegibles caen a 1
pub fn parse_page(params: &HashMap<String, String>) -> i64 {
    non_empty(params, "page")
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

fn non_empty<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

fn push_numeric(
    params: &HashMap<String, String>,
    key: &str,
    build: fn(i32) -> ClassifiedFilter,
    filters: &mut Vec<ClassifiedFilter>,
) {
    if let Some(raw) = non_empty(params, key) {
        match raw.parse::<i32>() {
            Ok(value) => filters.push(build(value)),
            Err(_) => {
                warn!("⚠️ Valor numérico inválido para '{}': '{}'", key, raw);
                filters.push(ClassifiedFilter::MatchNothing);
            }
        }
    }
}

fn push_enum<T: DeserializeOwned>(
    params: &HashMap<String, String>,
    key: &str,
    build: fn(T) -> ClassifiedFilter,
    filters: &mut Vec<ClassifiedFilter>,
) {
    if let Some(raw) = non_empty(params, key) {
        match parse_enum_value::<T>(raw) {
            Some(value) => filters.push(build(value)),
            None => warn!("⚠️ Valor de enum desconocido para '{}': '{}'", key, raw),
        }
    }
}

/// Resolver la ortografía exacta de un enum de la API (ej. "NON_EXEMPT")
fn parse_enum_value<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_value(serde_json::Value::String(raw.to_string())).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_params_anchor_live_status() {
        let filters = parse_filters(&params(&[]));
        assert_eq!(filters, vec![ClassifiedFilter::Status(ClassifiedStatus::Live)]);
    }

    #[test]
    fn test_unknown_params_are_ignored() {
        let filters = parse_filters(&params(&[("sort", "price"), ("foo", "bar")]));
        assert_eq!(filters, vec![ClassifiedFilter::Status(ClassifiedStatus::Live)]);
    }

    #[test]
    fn test_status_cannot_be_overridden_by_client() {
        let filters = parse_filters(&params(&[("status", "SOLD")]));
        assert_eq!(filters, vec![ClassifiedFilter::Status(ClassifiedStatus::Live)]);
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let filters = parse_filters(&params(&[("make", ""), ("q", ""), ("doors", "")]));
        assert_eq!(filters, vec![ClassifiedFilter::Status(ClassifiedStatus::Live)]);
    }

    #[test]
    fn test_taxonomy_ids_parse_as_numbers() {
        let filters = parse_filters(&params(&[
            ("make", "12"),
            ("model", "34"),
            ("modelVariant", "56"),
        ]));
        assert_eq!(
            filters,
            vec![
                ClassifiedFilter::Status(ClassifiedStatus::Live),
                ClassifiedFilter::MakeId(12),
                ClassifiedFilter::ModelId(34),
                ClassifiedFilter::ModelVariantId(56),
            ]
        );
    }

    #[test]
    fn test_invalid_numeric_becomes_match_nothing() {
        let filters = parse_filters(&params(&[("doors", "muchas")]));
        assert_eq!(
            filters,
            vec![
                ClassifiedFilter::Status(ClassifiedStatus::Live),
                ClassifiedFilter::MatchNothing,
            ]
        );
    }

    #[test]
    fn test_ranges_map_to_min_max_filters() {
        let filters = parse_filters(&params(&[
            ("minYear", "2015"),
            ("maxYear", "2020"),
            ("minPrice", "500000"),
        ]));
        assert_eq!(
            filters,
            vec![
                ClassifiedFilter::Status(ClassifiedStatus::Live),
                ClassifiedFilter::MinYear(2015),
                ClassifiedFilter::MaxYear(2020),
                ClassifiedFilter::MinPrice(500000),
            ]
        );
    }

    #[test]
    fn test_enum_exact_spelling_is_accepted() {
        let filters = parse_filters(&params(&[
            ("transmission", "AUTOMATIC"),
            ("ulezCompliant", "NON_EXEMPT"),
            ("odoUnit", "KILOMETERS"),
        ]));
        assert_eq!(
            filters,
            vec![
                ClassifiedFilter::Status(ClassifiedStatus::Live),
                ClassifiedFilter::OdoUnit(OdoUnit::Kilometers),
                ClassifiedFilter::Transmission(Transmission::Automatic),
                ClassifiedFilter::UlezCompliance(UlezCompliance::NonExempt),
            ]
        );
    }

    #[test]
    fn test_unknown_enum_spelling_is_dropped() {
        let filters = parse_filters(&params(&[
            ("colour", "MAGENTA"),
            ("transmission", "manual"),
        ]));
        assert_eq!(filters, vec![ClassifiedFilter::Status(ClassifiedStatus::Live)]);
    }

    #[test]
    fn test_free_text_becomes_single_search_filter() {
        let filters = parse_filters(&params(&[("q", "alpina")]));
        assert_eq!(
            filters,
            vec![
                ClassifiedFilter::Status(ClassifiedStatus::Live),
                ClassifiedFilter::TextSearch("alpina".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_param_is_not_a_filter() {
        let filters = parse_filters(&params(&[("page", "4")]));
        assert_eq!(filters, vec![ClassifiedFilter::Status(ClassifiedStatus::Live)]);
    }

    #[test]
    fn test_parse_page_defaults_and_bounds() {
        assert_eq!(parse_page(&params(&[])), 1);
        assert_eq!(parse_page(&params(&[("page", "5")])), 5);
        assert_eq!(parse_page(&params(&[("page", "0")])), 1);
        assert_eq!(parse_page(&params(&[("page", "-3")])), 1);
        assert_eq!(parse_page(&params(&[("page", "abc")])), 1);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let a = parse_filters(&params(&[
            ("q", "estate"),
            ("make", "3"),
            ("minPrice", "1000"),
            ("colour", "RED"),
        ]));
        let b = parse_filters(&params(&[
            ("colour", "RED"),
            ("minPrice", "1000"),
            ("make", "3"),
            ("q", "estate"),
        ]));
        assert_eq!(a, b);
    }
}
