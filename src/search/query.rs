//! Renderizado de filtros a SQL
//!
//! Convierte la lista de predicados en queries parametrizadas con
//! QueryBuilder. Ningún valor del cliente se interpola en el texto SQL;
//! todo entra como bind.

use sqlx::{Postgres, QueryBuilder};

use super::filter::{ClassifiedFilter, CLASSIFIEDS_PER_PAGE};

/// Query de búsqueda paginada sobre classifieds
pub fn build_search_query(
    filters: &[ClassifiedFilter],
    page: i64,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT * FROM classifieds WHERE ");
    push_filters(&mut qb, filters);
    qb.push(" ORDER BY created_at DESC LIMIT ");
    qb.push_bind(CLASSIFIEDS_PER_PAGE);
    qb.push(" OFFSET ");
    qb.push_bind(page_offset(page));
    qb
}

/// Query de conteo con los mismos predicados que la búsqueda
pub fn build_count_query(filters: &[ClassifiedFilter]) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM classifieds WHERE ");
    push_filters(&mut qb, filters);
    qb
}

/// Offset de una página 1-based; páginas enormes saturan a un offset
/// más allá de la tabla en lugar de desbordar
pub fn page_offset(page: i64) -> i64 {
    (page - 1).saturating_mul(CLASSIFIEDS_PER_PAGE)
}

/// Total de páginas para un conteo dado
pub fn total_pages(total: i64) -> i64 {
    if total == 0 {
        return 0;
    }
    (total + CLASSIFIEDS_PER_PAGE - 1) / CLASSIFIEDS_PER_PAGE
}

/// El texto libre busca substrings literales: los comodines de LIKE
/// escritos por el usuario no deben actuar como tales
fn escape_like(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

fn push_filters(qb: &mut QueryBuilder<'static, Postgres>, filters: &[ClassifiedFilter]) {
    if filters.is_empty() {
        // lista vacía: el WHERE necesita al menos una cláusula
        qb.push("TRUE");
        return;
    }

    let mut first = true;
    for filter in filters {
        if first {
            first = false;
        } else {
            qb.push(" AND ");
        }

        match filter {
            ClassifiedFilter::Status(status) => {
                qb.push("status = ").push_bind(status.clone());
            }
            ClassifiedFilter::MakeId(id) => {
                qb.push("make_id = ").push_bind(*id);
            }
            ClassifiedFilter::ModelId(id) => {
                qb.push("model_id = ").push_bind(*id);
            }
            ClassifiedFilter::ModelVariantId(id) => {
                qb.push("model_variant_id = ").push_bind(*id);
            }
            ClassifiedFilter::MinYear(year) => {
                qb.push("year >= ").push_bind(*year);
            }
            ClassifiedFilter::MaxYear(year) => {
                qb.push("year <= ").push_bind(*year);
            }
            ClassifiedFilter::MinPrice(price) => {
                qb.push("price >= ").push_bind(*price);
            }
            ClassifiedFilter::MaxPrice(price) => {
                qb.push("price <= ").push_bind(*price);
            }
            ClassifiedFilter::MinReading(reading) => {
                qb.push("odo_reading >= ").push_bind(*reading);
            }
            ClassifiedFilter::MaxReading(reading) => {
                qb.push("odo_reading <= ").push_bind(*reading);
            }
            ClassifiedFilter::Doors(doors) => {
                qb.push("doors = ").push_bind(*doors);
            }
            ClassifiedFilter::Seats(seats) => {
                qb.push("seats = ").push_bind(*seats);
            }
            ClassifiedFilter::OdoUnit(unit) => {
                qb.push("odo_unit = ").push_bind(unit.clone());
            }
            ClassifiedFilter::Currency(currency) => {
                qb.push("currency = ").push_bind(currency.clone());
            }
            ClassifiedFilter::Transmission(transmission) => {
                qb.push("transmission = ").push_bind(transmission.clone());
            }
            ClassifiedFilter::BodyType(body_type) => {
                qb.push("body_type = ").push_bind(body_type.clone());
            }
            ClassifiedFilter::FuelType(fuel_type) => {
                qb.push("fuel_type = ").push_bind(fuel_type.clone());
            }
            ClassifiedFilter::Colour(colour) => {
                qb.push("colour = ").push_bind(colour.clone());
            }
            ClassifiedFilter::UlezCompliance(ulez) => {
                qb.push("ulez_compliance = ").push_bind(ulez.clone());
            }
            ClassifiedFilter::TextSearch(q) => {
                // Grupo OR propio: sin paréntesis se colaría en el AND exterior
                let pattern = format!("%{}%", escape_like(q));
                qb.push("(title ILIKE ").push_bind(pattern.clone());
                qb.push(" OR description ILIKE ").push_bind(pattern);
                qb.push(")");
            }
            ClassifiedFilter::MatchNothing => {
                qb.push("FALSE");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::super::filter::{parse_filters, parse_page};
    use super::*;
    use crate::models::classified::ClassifiedStatus;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_query_only_filters_live_status() {
        let filters = parse_filters(&params(&[]));
        let qb = build_count_query(&filters);
        assert_eq!(qb.sql(), "SELECT COUNT(*) FROM classifieds WHERE status = $1");
    }

    #[test]
    fn test_search_query_orders_and_paginates() {
        let filters = parse_filters(&params(&[]));
        let qb = build_search_query(&filters, 1);
        assert_eq!(
            qb.sql(),
            "SELECT * FROM classifieds WHERE status = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        );
    }

    #[test]
    fn test_full_filter_set_renders_in_canonical_order() {
        let all = params(&[
            ("make", "1"),
            ("model", "2"),
            ("modelVariant", "3"),
            ("minYear", "2010"),
            ("maxYear", "2020"),
            ("minPrice", "500000"),
            ("maxPrice", "2000000"),
            ("minReading", "0"),
            ("maxReading", "100000"),
            ("doors", "4"),
            ("seats", "5"),
            ("odoUnit", "MILES"),
            ("currency", "GBP"),
            ("transmission", "MANUAL"),
            ("bodyType", "SUV"),
            ("fuelType", "PETROL"),
            ("colour", "BLACK"),
            ("ulezCompliant", "EXEMPT"),
            ("q", "sport"),
            ("page", "2"),
        ]);
        let filters = parse_filters(&all);
        let qb = build_search_query(&filters, parse_page(&all));
        assert_eq!(
            qb.sql(),
            "SELECT * FROM classifieds WHERE status = $1 \
             AND make_id = $2 AND model_id = $3 AND model_variant_id = $4 \
             AND year >= $5 AND year <= $6 \
             AND price >= $7 AND price <= $8 \
             AND odo_reading >= $9 AND odo_reading <= $10 \
             AND doors = $11 AND seats = $12 \
             AND odo_unit = $13 AND currency = $14 AND transmission = $15 \
             AND body_type = $16 AND fuel_type = $17 AND colour = $18 \
             AND ulez_compliance = $19 \
             AND (title ILIKE $20 OR description ILIKE $21) \
             ORDER BY created_at DESC LIMIT $22 OFFSET $23"
        );
    }

    #[test]
    fn test_make_and_price_range_compose_with_the_anchor() {
        let filters = parse_filters(&params(&[
            ("make", "3"),
            ("minPrice", "500000"),
            ("maxPrice", "1000000"),
        ]));
        let qb = build_count_query(&filters);
        assert_eq!(
            qb.sql(),
            "SELECT COUNT(*) FROM classifieds WHERE status = $1 \
             AND make_id = $2 AND price >= $3 AND price <= $4"
        );
    }

    #[test]
    fn test_free_text_renders_parenthesised_or_group() {
        let filters = parse_filters(&params(&[("q", "sport")]));
        let qb = build_count_query(&filters);
        assert_eq!(
            qb.sql(),
            "SELECT COUNT(*) FROM classifieds WHERE status = $1 \
             AND (title ILIKE $2 OR description ILIKE $3)"
        );
    }

    #[test]
    fn test_invalid_numeric_renders_false_clause() {
        let filters = parse_filters(&params(&[("seats", "cinco")]));
        let qb = build_count_query(&filters);
        assert_eq!(
            qb.sql(),
            "SELECT COUNT(*) FROM classifieds WHERE status = $1 AND FALSE"
        );
    }

    #[test]
    fn test_same_params_produce_same_sql() {
        let a = parse_filters(&params(&[("make", "7"), ("colour", "BLUE"), ("q", "gt")]));
        let b = parse_filters(&params(&[("q", "gt"), ("make", "7"), ("colour", "BLUE")]));
        assert_eq!(build_search_query(&a, 1).sql(), build_search_query(&b, 1).sql());
    }

    #[test]
    fn test_empty_filter_list_still_renders_valid_where() {
        let qb = build_count_query(&[]);
        assert_eq!(qb.sql(), "SELECT COUNT(*) FROM classifieds WHERE TRUE");
    }

    #[test]
    fn test_anchor_only_list_matches_manual_anchor() {
        let filters = vec![ClassifiedFilter::Status(ClassifiedStatus::Live)];
        let qb = build_count_query(&filters);
        assert_eq!(qb.sql(), "SELECT COUNT(*) FROM classifieds WHERE status = $1");
    }

    #[test]
    fn test_escape_like_neutralises_wildcards() {
        assert_eq!(escape_like("50% off_deal"), "50\\% off\\_deal");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_page_offset_math() {
        assert_eq!(page_offset(1), 0);
        assert_eq!(page_offset(2), 9);
        assert_eq!(page_offset(4), 27);
    }

    #[test]
    fn test_page_offset_saturates_instead_of_overflowing() {
        let page = parse_page(&params(&[("page", "1152921504606846977")]));
        assert_eq!(page_offset(page), i64::MAX);
        assert_eq!(page_offset(i64::MAX), i64::MAX);
    }

    #[test]
    fn test_total_pages_math() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(9), 1);
        assert_eq!(total_pages(10), 2);
        assert_eq!(total_pages(27), 3);
    }
}
