use std::collections::BTreeMap;
use std::io::Read;

use chrono::{Datelike, Utc};
use futures::future::try_join_all;
use serde::Deserialize;
use tracing::{info, warn};

use crate::dto::taxonomy_dto::SyncSummaryResponse;
use crate::models::taxonomy::Make;
use crate::repositories::taxonomy_repository::TaxonomyRepository;
use crate::utils::errors::AppError;
use crate::utils::slug::make_logo_url;

/// Tamaño de lote para los upserts de modelos y variantes
pub const SYNC_BATCH_SIZE: usize = 100;

/// Fila cruda del CSV fuente de taxonomía
#[derive(Debug, Deserialize)]
struct TaxonomyRow {
    #[serde(rename = "Make")]
    make: String,
    #[serde(rename = "Model")]
    model: String,
    #[serde(rename = "Model_Variant")]
    variant: String,
    #[serde(rename = "Year_Start")]
    year_start: String,
    #[serde(rename = "Year_End")]
    year_end: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct YearRange {
    start: i32,
    end: i32,
}

/// variante -> rango de años
type VariantMap = BTreeMap<String, YearRange>;
/// marca -> modelo -> variantes
type TaxonomyTree = BTreeMap<String, BTreeMap<String, VariantMap>>;

/// Servicio de sincronización de la jerarquía marca/modelo/variante
pub struct TaxonomySyncService {
    repository: TaxonomyRepository,
}

impl TaxonomySyncService {
    pub fn new(repository: TaxonomyRepository) -> Self {
        Self { repository }
    }

    /// Ejecuta la sincronización completa contra el CSV configurado
    pub async fn sync_from_path(&self, path: &str) -> Result<SyncSummaryResponse, AppError> {
        info!("🔄 Sincronizando taxonomía desde {}", path);

        let mut reader = csv::Reader::from_path(path)?;
        let rows = decode_rows(&mut reader)?;
        let tree = fold_rows(rows);

        self.reconcile(tree).await
    }

    /// Persiste el árbol en tres fases estrictas: marcas, modelos, variantes
    async fn reconcile(&self, tree: TaxonomyTree) -> Result<SyncSummaryResponse, AppError> {
        // 1. Marcas: todas en paralelo, con el logo recalculado en cada corrida
        let make_futures: Vec<_> = tree
            .keys()
            .map(|name| {
                let image = make_logo_url(name);
                async move { self.repository.upsert_make(name, &image).await }
            })
            .collect();
        let makes = try_join_all(make_futures).await?;
        info!("🌱 {} marcas sincronizadas", makes.len());

        // 2. Modelos: lotes secuenciales, miembros de cada lote en paralelo
        let model_jobs = plan_model_jobs(&tree, &makes);

        let mut models_synced = 0;
        for batch in model_jobs.chunks(SYNC_BATCH_SIZE) {
            let results = try_join_all(
                batch
                    .iter()
                    .map(|(make_id, name)| self.repository.upsert_model(name, *make_id)),
            )
            .await?;
            models_synced += results.len();
            info!("🌱 Lote de {} modelos sincronizado", results.len());
        }

        // 3. Variantes: los modelos se releen por marca para conocer sus ids
        let mut variant_jobs: Vec<(i32, String, YearRange)> = Vec::new();
        for make in &makes {
            let models = self.repository.models_by_make(make.id).await?;
            for model in models {
                if let Some(variants) = tree.get(&make.name).and_then(|m| m.get(&model.name)) {
                    for (variant_name, range) in variants {
                        variant_jobs.push((model.id, variant_name.clone(), *range));
                    }
                }
            }
        }

        let mut variants_synced = 0;
        for batch in variant_jobs.chunks(SYNC_BATCH_SIZE) {
            let results = try_join_all(batch.iter().map(|(model_id, name, range)| {
                self.repository
                    .upsert_variant(name, *model_id, range.start, range.end)
            }))
            .await?;
            variants_synced += results.len();
            info!("🌱 Lote de {} variantes sincronizado", results.len());
        }

        info!(
            "📊 Sincronización completada: {} marcas, {} modelos, {} variantes",
            makes.len(),
            models_synced,
            variants_synced
        );

        Ok(SyncSummaryResponse {
            makes: makes.len(),
            models: models_synced,
            variants: variants_synced,
        })
    }
}

/// Un error estructural del CSV aborta la corrida completa
fn decode_rows<R: Read>(reader: &mut csv::Reader<R>) -> Result<Vec<TaxonomyRow>, AppError> {
    let mut rows = Vec::new();
    for record in reader.deserialize::<TaxonomyRow>() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Agrupa las filas en marca -> modelo -> variantes, deduplicando de paso.
/// Una variante vacía cuenta como ausente; un rango de años ilegible descarta
/// la variante pero conserva la marca y el modelo.
fn fold_rows(rows: Vec<TaxonomyRow>) -> TaxonomyTree {
    let current_year = Utc::now().year();
    let mut tree = TaxonomyTree::new();

    for row in rows {
        let make = row.make.trim();
        let model = row.model.trim();
        if make.is_empty() || model.is_empty() {
            warn!("⚠️ Fila de taxonomía sin marca o modelo, se ignora");
            continue;
        }

        let models = tree.entry(make.to_string()).or_default();
        let variants = models.entry(model.to_string()).or_default();

        let variant = row.variant.trim();
        if variant.is_empty() {
            continue;
        }

        match parse_year_range(&row.year_start, &row.year_end, current_year) {
            Some(range) => {
                variants.insert(variant.to_string(), range);
            }
            None => {
                warn!(
                    "⚠️ Rango de años ilegible para {} {} {}, variante descartada",
                    make, model, variant
                );
            }
        }
    }

    tree
}

/// Trabajos de la fase de modelos: cada modelo emparejado con el id ya
/// persistido de su marca, en el orden del árbol
fn plan_model_jobs<'a>(tree: &'a TaxonomyTree, makes: &[Make]) -> Vec<(i32, &'a str)> {
    let mut jobs = Vec::new();
    for make in makes {
        if let Some(models) = tree.get(&make.name) {
            for model_name in models.keys() {
                jobs.push((make.id, model_name.as_str()));
            }
        }
    }
    jobs
}

/// Un Year_End vacío significa que la variante sigue en producción y se
/// resuelve al año calendario en curso en el momento de la ingesta
fn parse_year_range(year_start: &str, year_end: &str, current_year: i32) -> Option<YearRange> {
    let start = year_start.trim().parse::<i32>().ok()?;
    let end = match year_end.trim() {
        "" => current_year,
        raw => raw.parse::<i32>().ok()?,
    };
    Some(YearRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Make,Model,Model_Variant,Year_Start,Year_End
Audi,A4,,2010,2015
Audi,A4,2.0 TDI,2010,2015
BMW,3 Series,320d,2012,
Audi,A3,,2008,2012
";

    fn decode(csv: &str) -> Vec<TaxonomyRow> {
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        decode_rows(&mut reader).unwrap()
    }

    #[test]
    fn test_fold_dedupes_makes_and_models() {
        let tree = fold_rows(decode(SAMPLE_CSV));

        assert_eq!(tree.len(), 2);
        assert_eq!(tree["Audi"].len(), 2);
        assert_eq!(tree["BMW"].len(), 1);
    }

    #[test]
    fn test_empty_variant_counts_as_absent() {
        let tree = fold_rows(decode(SAMPLE_CSV));

        // A4 aparece dos veces, pero solo la fila con variante aporta una
        assert_eq!(tree["Audi"]["A4"].len(), 1);
        assert!(tree["Audi"]["A4"].contains_key("2.0 TDI"));
        assert!(tree["Audi"]["A3"].is_empty());
    }

    #[test]
    fn test_missing_year_end_resolves_to_current_year() {
        let tree = fold_rows(decode(SAMPLE_CSV));
        let range = tree["BMW"]["3 Series"]["320d"];

        assert_eq!(range.start, 2012);
        assert_eq!(range.end, Utc::now().year());
    }

    #[test]
    fn test_unreadable_year_drops_variant_but_keeps_model() {
        let csv = "\
Make,Model,Model_Variant,Year_Start,Year_End
Ford,Focus,ST,unknown,2020
";
        let tree = fold_rows(decode(csv));

        assert!(tree["Ford"]["Focus"].is_empty());
    }

    #[test]
    fn test_rows_without_make_or_model_are_skipped() {
        let csv = "\
Make,Model,Model_Variant,Year_Start,Year_End
,Focus,ST,2015,2020
Ford,,ST,2015,2020
Ford,Focus,ST,2015,2020
";
        let tree = fold_rows(decode(csv));

        assert_eq!(tree.len(), 1);
        assert_eq!(tree["Ford"]["Focus"].len(), 1);
    }

    #[test]
    fn test_repeated_variant_rows_keep_the_last_range() {
        let csv = "\
Make,Model,Model_Variant,Year_Start,Year_End
Ford,Focus,ST,2010,2014
Ford,Focus,ST,2015,2020
";
        let tree = fold_rows(decode(csv));
        let range = tree["Ford"]["Focus"]["ST"];

        assert_eq!(range.start, 2015);
        assert_eq!(range.end, 2020);
    }

    #[test]
    fn test_tree_iteration_is_sorted_by_name() {
        let csv = "\
Make,Model,Model_Variant,Year_Start,Year_End
Volvo,XC90,,2015,2020
Audi,A4,,2010,2015
Mercedes-Benz,C Class,,2014,2021
";
        let tree = fold_rows(decode(csv));
        let makes: Vec<&String> = tree.keys().collect();

        assert_eq!(makes, ["Audi", "Mercedes-Benz", "Volvo"]);
    }

    #[test]
    fn test_structurally_broken_csv_aborts() {
        let csv = "\
Make,Model,Model_Variant,Year_Start,Year_End
Ford,\"Focus,ST,2015
";
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        assert!(decode_rows(&mut reader).is_err());
    }

    fn persisted_make(id: i32, name: &str) -> Make {
        Make {
            id,
            name: name.to_string(),
            image: make_logo_url(name),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_model_plan_pairs_models_with_their_make() {
        let tree = fold_rows(decode(SAMPLE_CSV));
        let makes = vec![persisted_make(10, "Audi"), persisted_make(20, "BMW")];

        let jobs = plan_model_jobs(&tree, &makes);

        assert_eq!(jobs, vec![(10, "A3"), (10, "A4"), (20, "3 Series")]);
    }

    #[test]
    fn test_model_plan_skips_makes_outside_the_tree() {
        let tree = fold_rows(decode(SAMPLE_CSV));
        let makes = vec![persisted_make(10, "Audi"), persisted_make(99, "Tesla")];

        let jobs = plan_model_jobs(&tree, &makes);

        assert!(jobs.iter().all(|(make_id, _)| *make_id == 10));
        assert_eq!(jobs.len(), 2);
    }

    #[test]
    fn test_parse_year_range_requires_numeric_start() {
        assert_eq!(
            parse_year_range("2010", "2015", 2026),
            Some(YearRange { start: 2010, end: 2015 })
        );
        assert_eq!(
            parse_year_range("2010", "", 2026),
            Some(YearRange { start: 2010, end: 2026 })
        );
        assert_eq!(parse_year_range("", "2015", 2026), None);
        assert_eq!(parse_year_range("2010", "abc", 2026), None);
    }
}
