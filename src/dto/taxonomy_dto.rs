//! DTOs de taxonomía para la API

use serde::Serialize;

/// Par label/value para selects del frontend
#[derive(Debug, Clone, Serialize)]
pub struct LabelValue {
    pub label: String,
    pub value: String,
}

impl LabelValue {
    pub fn new(label: &str, id: i32) -> Self {
        Self {
            label: label.to_string(),
            value: id.to_string(),
        }
    }
}

/// Response de GET /api/taxonomy
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyResponse {
    pub makes: Vec<LabelValue>,
    pub models: Vec<LabelValue>,
    pub model_variants: Vec<LabelValue>,
}

/// Resumen de una ejecución de reconciliación de taxonomía
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SyncSummaryResponse {
    pub makes: usize,
    pub models: usize,
    pub variants: usize,
}
