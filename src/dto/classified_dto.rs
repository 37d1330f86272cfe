//! DTOs de classifieds para la API

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::classified::{
    BodyType, Classified, ClassifiedStatus, Colour, CurrencyCode, FuelType, Image, OdoUnit,
    Transmission, UlezCompliance,
};
use crate::models::taxonomy::Make;

/// Imagen de un classified para la API
#[derive(Debug, Clone, Serialize)]
pub struct ImageResponse {
    pub id: i32,
    pub src: String,
    pub alt: String,
    pub blurhash: String,
}

impl From<Image> for ImageResponse {
    fn from(image: Image) -> Self {
        Self {
            id: image.id,
            src: image.src,
            alt: image.alt,
            blurhash: image.blurhash,
        }
    }
}

/// Marca embebida en el detalle y en el flujo de reserva
#[derive(Debug, Clone, Serialize)]
pub struct MakeResponse {
    pub id: i32,
    pub name: String,
    pub image: String,
}

impl From<Make> for MakeResponse {
    fn from(make: Make) -> Self {
        Self {
            id: make.id,
            name: make.name,
            image: make.image,
        }
    }
}

/// Response completa de un classified con sus imágenes
#[derive(Debug, Serialize)]
pub struct ClassifiedResponse {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub vrm: String,
    pub year: i32,
    pub price: i32,
    pub odo_reading: i32,
    pub odo_unit: OdoUnit,
    pub doors: i32,
    pub seats: i32,
    pub body_type: BodyType,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub colour: Colour,
    pub currency: CurrencyCode,
    pub ulez_compliance: UlezCompliance,
    pub status: ClassifiedStatus,
    pub description: Option<String>,
    pub views: i32,
    pub make_id: i32,
    pub model_id: Option<i32>,
    pub model_variant_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub images: Vec<ImageResponse>,
}

impl ClassifiedResponse {
    pub fn from_parts(classified: Classified, images: Vec<Image>) -> Self {
        Self {
            id: classified.id,
            slug: classified.slug,
            title: classified.title,
            vrm: classified.vrm,
            year: classified.year,
            price: classified.price,
            odo_reading: classified.odo_reading,
            odo_unit: classified.odo_unit,
            doors: classified.doors,
            seats: classified.seats,
            body_type: classified.body_type,
            fuel_type: classified.fuel_type,
            transmission: classified.transmission,
            colour: classified.colour,
            currency: classified.currency,
            ulez_compliance: classified.ulez_compliance,
            status: classified.status,
            description: classified.description,
            views: classified.views,
            make_id: classified.make_id,
            model_id: classified.model_id,
            model_variant_id: classified.model_variant_id,
            created_at: classified.created_at,
            images: images.into_iter().map(ImageResponse::from).collect(),
        }
    }
}

/// Detalle de un classified: las tarjetas llevan solo la primera imagen,
/// el detalle lleva todas más la marca
#[derive(Debug, Serialize)]
pub struct ClassifiedDetailResponse {
    #[serde(flatten)]
    pub classified: ClassifiedResponse,
    pub make: MakeResponse,
}

impl ClassifiedDetailResponse {
    pub fn from_parts(classified: Classified, make: Make, images: Vec<Image>) -> Self {
        Self {
            classified: ClassifiedResponse::from_parts(classified, images),
            make: MakeResponse::from(make),
        }
    }
}

/// Response de listado paginado
///
/// `favourites` trae los ids marcados por el visitante del header
/// X-Source-Id, para pintar los corazones sin otra request.
#[derive(Debug, Serialize)]
pub struct ClassifiedListResponse {
    pub classifieds: Vec<ClassifiedResponse>,
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
    pub favourites: Vec<i32>,
}

/// Response del conteo de resultados
#[derive(Debug, Serialize)]
pub struct ClassifiedCountResponse {
    pub count: i64,
}

/// Valores mínimos y máximos del inventario para los filtros de rango
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct AggregatesResponse {
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub min_price: Option<i32>,
    pub max_price: Option<i32>,
    pub min_reading: Option<i32>,
    pub max_reading: Option<i32>,
}

/// Resumen de un classified dentro del flujo de reserva; la marca viaja
/// incluida porque el paso de bienvenida muestra su logo
#[derive(Debug, Serialize)]
pub struct ClassifiedSummaryResponse {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub year: i32,
    pub price: i32,
    pub currency: CurrencyCode,
    pub make: MakeResponse,
}

impl ClassifiedSummaryResponse {
    pub fn from_parts(classified: Classified, make: Make) -> Self {
        Self {
            slug: classified.slug,
            title: classified.title,
            description: classified.description,
            year: classified.year,
            price: classified.price,
            currency: classified.currency,
            make: MakeResponse::from(make),
        }
    }
}

/// Response de un paso del formulario multi-step de reserva
#[derive(Debug, Serialize)]
pub struct ReserveStepResponse {
    pub step: u8,
    pub classified: ClassifiedSummaryResponse,
}
