//! Modelo de Classified
//!
//! Este módulo contiene el struct Classified, sus enums y la imagen asociada.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Estado de publicación - mapea al ENUM classified_status
#[derive(Debug, Clone, Serialize, Deserialize, Type, PartialEq)]
#[sqlx(type_name = "classified_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassifiedStatus {
    Draft,
    Live,
    Sold,
}

/// Carrocería - mapea al ENUM body_type
#[derive(Debug, Clone, Serialize, Deserialize, Type, PartialEq)]
#[sqlx(type_name = "body_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BodyType {
    Sedan,
    Hatchback,
    Suv,
    Coupe,
    Convertible,
    Wagon,
}

/// Combustible - mapea al ENUM fuel_type
#[derive(Debug, Clone, Serialize, Deserialize, Type, PartialEq)]
#[sqlx(type_name = "fuel_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

/// Transmisión - mapea al ENUM transmission
#[derive(Debug, Clone, Serialize, Deserialize, Type, PartialEq)]
#[sqlx(type_name = "transmission", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Transmission {
    Manual,
    Automatic,
}

/// Color - mapea al ENUM colour
#[derive(Debug, Clone, Serialize, Deserialize, Type, PartialEq)]
#[sqlx(type_name = "colour", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Colour {
    Black,
    Blue,
    Brown,
    Gold,
    Green,
    Grey,
    Orange,
    Pink,
    Purple,
    Red,
    Silver,
    White,
    Yellow,
}

/// Unidad del odómetro - mapea al ENUM odo_unit
#[derive(Debug, Clone, Serialize, Deserialize, Type, PartialEq)]
#[sqlx(type_name = "odo_unit", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OdoUnit {
    Miles,
    Kilometers,
}

/// Divisa del precio - mapea al ENUM currency_code
#[derive(Debug, Clone, Serialize, Deserialize, Type, PartialEq)]
#[sqlx(type_name = "currency_code", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CurrencyCode {
    Gbp,
    Eur,
    Usd,
}

/// Cumplimiento ULEZ - mapea al ENUM ulez_compliance
#[derive(Debug, Clone, Serialize, Deserialize, Type, PartialEq)]
#[sqlx(type_name = "ulez_compliance", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UlezCompliance {
    Exempt,
    NonExempt,
}

/// Classified principal - mapea exactamente a la tabla classifieds
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Classified {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub vrm: String,
    pub year: i32,
    /// Precio en unidades menores (peniques, céntimos)
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
    pub updated_at: DateTime<Utc>,
}

/// Imagen de un classified - mapea a la tabla images
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Image {
    pub id: i32,
    pub classified_id: i32,
    pub src: String,
    pub alt: String,
    pub blurhash: String,
    pub created_at: DateTime<Utc>,
}
