//! DTOs de favoritos
//!
//! El set de favoritos vive en Redis bajo la clave favourites:<source_id>
//! con el shape {"ids": [..]}, que es también el shape de la respuesta.

use serde::{Deserialize, Serialize};

/// Set de favoritos de un visitante
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Favourites {
    pub ids: Vec<i32>,
}

/// Request para alternar un favorito
#[derive(Debug, Deserialize)]
pub struct ToggleFavouriteRequest {
    pub id: i32,
}
