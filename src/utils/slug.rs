//! Utilidades de slugs y URLs derivadas
//!
//! Este módulo deriva la URL del logo de una marca a partir de su nombre.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Derivar la URL del logo de una marca desde su nombre.
///
/// Los espacios (incluyendo secuencias) se colapsan a un guión y el
/// resultado se pasa a minúsculas: "Land Rover" -> "land-rover".
pub fn make_logo_url(name: &str) -> String {
    let slug = WHITESPACE.replace_all(name.trim(), "-").to_lowercase();
    format!(
        "https://vl.imgix.net/img/{}-logo.png?auto=format,compress",
        slug
    )
}
