use serde::{Deserialize, Serialize};

/// Event-hall record edited from the admin panel. Like `Book`, saves send
/// the whole record back; `id` is backend-assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub capacidad: u32,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default = "default_disponible")]
    pub disponible: bool,
}

fn default_disponible() -> bool {
    true
}

impl Default for Salon {
    fn default() -> Self {
        Salon {
            id: None,
            nombre: String::new(),
            capacidad: 0,
            descripcion: String::new(),
            disponible: true,
        }
    }
}
