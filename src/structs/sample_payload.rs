use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::config::constants::{PAYLOAD_USER_AGENT, TIMESTAMP_FORMAT};

/// A fictitious contact-form submission (Spanish site variant).
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePayload {
    pub localidad: String,
    pub departamento: String,
    pub provincia: String,
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub email: String,
    #[serde(rename = "como-se-entero")]
    pub como_se_entero: String,
    #[serde(rename = "ubicacion-nodo")]
    pub ubicacion_nodo: String,
    #[serde(rename = "acceso-internet")]
    pub acceso_internet: String,
    #[serde(rename = "luz-electrica")]
    pub luz_electrica: String,
    #[serde(rename = "red-municipios")]
    pub red_municipios: String,
    pub timestamp: String,
    pub language: String,
    pub source: String,
    #[serde(rename = "userAgent")]
    pub user_agent: String,
}

impl SamplePayload {
    pub fn build() -> Self {
        Self::build_at(Local::now().naive_local())
    }

    pub fn build_at(timestamp: NaiveDateTime) -> Self {
        Self {
            localidad: "Córdoba".to_string(),
            departamento: "Capital".to_string(),
            provincia: "Córdoba".to_string(),
            nombre: "Test".to_string(),
            apellido: "User".to_string(),
            telefono: "+54 351 123-4567".to_string(),
            email: "test@example.com".to_string(),
            como_se_entero: "web".to_string(),
            ubicacion_nodo: "Torre de agua municipal".to_string(),
            acceso_internet: "on".to_string(),
            luz_electrica: "on".to_string(),
            red_municipios: "on".to_string(),
            timestamp: timestamp.format(TIMESTAMP_FORMAT).to_string(),
            language: "es".to_string(),
            source: "sai-website-test".to_string(),
            user_agent: PAYLOAD_USER_AGENT.to_string(),
        }
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
