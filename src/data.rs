//! struct definitions for the ROS report document
//!
//! Field keys match the wire schema verbatim, so the serde derives need no
//! renames. Every optional leaf is an `Option`; absence is translated at the
//! wire boundary only (see `serialize`): absent text travels as `""`, absent
//! dates, numbers and choices as `null`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosReport {
    pub encabezado: Encabezado,
    pub institucion_reportante: InstitucionReportante,
    pub persona_implicada: PersonaImplicada,
    pub operacion_sospechosa: OperacionSospechosa,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encabezado {
    #[serde(default, with = "crate::serialize::texto")]
    pub numero_reporte: Option<String>,
    pub fecha_reporte: Option<NaiveDate>,
    pub clase_reporte: Option<ClaseReporte>,
    #[serde(default, with = "crate::serialize::texto")]
    pub numero_reporte_anterior: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitucionReportante {
    #[serde(default, with = "crate::serialize::texto")]
    pub nombre_entidad: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub tipo_entidad: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub codigo_entidad: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub sucursal_presenta_operacion: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub codigo_sucursal: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub nombre_sucursal: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaImplicada {
    #[serde(default, with = "crate::serialize::texto")]
    pub nombre_completo_o_razon_social: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub numero_identificacion: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub direccion_domicilio: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub departamento_domicilio: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub municipio_domicilio: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub telefonos_domicilio: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub camara_comercio: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub direccion_trabajo: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub departamento_trabajo: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub municipio_trabajo: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub telefonos_trabajo: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub correo_electronico: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub actividad_economica: Option<String>,
    #[serde(default, with = "crate::serialize::texto")]
    pub ciiu: Option<String>,
    pub fecha_vinculacion: Option<NaiveDate>,
    pub relacion_persona_entidad: Option<RelacionPersonaEntidad>,
    #[serde(default, with = "crate::serialize::texto")]
    pub relacion_persona_entidad_otra: Option<String>,
    pub vinculado_aun: Option<bool>,
    pub causa_no_vinculacion: Option<CausaNoVinculacion>,
    pub fecha_no_vinculacion: Option<NaiveDate>,
    pub promedio_ingresos_mensuales: Option<f64>,
    pub fecha_promedio_ingresos: Option<NaiveDate>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperacionSospechosa {
    pub valor_total_operacion: Option<f64>,
    pub tipo_operacion: Option<TipoOperacion>,
    pub fecha_desde: Option<NaiveDate>,
    pub fecha_hasta: Option<NaiveDate>,
}

/// Report class, one letter on the wire (`^[ICA]$` per the backend schema).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaseReporte {
    #[serde(rename = "I")]
    Inicial,
    #[serde(rename = "C")]
    Correccion,
    #[serde(rename = "A")]
    Actualizacion,
}

impl ClaseReporte {
    pub fn from_form_value(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "I" => Some(Self::Inicial),
            "C" => Some(Self::Correccion),
            "A" => Some(Self::Actualizacion),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelacionPersonaEntidad {
    Cliente,
    Empleado,
    Accionista,
    Otra,
}

impl RelacionPersonaEntidad {
    pub fn from_form_value(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "cliente" => Some(Self::Cliente),
            "empleado" => Some(Self::Empleado),
            "accionista" => Some(Self::Accionista),
            "otra" => Some(Self::Otra),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CausaNoVinculacion {
    RetiroVoluntario,
    DecisionInstitucion,
    Suspension,
}

impl CausaNoVinculacion {
    pub fn from_form_value(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "retiro_voluntario" => Some(Self::RetiroVoluntario),
            "decision_institucion" => Some(Self::DecisionInstitucion),
            "suspension" => Some(Self::Suspension),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoOperacion {
    Nacional,
    Internacional,
}

impl TipoOperacion {
    pub fn from_form_value(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "nacional" => Some(Self::Nacional),
            "internacional" => Some(Self::Internacional),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> RosReport {
        RosReport {
            encabezado: Encabezado {
                numero_reporte: Some("ROS-2024-001".to_string()),
                fecha_reporte: NaiveDate::from_ymd_opt(2024, 5, 12),
                clase_reporte: Some(ClaseReporte::Inicial),
                numero_reporte_anterior: None,
            },
            institucion_reportante: InstitucionReportante {
                nombre_entidad: Some("Banco Ejemplo".to_string()),
                tipo_entidad: Some("Banco".to_string()),
                codigo_entidad: Some("B-001".to_string()),
                ..Default::default()
            },
            persona_implicada: PersonaImplicada {
                nombre_completo_o_razon_social: Some("Juan Pérez".to_string()),
                numero_identificacion: Some("CC-123456".to_string()),
                correo_electronico: Some("juan@example.com".to_string()),
                relacion_persona_entidad: Some(RelacionPersonaEntidad::Cliente),
                vinculado_aun: Some(true),
                promedio_ingresos_mensuales: Some(1500.50),
                ..Default::default()
            },
            operacion_sospechosa: OperacionSospechosa {
                valor_total_operacion: Some(25_000.0),
                tipo_operacion: Some(TipoOperacion::Nacional),
                fecha_desde: NaiveDate::from_ymd_opt(2024, 4, 1),
                fecha_hasta: NaiveDate::from_ymd_opt(2024, 4, 30),
            },
        }
    }

    #[test]
    fn absent_text_serializes_as_empty_string() {
        let wire = serde_json::to_value(sample()).unwrap();
        assert_eq!(wire["encabezado"]["numero_reporte_anterior"], json!(""));
        assert_eq!(wire["institucion_reportante"]["codigo_sucursal"], json!(""));
    }

    #[test]
    fn absent_structured_fields_serialize_as_null() {
        let wire = serde_json::to_value(sample()).unwrap();
        assert_eq!(wire["persona_implicada"]["fecha_vinculacion"], json!(null));
        assert_eq!(wire["persona_implicada"]["causa_no_vinculacion"], json!(null));
        assert_eq!(
            wire["persona_implicada"]["fecha_promedio_ingresos"],
            json!(null)
        );
    }

    #[test]
    fn present_fields_serialize_with_their_wire_spelling() {
        let wire = serde_json::to_value(sample()).unwrap();
        assert_eq!(wire["encabezado"]["clase_reporte"], json!("I"));
        assert_eq!(wire["encabezado"]["fecha_reporte"], json!("2024-05-12"));
        assert_eq!(
            wire["persona_implicada"]["relacion_persona_entidad"],
            json!("cliente")
        );
        assert_eq!(
            wire["operacion_sospechosa"]["tipo_operacion"],
            json!("nacional")
        );
        assert_eq!(
            wire["persona_implicada"]["promedio_ingresos_mensuales"],
            json!(1500.50)
        );
    }

    #[test]
    fn wire_round_trip_preserves_the_document() {
        let reporte = sample();
        let wire = serde_json::to_string(&reporte).unwrap();
        let parsed: RosReport = serde_json::from_str(&wire).unwrap();
        assert_eq!(parsed, reporte);
    }

    #[test]
    fn choice_values_parse_the_way_the_backend_maps_them() {
        assert_eq!(
            RelacionPersonaEntidad::from_form_value(" Cliente "),
            Some(RelacionPersonaEntidad::Cliente)
        );
        assert_eq!(
            CausaNoVinculacion::from_form_value("retiro_voluntario"),
            Some(CausaNoVinculacion::RetiroVoluntario)
        );
        assert_eq!(ClaseReporte::from_form_value("i"), Some(ClaseReporte::Inicial));
        assert_eq!(TipoOperacion::from_form_value("fronteriza"), None);
    }
}
