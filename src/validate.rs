//! required-field pass over a built document
//!
//! Only the nine fields below block submission; everything else is optional.
//! The messages and their order are fixed: header, then institution, then
//! implicated person.

use crate::data::RosReport;

pub fn validate(reporte: &RosReport) -> Vec<String> {
    let mut errores = Vec::new();

    let enc = &reporte.encabezado;
    if enc.numero_reporte.is_none() {
        errores.push("Número de reporte es obligatorio".to_string());
    }
    if enc.fecha_reporte.is_none() {
        errores.push("Fecha de reporte es obligatoria".to_string());
    }
    if enc.clase_reporte.is_none() {
        errores.push("Clase de reporte es obligatoria".to_string());
    }

    let inst = &reporte.institucion_reportante;
    if inst.nombre_entidad.is_none() {
        errores.push("Nombre de la entidad es obligatorio".to_string());
    }
    if inst.tipo_entidad.is_none() {
        errores.push("Tipo de entidad es obligatorio".to_string());
    }
    if inst.codigo_entidad.is_none() {
        errores.push("Código de entidad es obligatorio".to_string());
    }

    let persona = &reporte.persona_implicada;
    if persona.nombre_completo_o_razon_social.is_none() {
        errores.push("Nombre completo o razón social es obligatorio".to_string());
    }
    if persona.numero_identificacion.is_none() {
        errores.push("Número de identificación es obligatorio".to_string());
    }
    if persona.correo_electronico.is_none() {
        errores.push("Correo electronico es obligatorio".to_string());
    }

    errores
}
