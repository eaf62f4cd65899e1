//! form-to-document normalization
//!
//! `build` is total: whatever state the form is in, it yields a fully shaped
//! `RosReport`. Missing, blank and unparsable inputs all normalize to absent;
//! a bad numeric entry is never collapsed into `0`, since zero is a
//! legitimate amount.

use chrono::NaiveDate;

use crate::data::{
    CausaNoVinculacion, ClaseReporte, Encabezado, InstitucionReportante, OperacionSospechosa,
    PersonaImplicada, RelacionPersonaEntidad, RosReport, TipoOperacion,
};
use crate::form::FormSurface;

pub struct DocumentBuilder<'a, F: FormSurface> {
    form: &'a F,
}

impl<'a, F: FormSurface> DocumentBuilder<'a, F> {
    pub fn new(form: &'a F) -> Self {
        Self { form }
    }

    pub fn build(&self) -> RosReport {
        let reporte = RosReport {
            encabezado: self.encabezado(),
            institucion_reportante: self.institucion(),
            persona_implicada: self.persona(),
            operacion_sospechosa: self.operacion(),
        };
        tracing::debug!(?reporte, "documento construido");
        reporte
    }

    fn encabezado(&self) -> Encabezado {
        Encabezado {
            numero_reporte: self.texto("numero_reporte"),
            fecha_reporte: self.fecha("fecha_reporte"),
            clase_reporte: self.eleccion("clase_reporte", ClaseReporte::from_form_value),
            numero_reporte_anterior: self.texto("numero_reporte_anterior"),
        }
    }

    fn institucion(&self) -> InstitucionReportante {
        InstitucionReportante {
            nombre_entidad: self.texto("nombre_entidad"),
            tipo_entidad: self.texto("tipo_entidad"),
            codigo_entidad: self.texto("codigo_entidad"),
            sucursal_presenta_operacion: self.texto("sucursal_presenta_operacion"),
            codigo_sucursal: self.texto("codigo_sucursal"),
            nombre_sucursal: self.texto("nombre_sucursal"),
        }
    }

    fn persona(&self) -> PersonaImplicada {
        PersonaImplicada {
            nombre_completo_o_razon_social: self.texto("nombre_completo_o_razon_social"),
            numero_identificacion: self.texto("numero_identificacion"),
            direccion_domicilio: self.texto("direccion_domicilio"),
            departamento_domicilio: self.texto("departamento_domicilio"),
            municipio_domicilio: self.texto("municipio_domicilio"),
            telefonos_domicilio: self.texto("telefonos_domicilio"),
            camara_comercio: self.texto("camara_comercio"),
            direccion_trabajo: self.texto("direccion_trabajo"),
            departamento_trabajo: self.texto("departamento_trabajo"),
            municipio_trabajo: self.texto("municipio_trabajo"),
            telefonos_trabajo: self.texto("telefonos_trabajo"),
            correo_electronico: self.texto("correo_electronico"),
            actividad_economica: self.texto("actividad_economica"),
            ciiu: self.texto("ciiu"),
            fecha_vinculacion: self.fecha("fecha_vinculacion"),
            relacion_persona_entidad: self
                .eleccion("relacion_persona_entidad", RelacionPersonaEntidad::from_form_value),
            // only rendered when the relation choice is "otra"; an absent
            // control reads the same as an empty one
            relacion_persona_entidad_otra: self.texto("relacion_persona_entidad_otra"),
            vinculado_aun: self.si_no("vinculado_aun"),
            causa_no_vinculacion: self
                .eleccion("causa_no_vinculacion", CausaNoVinculacion::from_form_value),
            fecha_no_vinculacion: self.fecha("fecha_no_vinculacion"),
            promedio_ingresos_mensuales: self.numero("promedio_ingresos_mensuales"),
            fecha_promedio_ingresos: self.fecha("fecha_promedio_ingresos"),
        }
    }

    fn operacion(&self) -> OperacionSospechosa {
        OperacionSospechosa {
            valor_total_operacion: self.numero("valor_total_operacion"),
            tipo_operacion: self.eleccion("tipo_operacion", TipoOperacion::from_form_value),
            // the controls carry an `_operacion` suffix the wire keys drop
            fecha_desde: self.fecha("fecha_desde_operacion"),
            fecha_hasta: self.fecha("fecha_hasta_operacion"),
        }
    }

    fn texto(&self, key: &str) -> Option<String> {
        self.form
            .read(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn numero(&self, key: &str) -> Option<f64> {
        self.texto(key)?.parse::<f64>().ok().filter(|n| n.is_finite())
    }

    fn fecha(&self, key: &str) -> Option<NaiveDate> {
        let v = self.texto(key)?;
        NaiveDate::parse_from_str(&v, "%Y-%m-%d").ok()
    }

    fn eleccion<T>(&self, group: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        self.form.read_choice(group).as_deref().and_then(parse)
    }

    fn si_no(&self, group: &str) -> Option<bool> {
        let v = self.form.read_choice(group)?;
        match v.trim().to_ascii_lowercase().as_str() {
            "si" | "sí" | "true" | "1" => Some(true),
            "no" | "false" | "0" => Some(false),
            _ => None,
        }
    }
}
