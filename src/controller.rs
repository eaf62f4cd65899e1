//! one submission attempt, end to end
//!
//! The controller owns the only code allowed to touch the submit control's
//! visual state. Disabling happens synchronously before the request starts,
//! and restoration rides on a drop guard so every exit path after that point
//! re-enables the control.

use crate::builder::DocumentBuilder;
use crate::error::Error;
use crate::form::FormSurface;
use crate::submit::Submitter;
use crate::validate::validate;

/// Transient visual state of the submit control.
pub trait SubmitControl {
    /// Disable the control and show it as busy ("Guardando...").
    fn set_in_progress(&mut self);
    /// Restore the control to its normal enabled state ("Enviar").
    fn set_ready(&mut self);
}

/// User-visible notifications.
pub trait Notifier {
    /// All validation failures at once, never one at a time.
    fn validation_errors(&mut self, errores: &[String]);
    fn saved(&mut self);
    fn failed(&mut self, detalle: &str);
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Mandatory fields missing; nothing was sent.
    Invalid(Vec<String>),
    /// Accepted by the backend, with whatever body it returned.
    Saved(serde_json::Value),
    Failed(Error),
}

pub struct SubmitController<F, C, N> {
    form: F,
    control: C,
    notifier: N,
    submitter: Submitter,
}

struct InFlight<'a, C: SubmitControl> {
    control: &'a mut C,
}

impl<'a, C: SubmitControl> InFlight<'a, C> {
    fn begin(control: &'a mut C) -> Self {
        control.set_in_progress();
        Self { control }
    }
}

impl<C: SubmitControl> Drop for InFlight<'_, C> {
    fn drop(&mut self) {
        self.control.set_ready();
    }
}

impl<F, C, N> SubmitController<F, C, N>
where
    F: FormSurface,
    C: SubmitControl,
    N: Notifier,
{
    pub fn new(form: F, control: C, notifier: N, submitter: Submitter) -> Self {
        Self {
            form,
            control,
            notifier,
            submitter,
        }
    }

    /// Build, validate, submit, report. A fresh document is constructed on
    /// every call; nothing is carried over between attempts.
    pub async fn handle_submit(&mut self) -> SubmitOutcome {
        let reporte = DocumentBuilder::new(&self.form).build();

        let errores = validate(&reporte);
        if !errores.is_empty() {
            tracing::warn!(faltantes = errores.len(), "reporte incompleto, no se envía");
            self.notifier.validation_errors(&errores);
            return SubmitOutcome::Invalid(errores);
        }

        let _en_curso = InFlight::begin(&mut self.control);
        match self.submitter.submit(&reporte).await {
            Ok(cuerpo) => {
                tracing::info!("reporte guardado");
                self.notifier.saved();
                SubmitOutcome::Saved(cuerpo)
            }
            Err(err) => {
                tracing::error!(error = %err, "el envío falló");
                self.notifier.failed(&err.to_string());
                SubmitOutcome::Failed(err)
            }
        }
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
