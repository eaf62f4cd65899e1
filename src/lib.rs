pub mod builder;
pub mod controller;
pub mod data;
pub mod error;
pub mod form;
mod serialize;
pub mod submit;
pub mod validate;

pub use crate::builder::DocumentBuilder;
pub use crate::controller::{Notifier, SubmitControl, SubmitController, SubmitOutcome};
pub use crate::data::RosReport;
pub use crate::error::Error;
pub use crate::form::{FormSurface, MemoryForm};
pub use crate::submit::{Submitter, DEFAULT_API_URL};
pub use crate::validate::validate;
