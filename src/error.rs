use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The request never reached the endpoint.
    #[snafu(display("no se pudo contactar el servicio: {source}"))]
    Transport { source: reqwest::Error },

    /// The endpoint answered with a non-success status. `body` carries the
    /// raw response text so the user sees what the backend said.
    #[snafu(display("Error {}: {}", status.as_u16(), body))]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}
