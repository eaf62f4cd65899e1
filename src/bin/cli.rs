use snafu::{ResultExt, Snafu};
use std::path::PathBuf;
use structopt::StructOpt;

use ros_report::{validate, DocumentBuilder, MemoryForm, Submitter, DEFAULT_API_URL};

/// Sends one ROS report built from a JSON snapshot of the form
/// (`{"fields": {...}, "choices": {...}}`).
#[derive(Debug, StructOpt)]
#[structopt(name = "ros-report")]
struct Opt {
    /// Path to the form snapshot
    #[structopt(parse(from_os_str))]
    form: PathBuf,

    /// Target endpoint (defaults to the local ROS API)
    #[structopt(long)]
    endpoint: Option<String>,

    /// Validate only, do not send
    #[structopt(long)]
    check: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    match run(Opt::from_args()).await {
        Ok(_) => (),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

async fn run(opt: Opt) -> Result<(), Error> {
    let raw = std::fs::read_to_string(&opt.form).context(ReadFormSnafu { path: opt.form.clone() })?;
    let form: MemoryForm = serde_json::from_str(&raw).context(ParseFormSnafu)?;

    let reporte = DocumentBuilder::new(&form).build();
    let errores = validate(&reporte);
    if !errores.is_empty() {
        for error in &errores {
            eprintln!("- {}", error);
        }
        return InvalidSnafu {
            count: errores.len(),
        }
        .fail();
    }

    if opt.check {
        println!("Reporte válido");
        return Ok(());
    }

    let endpoint = opt.endpoint.unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let respuesta = Submitter::new(endpoint)
        .submit(&reporte)
        .await
        .context(SubmitSnafu)?;
    println!("Reporte guardado correctamente");
    println!("{}", serde_json::to_string_pretty(&respuesta).context(PrintSnafu)?);

    Ok(())
}

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("No se pudo leer {}: {}", path.display(), source))]
    ReadForm {
        source: std::io::Error,
        path: PathBuf,
    },
    #[snafu(display("Captura de formulario inválida: {}", source))]
    ParseForm { source: serde_json::Error },
    #[snafu(display("El reporte tiene {} campos obligatorios sin diligenciar", count))]
    Invalid { count: usize },
    #[snafu(display("Error al guardar el reporte: {}", source))]
    Submit { source: ros_report::Error },
    #[snafu(display("{}", source))]
    Print { source: serde_json::Error },
}
