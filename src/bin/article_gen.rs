use std::process::ExitCode;

use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use strapi_article_gen::app::App;
use strapi_article_gen::error::GeneratorError;
use strapi_article_gen::store::OutputStore;
use strapi_article_gen::strapi::StrapiHttpClient;

#[derive(Parser)]
#[command(name = "article-gen")]
#[command(about = "Pulls articles from the Strapi CMS and regenerates the MDX content directory")]
#[command(version, author)]
struct Cli {}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(error) = report.downcast_ref::<GeneratorError>() {
            return ExitCode::from(map_exit_code(error));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &GeneratorError) -> u8 {
    match error {
        GeneratorError::StrapiHttp(_) | GeneratorError::StrapiStatus { .. } => 3,
        _ => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let Cli {} = Cli::parse();

    let store = OutputStore::new()?;
    let client = StrapiHttpClient::new()?;
    let summary = App::new(store, client).generate()?;

    let json = serde_json::to_string_pretty(&summary).into_diagnostic()?;
    println!("{json}");
    Ok(())
}
