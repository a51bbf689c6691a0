mod adapters;
mod application;
mod cli;
mod cyclonedx;
mod enrichment;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter, StdoutPresenter};
use adapters::outbound::network::{CachingPackageRepository, EcosystemsClient};
use application::dto::EnrichRequest;
use application::use_cases::EnrichSbomUseCase;
use cli::Args;
use ports::outbound::{DocumentSource, OutputPresenter};
use shared::error::ExitCode;
use shared::Result;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Create adapters (Dependency Injection)
    let document_reader = FileSystemReader::new();
    let package_repository = CachingPackageRepository::new(EcosystemsClient::new()?);
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = EnrichSbomUseCase::new(document_reader, package_repository, progress_reporter);

    // Create request
    let source = DocumentSource::from_arg(&args.sbom);
    let request = EnrichRequest::new(source, args.concurrency);

    // Execute use case
    let response = use_case.execute(request).await?;

    // Encode the enriched document
    let output = cyclonedx::encode(&response.bom)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&output)?;

    Ok(())
}
