use clap::Parser;

/// Enrich CycloneDX SBOMs with metadata from ecosyste.ms
#[derive(Parser, Debug)]
#[command(name = "sbom-enrich")]
#[command(version)]
#[command(about = "Enrich CycloneDX SBOMs with package metadata from ecosyste.ms", long_about = None)]
pub struct Args {
    /// Path to the CycloneDX JSON document, or '-' to read from stdin
    #[arg(value_name = "SBOM")]
    pub sbom: String,

    /// Maximum number of registry lookups in flight at once
    #[arg(short, long, default_value_t = 20, value_name = "N")]
    pub concurrency: usize,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
