use clap::{Parser, Subcommand};
use importer::{DatasetImporter, ImportAborted, ImportReport, StorageGateway, SwimmerImport, preview};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "swim-import")]
#[command(about = "Swimmer dataset importer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a single swimmer dataset
    File {
        file: PathBuf,

        #[arg(long)]
        validate_only: bool,
    },
    /// Import every dataset in a directory
    Bulk {
        #[arg(long, default_value = "./imports")]
        directory: PathBuf,

        #[arg(long)]
        validate_only: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("import={},importer={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::File {
            file,
            validate_only,
        } => {
            let pool = connect(validate_only, cli.database_url.as_deref()).await?;
            let report = process_file(&file, pool.as_ref()).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Bulk {
            directory,
            validate_only,
        } => {
            let pool = connect(validate_only, cli.database_url.as_deref()).await?;
            handle_bulk_import(&directory, pool.as_ref()).await?;
        }
    }

    Ok(())
}

/// No pool is opened for validate-only runs.
async fn connect(
    validate_only: bool,
    database_url: Option<&str>,
) -> Result<Option<PgPool>, Box<dyn std::error::Error>> {
    if validate_only {
        return Ok(None);
    }

    let database_url = database_url.ok_or("DATABASE_URL is required unless --validate-only is set")?;

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(Some(pool))
}

async fn handle_bulk_import(
    directory: &Path,
    pool: Option<&PgPool>,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Scanning directory for swimmer datasets: {}", directory.display());

    let mut json_files = Vec::new();
    let mut entries = tokio::fs::read_dir(directory).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            json_files.push(path);
        }
    }

    if json_files.is_empty() {
        tracing::warn!("No JSON files found in {}", directory.display());
        return Ok(());
    }

    json_files.sort();
    tracing::info!("Found {} dataset(s)", json_files.len());

    let mut success_count = 0;
    let mut error_count = 0;

    for (idx, file_path) in json_files.iter().enumerate() {
        tracing::info!("[{}/{}] Processing: {}", idx + 1, json_files.len(), file_path.display());

        match process_file(file_path, pool).await {
            Ok(report) if report.success => {
                success_count += 1;
                tracing::info!(
                    "  ✓ {} meet(s), {} time(s), {} skipped",
                    report.meets_created,
                    report.times_created,
                    report.skipped_times
                );
                for message in &report.errors {
                    tracing::warn!("  {}", message);
                }
            }
            Ok(report) => {
                error_count += 1;
                for message in &report.errors {
                    tracing::error!("  ✗ {}", message);
                }
            }
            Err(e) => {
                error_count += 1;
                tracing::error!("  ✗ Error: {}", e);
            }
        }
    }

    tracing::info!("Summary: {} succeeded, {} failed", success_count, error_count);

    if error_count > 0 {
        return Err(format!("{} file(s) failed to import", error_count).into());
    }

    Ok(())
}

async fn process_file(file_path: &Path, pool: Option<&PgPool>) -> importer::Result<ImportReport> {
    let json_content = tokio::fs::read_to_string(file_path).await?;
    let data: SwimmerImport = serde_json::from_str(&json_content)?;

    tracing::info!(
        "Loaded dataset for {} ({} meet(s))",
        data.swimmer.name,
        data.meets.len()
    );

    let outcome = match pool {
        Some(pool) => {
            DatasetImporter::new(StorageGateway::new(pool))
                .import(&data)
                .await
        }
        None => preview(&data),
    };

    match outcome {
        Ok(report) => Ok(report),
        Err(ImportAborted { report, source }) => {
            eprintln!("{}", serde_json::to_string_pretty(&report)?);
            Err(source)
        }
    }
}
