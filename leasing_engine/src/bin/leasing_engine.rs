use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about = "Leasing back-office CLI")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Apply pending database migrations.
    Migrate {
        #[arg(long, value_name = "URL")]
        database_url: Option<String>,
    },
    Templates(TemplatesCmd),
}

#[derive(Args)]
struct TemplatesCmd {
    #[command(subcommand)]
    sub: TemplatesSub,
}

#[derive(Subcommand)]
enum TemplatesSub {
    /// Sync the checklist template catalogue from a TOML file.
    Sync {
        #[arg(long, value_name = "FILE")]
        file: String,
        #[arg(long)]
        dry_run: bool,
        #[arg(long)]
        prune: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Migrate { database_url } => {
            let url = match database_url {
                Some(url) => url,
                None => std::env::var("DATABASE_URL")?,
            };
            leasing_engine::db::migrate::run_all(&url)?;
        }

        Cmd::Templates(TemplatesCmd {
            sub:
                TemplatesSub::Sync {
                    file,
                    dry_run,
                    prune,
                },
        }) => {
            // 1) Read + normalize TOML
            let cat = leasing_engine::templates::config::load_catalog_path(&file)?;

            // 2) Open DB (migrations are expected to have run already)
            let db_url = std::env::var("DATABASE_URL")?;
            let mut conn = leasing_engine::db::connection::connect_sqlite(&db_url)?;

            // 3) Sync
            let opt = leasing_engine::templates::sync::SyncOptions { dry_run, prune };
            let diff = leasing_engine::templates::sync::sync_checklist(&mut conn, cat, opt)?;
            if dry_run {
                println!("{diff:#?}");
            }
        }
    }

    Ok(())
}
