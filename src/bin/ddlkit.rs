//! ddlkit: DDL and migration generator
//!
//! # Usage
//!
//! ```bash
//! # Print CREATE TABLE / CREATE INDEX for every table in a schema file
//! ddlkit create schema.toml --dialect mysql
//!
//! # Diff two versions of a table
//! ddlkit migrate schema.toml --table people --from v1 --to current
//!
//! # Show the type mapping of a dialect
//! ddlkit types --dialect postgres
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use ddlkit::prelude::*;

#[derive(Parser)]
#[command(name = "ddlkit")]
#[command(version)]
#[command(about = "Dialect-aware CREATE TABLE and ALTER TABLE generator", long_about = None)]
#[command(after_help = "EXAMPLES:
    ddlkit create schema.toml --dialect sqlite
    ddlkit create schema.toml --table people --format json
    ddlkit migrate schema.toml --table people --from v1 --to current --out migrations")]
struct Cli {
    /// Config file (defaults to ./ddlkit.toml, then the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// SQL dialect: mysql, postgres or sqlite
    #[arg(short, long, global = true, env = "DDLKIT_DIALECT")]
    dialect: Option<Dialect>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Sql,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print CREATE TABLE and CREATE INDEX statements
    Create {
        /// Schema file (.toml or .json)
        schema: PathBuf,

        /// Only this table
        #[arg(short, long)]
        table: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "sql")]
        format: OutputFormat,

        /// Emit plain CREATE TABLE instead of CREATE TABLE IF NOT EXISTS
        #[arg(long)]
        no_if_not_exists: bool,
    },
    /// Print the ALTER TABLE statement between two versions of a table
    Migrate {
        /// Schema file (.toml or .json)
        schema: PathBuf,

        #[arg(short, long)]
        table: String,

        /// Source version label
        #[arg(long)]
        from: String,

        /// Target version label
        #[arg(long, default_value = "current")]
        to: String,

        /// Which declaration MODIFY renders: from or to
        #[arg(long, default_value_t = ModifyTarget::To)]
        modify_target: ModifyTarget,

        /// Write a timestamped .sql file into this directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show how each column type maps in the selected dialect
    Types,
}

#[derive(Serialize)]
struct TableOutput<'a> {
    table: &'a str,
    statements: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "ddlkit=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref()).context("failed to load configuration")?;

    match &cli.command {
        Commands::Create {
            schema,
            table,
            format,
            no_if_not_exists,
        } => {
            let tables = load_tables(schema, cli, &config)?;
            let if_not_exists = config.if_not_exists && !no_if_not_exists;
            let selected: Vec<&Table> = match table {
                Some(name) => vec![find_table(&tables, name)?],
                None => tables.iter().collect(),
            };
            print_create(&selected, *format, if_not_exists)
        }
        Commands::Migrate {
            schema,
            table,
            from,
            to,
            modify_target,
            out,
        } => {
            let tables = load_tables(schema, cli, &config)?;
            let table = find_table(&tables, table)?;
            let sql = table
                .migrate_with(from, to, *modify_target)
                .with_context(|| format!("cannot migrate '{}' from {} to {}", table.name(), from, to))?;

            match out.as_ref().or(config.out_dir.as_ref()) {
                Some(dir) => {
                    let path = write_migration(dir, table.name(), from, to, &sql)?;
                    println!("{} Wrote migration to {}", "✓".green(), path.display().to_string().cyan());
                }
                None => println!("{};", sql),
            }
            Ok(())
        }
        Commands::Types => {
            let dialect = match &cli.dialect {
                Some(d) => d.clone(),
                None => config.dialect.clone(),
            };
            show_types(&dialect);
            Ok(())
        }
    }
}

/// Dialect precedence: command line, then the schema file, then config.
fn load_tables(path: &Path, cli: &Cli, config: &Config) -> Result<Vec<Table>> {
    let file = SchemaFile::load(path)
        .with_context(|| format!("failed to load schema file {}", path.display()))?;
    let dialect = cli
        .dialect
        .as_ref()
        .or(file.dialect.as_ref())
        .unwrap_or(&config.dialect);
    let tables = Builder::new(dialect).define_all(&file)?;
    Ok(tables)
}

fn find_table<'a>(tables: &'a [Table], name: &str) -> Result<&'a Table> {
    tables
        .iter()
        .find(|t| t.name() == name)
        .with_context(|| format!("table '{}' is not defined", name))
}

fn print_create(tables: &[&Table], format: OutputFormat, if_not_exists: bool) -> Result<()> {
    match format {
        OutputFormat::Sql => {
            for table in tables {
                print!("{}", table.to_sql_with(if_not_exists));
            }
        }
        OutputFormat::Json => {
            let output: Vec<TableOutput> = tables
                .iter()
                .map(|t| TableOutput {
                    table: t.name(),
                    statements: t.statements(if_not_exists),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn write_migration(dir: &Path, table: &str, from: &str, to: &str, sql: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let file_name = format!(
        "{}_{}_{}_to_{}.sql",
        Utc::now().format("%Y%m%d%H%M%S"),
        table,
        from,
        to
    );
    let path = dir.join(file_name);
    std::fs::write(&path, format!("{};\n", sql))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

fn show_types(dialect: &Dialect) {
    let generator = dialect.generator();
    println!("{} {}", "Dialect:".cyan().bold(), generator.name().yellow());
    println!();
    let header = format!("  {:<10} {:<28} {:<28}", "TYPE", "SQL", "AUTO INCREMENT");
    println!("{}", header.dimmed());
    for ty in ColumnType::ALL {
        let auto = match ty {
            ColumnType::SmallInt | ColumnType::Int | ColumnType::BigInt => {
                let keyword = generator.auto_increment();
                let data_type = generator.data_type(ty, true, 0);
                if keyword.is_empty() {
                    data_type
                } else {
                    format!("{} {}", data_type, keyword)
                }
            }
            _ => "-".to_string(),
        };
        println!(
            "  {:<10} {:<28} {:<28}",
            ty.name(),
            generator.data_type(ty, false, 0),
            auto
        );
    }
    println!();
    println!(
        "{}",
        "Text/binary sizes: 0 = default bound, < 65533 = sized, < 16MB = medium, otherwise large"
            .dimmed()
    );
}
