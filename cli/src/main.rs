//! Graphseed CLI — generate synthetic datasets, load them, query them
//!
//! `generate` runs offline; `load`, `query`, `status`, and `ping` use the
//! graphseed-sdk RemoteClient against a running graph database server.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use graphseed::export::{read_occurrences, read_subjects, write_artifacts, OCCURRENCES_FILE, SUBJECTS_FILE};
use graphseed::{DatasetProfile, Generator};
use graphseed_sdk::{
    ConnectionConfig, DuplicatePolicy, GraphClient, ImportClient, Params, RemoteClient,
};

#[derive(Parser)]
#[command(name = "graphseed", version, about = "Synthetic graph dataset generator and loader")]
struct Cli {
    /// Output format for query results
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Clone, clap::ValueEnum)]
enum Dataset {
    /// Cricket match statistics (players, teams, venues)
    Cricket,
    /// FDA adverse-event reports (cases, drugs, countries)
    AdverseEvents,
}

#[derive(Clone, clap::ValueEnum)]
enum OnDuplicate {
    /// CREATE every row; reruns produce duplicate nodes
    Create,
    /// MERGE on the record identifier; reruns update in place
    Merge,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic dataset and write the two JSON artifacts
    Generate {
        /// Which built-in dataset profile to use
        #[arg(long, value_enum, default_value = "cricket")]
        dataset: Dataset,

        /// Number of subject records (players, cases)
        #[arg(long, default_value_t = 50)]
        subjects: usize,

        /// Number of occurrence records (matches, reports)
        #[arg(long, default_value_t = 20)]
        occurrences: usize,

        /// RNG seed; the same seed reproduces the same dataset
        #[arg(long)]
        seed: Option<u64>,

        /// Output directory for subjects.json and occurrences.json
        #[arg(long, default_value = "data")]
        out: PathBuf,
    },
    /// Bulk-import previously generated artifacts
    Load {
        /// Directory holding subjects.json and occurrences.json
        #[arg(long, default_value = "data")]
        dir: PathBuf,

        /// Connection config YAML {address, username, password, connect_timeout_secs?}
        #[arg(long)]
        config: PathBuf,

        /// What to do with records that already exist
        #[arg(long, value_enum, default_value = "create")]
        on_duplicate: OnDuplicate,

        /// Node label for subject records
        #[arg(long, default_value = "Subject")]
        subject_label: String,

        /// Node label for occurrence records
        #[arg(long, default_value = "Occurrence")]
        occurrence_label: String,
    },
    /// Execute one parameterized query
    Query {
        /// The query string, with named placeholders like $role
        cypher: String,

        /// Connection config YAML
        #[arg(long)]
        config: PathBuf,

        /// Named parameter as key=value; the value parses as JSON when
        /// possible and falls back to a plain string
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, serde_json::Value)>,

        /// Use read-only mode
        #[arg(long)]
        readonly: bool,
    },
    /// Get server status
    Status {
        /// Connection config YAML
        #[arg(long)]
        config: PathBuf,
    },
    /// Ping the server
    Ping {
        /// Connection config YAML
        #[arg(long)]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            dataset,
            subjects,
            occurrences,
            seed,
            out,
        } => run_generate(dataset, subjects, occurrences, seed, out),
        Commands::Load {
            dir,
            config,
            on_duplicate,
            subject_label,
            occurrence_label,
        } => run_load(dir, config, on_duplicate, subject_label, occurrence_label).await,
        Commands::Query {
            cypher,
            config,
            params,
            readonly,
        } => run_query(config, &cypher, params, readonly, &cli.format).await,
        Commands::Status { config } => run_status(config, &cli.format).await,
        Commands::Ping { config } => run_ping(config).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(
    dataset: Dataset,
    subjects: usize,
    occurrences: usize,
    seed: Option<u64>,
    out: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let profile = match dataset {
        Dataset::Cricket => DatasetProfile::cricket(),
        Dataset::AdverseEvents => DatasetProfile::adverse_events(),
    };
    let seed = seed.unwrap_or_else(entropy_seed);

    let mut generator = Generator::new(profile, seed)?;
    let data = generator.generate(subjects, occurrences);
    let paths = write_artifacts(&data, &out)?;

    println!("Generated {} subjects -> {}", data.subjects.len(), paths.subjects.display());
    println!(
        "Generated {} occurrences -> {}",
        data.occurrences.len(),
        paths.occurrences.display()
    );
    println!("Seed: {}", seed);
    Ok(())
}

async fn run_load(
    dir: PathBuf,
    config: PathBuf,
    on_duplicate: OnDuplicate,
    subject_label: String,
    occurrence_label: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let subjects = read_subjects(&dir.join(SUBJECTS_FILE))?;
    let occurrences = read_occurrences(&dir.join(OCCURRENCES_FILE))?;
    let policy = match on_duplicate {
        OnDuplicate::Create => DuplicatePolicy::Create,
        OnDuplicate::Merge => DuplicatePolicy::Merge,
    };

    let client = connect(&config).await?;
    let subject_count = client
        .import_subjects(&subject_label, &subjects, policy)
        .await?;
    let occurrence_count = client
        .import_occurrences(&occurrence_label, &occurrences, policy)
        .await?;
    client.close();

    println!("Imported {} subject(s), {} occurrence(s)", subject_count, occurrence_count);
    Ok(())
}

async fn run_query(
    config: PathBuf,
    cypher: &str,
    params: Vec<(String, serde_json::Value)>,
    readonly: bool,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut param_map = Params::new();
    for (key, value) in params {
        param_map.insert(key, value);
    }

    let client = connect(&config).await?;
    let result = if readonly {
        client.query_readonly(cypher, &param_map).await
    } else {
        client.query(cypher, &param_map).await
    };
    client.close();
    let result = result?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Csv => {
            if !result.columns.is_empty() {
                println!("{}", result.columns.join(","));
                for row in &result.records {
                    let cells: Vec<String> = row.iter().map(format_csv_value).collect();
                    println!("{}", cells.join(","));
                }
            }
        }
        OutputFormat::Table => {
            if result.columns.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(&result.columns);

            for row in &result.records {
                let cells: Vec<String> = row.iter().map(format_table_value).collect();
                table.add_row(cells);
            }

            println!("{}", table);
            println!("{} row(s)", result.records.len());
        }
    }

    Ok(())
}

async fn run_status(
    config: PathBuf,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = connect(&config).await?;
    let status = client.status().await;
    client.close();
    let status = status?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        _ => {
            println!("Status:  {}", status.status);
            println!("Version: {}", status.version);
        }
    }

    Ok(())
}

async fn run_ping(config: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let client = connect(&config).await?;
    let result = client.ping().await;
    client.close();
    println!("{}", result?);
    Ok(())
}

async fn connect(config: &std::path::Path) -> Result<RemoteClient, Box<dyn std::error::Error>> {
    let config = ConnectionConfig::from_yaml_file(config)?;
    Ok(RemoteClient::connect(&config).await?)
}

fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn parse_param(s: &str) -> Result<(String, serde_json::Value), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {:?}", s))?;
    if key.is_empty() {
        return Err(format!("empty parameter name in {:?}", s));
    }
    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

fn format_table_value(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => serde_json::to_string(v).unwrap_or_default(),
    }
}

fn format_csv_value(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::Null => "".to_string(),
        serde_json::Value::String(s) => {
            if s.contains(',') || s.contains('"') || s.contains('\n') {
                format!("\"{}\"", s.replace('"', "\"\""))
            } else {
                s.clone()
            }
        }
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => {
            let json = serde_json::to_string(v).unwrap_or_default();
            format!("\"{}\"", json.replace('"', "\"\""))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_values_parse_as_json_with_string_fallback() {
        assert_eq!(parse_param("n=3").unwrap().1, serde_json::json!(3));
        assert_eq!(parse_param("flag=true").unwrap().1, serde_json::json!(true));
        assert_eq!(
            parse_param("role=Bowler").unwrap().1,
            serde_json::json!("Bowler")
        );
        assert_eq!(
            parse_param("teams=[\"A\",\"B\"]").unwrap().1,
            serde_json::json!(["A", "B"])
        );
        assert!(parse_param("no-equals").is_err());
        assert!(parse_param("=value").is_err());
    }

    #[test]
    fn csv_values_quote_embedded_commas() {
        assert_eq!(format_csv_value(&serde_json::json!("a,b")), "\"a,b\"");
        assert_eq!(format_csv_value(&serde_json::json!("plain")), "plain");
        assert_eq!(format_csv_value(&serde_json::Value::Null), "");
    }
}
