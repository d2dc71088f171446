//! Weaviate command line client.
//!
//! Thin wrapper over `weaviate-rs` for inspecting an instance: metadata,
//! schema, and GraphQL queries. Results are printed to stdout as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use weaviate_core::query::{Field, NearText};
use weaviate_core::Config;
use weaviate_rs::Client;

mod telemetry;

#[derive(Parser, Debug)]
#[command(name = "weaviate-cli")]
#[command(about = "Inspect and query a Weaviate instance")]
struct Args {
    /// JSON config file; defaults to WEAVIATE_* environment variables
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured host, e.g. localhost:8080
    #[arg(long)]
    host: Option<String>,

    /// Override the configured scheme (http or https)
    #[arg(long)]
    scheme: Option<String>,

    /// Directory for rotated log files
    #[arg(long, value_name = "DIR", default_value = "./logs")]
    log_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show instance version and modules
    Meta,
    /// Check whether the instance is ready to serve requests
    Ready,
    /// Print the full schema
    Schema,
    /// Print one class definition
    Class { name: String },
    /// Delete a class and all of its objects
    DeleteClass { name: String },
    /// Run a raw GraphQL query
    Query {
        /// Query text; read from --file when omitted
        query: Option<String>,
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
    /// Run a Get query against a class
    Get {
        class: String,
        /// Comma-separated properties to return
        #[arg(short, long, value_delimiter = ',', required = true)]
        fields: Vec<String>,
        /// Concepts for a nearText search
        #[arg(long, value_delimiter = ',')]
        near_text: Vec<String>,
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Count the objects in a class
    Count { class: String },
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let path = path.to_string_lossy();
            Config::load(&path).with_context(|| format!("loading config from {}", path))?
        }
        None => Config::from_env(),
    };
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(scheme) = &args.scheme {
        config.scheme = scheme.clone();
    }
    config.validate().map_err(anyhow::Error::msg)?;
    Ok(config)
}

async fn run(client: &Client, command: Command) -> Result<Value> {
    let output = match command {
        Command::Meta => serde_json::to_value(client.misc().meta_getter().run().await?)?,
        Command::Ready => json!({ "ready": client.misc().ready_checker().run().await? }),
        Command::Schema => serde_json::to_value(client.schema().getter().run().await?)?,
        Command::Class { name } => {
            let class = client
                .schema()
                .class_getter()
                .with_class_name(&name)
                .run()
                .await?
                .with_context(|| format!("class {} not found", name))?;
            serde_json::to_value(class)?
        }
        Command::DeleteClass { name } => {
            client
                .schema()
                .class_deleter()
                .with_class_name(&name)
                .run()
                .await?;
            json!({ "deleted": name })
        }
        Command::Query { query, file } => {
            let query = match (query, file) {
                (Some(query), _) => query,
                (None, Some(file)) => std::fs::read_to_string(&file)
                    .with_context(|| format!("reading query from {}", file.display()))?,
                (None, None) => anyhow::bail!("either a query or --file is required"),
            };
            let response = client.graphql().raw().with_query(query).run().await?;
            serde_json::to_value(response)?
        }
        Command::Get {
            class,
            fields,
            near_text,
            limit,
        } => {
            let mut get = client
                .graphql()
                .get()
                .with_class_name(&class)
                .with_fields(fields);
            if !near_text.is_empty() {
                get = get.with_near_text(NearText::new(near_text));
            }
            if let Some(limit) = limit {
                get = get.with_limit(limit);
            }
            let response = get.run().await?;
            serde_json::to_value(response)?
        }
        Command::Count { class } => {
            let response = client
                .graphql()
                .aggregate()
                .with_class_name(&class)
                .with_fields(vec![Field::new("meta").fields(["count"])])
                .run()
                .await?;
            let count = response
                .objects("Aggregate", &class)
                .and_then(|groups| groups.first())
                .and_then(|group| group.pointer("/meta/count"))
                .cloned()
                .unwrap_or(Value::Null);
            json!({ "class": class, "count": count })
        }
    };
    Ok(output)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = telemetry::init_telemetry(&args.log_dir, args.verbose)?;

    let config = load_config(&args)?;
    tracing::info!(host = %config.host, scheme = %config.scheme, "Connecting to Weaviate");
    let client = Client::connect(config).await?;

    let output = run(&client, args.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
