/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! milvus-cli - command line access to a Milvus server

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use milvus_client::codec::key_value::from_pairs;
use milvus_client::proto::schema::DataType;
use milvus_client::{
    BareReq, ClientConfig, CollectionNameReq, FlushReq, MilvusClient, QueryReq, SearchSimpleReq, ShowCollectionsReq,
    Status, VectorData,
};

#[derive(Parser)]
#[command(name = "milvus-cli")]
#[command(about = "Milvus vector database command line interface")]
struct Cli {
    /// TOML client configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server address, overrides the configuration file
    #[arg(short, long)]
    address: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the server version
    Version,
    /// Check server health
    Health,
    /// List all collections
    ListCollections,
    /// Describe a collection schema
    Describe { name: String },
    /// Print collection statistics
    Stats { name: String },
    /// Query entities with a filter expression
    Query {
        name: String,
        #[arg(short, long)]
        expr: String,
        #[arg(short, long, value_delimiter = ',')]
        output_fields: Vec<String>,
        #[arg(short, long)]
        limit: Option<i64>,
    },
    /// Search for the nearest neighbours of one vector
    Search {
        name: String,
        /// JSON array, e.g. `[0.1, 0.2, 0.3, 0.4]`
        #[arg(short, long)]
        vector: String,
        #[arg(short, long, default_value_t = 10)]
        limit: i64,
        #[arg(short, long, value_delimiter = ',')]
        output_fields: Vec<String>,
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Flush collections and wait until their segments are persisted
    Flush { names: Vec<String> },
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ClientConfig::new("localhost:19530"),
    };
    config.apply_env_overrides();
    if let Some(address) = &cli.address {
        config.address = address.clone();
    }
    Ok(config)
}

fn check(status: &Status) -> Result<()> {
    if !status.is_success() {
        bail!("ErrorCode: {}. Reason: {}", status.code_name(), status.reason);
    }
    Ok(())
}

fn print(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!("🔧 Connecting to {}", config.normalized_address());
    let client = MilvusClient::connect(config).await?;

    match cli.command {
        Commands::Version => {
            let response = client.get_version(&BareReq::default()).await?;
            check(&response.status.clone().unwrap_or_default())?;
            print(&json!({ "version": response.version }))?;
        }
        Commands::Health => {
            let response = client.check_health(&BareReq::default()).await?;
            check(&response.status.clone().unwrap_or_default())?;
            print(&json!({ "is_healthy": response.is_healthy, "reasons": response.reasons }))?;
        }
        Commands::ListCollections => {
            let response = client.show_collections(&ShowCollectionsReq::default()).await?;
            check(&response.status.clone().unwrap_or_default())?;
            print(&json!(response.collection_names))?;
        }
        Commands::Describe { name } => {
            let response = client.describe_collection(&CollectionNameReq::new(name)).await?;
            check(&response.status.clone().unwrap_or_default())?;
            let schema = response.schema.unwrap_or_default();
            let fields: Vec<Value> = schema
                .fields
                .iter()
                .map(|field| {
                    let data_type = DataType::try_from(field.data_type)
                        .map(|t| t.as_str_name().to_string())
                        .unwrap_or_else(|_| field.data_type.to_string());
                    let keys: Vec<&str> = field.type_params.iter().map(|p| p.key.as_str()).collect();
                    json!({
                        "name": field.name,
                        "data_type": data_type,
                        "is_primary_key": field.is_primary_key,
                        "auto_id": field.auto_id,
                        "type_params": from_pairs(&field.type_params, &keys),
                    })
                })
                .collect();
            print(&json!({
                "collection_name": response.collection_name,
                "collection_id": response.collection_id,
                "description": schema.description,
                "fields": fields,
            }))?;
        }
        Commands::Stats { name } => {
            let stats = client.get_collection_statistics(&CollectionNameReq::new(name)).await?;
            check(&stats.status)?;
            print(&Value::Object(stats.data))?;
        }
        Commands::Query {
            name,
            expr,
            output_fields,
            limit,
        } => {
            let results = client
                .query(&QueryReq {
                    collection_name: name,
                    expr,
                    output_fields,
                    limit,
                    ..Default::default()
                })
                .await?;
            check(&results.status)?;
            print(&serde_json::to_value(&results.data)?)?;
        }
        Commands::Search {
            name,
            vector,
            limit,
            output_fields,
            filter,
        } => {
            let vector: Vec<f32> = serde_json::from_str(&vector).context("--vector must be a JSON array of numbers")?;
            let results = client
                .search(SearchSimpleReq {
                    collection_name: name,
                    data: vec![VectorData::Float(vector)],
                    limit: Some(limit),
                    output_fields,
                    filter,
                    ..Default::default()
                })
                .await?;
            check(&results.status)?;
            print(&serde_json::to_value(&results.results)?)?;
        }
        Commands::Flush { names } => {
            let response = client
                .flush_sync(
                    &FlushReq {
                        collection_names: names,
                        timeout: None,
                    },
                    None,
                )
                .await?;
            let segments: Value = response
                .coll_seg_ids
                .iter()
                .map(|(name, ids)| (name.clone(), json!(ids.data)))
                .collect::<serde_json::Map<String, Value>>()
                .into();
            print(&json!({ "flushed": segments }))?;
        }
    }

    Ok(())
}
