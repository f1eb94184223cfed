//! couchbase-node: converge a Couchbase node's database path.
//!
//! Talks to the node's Management REST API to:
//! - show the current database path of a node
//! - reconcile it against a desired path, updating it only when it differs

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use couchbase_node::clients::rest::{DEFAULT_HOST, DEFAULT_PORT};
use couchbase_node::{
    DesiredNodeState, NodeId, NodeReconciler, NodeStateReader, Reconciler, RestClient,
    RestConfig, StateReader, SELF_NODE,
};

/// Couchbase node database path reconciler
#[derive(Parser, Debug)]
#[command(name = "couchbase-node", version, about)]
struct Args {
    /// Management REST API host
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Management REST API port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Basic auth username
    #[arg(short, long)]
    username: Option<String>,

    /// Basic auth password
    #[arg(short, long, requires = "username")]
    password: Option<String>,

    /// Request timeout in seconds (no timeout if unset)
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current database path of a node
    Show {
        /// Node to query ("self" or a hostname/IP)
        #[arg(long, default_value = SELF_NODE)]
        node: NodeId,
    },

    /// Set the database path of a node if it differs
    Reconcile {
        /// Node to update ("self" or a hostname/IP)
        #[arg(long, default_value = SELF_NODE)]
        node: NodeId,

        /// Desired database directory
        #[arg(long)]
        database_path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "couchbase_node=info,reqwest=warn,hyper=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = RestConfig {
        host: args.host,
        port: args.port,
        username: args.username,
        password: args.password,
        timeout: args.timeout_secs.map(Duration::from_secs),
    };
    info!("Management API: {}", config.base_url());

    let client = Arc::new(RestClient::new(&config).context("Failed to build HTTP client")?);

    match args.command {
        Command::Show { node } => {
            let reader = NodeStateReader::new(client);
            let current = reader
                .current_state(&node)
                .await
                .with_context(|| format!("Failed to read state of node {}", node))?;
            println!("{}", current.database_path);
        }
        Command::Reconcile {
            node,
            database_path,
        } => {
            let reconciler = NodeReconciler::from_client(client);
            let desired = DesiredNodeState::new(node, database_path);
            let outcome = reconciler
                .reconcile(&desired)
                .await
                .with_context(|| format!("Failed to reconcile node {}", desired.name))?;
            println!("{}", if outcome.changed { "changed" } else { "unchanged" });
        }
    }

    Ok(())
}
