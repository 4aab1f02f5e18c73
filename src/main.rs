use anyhow::Context;
use axum::Router;
use clap::{Args, Parser, Subcommand};
use range_pipeline::acceptor::service::Acceptor;
use range_pipeline::config::{NodeConfig, RerangePolicy, TransportConfig};
use range_pipeline::node::announce::spawn_announcement;
use range_pipeline::node::router::{acceptor_router, coordinator_router, proposer_router};
use range_pipeline::partition::range::Range;
use range_pipeline::proposer::service::Proposer;
use range_pipeline::registry::service::Coordinator;
use range_pipeline::registry::types::Role;
use range_pipeline::transport::sender::Transport;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "range-node", about = "Run one node of the word pipeline")]
struct Cli {
    #[command(subcommand)]
    role: RoleCommand,

    #[command(flatten)]
    node: NodeArgs,
}

#[derive(Subcommand)]
enum RoleCommand {
    /// Registry, range assignment and line distribution.
    Coordinator,
    /// First-stage filtering and accumulation.
    Proposer {
        /// Range to serve until the coordinator assigns one.
        #[arg(long, env = "RANGE_NODE_RANGE")]
        range: Option<String>,
    },
    /// Second-stage validation.
    Acceptor,
}

#[derive(Args)]
struct NodeArgs {
    #[arg(long, global = true, env = "RANGE_NODE_BIND", default_value = "127.0.0.1:5020")]
    bind: SocketAddr,

    /// Coordinator base url to announce to (ignored by the coordinator).
    #[arg(long, global = true, env = "RANGE_NODE_COORDINATOR", default_value = "http://127.0.0.1:5020")]
    coordinator: String,

    /// Url peers should use to reach this node. Defaults to `http://<bind>`.
    #[arg(long, global = true, env = "RANGE_NODE_PUBLIC_URL")]
    public_url: Option<String>,

    #[arg(long, global = true, env = "RANGE_NODE_RETRIES", default_value_t = 3)]
    retries: usize,

    #[arg(long, global = true, env = "RANGE_NODE_RETRY_DELAY_MS", default_value_t = 1000)]
    retry_delay_ms: u64,

    #[arg(long, global = true, env = "RANGE_NODE_REQUEST_TIMEOUT_MS")]
    request_timeout_ms: Option<u64>,

    #[arg(long, global = true, env = "RANGE_NODE_FANOUT_WIDTH", default_value_t = 2)]
    fanout_width: usize,

    #[arg(long, global = true, env = "RANGE_NODE_ANNOUNCE_DELAY_MS", default_value_t = 1000)]
    announce_delay_ms: u64,

    /// Drop accumulated counts whenever a proposer's range changes.
    #[arg(long, global = true, env = "RANGE_NODE_RESET_ON_RERANGE")]
    reset_on_rerange: bool,
}

impl NodeArgs {
    fn config(&self) -> NodeConfig {
        NodeConfig {
            transport: TransportConfig {
                retries: self.retries,
                retry_delay: Duration::from_millis(self.retry_delay_ms),
                request_timeout: self.request_timeout_ms.map(Duration::from_millis),
            },
            fanout_width: self.fanout_width,
            announce_delay: Duration::from_millis(self.announce_delay_ms),
            rerange_policy: if self.reset_on_rerange {
                RerangePolicy::Reset
            } else {
                RerangePolicy::Preserve
            },
        }
    }

    fn public_url(&self) -> String {
        self.public_url
            .clone()
            .unwrap_or_else(|| format!("http://{}", self.bind))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.node.config();
    let cancel = CancellationToken::new();

    let (app, announce_as) = match &cli.role {
        RoleCommand::Coordinator => {
            let coordinator = Coordinator::new(config.clone());
            tracing::info!("Coordinator {} starting", coordinator.node_id);
            (coordinator_router(coordinator), None)
        }
        RoleCommand::Proposer { range } => {
            let initial = range
                .as_deref()
                .map(Range::parse)
                .transpose()
                .context("--range must look like A-M")?;
            let proposer = Proposer::new(config.clone(), initial);
            tracing::info!("Proposer {} starting", proposer.node_id);
            (proposer_router(proposer), Some(Role::Proposer))
        }
        RoleCommand::Acceptor => {
            let acceptor = Acceptor::new(config.clone());
            tracing::info!("Acceptor {} starting", acceptor.node_id);
            (acceptor_router(acceptor), Some(Role::Acceptor))
        }
    };

    if let Some(role) = announce_as {
        spawn_announcement(
            Arc::new(Transport::new(&config.transport)),
            cli.node.coordinator.clone(),
            role,
            cli.node.public_url(),
            config.announce_delay,
            cancel.clone(),
        );
    }

    serve(app, cli.node.bind, cancel).await
}

async fn serve(app: Router, bind: SocketAddr, cancel: CancellationToken) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;
    tracing::info!("HTTP server listening on {}", bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let shutdown = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Shutting down");
                shutdown.cancel();
            }
            Err(e) => tracing::error!("Failed to listen for Ctrl+C: {}", e),
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await?;

    Ok(())
}
