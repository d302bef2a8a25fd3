// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! runpadd: the runpad execution daemon.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use parking_lot::Mutex;

use runpad_core::SystemClock;
use runpad_engine::{LogAuditStore, RunPipeline, StaticRegistry, SubprocessInterpreter};
use runpad_server::state::AppState;
use runpad_server::{env, load_programs, router};
use runpad_storage::AuditLog;

#[derive(Debug, Parser)]
#[command(name = "runpadd", about = "Run registered programs on demand and keep an audit log", version)]
struct Args {
    /// Listen address (overrides RUNPAD_HTTP_ADDR)
    #[arg(long)]
    addr: Option<String>,

    /// State directory for the audit log (overrides RUNPAD_STATE_DIR)
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// Program table (TOML); omit to serve the built-in snippets
    #[arg(long)]
    programs: Option<PathBuf>,

    /// Interpreter binary (overrides RUNPAD_PYTHON_BIN)
    #[arg(long)]
    python: Option<String>,

    /// Execution deadline in seconds (overrides RUNPAD_EXEC_TIMEOUT_MS)
    #[arg(long)]
    exec_timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("runpad=info,runpadd=info,tower_http=info")
            }),
        )
        .init();

    let args = Args::parse();

    let registry = match &args.programs {
        Some(path) => load_programs(path)
            .with_context(|| format!("loading program table from {}", path.display()))?,
        None => StaticRegistry::builtin(),
    };
    tracing::info!(programs = registry.len(), "program registry loaded");

    let state_dir = match args.state_dir {
        Some(dir) => dir,
        None => env::state_dir()?,
    };
    std::fs::create_dir_all(&state_dir)
        .with_context(|| format!("creating state directory {}", state_dir.display()))?;
    let audit_path = state_dir.join("audit.log");
    let audit_log = Arc::new(Mutex::new(
        AuditLog::open(&audit_path)
            .with_context(|| format!("opening audit log {}", audit_path.display()))?,
    ));

    let timeout = args
        .exec_timeout_secs
        .map(Duration::from_secs)
        .or_else(env::exec_timeout);
    let mut interpreter =
        SubprocessInterpreter::python(args.python.unwrap_or_else(env::python_bin));
    if let Some(timeout) = timeout {
        interpreter = interpreter.with_timeout(timeout);
    }

    let pipeline = RunPipeline::new(
        Arc::new(registry),
        Arc::new(interpreter),
        Arc::new(LogAuditStore::new(Arc::clone(&audit_log), SystemClock)),
    );
    let state = AppState::new(pipeline, audit_log);

    let addr = args
        .addr
        .or_else(env::http_addr)
        .unwrap_or_else(|| env::DEFAULT_HTTP_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, audit_log = %audit_path.display(), "runpadd listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
        return;
    }
    tracing::info!("shutdown signal received");
}
