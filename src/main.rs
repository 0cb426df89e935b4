use std::process::ExitCode;

use feishu_notify::{Dispatcher, actions};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    let default_level = match std::env::var("RUNNER_DEBUG").as_deref() {
        Ok("1") => "debug",
        _ => "info",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

async fn run() -> feishu_notify::Result<String> {
    Dispatcher::from_env()?.dispatch().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();
    actions::set_command_echo(true);
    match run().await {
        Ok(body) => {
            tracing::info!(%body, "webhook delivered");
            println!("{}", body);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "webhook failed");
            actions::set_failed(&err);
            ExitCode::FAILURE
        }
    }
}
