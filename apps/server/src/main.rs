use academy::kernel::config::load_config;
use academy_logger::Logger;
use academy_server::Server;
use anyhow::Context;

/// Environment variable naming the config file; without it `./academy.{toml,yaml,json}` is used if present.
const CONFIG_PATH_VAR: &str = "ACADEMY_CONFIG";

#[academy_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg = load_config(std::env::var_os(CONFIG_PATH_VAR))
        .context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
