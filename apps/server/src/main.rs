use anyhow::Context;
use k1::domain::config::ApiConfig;
use k1::domain::constants::DEFAULT_CONFIG_FILE;
use k1::kernel::config::load_config;
use k1_logger::Logger;
use k1_server::Server;

#[k1_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg: ApiConfig =
        load_config(Some(DEFAULT_CONFIG_FILE)).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build().await?.run().await
}
