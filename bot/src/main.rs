mod config;
mod scheduler;
mod server;
mod trader;

use anyhow::Result;
use config::Config;
use scheduler::Scheduler;
use sorare::Client;
use tokio::signal;
use trader::Trader;

#[tokio::main]
async fn main() -> Result<()> {
    sorare::setup_env();

    let Config {
        api_token,
        status_port,
    } = Config::from_env();

    server::spawn(status_port);

    let trader = Trader::new(Client::new(api_token));
    let scheduler = Scheduler::new(trader).await?;
    scheduler.start().await?;

    signal::ctrl_c().await?;
    scheduler.shutdown().await
}
