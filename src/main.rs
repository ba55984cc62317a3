#![deny(warnings)]

use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;

use pokepager::{
    infrastructure::{
        catalog::PokeApi,
        cli::Cli,
        config::Config,
        http::HttpClient,
        tui::{EventSource, Tui},
    },
    integration::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    let args = <Cli as Parser>::parse();

    initialize_logging(args.headless)?;

    initialize_panic_handler()?;

    let mut config = Config::new()?;
    if let Some(limit) = args.limit {
        config.limit = limit;
    }

    let http = HttpClient::new(config.request_timeout())?;
    let catalog = Arc::new(PokeApi::new(http, &config.base_url)?);

    let mut runner = AppRunner::new(&config, catalog);
    if args.headless {
        log::info!("Starting headless, press Ctrl-C to stop");
        runner
            .run_headless(async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    log::error!("Failed to listen for Ctrl-C: {e}");
                }
            })
            .await?;
    } else {
        let tui = Tui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate);
        let mut events = EventSource::Real(Box::new(tui));
        runner.run(&mut events).await?;
    }
    runner.shutdown().await;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
