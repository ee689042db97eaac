use std::{io, sync::OnceLock};

use application::{records, render, Args, Config, Service};
use service::{
    query::{Dashboard, Overview},
    read::sale::EvaluationDateTime,
    view, Query as _,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Rendered output owns stdout, so every log level goes to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || LOG_LEVEL
                            .get()
                            .copied()
                            .unwrap_or(log::Level::WARN)
                            >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let args = Args::parse().map_err(|e| {
        // Help and version requests are reported as errors too.
        _ = e.print();
    })?;

    let Config {
        service,
        records,
        log,
    } = Config::new(&args.config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let memory = records::load(&records.path).await.map_err(|e| {
        log::error!("failed to load records from `{}`: {e}", records.path);
    })?;
    let service = Service::new(service.into(), memory);

    let text = if args.overview {
        let page = view::Parameters::try_from(args.raw_parameters())
            .map_err(|e| log::error!("{e}"))?
            .page();
        let output =
            service.execute(Overview { page }).await.map_err(|e| {
                log::error!("failed to compute `Overview`: {e}");
            })?;
        render::overview(&output)
    } else {
        let parameters = args.parameters().map_err(|e| log::error!("{e}"))?;
        log::info!(url_state = ?parameters.url_state(), "resolved parameters");

        let output = service
            .execute(Dashboard {
                parameters: parameters.clone(),
                now: EvaluationDateTime::now(),
            })
            .await
            .map_err(|e| log::error!("failed to compute `Dashboard`: {e}"))?;
        render::dashboard(&parameters, &output)
    };

    print!("{text}");
    Ok(())
}
