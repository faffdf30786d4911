use std::sync::Arc;

use stockeval_core::{
    FundamentalsService, FundamentalsServiceTrait, MetricRegistry, PriceService,
    PriceServiceTrait, TickerService, TickerServiceTrait,
};
use stockeval_market_data::{MarketDataProvider, YahooProvider};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{Config, LogFormat};

pub struct AppState {
    pub ticker_service: Arc<dyn TickerServiceTrait>,
    pub price_service: Arc<dyn PriceServiceTrait>,
    pub fundamentals_service: Arc<dyn FundamentalsServiceTrait>,
    pub metric_registry: MetricRegistry,
}

impl AppState {
    /// Wire every service to the given provider.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        let price_service: Arc<dyn PriceServiceTrait> =
            Arc::new(PriceService::new(provider.clone()));
        let fundamentals_service: Arc<dyn FundamentalsServiceTrait> =
            Arc::new(FundamentalsService::new(provider.clone()));
        let metric_registry =
            MetricRegistry::with_defaults(price_service.clone(), fundamentals_service.clone());

        Self {
            ticker_service: Arc::new(TickerService::new(provider)),
            price_service,
            fundamentals_service,
            metric_registry,
        }
    }
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = match format {
        LogFormat::Json => fmt::layer().json().with_current_span(false).boxed(),
        LogFormat::Text => fmt::layer().boxed(),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = YahooProvider::new()?;
    tracing::info!(
        "Using market data provider {} for {}",
        provider.id(),
        config.app_name
    );
    let state = AppState::new(Arc::new(provider));
    tracing::info!(
        "Registered metrics: {}",
        state.metric_registry.names().join(", ")
    );
    Ok(Arc::new(state))
}
