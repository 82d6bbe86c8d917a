mod portfolio_aggregator;

pub use portfolio_aggregator::{
    AggregatorStatus, PortfolioAggregator, PortfolioRefreshError, PortfolioView, FAILED_TO_LOAD,
};
