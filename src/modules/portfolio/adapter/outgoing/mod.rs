pub mod http_portfolio_query;
pub mod static_portfolio_query;

pub use http_portfolio_query::HttpPortfolioQuery;
pub use static_portfolio_query::{PortfolioDataset, StaticPortfolioQuery};
