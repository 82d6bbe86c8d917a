pub mod portfolio_query;

pub use portfolio_query::{PortfolioQuery, PortfolioQueryError};
