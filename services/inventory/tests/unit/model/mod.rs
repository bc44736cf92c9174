mod metrics;
mod stock_level;
