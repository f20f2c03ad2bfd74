pub mod analysis;
pub mod multiples;
pub mod ownership;
pub mod scenarios;
pub mod waterfall;
