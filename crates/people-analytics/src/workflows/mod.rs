pub mod roster;
pub mod turnover;
pub mod workforce;
