pub mod initiate;
pub mod refinance;
pub mod rollover;
