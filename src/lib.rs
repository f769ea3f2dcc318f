//! BNPL Coach - Educational Buy Now, Pay Later Decision Exercise
//!
//! This crate implements a simulated purchase-decision walkthrough: a fictional
//! persona faces four purchase scenarios, the caller buys outright, buys on an
//! installment plan, or declines, and the service derives running financial and
//! happiness summaries from the decision history.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
