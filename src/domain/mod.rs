//! Domain layer: the purchase catalog, the decision flow aggregate, and the
//! foundation value objects they share.

pub mod catalog;
pub mod flow;
pub mod foundation;
