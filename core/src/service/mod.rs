pub mod aggregator;
pub mod assembler;
pub mod event_builder;
pub mod formatter;
