// Analysis: the match engine, report types, batch fan-out and the HTTP handlers.

pub mod batch;
pub mod engine;
pub mod handlers;
pub mod report;
