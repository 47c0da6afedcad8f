// Domain layer - Chronograf documents and the host binding rules
pub mod dashboard;
