// Application layer - Use cases over the two remote systems
pub mod dashboard_repository;
pub mod host_repository;
pub mod reconciler;
pub mod template_service;

#[cfg(test)]
pub mod test_support;
