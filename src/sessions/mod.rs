pub mod extractors;
pub mod models;
#[cfg(test)]
pub mod tests;
