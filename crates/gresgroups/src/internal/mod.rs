pub(crate) mod alias;
pub(crate) mod common;
pub(crate) mod config;
pub(crate) mod filter;
pub(crate) mod tres;

#[cfg(test)]
pub(crate) mod tests;
