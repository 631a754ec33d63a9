pub mod constants;
pub mod normalize;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
