pub mod error;
pub mod identity_matching;

#[cfg(test)]
pub(crate) mod test_utilities;
