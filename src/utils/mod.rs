pub mod filesystem;
#[cfg(test)]
pub(crate) mod test_helpers;
