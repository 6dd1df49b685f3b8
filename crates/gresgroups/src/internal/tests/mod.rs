pub(crate) mod utils;

mod test_modify;
