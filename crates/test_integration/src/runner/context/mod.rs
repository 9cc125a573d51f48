pub mod context_utils;
pub mod mock_upstream;
pub mod test_context;
