pub mod media_test_fixtures;
pub mod mocks;
