pub mod mock_classifier;
pub mod sentiment;
