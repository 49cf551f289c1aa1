mod export_tests;
mod letter_tests;
mod upload_tests;
