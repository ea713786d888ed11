mod export_tests;
mod pages_tests;
