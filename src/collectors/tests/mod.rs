mod extraction_tests;
mod text_tests;
