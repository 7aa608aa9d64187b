pub mod render_tests;
