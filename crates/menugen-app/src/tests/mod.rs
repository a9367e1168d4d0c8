mod render_tests;
mod settings_tests;
