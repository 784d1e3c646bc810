mod dashboard_tests;
mod export_tests;
mod refresh_tests;
