mod config_tests;
mod scenario_tests;
