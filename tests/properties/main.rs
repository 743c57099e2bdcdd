mod determinism_tests;
mod matcher_props;
