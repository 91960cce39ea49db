mod auth_flow_tests;
mod explore_tests;
mod order_tests;
mod profile_tests;
