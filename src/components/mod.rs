pub mod app;
pub mod error_list;
pub mod planner_form;
pub mod results_panel;
pub mod tower_grid;
