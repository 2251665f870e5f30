mod tables;

pub use tables::render_dashboard;
