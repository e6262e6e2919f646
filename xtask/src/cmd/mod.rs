pub mod check_layout;
pub mod preflight;
