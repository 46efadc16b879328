//! JSON configuration for the command-line tools.
pub mod hough_demo;
