//! Unit tests for class_registry components

mod construction_tests;
mod params_tests;
