//! Unit tests for the ecs-tier library
//!
//! These tests drive the real ECS client against an in-process stub endpoint
//! and run without network access or credentials.

mod architecture;
mod orchestrator_scenarios;
