// Test helpers for integration and contract tests.
//
// Include from a test target with:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//
// `OcsScenario` describes what a fake OCS account looks like. It can be served
// in-process (`ScriptedGateway`) or over real HTTP (`spawn_fake_ocs`), the
// latter exercising the production reqwest client end to end.
#![allow(dead_code)]


pub use ocs_sandbox::*;
pub use test_data::*;
