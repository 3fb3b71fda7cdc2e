pub mod runner;
pub mod scenario;
pub mod validate;

pub use runner::{
    approx_eq_rel, build_roster, run_scenario, CaseReport, EntityCheck, RunError, ScenarioReport,
    HP_REL_TOLERANCE,
};
pub use scenario::{
    load_scenario, parse_scenario, Case, ExpectedState, RosterEntry, Scenario, ScenarioError,
    DEFAULT_SCENARIO_PATH,
};
pub use validate::{validate_scenario, validate_scenario_file};
