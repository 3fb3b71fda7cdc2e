use std::env;
use std::io;

use crate::data::scenario::DEFAULT_SCENARIO_PATH;
use crate::data::validate::validate_scenario_file;
use crate::data::{load_scenario, run_scenario};
use crate::interactive;
use crate::server;
use crate::server::api;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Battle,
    Run,
    Variants,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("battle") => Some(Command::Battle),
        Some("run") => Some(Command::Run),
        Some("variants") => Some(Command::Variants),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Battle) => handle_battle(),
        Some(Command::Run) => handle_run(args),
        Some(Command::Variants) => handle_variants(),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("usage: barrow <serve|battle|run|variants|validate>");
            2
        }
    }
}

fn handle_serve() -> i32 {
    let bind_addr = env::var("BARROW_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    match server::run_server(&bind_addr) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_battle() -> i32 {
    let stdin = io::stdin();
    interactive::run(stdin.lock(), io::stdout())
}

fn handle_run(args: &[String]) -> i32 {
    let path = args
        .get(2)
        .filter(|arg| !arg.starts_with("--"))
        .map(String::as_str)
        .unwrap_or(DEFAULT_SCENARIO_PATH);
    let as_table = args.iter().any(|arg| arg == "--table");

    let scenario = match load_scenario(path) {
        Ok(scenario) => scenario,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };
    let report = match run_scenario(&scenario) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };

    if as_table {
        println!("case\tpassed\tdescription");
        for case in &report.cases {
            println!("{}\t{}\t{}", case.case, case.passed, case.description);
        }
        println!("passed\t{}/{}", report.passed, report.total);
    } else {
        match serde_json::to_string_pretty(&report) {
            Ok(payload) => println!("{payload}"),
            Err(err) => {
                eprintln!("failed to serialize scenario report: {err}");
                return 1;
            }
        }
    }

    if report.all_passed() {
        0
    } else {
        1
    }
}

fn handle_variants() -> i32 {
    match api::variants_payload() {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize variant catalog: {err}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let path = args
        .get(2)
        .map(String::as_str)
        .unwrap_or(DEFAULT_SCENARIO_PATH);

    match validate_scenario_file(path) {
        Ok(()) => {
            println!("validation passed: {path}");
            0
        }
        Err(issues) => {
            eprintln!("validation failed: {} issue(s)", issues.len());
            for issue in issues {
                eprintln!("- {issue}");
            }
            1
        }
    }
}
