//! Interactive battle driver: create undead, command them, display the
//! roster, run scenario fixtures. All prompting and re-prompt loops live
//! here; the engine only ever sees resolve/apply calls.

use std::io::{self, BufRead, Write};

use crate::combat::{list_abilities, Entity, Outcome, Roster, Variant};
use crate::data::scenario::DEFAULT_SCENARIO_PATH;
use crate::data::{load_scenario, run_scenario};

const VARIANT_KEYS: [(&str, Variant); 6] = [
    ("a", Variant::Zombie),
    ("b", Variant::Vampire),
    ("c", Variant::Skeleton),
    ("d", Variant::Ghost),
    ("e", Variant::Lich),
    ("f", Variant::Mummy),
];

/// Run the menu loop until quit or end of input. Reads and writes are
/// generic so tests can drive the loop with scripted input.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> i32 {
    let mut session = Session {
        input,
        output,
        roster: Roster::new(),
    };
    match session.main_menu() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("battle driver error: {err}");
            1
        }
    }
}

struct Session<R, W> {
    input: R,
    output: W,
    roster: Roster,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn main_menu(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "1. Create Undead   2. Command Undead")?;
            writeln!(self.output, "3. Display Undead  4. Run Scenario")?;
            writeln!(self.output, "                   Q. Quit")?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };
            match choice.trim().to_ascii_lowercase().as_str() {
                "1" => self.create_undead()?,
                "2" => self.command_undead()?,
                "3" => self.display_roster()?,
                "4" => self.run_scenario_file()?,
                "q" => return Ok(()),
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    /// One prompt/read round. `None` means end of input; callers unwind back
    /// to the caller's caller quietly.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt for a 1-based index until the input is valid or exhausted.
    fn prompt_index(&mut self, message: &str, len: usize) -> io::Result<Option<usize>> {
        loop {
            let Some(raw) = self.prompt(message)? else {
                return Ok(None);
            };
            match raw.trim().parse::<usize>() {
                Ok(number) if (1..=len).contains(&number) => return Ok(Some(number - 1)),
                _ => writeln!(self.output, "Invalid choice, try again.")?,
            }
        }
    }

    fn create_undead(&mut self) -> io::Result<()> {
        writeln!(self.output, "Create Undead:")?;
        writeln!(self.output, "a. Zombie    b. Vampire")?;
        writeln!(self.output, "c. Skeleton  d. Ghost")?;
        writeln!(self.output, "e. Lich      f. Mummy")?;

        let Some(choice) = self.prompt("Enter your choice: ")? else {
            return Ok(());
        };
        let key = choice.trim().to_ascii_lowercase();
        let Some((_, variant)) = VARIANT_KEYS.iter().find(|(k, _)| *k == key) else {
            writeln!(self.output, "Invalid choice.")?;
            return Ok(());
        };

        let Some(name) =
            self.prompt("Enter a custom name or press Enter to use the default name: ")?
        else {
            return Ok(());
        };
        let name = name.trim();
        let entity = if name.is_empty() {
            Entity::new(*variant, None)
        } else {
            Entity::new(*variant, Some(name))
        };
        writeln!(self.output, "{} joins the battle.", entity.name())?;
        self.roster.push(entity);
        Ok(())
    }

    fn command_undead(&mut self) -> io::Result<()> {
        if self.roster.is_empty() {
            writeln!(self.output, "No undead have been created.")?;
            return Ok(());
        }

        self.display_roster()?;
        let Some(actor) =
            self.prompt_index("Choose an undead by index to command: ", self.roster.len())?
        else {
            return Ok(());
        };

        let abilities = list_abilities(&self.roster.entities()[actor]);
        writeln!(
            self.output,
            "Command {}:",
            self.roster.entities()[actor].name()
        )?;
        for (index, ability) in abilities.iter().enumerate() {
            writeln!(
                self.output,
                "[{}] {} - {}",
                index + 1,
                ability.name,
                ability.description
            )?;
        }
        let Some(ability_index) = self.prompt_index("Choose an ability: ", abilities.len())? else {
            return Ok(());
        };
        let ability_name = abilities[ability_index].name;

        self.display_roster()?;
        let Some(target) = self.prompt_index("Choose a target: ", self.roster.len())? else {
            return Ok(());
        };

        match self.roster.apply(actor, target, ability_name) {
            Ok(outcome) => self.write_outcome(&outcome)?,
            // Unreachable with menu-validated input, but never crash on it.
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn write_outcome(&mut self, outcome: &Outcome) -> io::Result<()> {
        let target = outcome.target.as_deref().unwrap_or("itself");
        writeln!(
            self.output,
            "Ability     {} used {} on {}",
            outcome.actor, outcome.ability, target
        )?;
        writeln!(self.output, "Description {}", outcome.description)?;
        writeln!(
            self.output,
            "{:<11} {} HP",
            outcome.kind.label(),
            outcome.amount
        )?;
        writeln!(self.output, "{} HP: {}", outcome.actor, outcome.actor_hp)?;
        if let (Some(name), Some(hp)) = (outcome.target.as_deref(), outcome.target_hp) {
            writeln!(self.output, "{name} HP: {hp}")?;
        }
        if outcome.actor_dead {
            writeln!(self.output, "{} is now dead.", outcome.actor)?;
        }
        if outcome.target_dead == Some(true) {
            if let Some(name) = outcome.target.as_deref() {
                writeln!(self.output, "{name} is now dead.")?;
            }
        }
        Ok(())
    }

    fn display_roster(&mut self) -> io::Result<()> {
        if self.roster.is_empty() {
            writeln!(self.output, "No undead have been created.")?;
            return Ok(());
        }
        for (index, entity) in self.roster.entities().iter().enumerate() {
            writeln!(
                self.output,
                "[{}] {}  {}  {}",
                index + 1,
                entity.name(),
                if entity.is_dead() { "Dead" } else { "Alive" },
                entity.hp()
            )?;
        }
        Ok(())
    }

    fn run_scenario_file(&mut self) -> io::Result<()> {
        let Some(path) = self.prompt(&format!(
            "Scenario file (Enter for {DEFAULT_SCENARIO_PATH}): "
        ))?
        else {
            return Ok(());
        };
        let path = path.trim();
        let path = if path.is_empty() {
            DEFAULT_SCENARIO_PATH
        } else {
            path
        };

        let scenario = match load_scenario(path) {
            Ok(scenario) => scenario,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(());
            }
        };
        let report = match run_scenario(&scenario) {
            Ok(report) => report,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(());
            }
        };

        for case in &report.cases {
            writeln!(
                self.output,
                "#{} {}  {}",
                case.case,
                if case.passed { "pass" } else { "FAIL" },
                case.description
            )?;
        }
        writeln!(
            self.output,
            "{}/{} cases passed.",
            report.passed, report.total
        )?;
        Ok(())
    }
}
