pub mod chronometer;
pub mod configuration;
pub mod logger;

use self::{
    configuration::{Configuration, Format},
    logger::Logger,
};
use riscos_alphabets::{
    coverage::{self, GapKind, Report},
    register_all, Alphabet, Error,
};
use std::process;

fn alphabets(configuration: &Configuration) -> Result<Vec<&'static Alphabet>, Error> {
    let registry = register_all();
    match configuration.alphabet() {
        Some(key) => Ok(vec![registry.lookup(key)?]),
        None => Ok(registry.alphabets().iter().collect()),
    }
}

fn print_text(report: &Report) {
    for gap in &report.gaps {
        let kind = match gap.kind {
            GapKind::Unrepresentable => "Not representable",
            GapKind::Reserved => "Reserved, no unicode character mapping",
        };
        println!("  &{:02x}: {}", gap.position, kind);
    }
    for alias in &report.aliases {
        println!("  &{:02x}: Decodes to {:?}, encodes to &{:02x}", alias.position, alias.character, alias.canonical);
    }
}

fn main() {
    let logger = Logger::new();
    let configuration = match Configuration::new() {
        Ok(configuration) => configuration,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        }
    };

    let alphabets = match alphabets(&configuration) {
        Ok(alphabets) => alphabets,
        Err(error) => {
            eprintln!("{}", error);
            process::exit(2);
        }
    };

    let mut reports = Vec::new();
    for alphabet in alphabets {
        match coverage::report(alphabet, configuration.first()) {
            Some(report) => {
                if configuration.format() == Format::Text {
                    println!("Checking alphabet {} ({})", report.key, report.alphabet);
                    print_text(&report);
                }
                reports.push(report);
            }
            None => logger.log(format!("Skipping alphabet {} ({})", alphabet.name(), alphabet.id())),
        }
    }

    if configuration.format() == Format::Json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(error) => {
                eprintln!("{}", error);
                process::exit(1);
            }
        }
    }

    let gaps: usize = reports.iter().map(|report| report.gaps.len()).sum();
    logger.log(format!("Checked {} alphabets, {} positions without a mapping", reports.len(), gaps));
}
