use std::io::{self, BufRead, Write};
use std::path::Path;

use log::error;

use crate::analyze_run::analyze_run;
use crate::protocol::Protocol;

/// Interaktiv sløyfe: velg test 1–5, kjør analysen, spør om fortsettelse.
/// Ugyldig valg gir feilmelding og nytt forsøk; en feilet kjøring
/// rapporteres og hindrer aldri neste.
pub fn run_interactive(input_path: &Path, results_dir: &Path) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let choice = prompt(
            &mut lines,
            "Which test do you want to run (1, 2, 3, 4, 5)? Choose: ",
        )?;
        match Protocol::from_choice(&choice) {
            Some(protocol) => match analyze_run(protocol, input_path, results_dir) {
                Ok(summary) => {
                    println!("Results saved to: {}", summary.report_path);
                    if let Some(line) = summary.result_line() {
                        println!("{}", line);
                    }
                }
                Err(e) => error!("kjøringen for test {} feilet: {}", choice, e),
            },
            None => {
                println!("Invalid test number. Please enter a valid number (1, 2, 3, 4, 5).")
            }
        }

        let again = prompt(
            &mut lines,
            "Do you want to continue with another test? (yes/no): ",
        )?;
        let again = again.to_lowercase();
        if again != "yes" && again != "y" {
            break;
        }
    }
    Ok(())
}

fn prompt<B: BufRead>(lines: &mut io::Lines<B>, message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        // EOF -> tomt svar; sløyfen avsluttes via fortsettelses-spørsmålet
        None => Ok(String::new()),
    }
}
