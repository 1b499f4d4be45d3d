mod command;
mod config;
mod logging;
mod paths;
mod submitter;
mod view;

use std::io::{self, BufRead, Write};

use log::{info, warn};
use signup_form::Form;
use signup_form::policy::FormPolicy;

use command::{Command, HELP};
use submitter::JsonSubmitter;

fn load_policy() -> FormPolicy {
    let Some(path) = paths::policy_file() else {
        return FormPolicy::default();
    };
    match config::load_policy(&path) {
        Ok(policy) => {
            info!("Using policy {:?}", policy);
            policy
        }
        Err(e) => {
            warn!("{}", e);
            eprintln!("Error: {}", e);
            FormPolicy::default()
        }
    }
}

fn run(form: &mut Form) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut submitter = JsonSubmitter::new(io::stdout());

    writeln!(stdout.lock(), "{}", HELP)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = match command::parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        match command {
            Command::Event(event) => {
                if let Err(e) = form.dispatch(event, &mut submitter) {
                    warn!("{}", e);
                    eprintln!("Error: {}", e);
                }
                write!(stdout.lock(), "{}", view::render(form.state()))?;
            }
            Command::Show => write!(stdout.lock(), "{}", view::render(form.state()))?,
            Command::Help => writeln!(stdout.lock(), "{}", HELP)?,
            Command::Quit => break,
        }
    }
    Ok(())
}

fn main() {
    match logging::init() {
        Ok(path) => info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Error: {}", e),
    }

    let mut form = Form::with_policy(load_policy());
    if let Err(e) = run(&mut form) {
        eprintln!("Error: {}", e);
    }
    info!("Exiting");
}
