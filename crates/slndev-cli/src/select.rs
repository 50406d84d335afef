use anyhow::{Result, bail};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use slndev_core::ProjectCandidate;

/// How a single candidate is resolved from the scan results.
pub enum SelectionStrategy {
    /// Match the name as a substring of the manifest path; first hit wins.
    Explicit(String),

    /// Ask the user to pick from a single-choice menu.
    Interactive,

    /// Print usage plus the discoverable names and finish without a pick.
    UsagePrinter,
}

#[derive(Debug)]
pub enum Selection {
    Project(ProjectCandidate),
    UsagePrinted,
}

pub fn select(mut candidates: Vec<ProjectCandidate>, strategy: SelectionStrategy) -> Result<Selection> {
    match strategy {
        SelectionStrategy::Explicit(name) => {
            let found = candidates
                .into_iter()
                .find(|c| c.full_path.to_string_lossy().contains(&name));

            match found {
                Some(candidate) => Ok(Selection::Project(candidate)),
                None => bail!("no project found with the name '{}'", name),
            }
        }

        SelectionStrategy::Interactive => {
            // An empty menu must never be offered; fall through to usage.
            if candidates.is_empty() {
                return select(candidates, SelectionStrategy::UsagePrinter);
            }

            let names: Vec<&str> = candidates.iter().map(|c| c.short_name.as_str()).collect();
            let picked = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Choose a project to open logs of")
                .items(&names)
                .default(0)
                .interact()?;

            Ok(Selection::Project(candidates.swap_remove(picked)))
        }

        SelectionStrategy::UsagePrinter => {
            print_usage(&candidates);
            Ok(Selection::UsagePrinted)
        }
    }
}

fn print_usage(candidates: &[ProjectCandidate]) {
    println!("You have to pass a project name.\n");
    println!("Usage:");
    println!("  slndev logs <project-name>");
    println!("  slndev logs -i\n");

    if candidates.is_empty() {
        println!("No runnable projects were found under the working directory.");
        return;
    }

    println!("Available project names:\n");
    for candidate in candidates {
        println!("  - {}", candidate.short_name);
    }
}
