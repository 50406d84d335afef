use clap::Parser;
use slndev::{Cli, run};

fn main() {
    // Broken pipes (e.g. `slndev logs | head`) should end the process, not panic.
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
