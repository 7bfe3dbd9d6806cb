use clap::Parser;

use emails_input::app::App;
use emails_input::cli::Cli;
use emails_input::logging;
use emails_input::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.config()?;
    logging::initialize(&cli.log_file, cli.log_level);

    let mut app = App::new(config);
    {
        let mut tui = TuiManager::new(&app)?;
        tui.run_event_loop(&mut app)?;
    }

    // Terminal is restored; hand the collected addresses to the caller.
    let summary = app.summary();
    if !summary.is_empty() {
        println!("{summary}");
    }

    Ok(())
}
