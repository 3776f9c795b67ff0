use anyhow::Result;
use console::Term;
use log::info;
use photo_date_sorter::component::DateSorter;
use photo_date_sorter::component::date_sorter::SortOutcome;
use photo_date_sorter::config::Config;
use photo_date_sorter::{init, wait_for_keypress};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    init::init();
    rust_i18n::set_locale("en-US");
    let term = Term::stdout();

    let config = Config::new()?;
    let sorter = DateSorter::new(config);

    match sorter.run()? {
        SortOutcome::Completed(summary) => {
            info!("Program finished: {summary:?}");
        }
        SortOutcome::InvalidDirectory(path) => {
            info!("Aborted, invalid directory: {}", path.display());
            return Ok(ExitCode::FAILURE);
        }
    }

    wait_for_keypress(&term)?;
    Ok(ExitCode::SUCCESS)
}
