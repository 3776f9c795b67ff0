rust_i18n::i18n!("locales", fallback = "en-US");

pub mod component;
pub mod config;
pub mod init;
pub mod tools;

use anyhow::Result;
use console::{Term, style};
use rust_i18n::t;

pub fn wait_for_keypress(term: &Term) -> Result<()> {
    println!("{}", style(t!("date_sorter.press_any_key")).dim());
    term.read_key()?;
    Ok(())
}
