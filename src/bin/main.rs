use std::io;

use clap::Parser;
use mimalloc::MiMalloc;
use tmenu::{ItemStore, Options, tui};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    env_logger::builder().format_timestamp_nanos().init();

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // A closed downstream pipe is not our failure
            if err
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
            {
                std::process::exit(0);
            }
            eprintln!("tmenu: {err}");
            std::process::exit(2);
        }
    }
}

fn real_main() -> color_eyre::Result<i32> {
    let options = Options::parse();

    // The whole item list arrives before the menu shows; stdin stays the
    // item pipe, key input comes from the tty.
    let store = ItemStore::read_from(io::stdin().lock())?;

    let cancelled = tui::run(&options, store)?;
    Ok(if cancelled { 1 } else { 0 })
}
