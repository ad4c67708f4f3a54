use std::io::{Write, stdout};

use anyhow::Result;
use human_panic::setup_panic;

use sql_batches::prelude::*;

fn main() -> Result<()> {
    setup_panic!();

    let matches = get_matches();
    init_logger(get_verbosity(&matches), &get_log_file(&matches))?;

    let options = get_processing_options(&matches)?;

    let mut out = stdout().lock();
    process_batches(options, &mut out)?;
    out.flush()?;

    Ok(())
}
