//! rWorkplan main entrypoint.

use rworkplan::errors::AppError;
use rworkplan::run;
use rworkplan::ui::messages::{error, warning};

fn main() {
    match run() {
        Ok(()) => {}
        // plan not ready yet: nothing written, the file is untouched
        Err(AppError::Validation(v)) => {
            warning(v);
            std::process::exit(2);
        }
        Err(e) => {
            error(format!("Error: {e}"));
            std::process::exit(1);
        }
    }
}
