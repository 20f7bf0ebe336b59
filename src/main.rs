//! deepwork main entrypoint.

use deepwork::run;
use deepwork::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
