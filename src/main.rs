//! rStaffDesk main entrypoint.

use rstaffdesk::run;
use rstaffdesk::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
