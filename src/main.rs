//! plantlog main entrypoint.

use plantlog::run;

fn main() {
    println!();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
