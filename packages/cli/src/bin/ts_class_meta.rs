/**
 * ts-class-meta
 *
 * Writes the class metadata of one TypeScript file as JSON
 */
use std::process;

use ts_class_meta_cli::main_entry::main_fn;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let code = main_fn(&args, |msg| eprintln!("{msg}"));
    process::exit(code);
}
