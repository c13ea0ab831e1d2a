//! `uriparse flags` – list component names and bit values.

use uriparse_core::SelectionMask;

pub fn run_flags() {
    println!("{:<10} {}", "NAME", "BIT");
    for (name, flag) in SelectionMask::FLAGS {
        println!("{:<10} {}", name, flag.bits());
    }
    println!("{:<10} {}", "all", SelectionMask::ALL.bits());
}
