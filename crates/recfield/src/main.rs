//! Name-resolution precedence demonstration driver.
//!
//! Builds one record with every argument set to the literal
//! `"argument"` and prints the resulting field state: the fields show
//! which binding — argument or field — each assignment resolved to.

use recfield::LabeledRecord;

fn main() {
    let record = LabeledRecord::new("argument", "argument", "argument", "argument");

    println!("{record}");
}
