//! Quickstart: a few calculations, the recorded history, and an undo.
//!
//! Run with: cargo run -p dashcalc --example quickstart

use dashcalc::Calculator;

fn main() -> dashcalc::Result<()> {
    let mut calc = Calculator::new();

    println!("{}", calc.calculate("add", 5.0, 3.0)?);
    println!("{}", calc.calculate("multiply", 4.0, 7.0)?);
    println!("{}", calc.calculate("power", 2.0, 10.0)?);

    println!("\nhistory:");
    for entry in calc.history() {
        println!("  {entry}");
    }

    if let Some(entry) = calc.undo() {
        println!("\nundone: {entry}");
    }
    println!("{} entries remain", calc.history().len());

    Ok(())
}
