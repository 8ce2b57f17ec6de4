//! Walks through the three containers with a rectangle, a square and a circle:
//! sort a list by area, fill a 3x3x3 sparse store, and drain a stack.

use figure_collections::prelude::*;

const DELIM: &str =
    "------------------------------------------------------------------------------------------";

fn main() -> Result<(), CollectionsError> {
    let r1 = Figure::rectangle(30.0, 40.0);
    let s1 = Figure::square(5.0);
    let c1 = Figure::circle(6.0);

    let mut list: SimpleList<Figure> = [r1, s1, c1].into_iter().collect();
    println!("{DELIM}\n\nCollection *SimpleList* before sorting:\n");
    for f in &list {
        println!("{f}");
    }
    list.sort();
    println!("\nAfter sorting:\n");
    for f in &list {
        println!("{f}");
    }
    println!("\n{DELIM}\n");

    println!("The content of 3D sparse store is:");
    let mut store = SparseStore3::with_policy(Bounds::cube(3)?, OptionPolicy)?;
    store.set(0, 0, 0, Some(r1))?;
    store.set(1, 1, 1, Some(s1))?;
    store.set(2, 2, 2, Some(c1))?;
    println!(
        "{}",
        store.render_with(|cell| cell.map(|f| f.to_string()).unwrap_or_default())
    );
    println!("\n{DELIM}\n");

    println!("The content of the stack is:\n");
    let mut stack = SimpleStack::new();
    stack.push(r1);
    stack.push(s1);
    stack.push(c1);
    while let Some(f) = stack.pop() {
        println!("{f}");
    }
    Ok(())
}
