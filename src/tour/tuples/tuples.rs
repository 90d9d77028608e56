/// Runs the pair/tuple walkthrough, printing to stdout.
pub fn demo() {
    println!("\n[Tuples]\n");

    // A pair is just a two-element tuple; fields are accessed by position.
    let pair = ("Bill", 38);
    println!("{} is {}", pair.0, pair.1);

    // Arity isn't limited to two. Positional access still works at any size, though by the time
    // the positions need explaining, a struct with named fields is usually the better call.
    let person = ("Bill".to_owned(), 38_u32, 6.5_f64);
    println!(
        "{} is {} years old and {:.1} feet tall",
        person.0, person.1, person.2
    );

    // The nicer way to consume a multi-value return: destructure it straight into named local
    // bindings.
    let (name, age, height) = measurements();
    println!("Also {name} is {age} years old and {height:.1} feet tall");
}

/// Returns a (name, age, height) triple - a function that needs to hand back several values
/// without anyone defining a struct for them.
pub fn measurements() -> (String, u32, f64) {
    ("Sam".to_owned(), 14, 5.2)
}
