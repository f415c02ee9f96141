//! Declaration-at-a-time parsing without a session: no accumulated help listing, just
//! the standalone resolvers.

use minarg::{resolve, Declaration, Flag, ParseError};

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ParseError> {
    let tokens: Vec<String> = std::env::args().collect();

    let length = resolve(
        &tokens,
        &Declaration::<u8>::with_short('l', "length").default(1),
    )?;

    // No default: resolves to `None` when absent, rather than failing.
    let message = resolve(&tokens, &Declaration::<String>::new("message"))?;

    // Required: failing at resolution time, rather than `None` at value-access time.
    let confirmed = resolve(
        &tokens,
        &Declaration::<Flag>::with_short('y', "yes").required(true),
    )?;

    println!("Length: {}", length.expect("length has a default"));
    match message {
        Some(message) => println!("Message: {message}"),
        None => println!("Message: (none)"),
    }
    println!("Confirmed: {}", confirmed.expect("--yes is required"));
    Ok(())
}
