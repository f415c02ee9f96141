use minarg::{help, CommandLineParser, Declaration, Flag, ParseError};

fn main() {
    let mut parser = CommandLineParser::from_env().about(
        "An example of a declaration-at-a-time parsing session. \
         Declare each option, parse it, then read the typed value.",
    );

    if let Err(error) = run(&mut parser) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run(parser: &mut CommandLineParser) -> Result<(), ParseError> {
    let help_width = parser.parse(
        Declaration::<u16>::with_short('w', "help-width")
            .description(
                "The width of the help message.\n\
                 Descriptions may span multiple lines; each line wraps independently.",
            )
            .default(80),
    )?;
    let quiet = parser.parse(
        Declaration::<Flag>::with_short('q', "quiet").description("Suppress the message."),
    )?;
    let length = parser.parse(
        Declaration::<u8>::with_short('l', "length")
            .description("The length of the run.")
            .default(1),
    )?;
    let message = parser.parse(
        Declaration::<String>::new("message")
            .description("The message to be published.")
            .default("Hello, world!".to_string()),
    )?;
    let show_help = parser.parse(help())?;

    if show_help.value() == Some(&Flag::TRUE) {
        let width = help_width.value().expect("help-width has a default");
        parser.show_help_width(usize::from(*width));
        return Ok(());
    }

    if quiet.value() == Some(&Flag::TRUE) {
        return Ok(());
    }

    println!(
        "Length: {length}",
        length = length.value().expect("length has a default")
    );
    println!(
        "Message: {message}",
        message = message.value().expect("message has a default")
    );
    Ok(())
}
