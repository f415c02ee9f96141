use minarg::{help, resolve, CommandLineParser, Declaration, Flag, ParseError};

#[test]
fn session_round_trip() {
    let tokens: Vec<String> = ["prog", "--length", "5", "-n"]
        .iter()
        .map(|token| token.to_string())
        .collect();
    let mut parser = CommandLineParser::new(tokens);

    let length = parser
        .parse(
            Declaration::<u8>::with_short('l', "length")
                .description("The length of the run.")
                .default(1),
        )
        .unwrap();
    let no_description = parser
        .parse(Declaration::<Flag>::with_short('n', "no-description"))
        .unwrap();
    let message = parser
        .parse(
            Declaration::<String>::new("message")
                .description("The message to be published.")
                .default("Hello, world!".to_string()),
        )
        .unwrap();
    let show_help = parser.parse(help()).unwrap();

    assert_eq!(length.value(), Some(&5));
    assert_eq!(no_description.value(), Some(&Flag::TRUE));
    assert_eq!(message.value(), Some(&"Hello, world!".to_string()));
    assert_eq!(show_help.value(), Some(&Flag::FALSE));

    assert_eq!(
        parser.render_help(80),
        vec![
            "Usage: prog [options]".to_string(),
            "Options:".to_string(),
            "--length (-l) <LENGTH>  The length of the run.".to_string(),
            "--no-description (-n)   ".to_string(),
            "--message <MESSAGE>     The message to be published.".to_string(),
            "--help (-h)             Show help message.".to_string(),
        ]
    );
}

#[test]
fn session_help_requested() {
    let mut parser = CommandLineParser::new(vec!["prog".to_string(), "-h".to_string()]);

    let show_help = parser.parse(help()).unwrap();

    assert_eq!(show_help.value(), Some(&Flag::TRUE));
}

// The expected top-level treatment of a failure: surface the error, print it, exit
// non-zero. The library's part is the error value and its message.
#[test]
fn failure_messages() {
    let length = Declaration::<u8>::with_short('l', "length").default(1);

    let error = resolve(&["--length"], &length).unwrap_err();
    assert_eq!(error.to_string(), "argument 'length' requires a value.");

    let error = resolve(&["--length", "banana"], &length).unwrap_err();
    assert_eq!(
        error.to_string(),
        "failed to parse the argument 'length': cannot convert 'banana' to u8."
    );

    let required = Declaration::<u8>::new("length").default(1).required(true);
    let error = resolve::<u8, &str>(&[], &required).unwrap_err();
    assert_eq!(error, ParseError::RequiredMissing("length".to_string()));
    assert_eq!(error.to_string(), "argument 'length' is required.");
}

#[test]
fn last_occurrence_wins() {
    let length = Declaration::<u8>::new("length");

    let result = resolve(&["--length", "1", "--length", "2"], &length).unwrap();

    assert_eq!(result, Some(2));
}
