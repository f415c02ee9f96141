use terminal_size::{terminal_size, Width};

use crate::constant::DEFAULT_HELP_WIDTH;
use crate::parser::interface::UserInterface;

/// A type-erased summary of one declaration, recorded by the parsing session in
/// resolution order and consumed by the help renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationInfo {
    name: String,
    short: Option<char>,
    description: Option<String>,
    is_flag: bool,
    required: bool,
}

impl DeclarationInfo {
    pub(crate) fn new(
        name: String,
        short: Option<char>,
        description: Option<String>,
        is_flag: bool,
        required: bool,
    ) -> Self {
        Self {
            name,
            short,
            description,
            is_flag,
            required,
        }
    }

    /// The long name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The short name, when one was declared.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// The description, when one was set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether the declared value type is [`Flag`](crate::Flag).
    pub fn is_flag(&self) -> bool {
        self.is_flag
    }

    /// Whether the option is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    // The help listing key: `--name (-s) <NAME>`, where the short form and the value
    // placeholder each appear only when applicable.
    fn key(&self) -> String {
        let mut key = format!("--{name}", name = self.name);

        if let Some(short) = self.short {
            key.push_str(&format!(" (-{short})"));
        }

        if !self.is_flag {
            key.push_str(&format!(" <{}>", self.name.to_ascii_uppercase()));
        }

        key
    }
}

pub(crate) struct Printer {
    program: String,
    about: Option<String>,
    infos: Vec<DeclarationInfo>,
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal(
        program: String,
        about: Option<String>,
        infos: Vec<DeclarationInfo>,
    ) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(program, about, infos, terminal_width)
    }

    pub(crate) fn new(
        program: String,
        about: Option<String>,
        infos: Vec<DeclarationInfo>,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            program,
            about,
            infos,
            terminal_width,
        }
    }

    pub(crate) fn print_help(&self, user_interface: &(impl UserInterface + ?Sized)) {
        self.print_help_width(
            self.terminal_width.unwrap_or(DEFAULT_HELP_WIDTH),
            user_interface,
        );
    }

    pub(crate) fn print_help_width(
        &self,
        max_width: usize,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        for line in self.render(max_width) {
            user_interface.print(line);
        }
    }

    // Layout: usage line, the wrapped about message (when set), the `Options:` header,
    // then one entry per declaration in resolution order. Entries share a row with
    // their description (single-line mode) when the longest key stays under a third of
    // `max_width`; otherwise each key takes its own row with the description indented
    // underneath (stacked mode).
    pub(crate) fn render(&self, max_width: usize) -> Vec<String> {
        let mut lines = vec![format!("Usage: {program} [options]", program = self.program)];

        if let Some(about) = &self.about {
            lines.extend(wrap_lines(about, max_width));
        }

        lines.push("Options:".to_string());

        let keys: Vec<String> = self.infos.iter().map(DeclarationInfo::key).collect();
        let keys_max = keys.iter().map(String::len).max().unwrap_or(0);
        let one_line = keys_max < max_width / 3;

        for (info, key) in self.infos.iter().zip(keys) {
            let description = info.description().unwrap_or("");

            if one_line {
                let leading = format!("{key:keys_max$}  ");
                let wrapped = wrap_lines(description, max_width - keys_max - 2);

                if wrapped.is_empty() {
                    lines.push(leading);
                } else {
                    for (i, part) in wrapped.iter().enumerate() {
                        if i == 0 {
                            lines.push(format!("{leading}{part}"));
                        } else {
                            lines.push(format!("{:width$}{part}", "", width = keys_max + 2));
                        }
                    }
                }
            } else {
                lines.push(key);

                let indent = max_width / 20;
                for part in wrap_lines(description, max_width - indent) {
                    lines.push(format!("{:indent$}{part}", ""));
                }
            }
        }

        lines
    }
}

// Split on embedded line breaks, wrapping each line independently.
fn wrap_lines(text: &str, max_width: usize) -> Vec<String> {
    text.lines()
        .flat_map(|line| wrap_line(line, max_width))
        .collect()
}

// Greedy word packing. A word longer than `max_width` still lands alone on its own
// line; there is no mid-word splitting.
fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in line.split_whitespace() {
        if current.len() + word.len() + 1 <= max_width {
            if !current.is_empty() {
                current.push(' ');
            }

            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(current);
            }

            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
