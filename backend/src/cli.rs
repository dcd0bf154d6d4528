//! Minimal CLI parsing for startup overrides.

use std::env;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Use the in-process store regardless of STORE_BACKEND
    pub memory: bool,
    /// Print the GraphQL SDL and exit
    pub print_schema: bool,
    pub port_override: Option<u16>,
}

impl CliOptions {
    pub fn from_args() -> Self {
        Self::parse(env::args().skip(1))
    }

    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = CliOptions::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--memory" => options.memory = true,
                "--print-schema" => options.print_schema = true,
                "--port" => {
                    if let Some(value) = args.next() {
                        options.port_override = value.parse().ok();
                    }
                }
                _ if arg.starts_with("--port=") => {
                    if let Some(value) = arg.split_once('=').map(|(_, v)| v) {
                        options.port_override = value.parse().ok();
                    }
                }
                _ => {}
            }
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliOptions {
        CliOptions::parse(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse(&[]), CliOptions::default());
    }

    #[test]
    fn test_flags() {
        let options = parse(&["--memory", "--print-schema"]);
        assert!(options.memory);
        assert!(options.print_schema);
    }

    #[test]
    fn test_port_forms() {
        assert_eq!(parse(&["--port", "9000"]).port_override, Some(9000));
        assert_eq!(parse(&["--port=9001"]).port_override, Some(9001));
        assert_eq!(parse(&["--port", "nope"]).port_override, None);
        assert_eq!(parse(&["--port"]).port_override, None);
    }
}
