use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "munzip")]
#[command(version)]
#[command(about = "List and extract entries from ZIP archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  munzip -l data.zip                      list entry names in data.zip\n  \
  munzip -x data.zip docs/a.txt out.txt   extract docs/a.txt to out.txt")]
pub struct Cli {
    /// List entry names, one per line
    #[arg(short = 'l', conflicts_with = "extract")]
    pub list: bool,

    /// Extract a single entry to OUTPUT
    #[arg(short = 'x', requires = "entry", requires = "output")]
    pub extract: bool,

    /// ZIP archive path
    #[arg(value_name = "ARCHIVE")]
    pub archive: String,

    /// Path of the entry inside the archive (extract mode)
    #[arg(value_name = "ENTRY")]
    pub entry: Option<String>,

    /// Destination file for the extracted entry (extract mode)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<String>,
}

/// One fully validated invocation. `Cli::action` returns `None` for any
/// argument combination that is not one of the two recognized forms.
pub enum Action<'a> {
    List {
        archive: &'a str,
    },
    Extract {
        archive: &'a str,
        entry: &'a str,
        output: &'a str,
    },
}

impl Cli {
    pub fn action(&self) -> Option<Action<'_>> {
        if self.list && self.entry.is_none() && self.output.is_none() {
            return Some(Action::List {
                archive: &self.archive,
            });
        }
        if self.extract {
            if let (Some(entry), Some(output)) = (&self.entry, &self.output) {
                return Some(Action::Extract {
                    archive: &self.archive,
                    entry,
                    output,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_invocation() {
        let cli = Cli::try_parse_from(["munzip", "-l", "a.zip"]).unwrap();
        assert!(matches!(
            cli.action(),
            Some(Action::List { archive: "a.zip" })
        ));
    }

    #[test]
    fn extract_invocation() {
        let cli = Cli::try_parse_from(["munzip", "-x", "a.zip", "b/c.txt", "out.txt"]).unwrap();
        match cli.action() {
            Some(Action::Extract {
                archive,
                entry,
                output,
            }) => {
                assert_eq!(archive, "a.zip");
                assert_eq!(entry, "b/c.txt");
                assert_eq!(output, "out.txt");
            }
            _ => panic!("expected extract action"),
        }
    }

    #[test]
    fn extract_requires_entry_and_output() {
        assert!(Cli::try_parse_from(["munzip", "-x", "a.zip"]).is_err());
        assert!(Cli::try_parse_from(["munzip", "-x", "a.zip", "b/c.txt"]).is_err());
    }

    #[test]
    fn flags_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["munzip", "-l", "-x", "a.zip", "e", "o"]).is_err());
    }

    #[test]
    fn bare_archive_is_not_an_action() {
        let cli = Cli::try_parse_from(["munzip", "a.zip"]).unwrap();
        assert!(cli.action().is_none());
    }

    #[test]
    fn list_with_extra_positionals_is_not_an_action() {
        let cli = Cli::try_parse_from(["munzip", "-l", "a.zip", "stray"]).unwrap();
        assert!(cli.action().is_none());
    }
}
