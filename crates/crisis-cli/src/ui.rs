use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let stdout_tty = std::io::stdout().is_terminal();
    let stderr_tty = std::io::stderr().is_terminal();
    let _ = UI_PREFS.set(resolve(
        flags,
        stdout_tty,
        stderr_tty,
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("COLUMNS").ok().as_deref(),
    ));
}

fn resolve(
    flags: &GlobalFlags,
    stdout_tty: bool,
    stderr_tty: bool,
    no_color: bool,
    columns: Option<&str>,
) -> UiPrefs {
    let table = flags.format == OutputFormat::Table;
    let table_color = match flags.color {
        ColorMode::Always => table,
        ColorMode::Never => false,
        ColorMode::Auto => stdout_tty && table && !flags.quiet && !no_color,
    };

    // The spinner draws on stderr, so it never corrupts piped JSON.
    let progress = match flags.progress {
        ProgressMode::On => !flags.quiet,
        ProgressMode::Off => false,
        ProgressMode::Auto => stderr_tty && !flags.quiet && flags.format != OutputFormat::Json,
    };

    let term_width = columns
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    UiPrefs {
        table_color,
        progress,
        term_width,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        progress: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

    fn flags(format: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet: false,
            verbose: false,
            color: ColorMode::Auto,
            progress: ProgressMode::Auto,
        }
    }

    #[test]
    fn auto_color_needs_table_on_a_tty() {
        assert!(resolve(&flags(OutputFormat::Table), true, true, false, None).table_color);
        assert!(!resolve(&flags(OutputFormat::Table), false, true, false, None).table_color);
        assert!(!resolve(&flags(OutputFormat::Json), true, true, false, None).table_color);
        assert!(!resolve(&flags(OutputFormat::Table), true, true, true, None).table_color);
    }

    #[test]
    fn forced_modes_override_detection() {
        let mut forced = flags(OutputFormat::Table);
        forced.color = ColorMode::Always;
        forced.progress = ProgressMode::On;
        let prefs = resolve(&forced, false, false, true, None);
        assert!(prefs.table_color);
        assert!(prefs.progress);

        forced.quiet = true;
        assert!(!resolve(&forced, false, false, true, None).progress);
    }

    #[test]
    fn auto_progress_is_off_for_json() {
        assert!(!resolve(&flags(OutputFormat::Json), true, true, false, None).progress);
        assert!(resolve(&flags(OutputFormat::Table), true, true, false, None).progress);
    }

    #[test]
    fn narrow_or_garbage_columns_are_ignored() {
        let table = flags(OutputFormat::Table);
        assert_eq!(resolve(&table, true, true, false, Some("120")).term_width, Some(120));
        assert_eq!(resolve(&table, true, true, false, Some("20")).term_width, None);
        assert_eq!(resolve(&table, true, true, false, Some("wide")).term_width, None);
    }
}
