use crate::time::Date;

pub struct Config {
    /// Skips the start-up banner.
    pub no_banner: bool,
    /// Output reduction level. `0` prints everything, higher values drop decoration.
    pub quiet: u8,
    /// Echoes every command read from a script before executing it.
    pub echo: bool,
    /// Date the clock starts on.
    pub start_date: Date,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            echo: true,
            start_date: Date::default(),
        }
    }
}
