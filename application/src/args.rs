//! [`Args`] definitions.

use clap::Parser;
use derive_more::{Display, Error, From};
use service::{
    read::sale::{Field, InvalidSortField},
    view::{self, Action, RawParameters, ValidationError},
};

/// Sales dashboard of the recorded sales.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Text to search in client names.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Status to filter by (`paid`, `pending` or `cancelled`).
    #[arg(short, long)]
    pub status: Option<String>,

    /// Period to filter by (`all`, `today`, `week`, `month` or `quarter`).
    #[arg(long)]
    pub period: Option<String>,

    /// Field to sort by (`id`, `client`, `amount`, `status` or `date`).
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Direction to sort in (`asc` or `desc`).
    #[arg(long)]
    pub sort_dir: Option<String>,

    /// Number of the page to show.
    #[arg(short, long)]
    pub page: Option<String>,

    /// Field to toggle sorting by, after the other parameters are applied.
    #[arg(long, value_name = "FIELD")]
    pub toggle_sort: Option<String>,

    /// Reset all the filters, after the other parameters are applied.
    #[arg(long)]
    pub reset: bool,

    /// Show the overview of the most recent sales instead of the dashboard.
    #[arg(long)]
    pub overview: bool,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }

    /// Returns [`RawParameters`] provided in these [`Args`].
    #[must_use]
    pub fn raw_parameters(&self) -> RawParameters {
        RawParameters {
            query: self.query.clone(),
            status: self.status.clone(),
            period: self.period.clone(),
            sort_by: self.sort_by.clone(),
            sort_dir: self.sort_dir.clone(),
            page: self.page.clone(),
        }
    }

    /// Resolves [`view::Parameters`] out of these [`Args`], applying the
    /// requested [`Action`]s on top of them.
    ///
    /// # Errors
    ///
    /// If any of the provided parameters is invalid.
    pub fn parameters(&self) -> Result<view::Parameters, ParametersError> {
        let mut parameters =
            view::Parameters::try_from(self.raw_parameters())?;
        if let Some(field) = &self.toggle_sort {
            parameters =
                parameters.apply(Action::ToggleSort(Field::parse(field)?));
        }
        if self.reset {
            parameters = parameters.apply(Action::ResetFilters);
        }
        Ok(parameters)
    }
}

/// Error of resolving [`view::Parameters`] out of [`Args`].
#[derive(Debug, Display, Error, From)]
pub enum ParametersError {
    /// Provided parameters are invalid.
    #[display("invalid parameters: {_0}")]
    Invalid(ValidationError),

    /// Field to toggle sorting by is unsupported.
    #[display("invalid `--toggle-sort`: {_0}")]
    Toggle(InvalidSortField),
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;
    use service::read::sale::{Direction, Field, Sort};

    use super::{Args, ParametersError};

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(["sales"].into_iter().chain(extra.iter().copied()))
            .unwrap()
    }

    #[test]
    fn collects_raw_parameters() {
        let args = Args::try_parse_from([
            "sales",
            "--query",
            "acme",
            "--sort-by",
            "amount",
            "--sort-dir",
            "desc",
            "--page",
            "2",
            "--reset",
        ])
        .unwrap();

        let raw = args.raw_parameters();

        assert_eq!(args.config, "config.toml");
        assert_eq!(raw.query.as_deref(), Some("acme"));
        assert_eq!(raw.status, None);
        assert_eq!(raw.sort_by.as_deref(), Some("amount"));
        assert_eq!(raw.sort_dir.as_deref(), Some("desc"));
        assert_eq!(raw.page.as_deref(), Some("2"));
        assert!(args.reset);
        assert!(!args.overview);
    }

    #[test]
    fn applies_actions_after_parameters() {
        let parameters =
            args(&["--sort-by", "amount", "--toggle-sort", "amount"])
                .parameters()
                .unwrap();
        assert_eq!(
            parameters.sort_direction_of(Field::Amount),
            Some(Direction::Desc),
        );

        let parameters = args(&["--status", "paid", "--page", "3", "--reset"])
            .parameters()
            .unwrap();
        assert!(!parameters.has_active_filters());
        assert_eq!(parameters.sort(), Sort::MOST_RECENT);
        assert_eq!(parameters.page().get(), 3);
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert!(matches!(
            args(&["--period", "decade"]).parameters(),
            Err(ParametersError::Invalid(_)),
        ));
        assert!(matches!(
            args(&["--toggle-sort", "price"]).parameters(),
            Err(ParametersError::Toggle(_)),
        ));
    }
}
