use clap::{Parser, ValueEnum};

use ptdx_modal::config::AppConfig;

use crate::demo::Section;

#[derive(Parser, Debug)]
#[command(
    name = "ptdx-modal-demo",
    version,
    about = "Showcase of the ptdx-modal dialog component"
)]
pub struct Args {
    /// Theme name (e.g., "Catppuccin Latte")
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Timer ticks per second
    #[arg(long)]
    pub tick_rate: Option<f64>,

    /// Frames per second
    #[arg(long)]
    pub frame_rate: Option<f64>,

    /// Start with one of the example dialogs open
    #[arg(short, long, value_enum)]
    pub open: Option<DemoModal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoModal {
    Default,
    Variant,
    Custom,
}

impl From<DemoModal> for Section {
    fn from(modal: DemoModal) -> Self {
        match modal {
            DemoModal::Default => Self::Default,
            DemoModal::Variant => Self::Variant,
            DemoModal::Custom => Self::Custom,
        }
    }
}

impl Args {
    /// Command-line values win over the config file.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(theme) = &self.theme {
            config.theme.name.clone_from(theme);
        }
        if let Some(rate) = self.tick_rate.filter(|rate| *rate > 0.0) {
            config.ui.tick_rate = rate;
        }
        if let Some(rate) = self.frame_rate.filter(|rate| *rate > 0.0) {
            config.ui.frame_rate = rate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let args = Args::parse_from([
            "ptdx-modal-demo",
            "--theme",
            "Catppuccin Latte",
            "--tick-rate",
            "30",
            "--open",
            "variant",
        ]);
        let mut config = AppConfig::default();
        args.apply(&mut config);
        assert_eq!(config.theme.name, "Catppuccin Latte");
        assert!((config.ui.tick_rate - 30.0).abs() < f64::EPSILON);
        assert!((config.ui.frame_rate - 60.0).abs() < f64::EPSILON);
        assert_eq!(args.open, Some(DemoModal::Variant));
    }

    #[test]
    fn test_non_positive_rates_are_ignored() {
        let args = Args::parse_from(["ptdx-modal-demo", "--frame-rate", "0"]);
        let mut config = AppConfig::default();
        args.apply(&mut config);
        assert!((config.ui.frame_rate - 60.0).abs() < f64::EPSILON);
    }
}
