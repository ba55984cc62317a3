use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "N",
        help = "Page size, overrides the config file",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub limit: Option<u32>,

    #[arg(long, help = "Log each loaded page instead of drawing a terminal UI")]
    pub headless: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pokepager"]).unwrap();
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert_eq!(cli.limit, None);
        assert!(!cli.headless);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from(["pokepager", "--limit", "20", "--headless", "-t", "2"])
            .unwrap();
        assert_eq!(cli.limit, Some(20));
        assert!(cli.headless);
        assert_eq!(cli.tick_rate, 2.0);
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        assert!(Cli::try_parse_from(["pokepager", "--limit", "0"]).is_err());
    }
}
