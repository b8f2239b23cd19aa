use anyhow::Result;
use cityweather_core::{OpenWeatherProvider, Units, WeatherProvider, WeatherRequest, secrets};
use clap::Parser;
use std::{
    io::{self, Write},
    path::PathBuf,
};
use tracing::debug;

use crate::output::{self, NoopScreen, Screen, TerminalScreen};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "cityweather",
    version,
    about = "Gets weather and temperature info for a named city"
)]
pub struct Cli {
    /// City name; several words are joined with spaces.
    #[arg(value_name = "CITY", required = true, num_args = 1..)]
    pub city: Vec<String>,

    /// Display the temperature in imperial units.
    #[arg(short, long)]
    pub imperial: bool,

    /// INI file holding the API key (default: ./secrets.ini).
    #[arg(short, long, value_name = "PATH")]
    pub secrets: Option<PathBuf>,

    /// Do not clear the terminal before printing.
    #[arg(long)]
    pub no_clear: bool,
}

impl Cli {
    pub fn units(&self) -> Units {
        Units::from_imperial(self.imperial)
    }

    pub fn request(&self) -> WeatherRequest {
        WeatherRequest::from_words(self.city.as_slice(), self.units())
    }

    pub async fn run(self) -> Result<()> {
        let api_key = secrets::load_api_key(self.secrets.as_deref())?;
        let provider = OpenWeatherProvider::new(api_key);

        let mut screen: Box<dyn Screen> =
            if self.no_clear { Box::new(NoopScreen) } else { Box::new(TerminalScreen) };

        self.show(&provider, screen.as_mut(), &mut io::stdout()).await
    }

    async fn show<W: Write>(
        &self,
        provider: &dyn WeatherProvider,
        screen: &mut dyn Screen,
        out: &mut W,
    ) -> Result<()> {
        let request = self.request();
        debug!(?request, "parsed arguments");

        let report = provider.current_weather(&request).await?;
        output::present(screen, out, &report, request.units)
    }
}
