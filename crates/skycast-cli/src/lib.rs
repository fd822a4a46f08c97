use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use skycast_config::{AppConfig, OutputFormat};
use skycast_core::{aggregate, DailySummary, ForecastResponse, IntervalSample, UvEstimate};
use tracing::{debug, info};

const ABOUT: &str = "Daily forecast summaries from a 3-hour forecast feed";

const LONG_ABOUT: &str = "
Reads a 5-day / 3-hour forecast payload (as returned by the provider's forecast endpoint)
and reduces it to one summary per UTC calendar day: high/low temperature, mean humidity and
wind, peak precipitation chance, dominant condition and the icon closest to noon.

Settings are read from SKYCAST_CONFIG (default skycast.toml); flags override them.
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Table,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Table => OutputFormat::Table,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "skycast", version, about = ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[arg(help = "Forecast payload file, '-' or absent for stdin")]
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, help = "Output format")]
    pub format: Option<FormatArg>,

    #[arg(long, help = "Pretty-print JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Emit at most this many days")]
    pub days: Option<usize>,

    #[arg(long, help = "Input is a JSON array of interval samples rather than a provider payload")]
    pub samples: bool,
}

/// Effective settings after layering flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub pretty: bool,
    pub max_days: Option<usize>,
    pub raw_samples: bool,
}

impl Settings {
    pub fn resolve(args: &Args, cfg: &AppConfig) -> Self {
        Self {
            format: args.format.map(Into::into).unwrap_or_else(|| cfg.output_format()),
            pretty: args.pretty || cfg.pretty(),
            max_days: args.days.or_else(|| cfg.max_days()),
            raw_samples: args.samples,
        }
    }
}

/// Open the input named on the command line, falling back to stdin
pub fn open_input(path: Option<&PathBuf>) -> Result<Box<dyn Read>> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            let file =
                File::open(p).with_context(|| format!("Failed to open {}", p.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

/// Decode interval samples from either input shape
pub fn read_samples<R: Read>(input: R, raw_samples: bool) -> Result<Vec<IntervalSample>> {
    if raw_samples {
        return serde_json::from_reader(input).context("Failed to decode interval samples");
    }

    let response = ForecastResponse::from_reader(input).context("Failed to decode forecast")?;
    if let Some(city) = &response.city {
        debug!(
            city = %city.name,
            country = city.country.as_deref().unwrap_or("-"),
            utc_offset_seconds = city.timezone.unwrap_or(0),
            entries = response.list.len(),
            "Decoded forecast"
        );
    }
    response
        .into_samples()
        .context("Failed to convert forecast entries")
}

/// Render summaries as JSON
pub fn render_json(summaries: &[DailySummary], pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(summaries)?
    } else {
        serde_json::to_string(summaries)?
    };
    Ok(text)
}

/// Render summaries as a fixed-width text table
pub fn render_table(summaries: &[DailySummary]) -> String {
    let mut out = format!(
        "{:<10}  {:<3}  {:>5}  {:>5}  {:>4}  {:>4}  {:>4}  {:<12}  {:<4}  {}\n",
        "DATE", "DAY", "HIGH", "LOW", "HUM", "WIND", "POP", "CONDITION", "ICON", "UV"
    );

    for s in summaries {
        let condition = format!("{} ({})", s.condition(), s.dominant_condition_id);
        let uv = UvEstimate::from_condition_id(s.dominant_condition_id);
        out.push_str(&format!(
            "{:<10}  {:<3}  {:>5.1}  {:>5.1}  {:>3}%  {:>4.1}  {:>3.0}%  {:<12}  {:<4}  {} ({})\n",
            s.calendar_date.format("%Y-%m-%d").to_string(),
            s.calendar_date.format("%a").to_string(),
            s.max_temperature,
            s.min_temperature,
            s.average_humidity_percent,
            s.average_wind_speed,
            s.peak_precipitation_probability * 100.0,
            condition,
            s.representative_icon_code,
            uv.value,
            uv.level,
        ));
    }

    out
}

/// Aggregate the input and write the rendered summaries to `out`.
///
/// Returns the number of days written.
pub fn run<R: Read, W: Write>(settings: &Settings, input: R, out: &mut W) -> Result<usize> {
    let samples = read_samples(input, settings.raw_samples)?;
    let mut summaries = aggregate(&samples).context("Failed to aggregate forecast")?;

    if let Some(max) = settings.max_days {
        summaries.truncate(max);
    }

    info!(
        samples = samples.len(),
        days = summaries.len(),
        "Forecast aggregated"
    );

    let rendered = match settings.format {
        OutputFormat::Json => {
            let mut text = render_json(&summaries, settings.pretty)?;
            text.push('\n');
            text
        }
        OutputFormat::Table => render_table(&summaries),
    };
    out.write_all(rendered.as_bytes())
        .context("Failed to write output")?;

    Ok(summaries.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from(["skycast", "--format", "table", "--days", "2"]);
        let cfg = AppConfig::default();
        let settings = Settings::resolve(&args, &cfg);

        assert_eq!(settings.format, OutputFormat::Table);
        assert_eq!(settings.max_days, Some(2));
        assert!(!settings.pretty);
        assert!(!settings.raw_samples);
    }

    #[test]
    fn config_fills_missing_flags() {
        let args = Args::parse_from(["skycast", "forecast.json"]);
        let cfg = AppConfig {
            output: Some(skycast_config::OutputConfig {
                format: Some(OutputFormat::Table),
                pretty: Some(true),
            }),
            forecast: Some(skycast_config::ForecastConfig { max_days: Some(4) }),
            logging: None,
        };
        let settings = Settings::resolve(&args, &cfg);

        assert_eq!(args.input, Some(PathBuf::from("forecast.json")));
        assert_eq!(settings.format, OutputFormat::Table);
        assert!(settings.pretty);
        assert_eq!(settings.max_days, Some(4));
    }

    #[test]
    fn empty_sample_array_renders_empty_json() {
        let settings = Settings {
            format: OutputFormat::Json,
            pretty: false,
            max_days: None,
            raw_samples: true,
        };
        let mut out = Vec::new();
        let days = run(&settings, "[]".as_bytes(), &mut out).unwrap();

        assert_eq!(days, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }

    #[test]
    fn dash_reads_stdin() {
        assert!(open_input(Some(&PathBuf::from("-"))).is_ok());
        assert!(open_input(None).is_ok());
    }
}
