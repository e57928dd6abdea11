//! Process command implementation

use crate::config::{load_config, load_model};
use crate::input::{resolve_inputs, InputSource};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use sayable_core::config::{TimeStyle, TimeZero};
use sayable_core::{insert_tags, Classifier, Config, Normalizer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", default_value = "-")]
    pub input: Vec<String>,

    /// Output file (default: stdout, also `-`)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file (`.json`, otherwise TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reaction model snapshot (JSON); defaults to the built-in model
    #[arg(short, long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Do not insert reaction tags
    #[arg(long)]
    pub no_tags: bool,

    /// Override the clock reading style
    #[arg(long, value_enum)]
    pub time_style: Option<TimeStyleArg>,

    /// Override how whole hours are read
    #[arg(long, value_enum)]
    pub time_zero: Option<TimeZeroArg>,

    /// Do not read "a m" / "p m" after 12-hour times
    #[arg(long)]
    pub no_am_pm: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Processed text, one newline after each document
    Text,
    /// JSON array of `{source, text}` objects
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TimeStyleArg {
    #[value(name = "12h")]
    TwelveHour,
    #[value(name = "24h")]
    TwentyFourHour,
}

impl From<TimeStyleArg> for TimeStyle {
    fn from(arg: TimeStyleArg) -> Self {
        match arg {
            TimeStyleArg::TwelveHour => TimeStyle::TwelveHour,
            TimeStyleArg::TwentyFourHour => TimeStyle::TwentyFourHour,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TimeZeroArg {
    Oclock,
    Hundred,
}

impl From<TimeZeroArg> for TimeZero {
    fn from(arg: TimeZeroArg) -> Self {
        match arg {
            TimeZeroArg::Oclock => TimeZero::Oclock,
            TimeZeroArg::Hundred => TimeZero::Hundred,
        }
    }
}

/// One finished document
#[derive(Debug)]
struct Processed {
    source: String,
    text: String,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let config = self.resolve_config()?;
        let model = load_model(self.model.as_deref())?;
        let inputs = resolve_inputs(&self.input)?;
        log::info!("Processing {} input(s)", inputs.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(inputs.len() as u64);

        let documents = process_documents(&inputs, &config, &model, &progress);
        progress.finish();
        let documents = documents?;

        self.write_output(&documents)?;
        log::info!("Processing complete");
        Ok(())
    }

    /// Load the configuration file and apply command-line overrides
    fn resolve_config(&self) -> Result<Config> {
        let mut config = load_config(self.config.as_deref())?;

        if self.no_tags {
            config.tagger_enabled = false;
        }
        if let Some(style) = self.time_style {
            config.time_style = style.into();
        }
        if let Some(zero) = self.time_zero {
            config.time_zero = zero.into();
        }
        if self.no_am_pm {
            config.time_include_am_pm = false;
        }

        if let Err(e) = config.validate() {
            log::warn!("Configuration problem: {e}");
        }
        Ok(config)
    }

    fn write_output(&self, documents: &[Processed]) -> Result<()> {
        let writer: Box<dyn Write + Send + Sync> = match self.output.as_deref() {
            Some(path) if path != Path::new("-") => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            _ => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        for document in documents {
            formatter.format_document(&document.source, &document.text)?;
        }
        formatter.finish()
    }
}

/// Normalize and tag every input in parallel, keeping input order
fn process_documents<C>(
    inputs: &[InputSource],
    config: &Config,
    classifier: &C,
    progress: &ProgressReporter,
) -> Result<Vec<Processed>>
where
    C: Classifier + ?Sized,
{
    let normalizer = Normalizer::new(config);

    inputs
        .par_iter()
        .map(|input| -> Result<Processed> {
            let source = input.to_string();
            let raw = input.read()?;
            let text = insert_tags(&normalizer.normalize(&raw), classifier, config);

            log::debug!("Processed {} ({} -> {} bytes)", source, raw.len(), text.len());
            progress.document_completed(&source);
            Ok(Processed { source, text })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sayable_core::ClassifierModel;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>, output: Option<PathBuf>) -> ProcessArgs {
        ProcessArgs {
            input,
            output,
            config: None,
            model: None,
            no_tags: false,
            time_style: None,
            time_zero: None,
            no_am_pm: false,
            format: OutputFormat::Text,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_overrides_apply_on_top_of_config() {
        let mut process = args(vec!["-".to_string()], None);
        process.no_tags = true;
        process.time_style = Some(TimeStyleArg::TwentyFourHour);
        process.time_zero = Some(TimeZeroArg::Hundred);
        process.no_am_pm = true;

        let config = process.resolve_config().unwrap();
        assert!(!config.tagger_enabled);
        assert_eq!(config.time_style, TimeStyle::TwentyFourHour);
        assert_eq!(config.time_zero, TimeZero::Hundred);
        assert!(!config.time_include_am_pm);
    }

    #[test]
    fn test_documents_keep_input_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut inputs = Vec::new();
        for (index, text) in ["It is 9:05 pm.", "lol", "GPU MUCH FAST"].iter().enumerate() {
            let path = temp_dir.path().join(format!("{index}.txt"));
            fs::write(&path, text).unwrap();
            inputs.push(InputSource::File(path));
        }

        let config = Config::default();
        let model = ClassifierModel::builtin();
        let documents =
            process_documents(&inputs, &config, &model, &ProgressReporter::new(true)).unwrap();

        let texts: Vec<&str> = documents.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["It is nine oh five p m.", "lol", "g p u much fast"]
        );
    }

    #[test]
    fn test_execute_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "haha that was funny.").unwrap();

        args(vec![input.display().to_string()], Some(output.clone()))
            .execute()
            .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "[laugh] haha that was funny.\n"
        );
    }

    #[test]
    fn test_execute_fails_on_missing_input() {
        let result = args(vec!["/nonexistent/input.txt".to_string()], None).execute();
        assert!(result.is_err());
    }
}
