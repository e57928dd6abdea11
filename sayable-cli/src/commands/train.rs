//! Train command implementation

use anyhow::{Context, Result};
use clap::Args;
use sayable_core::classifier::DEFAULT_ALPHA;
use sayable_core::{train_with_alpha, ClassifierModel};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the train command
#[derive(Debug, Args)]
pub struct TrainArgs {
    /// CSV file with a `text,label` header
    #[arg(short, long, value_name = "CSV", required = true)]
    pub data: PathBuf,

    /// Where to write the JSON model snapshot
    #[arg(short, long, value_name = "FILE", required = true)]
    pub out: PathBuf,

    /// Additive smoothing constant
    #[arg(short, long, default_value_t = DEFAULT_ALPHA)]
    pub alpha: f64,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// One CSV row; extra columns are ignored
#[derive(Debug, Deserialize)]
struct TrainingRow {
    #[serde(default)]
    text: String,
    #[serde(default)]
    label: String,
}

/// Read `(text, label)` pairs, skipping rows with an empty text or label
pub fn read_examples<R: Read>(reader: R) -> Result<Vec<(String, String)>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut examples = Vec::new();
    let mut skipped = 0usize;
    for (index, row) in csv_reader.deserialize::<TrainingRow>().enumerate() {
        let row = row.with_context(|| format!("Malformed CSV record {}", index + 1))?;
        if row.text.is_empty() || row.label.is_empty() {
            skipped += 1;
            continue;
        }
        examples.push((row.text, row.label));
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped} row(s) with an empty text or label");
    }
    Ok(examples)
}

impl TrainArgs {
    /// Execute the train command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, false);

        let file = fs::File::open(&self.data)
            .with_context(|| format!("Failed to open training data: {}", self.data.display()))?;
        let examples = read_examples(file)
            .with_context(|| format!("Failed to read training data: {}", self.data.display()))?;

        log::info!("Training on {} examples (alpha = {})", examples.len(), self.alpha);
        let model: ClassifierModel = train_with_alpha(&examples, self.alpha)
            .with_context(|| format!("No model trained from {}", self.data.display()))?;
        let json =
            serde_json::to_string_pretty(&model).context("Failed to serialize the model")?;
        fs::write(&self.out, json + "\n")
            .with_context(|| format!("Failed to write to {}", self.out.display()))?;

        println!("✓ Model trained successfully!");
        println!("  Examples: {}", examples.len());
        println!("  Labels: {}", model.labels().join(", "));
        println!("  Vocabulary: {} tokens", model.vocab().len());
        println!("  Output file: {}", self.out.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sayable_core::ClassifierError;
    use tempfile::TempDir;

    #[test]
    fn test_read_examples_skips_incomplete_rows() {
        let data = "text,label\n\
                    haha so good,laugh\n\
                    ,sigh\n\
                    \"well, fine\",sigh\n\
                    no label,\n";
        let examples = read_examples(data.as_bytes()).unwrap();
        assert_eq!(
            examples,
            vec![
                ("haha so good".to_string(), "laugh".to_string()),
                ("well, fine".to_string(), "sigh".to_string()),
            ]
        );
    }

    #[test]
    fn test_read_examples_ignores_extra_columns() {
        let data = "id,label,text\n1, gasp , oh no \n";
        let examples = read_examples(data.as_bytes()).unwrap();
        assert_eq!(examples, vec![("oh no".to_string(), "gasp".to_string())]);
    }

    #[test]
    fn test_execute_writes_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let data = temp_dir.path().join("train.csv");
        let out = temp_dir.path().join("model.json");
        fs::write(&data, "text,label\nhaha,laugh\nugh,groan\n").unwrap();

        let args = TrainArgs {
            data,
            out: out.clone(),
            alpha: 0.5,
            verbose: 0,
        };
        args.execute().unwrap();

        let model: ClassifierModel =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(model.labels(), ["groan".to_string(), "laugh".to_string()]);
        assert_eq!(model.alpha(), 0.5);
    }

    #[test]
    fn test_execute_rejects_empty_data() {
        let temp_dir = TempDir::new().unwrap();
        let data = temp_dir.path().join("train.csv");
        fs::write(&data, "text,label\n,\n").unwrap();

        let args = TrainArgs {
            data,
            out: temp_dir.path().join("model.json"),
            alpha: 1.0,
            verbose: 0,
        };
        let error = args.execute().unwrap_err();
        assert_eq!(
            error.downcast_ref::<ClassifierError>(),
            Some(&ClassifierError::EmptyTrainingSet)
        );
    }

    #[test]
    fn test_execute_rejects_bad_alpha() {
        let temp_dir = TempDir::new().unwrap();
        let data = temp_dir.path().join("train.csv");
        fs::write(&data, "text,label\nhaha,laugh\n").unwrap();

        let args = TrainArgs {
            data,
            out: temp_dir.path().join("model.json"),
            alpha: 0.0,
            verbose: 0,
        };
        assert!(args.execute().is_err());
    }
}
