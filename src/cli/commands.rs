//! Command implementations for the textlens CLI.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;

use crate::analysis::count::count_words;
use crate::analysis::extract::{
    Extraction, count_emojis, extract_emails, extract_hashtags, extract_mentions, extract_urls,
};
use crate::analysis::frequency::{ngram_frequency, top_entries};
use crate::analysis::keyword::{calculate_keyword_density, count_keyword_occurrences, keyword_report};
use crate::analysis::normalize::normalize_whitespace;
use crate::analysis::similarity::SimilarityReport;
use crate::analysis::stats::TextStats;
use crate::analysis::stop::remove_stop_words;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalysisConfig;
use crate::error::{Result, TextLensError};

const STDIN_SOURCE: &str = "<stdin>";

/// Execute a CLI command and print its output.
pub fn execute_command(args: TextLensArgs) -> Result<()> {
    let output = run_command(&args)?;
    println!("{output}");
    Ok(())
}

/// Run a CLI command and return its rendered output.
pub fn run_command(args: &TextLensArgs) -> Result<String> {
    let config = load_config(args)?;

    match &args.command {
        Command::Stats(stats_args) => show_stats(stats_args, &config, args),
        Command::Frequency(freq_args) => show_frequency(freq_args, &config, args),
        Command::Density(density_args) => show_density(density_args, &config, args),
        Command::Extract(extract_args) => extract_patterns(extract_args, args),
        Command::Normalize(input) => normalize_text(input, args),
        Command::Similarity(similarity_args) => compare_texts(similarity_args, args),
        Command::StopWords(input) => strip_stop_words(input, args),
    }
}

/// Load the configuration file named on the command line, or the defaults.
fn load_config(args: &TextLensArgs) -> Result<AnalysisConfig> {
    match &args.config {
        Some(path) => AnalysisConfig::from_file(path),
        None => Ok(AnalysisConfig::default()),
    }
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

/// Read a whole input, from stdin when `path` is absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if !is_stdin(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            log::debug!("Read {} bytes from {}", text.len(), path.display());
            Ok(text)
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            log::debug!("Read {} bytes from stdin", text.len());
            Ok(text)
        }
    }
}

fn source_name(path: &Path) -> String {
    if is_stdin(path) {
        STDIN_SOURCE.to_string()
    } else {
        path.display().to_string()
    }
}

/// Show statistics for each input, analysing files in parallel.
fn show_stats(args: &StatsArgs, config: &AnalysisConfig, cli_args: &TextLensArgs) -> Result<String> {
    let mut config = config.clone();
    if let Some(wpm) = args.reading_wpm {
        config.reading_wpm = wpm;
    }
    if let Some(wpm) = args.speaking_wpm {
        config.speaking_wpm = wpm;
    }
    config.validate()?;

    let results = if args.files.is_empty() {
        let text = read_input(None)?;
        vec![SourceStats {
            source: STDIN_SOURCE.to_string(),
            stats: TextStats::with_rates(&text, config.reading_wpm, config.speaking_wpm),
        }]
    } else {
        stats_for_files(&args.files, &config)?
    };

    if results.len() == 1 {
        render_result("Text statistics", &results[0], cli_args)
    } else {
        render_result("Text statistics", &results, cli_args)
    }
}

/// Analyse every file in parallel, keeping argument order.
///
/// Stdin (`-`) may appear at most once.
pub fn stats_for_files(files: &[PathBuf], config: &AnalysisConfig) -> Result<Vec<SourceStats>> {
    if files.iter().filter(|path| is_stdin(path)).count() > 1 {
        return Err(TextLensError::invalid_argument(
            "stdin (`-`) can only be given once",
        ));
    }

    log::info!("Analysing {} inputs", files.len());
    files
        .par_iter()
        .map(|path| -> Result<SourceStats> {
            let text = read_input(Some(path.as_path()))?;
            Ok(SourceStats {
                source: source_name(path),
                stats: TextStats::with_rates(&text, config.reading_wpm, config.speaking_wpm),
            })
        })
        .collect()
}

/// Show a ranked word or n-gram frequency table.
fn show_frequency(
    args: &FrequencyArgs,
    config: &AnalysisConfig,
    cli_args: &TextLensArgs,
) -> Result<String> {
    let ngram_size = args.ngram.unwrap_or(config.ngram_size);
    if ngram_size == 0 {
        return Err(TextLensError::invalid_argument("--ngram must be at least 1"));
    }
    let case_sensitive = args.case_sensitive_or(config.case_sensitive);
    let top = args.top.unwrap_or(config.top);

    let text = read_input(args.input.file.as_deref())?;
    let frequency = ngram_frequency(&text, ngram_size, case_sensitive);

    let result = FrequencyResult {
        ngram_size,
        unique_terms: frequency.len(),
        entries: top_entries(&frequency, top),
    };
    render_result("Frequency", &result, cli_args)
}

/// Show the density of one keyword, or the ranked keyword table.
fn show_density(
    args: &DensityArgs,
    config: &AnalysisConfig,
    cli_args: &TextLensArgs,
) -> Result<String> {
    let text = read_input(args.input.file.as_deref())?;

    if let Some(keyword) = &args.keyword {
        let result = DensityResult {
            keyword: keyword.clone(),
            occurrences: count_keyword_occurrences(&text, keyword),
            total_words: count_words(&text),
            density: calculate_keyword_density(&text, keyword),
        };
        return render_result("Keyword density", &result, cli_args);
    }

    let mut options = config.keyword_options();
    if let Some(n) = args.ngram {
        options.ngram_size = n;
    }
    options.include_stop_words = args.include_stop_words_or(options.include_stop_words);
    if let Some(min) = args.min_word_length {
        options.min_word_length = min;
    }
    if let Some(top) = args.top {
        options.limit = top;
    }
    if options.ngram_size == 0 {
        return Err(TextLensError::invalid_argument("--ngram must be at least 1"));
    }

    render_result("Keyword density", &keyword_report(&text, &options), cli_args)
}

/// Extract the requested kind of pattern.
fn extract_patterns(args: &ExtractArgs, cli_args: &TextLensArgs) -> Result<String> {
    let text = read_input(args.input.file.as_deref())?;

    let result = match args.kind {
        ExtractKind::Urls => ExtractResult {
            urls: Some(extract_urls(&text)),
            ..ExtractResult::default()
        },
        ExtractKind::Hashtags => ExtractResult {
            hashtags: Some(extract_hashtags(&text)),
            ..ExtractResult::default()
        },
        ExtractKind::Mentions => ExtractResult {
            mentions: Some(extract_mentions(&text)),
            ..ExtractResult::default()
        },
        ExtractKind::Emails => ExtractResult {
            emails: Some(extract_emails(&text)),
            ..ExtractResult::default()
        },
        ExtractKind::Emojis => ExtractResult {
            emoji_count: Some(count_emojis(&text)),
            ..ExtractResult::default()
        },
        ExtractKind::All => Extraction::from_text(&text).into(),
    };

    render_result("Extracted patterns", &result, cli_args)
}

fn normalize_text(input: &InputArgs, cli_args: &TextLensArgs) -> Result<String> {
    let text = read_input(input.file.as_deref())?;
    render_text(normalize_whitespace(&text), cli_args)
}

fn strip_stop_words(input: &InputArgs, cli_args: &TextLensArgs) -> Result<String> {
    let text = read_input(input.file.as_deref())?;
    render_text(remove_stop_words(&text), cli_args)
}

/// Compare two strings, or two files with `--files`.
fn compare_texts(args: &SimilarityArgs, cli_args: &TextLensArgs) -> Result<String> {
    if args.files && args.a == "-" && args.b == "-" {
        return Err(TextLensError::invalid_argument(
            "only one of A and B can be read from stdin",
        ));
    }

    let (a, b) = if args.files {
        (
            read_input(Some(Path::new(&args.a)))?,
            read_input(Some(Path::new(&args.b)))?,
        )
    } else {
        (args.a.clone(), args.b.clone())
    };

    render_result("Similarity", &SimilarityReport::compare(&a, &b), cli_args)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::Value;
    use tempfile::NamedTempFile;

    use super::*;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    fn path_of(file: &NamedTempFile) -> &str {
        file.path().to_str().unwrap()
    }

    fn run(argv: &[&str]) -> Result<String> {
        let mut full = vec!["textlens"];
        full.extend_from_slice(argv);
        run_command(&<TextLensArgs as clap::Parser>::parse_from(full))
    }

    fn run_json(argv: &[&str]) -> Value {
        let mut full = vec!["-f", "json"];
        full.extend_from_slice(argv);
        serde_json::from_str(&run(&full).unwrap()).unwrap()
    }

    #[test]
    fn test_read_input_file() {
        let file = temp_file("hello world");
        assert_eq!(read_input(Some(file.path())).unwrap(), "hello world");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("/no/such/input.txt"))).unwrap_err();
        assert!(matches!(err, TextLensError::Anyhow(_)));
        assert!(err.to_string().starts_with("failed to read /no/such/input.txt"));
    }

    #[test]
    fn test_stats_for_files_keeps_order() {
        let first = temp_file("one two three");
        let second = temp_file("a\n\nb");
        let files = vec![first.path().to_path_buf(), second.path().to_path_buf()];

        let results = stats_for_files(&files, &AnalysisConfig::default()).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].source, first.path().display().to_string());
        assert_eq!(results[0].stats.words, 3);
        assert_eq!(results[1].stats.paragraphs, 2);
    }

    #[test]
    fn test_stats_for_files_reports_missing_file() {
        let good = temp_file("text");
        let files = vec![good.path().to_path_buf(), PathBuf::from("/no/such/file")];
        assert!(stats_for_files(&files, &AnalysisConfig::default()).is_err());
    }

    #[test]
    fn test_stats_for_files_rejects_repeated_stdin() {
        let good = temp_file("text");
        let files = vec![
            PathBuf::from("-"),
            good.path().to_path_buf(),
            PathBuf::from("-"),
        ];
        let err = stats_for_files(&files, &AnalysisConfig::default()).unwrap_err();
        assert!(matches!(err, TextLensError::InvalidArgument(_)));
    }

    #[test]
    fn test_stats_command() {
        let input = temp_file("One two. Three!\n\nFour");
        let json = run_json(&["stats", path_of(&input), "--reading-wpm", "1"]);
        assert_eq!(json["source"], path_of(&input));
        assert_eq!(json["words"], 4);
        assert_eq!(json["sentences"], 3);
        assert_eq!(json["paragraphs"], 2);
        assert_eq!(json["reading_minutes"], 4);
    }

    #[test]
    fn test_frequency_command() {
        let input = temp_file("the fox and the dog and the cat");
        let json = run_json(&["frequency", path_of(&input), "--top", "2"]);
        assert_eq!(json["unique_terms"], 5);
        assert_eq!(json["entries"][0]["term"], "the");
        assert_eq!(json["entries"][0]["count"], 3);
        assert_eq!(json["entries"][1]["term"], "and");
        assert_eq!(json["entries"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_frequency_case_insensitive_overrides_config() {
        let config = temp_file(r#"{ "case_sensitive": true }"#);
        let input = temp_file("Rust rust RUST");

        let json = run_json(&["-c", path_of(&config), "frequency", path_of(&input)]);
        assert_eq!(json["unique_terms"], 3);

        let json = run_json(&[
            "-c",
            path_of(&config),
            "frequency",
            path_of(&input),
            "--case-insensitive",
        ]);
        assert_eq!(json["unique_terms"], 1);
        assert_eq!(json["entries"][0]["term"], "rust");
    }

    #[test]
    fn test_execute_rejects_zero_ngram() {
        let file = temp_file("a b c");
        let err = run(&["-q", "frequency", path_of(&file), "--ngram", "0"]).unwrap_err();
        assert!(matches!(err, TextLensError::InvalidArgument(_)));
    }

    #[test]
    fn test_execute_rejects_invalid_config() {
        let config = temp_file(r#"{ "reading_wpm": 0 }"#);
        let input = temp_file("a b c");
        let err = run(&["--config", path_of(&config), "stats", path_of(&input)]).unwrap_err();
        assert!(matches!(err, TextLensError::Config(_)));
    }

    #[test]
    fn test_density_command_with_keyword() {
        let input = temp_file("seo tips and seo tricks");
        let json = run_json(&["density", path_of(&input), "--keyword", "SEO"]);
        assert_eq!(json["keyword"], "SEO");
        assert_eq!(json["occurrences"], 2);
        assert_eq!(json["total_words"], 5);
        assert_eq!(json["density"], 40.0);
    }

    #[test]
    fn test_density_command_table() {
        let input = temp_file("The cat and the dog. The cat!");
        let json = run_json(&["density", path_of(&input)]);
        assert_eq!(json["total_words"], 7);
        assert_eq!(json["keywords"][0]["keyword"], "cat");
        assert_eq!(json["keywords"][0]["count"], 2);
        assert_eq!(json["keywords"].as_array().unwrap().len(), 2);

        let json = run_json(&["density", path_of(&input), "--include-stop-words", "--top", "1"]);
        assert_eq!(json["keywords"][0]["keyword"], "the");
        assert_eq!(json["keywords"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_extract_command_all() {
        let input = temp_file("see https://a.com #rust @bob or mail me@x.io \u{1F600}\u{1F680}");
        let json = run_json(&["extract", path_of(&input)]);
        assert_eq!(json["urls"], serde_json::json!(["https://a.com"]));
        assert_eq!(json["hashtags"], serde_json::json!(["#rust"]));
        assert_eq!(json["mentions"], serde_json::json!(["@bob", "@x"]));
        assert_eq!(json["emails"], serde_json::json!(["me@x.io"]));
        assert_eq!(json["emoji_count"], 2);
    }

    #[test]
    fn test_extract_command_single_kind() {
        let input = temp_file("#a \u{1F600} #b");
        let json = run_json(&["extract", path_of(&input), "--kind", "emojis"]);
        assert_eq!(json, serde_json::json!({ "emoji_count": 1 }));

        let json = run_json(&["extract", path_of(&input), "--kind", "hashtags"]);
        assert_eq!(json, serde_json::json!({ "hashtags": ["#a", "#b"] }));
    }

    #[test]
    fn test_normalize_command() {
        let input = temp_file("a   b\r\n\n\n\nc  ");
        assert_eq!(run(&["normalize", path_of(&input)]).unwrap(), "a b\n\nc");

        let json = run_json(&["normalize", path_of(&input)]);
        assert_eq!(json["text"], "a b\n\nc");
    }

    #[test]
    fn test_stopwords_command() {
        let input = temp_file("The Quick Fox and the Dog");
        assert_eq!(run(&["stopwords", path_of(&input)]).unwrap(), "quick fox dog");
    }

    #[test]
    fn test_similarity_command_strings() {
        let json = run_json(&["similarity", "kitten", "sitting"]);
        assert_eq!(json["similarity"], 57);
        assert_eq!(json["distance"], 3);
        assert_eq!(json["length_a"], 6);
        assert_eq!(json["length_b"], 7);
    }

    #[test]
    fn test_similarity_command_files() {
        let a = temp_file("hello world");
        let b = temp_file("hello world");
        let json = run_json(&["similarity", "--files", path_of(&a), path_of(&b)]);
        assert_eq!(json["similarity"], 100);
        assert_eq!(json["distance"], 0);
    }

    #[test]
    fn test_similarity_command_rejects_two_stdin_inputs() {
        let err = run(&["similarity", "--files", "-", "-"]).unwrap_err();
        assert!(matches!(err, TextLensError::InvalidArgument(_)));

        // Without --files, "-" is compared as a literal string.
        let json = run_json(&["similarity", "-", "-"]);
        assert_eq!(json["similarity"], 100);
    }
}
