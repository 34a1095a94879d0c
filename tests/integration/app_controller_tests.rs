/*!
 * Integration tests for the application controller
 */

use anyhow::Result;
use std::fs;
use tagsplice::app_config::Config;
use tagsplice::app_controller::Controller;
use tagsplice::errors::{AppError, ExtractError, InsertError};
use tagsplice::file_utils::FileManager;
use crate::common;

/// Test that an invalid configuration is rejected when building the controller
#[test]
fn test_with_config_withInvalidConnectors_shouldFail() {
    let mut config = Config::default();
    config.extraction.connectors = "a".to_string();

    assert!(Controller::with_config(config).is_err());
}

/// Test that the controller uses the configured file suffixes
#[test]
fn test_extract_file_withCustomSuffixes_shouldUseThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_file(temp_dir.path(), "a.py", "x = \"é\"\n")?;
    let mut config = Config::default();
    config.files.tagged_extension = "skel".to_string();
    config.files.manifest_extension = "strings".to_string();

    let controller = Controller::with_config(config)?;
    let report = controller.extract_file(&source, temp_dir.path().join("out"))?;

    assert!(report.tagged_path.to_string_lossy().ends_with("a.py.skel"));
    assert!(report.manifest_path.to_string_lossy().ends_with("a.py.strings"));
    assert_eq!(report.runs, 1);

    Ok(())
}

/// Test that extracting a missing file fails before anything is written
#[test]
fn test_extract_file_withMissingInput_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;

    let result = controller.extract_file(temp_dir.path().join("nope.py"), temp_dir.path().join("out"));

    let error = result.err().ok_or_else(|| anyhow::anyhow!("expected an error"))?;
    assert!(matches!(error.downcast_ref::<AppError>(), Some(AppError::File(_))));
    assert!(!temp_dir.path().join("out").exists());

    Ok(())
}

/// Test that a recursive extraction needs at least one file type
#[test]
fn test_extract_dir_withoutTypes_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;
    let no_types: [&str; 0] = [];

    let result = controller.extract_dir(temp_dir.path(), temp_dir.path().join("out"), &no_types);

    let message = format!("{}", result.err().ok_or_else(|| anyhow::anyhow!("expected an error"))?);
    assert!(message.contains("at least one file type"));

    Ok(())
}

/// Test that a recursive extraction on a missing directory fails
#[test]
fn test_extract_dir_withMissingInputDir_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;

    let result = controller.extract_dir(temp_dir.path().join("missing"), temp_dir.path().join("out"), &["py"]);

    assert!(result.is_err());

    Ok(())
}

/// Test that a source that is not UTF-8 surfaces as an extraction error
#[test]
fn test_extract_file_withInvalidUtf8_shouldReturnExtractionError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = temp_dir.path().join("latin1.txt");
    fs::write(&source, [b'c', b'a', b'f', 0xE9, b'\n'])?;
    let controller = Controller::with_config(Config::default())?;

    let result = controller.extract_file(&source, temp_dir.path().join("out"));

    let error = result.err().ok_or_else(|| anyhow::anyhow!("expected an error"))?;
    assert!(matches!(
        error.downcast_ref::<AppError>(),
        Some(AppError::Extract(ExtractError::Encoding { .. }))
    ));

    Ok(())
}

/// Test a single file round trip through the controller
#[test]
fn test_insert_file_afterExtraction_shouldWriteTranslatedFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_file(temp_dir.path(), "greet.py", common::SAMPLE_SCRIPT)?;
    let controller = Controller::with_config(Config::default())?;

    let extraction = controller.extract_file(&source, temp_dir.path().join("out"))?;
    let base = extraction.tagged_path.with_extension("");
    fs::write(
        FileManager::with_suffix(&base, "de"),
        "<EXTRACTED0> Hallo, \n<EXTRACTED1> üße!\n<EXTRACTED2> Hallo Welt\n",
    )?;

    let report = controller.insert_file(&base, "de")?;

    assert_eq!(report.output, base);
    assert_eq!(report.entries, 3);
    let translated = fs::read_to_string(&base)?;
    assert!(translated.contains("print('Hallo,' + name)"));
    assert!(translated.contains("label = \"Hallo Welt\""));

    Ok(())
}

/// Test that an unknown language code is still used as a file suffix
#[test]
fn test_insert_file_withUnknownLanguageCode_shouldStillInsert() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let base = temp_dir.path().join("a.txt");
    common::create_test_file(temp_dir.path(), "a.txt.tagged", "<EXTRACTED0>\n")?;
    common::create_test_file(temp_dir.path(), "a.txt.pirate", "<EXTRACTED0> Arr\n")?;
    let controller = Controller::with_config(Config::default())?;

    controller.insert_file(&base, "pirate")?;

    assert_eq!(fs::read_to_string(&base)?, "Arr\n");

    Ok(())
}

/// Test that a missing tagged file makes a single insertion fail
#[test]
fn test_insert_file_withMissingTagged_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "a.txt.en", "<EXTRACTED0> Hi\n")?;
    let controller = Controller::with_config(Config::default())?;

    let result = controller.insert_file(temp_dir.path().join("a.txt"), "en");

    let error = result.err().ok_or_else(|| anyhow::anyhow!("expected an error"))?;
    assert!(matches!(
        error.downcast_ref::<AppError>(),
        Some(AppError::Insert(InsertError::Io { .. }))
    ));
    assert!(!temp_dir.path().join("a.txt").exists());

    Ok(())
}

/// Test the recursive insertion entry point
#[test]
fn test_insert_dir_withPairsAndOrphan_shouldReportFailure() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "game/a.rpy.tagged", "\"<EXTRACTED0>\"\n")?;
    common::create_test_file(root, "game/a.rpy.es", "<EXTRACTED0> Hola\n")?;
    common::create_test_file(root, "game/b.rpy.es", "<EXTRACTED0> Adiós\n")?;
    let controller = Controller::with_config(Config::default())?;

    let report = controller.insert_dir(root, "es")?;

    assert_eq!(report.processed, vec![root.join("game/a.rpy")]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(fs::read_to_string(root.join("game/a.rpy"))?, "\"Hola\"\n");

    Ok(())
}

/// Test that a recursive insertion on a missing directory fails
#[test]
fn test_insert_dir_withMissingDir_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default())?;

    assert!(controller.insert_dir(temp_dir.path().join("missing"), "en").is_err());

    Ok(())
}
