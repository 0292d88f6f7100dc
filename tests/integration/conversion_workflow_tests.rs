/*!
 * Integration tests for the full conversion workflow
 */

use std::fs;
use anyhow::Result;
use subprose::app_config::{Config, OutputConfig};
use subprose::app_controller::Controller;
use subprose::{AppError, OutputFormat};
use crate::common;

fn html_config(kindle: bool) -> Config {
    Config {
        output: OutputConfig { html: true, kindle, title: Some("My Shows".to_string()) },
        ..Config::default()
    }
}

/// Test the controller initialization with default config
#[test]
fn test_controller_initialization_withDefaultConfig_shouldSucceed() -> Result<()> {
    let controller = Controller::new_for_test()?;
    assert_eq!(controller.config().output_format(), OutputFormat::Plain);
    Ok(())
}

/// Test that an invalid configuration is rejected up front
#[test]
fn test_controller_withInvalidTitle_shouldFail() {
    let mut config = Config::default();
    config.output.title = Some(String::new());
    match Controller::with_config(config) {
        Ok(_) => panic!("empty title should be rejected"),
        Err(error) => {
            assert!(matches!(error.downcast_ref::<AppError>(), Some(AppError::Config(_))));
            assert!(error.to_string().starts_with("Configuration error"));
        }
    }
}

/// Test a missing input is reported as a file error before anything is written
#[test]
fn test_run_withMissingInput_shouldFailWithFileError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("nowhere.srt");

    let controller = Controller::new_for_test()?;
    let error = tokio_test::block_on(controller.run(&[missing], None, false)).unwrap_err();

    assert!(matches!(error.downcast_ref::<AppError>(), Some(AppError::File(_))));
    assert!(!temp_dir.path().join("nowhere.txt").exists());
    Ok(())
}

/// Test converting a folder mirrors the original single-folder workflow
#[test]
fn test_run_withFolder_shouldWriteTextFileNextToFolder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let folder = temp_dir.path().join("Lecture");
    common::create_test_subtitle(&folder, "part2.srt")?;
    common::create_test_file(&folder, "part1.srt", &common::single_cue("Welcome."))?;

    let controller = Controller::new_for_test()?;
    let written = tokio_test::block_on(controller.run(&[folder], None, false))?;

    assert_eq!(written, temp_dir.path().join("Lecture.txt"));
    let content = fs::read_to_string(&written)?;
    assert_eq!(
        content,
        "part1\n=====\n\nWelcome.\n\npart2\n=====\n\nThis is a test subtitle.\n\nFor testing purposes!"
    );

    Ok(())
}

/// Test that loading order never influences output order
#[tokio::test]
async fn test_convert_withManyInputs_shouldBeDeterministic() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut inputs = Vec::new();
    for i in (0..12).rev() {
        inputs.push(common::create_test_file(
            temp_dir.path(),
            &format!("ep{:02}.srt", i),
            &common::single_cue(&format!("Episode {}.", i)),
        )?);
    }

    let controller = Controller::new_for_test()?;
    let first = controller.convert(&inputs).await?;
    inputs.reverse();
    let second = controller.convert(&inputs).await?;

    assert_eq!(first, second);
    let ep00 = first.content.find("ep00").unwrap();
    let ep11 = first.content.find("ep11").unwrap();
    assert!(ep00 < ep11);

    Ok(())
}

/// Test converting an archive to HTML
#[tokio::test]
async fn test_convert_withArchiveAsHtml_shouldNestEpisodes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let second_cue = common::single_cue("Second.");
    let first_cue = common::single_cue("First.");
    let zip = common::create_test_zip(
        temp_dir.path(),
        "Show Subtitles.zip",
        &[("S01E02.srt", second_cue.as_str()), ("S01E01.srt", first_cue.as_str())],
    )?;

    let controller = Controller::with_config(html_config(false))?;
    let output = controller.convert(&[zip]).await?;

    assert_eq!(output.format, OutputFormat::Html);
    let content = &output.content;
    assert!(content.contains("<title>My Shows</title>"));
    let show = content.find("<h1>Show</h1>").unwrap();
    let first = content.find("<h2>S01E01</h2>\n<p>First.</p>").unwrap();
    let second = content.find("<h2>S01E02</h2>\n<p>Second.</p>").unwrap();
    assert!(show < first && first < second);

    Ok(())
}

/// Test kindle output file naming and content
#[test]
fn test_run_withKindleConfig_shouldWriteHtmlFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "talk.srt")?;
    let output_dir = temp_dir.path().join("out");
    fs::create_dir(&output_dir)?;

    let controller = Controller::with_config(html_config(true))?;
    let written = tokio_test::block_on(controller.run(&[input], Some(output_dir.clone()), false))?;

    assert_eq!(written, output_dir.join("talk.html"));
    let content = fs::read_to_string(&written)?;
    assert!(content.contains("<mbp:pagebreak />\n<h1>talk</h1>"));

    Ok(())
}

/// Test that existing output is not overwritten without force
#[test]
fn test_run_withExistingOutput_shouldRequireForce() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_subtitle(temp_dir.path(), "talk.srt")?;
    let existing = common::create_test_file(temp_dir.path(), "talk.txt", "old")?;

    let controller = Controller::new_for_test()?;
    let refused = tokio_test::block_on(controller.run(&[input.clone()], None, false));
    assert!(refused.is_err());
    assert_eq!(fs::read_to_string(&existing)?, "old");

    let written = tokio_test::block_on(controller.run(&[input], None, true))?;
    assert_eq!(written, existing);
    assert_ne!(fs::read_to_string(&existing)?, "old");

    Ok(())
}

/// Test that a failing source aborts the run without writing output
#[test]
fn test_run_withCorruptArchive_shouldNotWriteOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let good = common::create_test_subtitle(temp_dir.path(), "good.srt")?;
    let broken = common::create_test_file(temp_dir.path(), "broken.zip", "garbage")?;
    let output = temp_dir.path().join("merged.txt");

    let controller = Controller::new_for_test()?;
    let result = tokio_test::block_on(controller.run(&[good, broken], Some(output.clone()), false));

    assert!(result.is_err());
    assert!(!output.exists());

    Ok(())
}

/// Test that an empty folder still produces a valid empty document
#[tokio::test]
async fn test_convert_withEmptyFolder_shouldProduceEmptyDocument() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let controller = Controller::with_config(html_config(false))?;
    let output = controller.convert(&[temp_dir.path().to_path_buf()]).await?;
    assert!(output.content.contains("<body>\n</body>"));

    Ok(())
}
