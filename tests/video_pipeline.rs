// tests/video_pipeline.rs

//! Merge pipeline tests against a fake transcoder.

mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::fs;

use tempfile::tempdir;
use toolbelt::config::VideoSettings;
use toolbelt::exec::{ExecRequest, ExecResult};
use toolbelt::video::pipeline::merge_videos;
use toolbelt_test_utils::fake_runner::FakeRunner;

type TestResult = Result<(), Box<dyn Error>>;

/// Fake ffmpeg: create the output file named by the last quoted argument
/// of the command line, then report success.
fn fake_transcoder(request: &ExecRequest) -> ExecResult {
    let cmd = &request.command_line;
    if let Some(start) = cmd.rfind(" \"") {
        let out = cmd[start + 2..].trim_end_matches('"');
        fs::write(out, b"video").expect("writing fake transcoder output");
    }
    ExecResult {
        completed: true,
        output: String::new(),
        exit_code: Some(0),
    }
}

#[tokio::test]
async fn merge_ignores_unrelated_files_and_produces_one_output() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    fs::write(dir.path().join("1.mp4"), b"a")?;
    fs::write(dir.path().join("2.mp4"), b"b")?;
    fs::write(dir.path().join("notes.txt"), b"not a video")?;

    let runner = FakeRunner::with_handler(fake_transcoder);
    merge_videos(&runner, &VideoSettings::default(), dir.path()).await?;

    let commands = runner.commands();
    // Two normalizations in ordinal order, then one concat.
    assert_eq!(commands.len(), 3);
    assert!(commands[0].contains("temp-1.mp4"));
    assert!(commands[1].contains("temp-2.mp4"));
    assert!(commands[2].contains("concat=n=2"));
    assert!(!commands.iter().any(|c| c.contains("notes.txt")));

    assert!(dir.path().join("merged.mp4").is_file());
    // Temp originals are gone and the scratch directory was cleaned up.
    assert!(!dir.path().join("temp-1.mp4").exists());
    assert!(!dir.path().join("temp").exists());
    Ok(())
}

#[tokio::test]
async fn normalization_order_is_numeric_not_lexicographic() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    for name in ["10.mp4", "2.mp4", "1.mp4"] {
        fs::write(dir.path().join(name), b"v")?;
    }

    let runner = FakeRunner::with_handler(fake_transcoder);
    merge_videos(&runner, &VideoSettings::default(), dir.path()).await?;

    let commands = runner.commands();
    assert!(commands[0].contains("temp-1.mp4"));
    assert!(commands[1].contains("temp-2.mp4"));
    assert!(commands[2].contains("temp-10.mp4"));
    Ok(())
}

#[tokio::test]
async fn stale_temp_directory_is_wiped_before_normalization() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    fs::write(dir.path().join("1.mp4"), b"a")?;
    // Leftovers from a previous failed run.
    fs::create_dir_all(dir.path().join("temp"))?;
    fs::write(dir.path().join("temp").join("stale.mp4"), b"junk")?;

    let runner = FakeRunner::with_handler(fake_transcoder);
    merge_videos(&runner, &VideoSettings::default(), dir.path()).await?;

    assert!(!dir.path().join("temp").join("stale.mp4").exists());
    Ok(())
}

#[tokio::test]
async fn re_encode_failure_aborts_the_whole_pipeline() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    fs::write(dir.path().join("1.mp4"), b"a")?;
    fs::write(dir.path().join("2.mp4"), b"b")?;

    let runner = FakeRunner::with_handler(|_req| ExecResult {
        completed: false,
        output: "Unknown encoder 'h264_nvenc'".to_string(),
        exit_code: Some(1),
    });

    let err = merge_videos(&runner, &VideoSettings::default(), dir.path())
        .await
        .unwrap_err();
    // The transcoder's diagnostics surface in the error.
    assert!(err.to_string().contains("Unknown encoder"));
    // Only the first file was attempted; nothing ran after the failure.
    assert_eq!(runner.commands().len(), 1);
    assert!(!dir.path().join("merged.mp4").exists());
    Ok(())
}

#[tokio::test]
async fn empty_folder_is_an_error() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    fs::write(dir.path().join("notes.txt"), b"no videos here")?;

    let runner = FakeRunner::new();
    let err = merge_videos(&runner, &VideoSettings::default(), dir.path())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("no numbered .mp4 files"));
    assert!(runner.commands().is_empty());
    Ok(())
}

#[tokio::test]
async fn configured_codec_flows_into_the_commands() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    fs::write(dir.path().join("1.mp4"), b"a")?;

    let settings = VideoSettings {
        codec: "libx264".to_string(),
        ..VideoSettings::default()
    };
    let runner = FakeRunner::with_handler(fake_transcoder);
    merge_videos(&runner, &settings, dir.path()).await?;

    assert!(runner.commands().iter().all(|c| c.contains("libx264")));
    Ok(())
}
