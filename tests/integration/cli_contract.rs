use std::path::Path;

use anyhow::Result;
use tempfile::tempdir;

use crate::common::{read_file, run_tool, run_tool_str, stderr_of, write_file, ADDR_ONE};

#[test]
fn too_few_arguments_exit_with_usage() -> Result<()> {
    let temp = tempdir()?;
    let env_file = temp.path().join(".env");

    let output = run_tool(&[&env_file, Path::new("MAINNET")])?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains(
            "Usage: update-env-token-address <env_file> <profile> <forge_output_file> [recap_file] [chain_label]"
        ),
        "stderr: {stderr}"
    );
    assert!(!env_file.exists(), "no file may be written on usage errors");
    Ok(())
}

#[test]
fn too_many_arguments_exit_with_usage() -> Result<()> {
    let output = run_tool_str(&["a", "b", "c", "d", "e", "f"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Usage: "));
    Ok(())
}

#[test]
fn blank_profile_exits_with_message() -> Result<()> {
    let temp = tempdir()?;
    let forge = temp.path().join("forge.log");
    write_file(&forge, &format!("Token Address: {ADDR_ONE}\n"))?;
    let env_file = temp.path().join(".env");

    let output = run_tool_str(&[
        env_file.to_str().expect("utf-8 temp path"),
        "   ",
        forge.to_str().expect("utf-8 temp path"),
    ])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Profile is empty."));
    assert!(!env_file.exists());
    Ok(())
}

#[test]
fn missing_forge_output_exits_with_path() -> Result<()> {
    let temp = tempdir()?;
    let env_file = temp.path().join(".env");
    let forge = temp.path().join("missing.log");

    let output = run_tool_str(&[
        env_file.to_str().expect("utf-8 temp path"),
        "MAINNET",
        forge.to_str().expect("utf-8 temp path"),
    ])?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains(&format!("Forge output file not found: {}", forge.display())),
        "stderr: {stderr}"
    );
    assert!(!env_file.exists());
    Ok(())
}

#[test]
fn no_token_address_is_a_silent_no_op() -> Result<()> {
    let temp = tempdir()?;
    let env_file = temp.path().join(".env");
    let recap = temp.path().join("recap.tsv");
    let forge = temp.path().join("forge.log");
    write_file(&env_file, "EXISTING=1\n")?;
    write_file(&forge, "Compiling 3 files\nChain 1\nScript ran successfully.\n")?;

    let output = run_tool(&[&env_file, Path::new("MAINNET"), &forge, &recap])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert_eq!(read_file(&env_file)?, "EXISTING=1\n");
    assert!(!recap.exists(), "recap file must not be created");
    Ok(())
}

#[test]
fn lone_help_flag_is_a_usage_error() -> Result<()> {
    let output = run_tool_str(&["--help"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Usage: "));
    Ok(())
}

#[test]
fn hyphen_leading_profile_and_chain_label_are_values() -> Result<()> {
    let temp = tempdir()?;
    let env_file = temp.path().join(".env");
    let recap = temp.path().join("recap.tsv");
    let forge = temp.path().join("forge.log");
    write_file(&forge, &format!("Token Address: {ADDR_ONE}\nChain 1\n"))?;

    let output = run_tool_str(&[
        env_file.to_str().expect("utf-8 temp path"),
        "-dev",
        forge.to_str().expect("utf-8 temp path"),
        recap.to_str().expect("utf-8 temp path"),
        "-1",
    ])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert_eq!(read_file(&env_file)?, format!("TOKEN_ADDRESS_-dev={ADDR_ONE}\n"));
    let recap_text = read_file(&recap)?;
    assert!(
        recap_text.ends_with(&format!("\t-1\t-dev\t{ADDR_ONE}\n")),
        "recap: {recap_text:?}"
    );
    Ok(())
}

#[test]
fn help_token_in_profile_slot_is_written_verbatim() -> Result<()> {
    let temp = tempdir()?;
    let env_file = temp.path().join(".env");
    let forge = temp.path().join("forge.log");
    write_file(&forge, &format!("Token Address: {ADDR_ONE}\n"))?;

    let output = run_tool_str(&[
        env_file.to_str().expect("utf-8 temp path"),
        "--help",
        forge.to_str().expect("utf-8 temp path"),
    ])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert_eq!(read_file(&env_file)?, format!("TOKEN_ADDRESS_--help={ADDR_ONE}\n"));
    Ok(())
}

#[test]
fn env_file_that_is_a_directory_fails_with_io_error() -> Result<()> {
    let temp = tempdir()?;
    let env_dir = temp.path().join("env-dir");
    std::fs::create_dir_all(&env_dir)?;
    let forge = temp.path().join("forge.log");
    write_file(&forge, &format!("Token Address: {ADDR_ONE}\n"))?;

    let output = run_tool(&[&env_dir, Path::new("MAINNET"), &forge])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains(&format!("failed to load env file {}", env_dir.display())),
        "stderr: {stderr}"
    );
    Ok(())
}

#[test]
fn recap_parent_that_is_a_file_fails_with_io_error() -> Result<()> {
    let temp = tempdir()?;
    let env_file = temp.path().join(".env");
    let blocker = temp.path().join("blocker");
    write_file(&blocker, "not a directory")?;
    let recap = blocker.join("recap.tsv");
    let forge = temp.path().join("forge.log");
    write_file(&forge, &format!("Token Address: {ADDR_ONE}\nChain 1\n"))?;

    let output = run_tool(&[&env_file, Path::new("MAINNET"), &forge, &recap])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains(&format!("failed to prepare recap directory for {}", recap.display())),
        "stderr: {stderr}"
    );
    assert!(stderr.contains("Caused by"), "stderr: {stderr}");
    Ok(())
}
