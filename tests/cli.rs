use std::error::Error;
use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn cipherkit_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cipherkit"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(cipherkit_command().args(args).output()?)
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn version_flag_prints_build_information() -> Result<(), Box<dyn Error>> {
    let output = run(&["--version"])?;
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("cipherkit "), "unexpected: {}", stdout);
    assert!(stdout.contains("build"), "missing build: {}", stdout);
    Ok(())
}

#[test]
fn running_without_subcommand_displays_help() -> Result<(), Box<dyn Error>> {
    let output = cipherkit_command().output()?;
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Usage: cipherkit"), "{}", stdout);
    assert!(stdout.contains("Commands:"), "{}", stdout);
    Ok(())
}

#[test]
fn encrypt_then_decrypt_vigenere() -> Result<(), Box<dyn Error>> {
    let enc = run(&["encrypt", "--cipher", "vigenere", "--key", "LEMON", "attack at dawn"])?;
    assert!(
        enc.status.success(),
        "encrypt failed: {}",
        String::from_utf8_lossy(&enc.stderr)
    );
    assert_eq!(stdout_of(&enc), "Encrypted text: LXFOPVEFRNHR\n");

    let dec = run(&["decrypt", "-c", "6", "-k", "LEMON", "LXFOPVEFRNHR"])?;
    assert!(dec.status.success());
    assert_eq!(stdout_of(&dec), "Decrypted text: ATTACKATDAWN\n");
    Ok(())
}

#[test]
fn negative_integer_key_is_accepted() -> Result<(), Box<dyn Error>> {
    let output = run(&["encrypt", "--cipher", "additive", "--key", "-23", "HELLO"])?;
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_of(&output), "Encrypted text: KHOOR\n");
    Ok(())
}

#[test]
fn affine_uses_both_keys() -> Result<(), Box<dyn Error>> {
    let output = run(&["encrypt", "-c", "affine", "-k", "5", "--key2", "8", "HELLO"])?;
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Encrypted text: RCLLA\n");
    Ok(())
}

#[test]
fn invalid_key_reports_error() -> Result<(), Box<dyn Error>> {
    let output = run(&["decrypt", "-c", "multiplicative", "-k", "4", "HELLO"])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid key"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn unknown_cipher_is_rejected_by_parser() -> Result<(), Box<dyn Error>> {
    let output = run(&["encrypt", "-c", "enigma", "-k", "A", "HELLO"])?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("enigma"));
    Ok(())
}

#[test]
fn transposition_reads_input_file() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("plain.txt");
    fs::write(&input, "We are discovered, flee at once!\n")?;

    let enc = run(&[
        "encrypt",
        "-c",
        "keyed-transposition",
        "-k",
        "ZEBRAS",
        "--input",
        input.to_str().unwrap(),
    ])?;
    assert!(
        enc.status.success(),
        "{}",
        String::from_utf8_lossy(&enc.stderr)
    );
    assert_eq!(stdout_of(&enc), "Encrypted text: EVLNXACDTXESEAXROFOXDEECXWIREE\n");

    let cipher_file = dir.path().join("cipher.txt");
    fs::write(&cipher_file, "EVLNXACDTXESEAXROFOXDEECXWIREE")?;
    let dec = run(&[
        "decrypt",
        "-c",
        "9",
        "-k",
        "ZEBRAS",
        "-i",
        cipher_file.to_str().unwrap(),
    ])?;
    assert!(dec.status.success());
    assert_eq!(stdout_of(&dec), "Decrypted text: WEAREDISCOVEREDFLEEATONCE\n");
    Ok(())
}

#[test]
fn double_transposition_json_report() -> Result<(), Box<dyn Error>> {
    let output = run(&[
        "encrypt",
        "-c",
        "double",
        "-k",
        "KEY",
        "--key2",
        "AB",
        "--json",
        "HELLO",
    ])?;
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(stdout_of(&output).trim())?;
    assert_eq!(json["cipher"], "double-transposition");
    assert_eq!(json["operation"], "encrypt");
    assert_eq!(json["input"], "HELLO");
    assert_eq!(json["output"], "EHLOLX");
    Ok(())
}

#[test]
fn info_shows_playfair_grid() -> Result<(), Box<dyn Error>> {
    let output = run(&["info", "-c", "playfair", "-k", "PLAYFAIR EXAMPLE"])?;
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("  P L A Y F\n"), "{}", stdout);
    assert!(stdout.contains("  T U V W Z\n"), "{}", stdout);
    Ok(())
}

#[test]
fn keygen_output_feeds_back_into_encrypt() -> Result<(), Box<dyn Error>> {
    let keygen = run(&["keygen", "-c", "affine", "--seed", "11"])?;
    assert!(keygen.status.success());
    let keygen_stdout = stdout_of(&keygen);
    let key_args: Vec<&str> = keygen_stdout.split_whitespace().collect();
    assert_eq!(key_args.len(), 4);

    let mut args = vec!["encrypt", "-c", "affine"];
    args.extend(&key_args);
    args.push("HELLO");
    let enc = run(&args)?;
    assert!(
        enc.status.success(),
        "{}",
        String::from_utf8_lossy(&enc.stderr)
    );
    Ok(())
}

#[test]
fn keygen_is_reproducible_with_seed() -> Result<(), Box<dyn Error>> {
    let first = run(&["keygen", "-c", "substitution", "--seed", "5"])?;
    let second = run(&["keygen", "-c", "substitution", "--seed", "5"])?;
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    Ok(())
}

#[test]
fn list_prints_all_ciphers() -> Result<(), Box<dyn Error>> {
    let output = run(&["list"])?;
    assert!(output.status.success());
    assert_eq!(stdout_of(&output).lines().count(), 10);
    Ok(())
}
