use std::fs;
use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use rstest::*;

macro_rules! cargo_run {
    ($cmd:expr, $($args:expr),*) => {
        {
            let mut cmd = Command::cargo_bin($cmd)?;
            $(cmd.arg($args);)*
            cmd.assert()
        }
    };
}

#[test]
fn search_table() -> Result<()> {
    cargo_run!("scentsearch", "-d", "tests/data", "search", "sauv")
        .success()
        .stdout(predicate::str::contains("1\tDior - Sauvage\t2015"));
    Ok(())
}

#[test]
fn search_json() -> Result<()> {
    cargo_run!("scentsearch", "-d", "tests/data", "search", "CHANEL", "--output-format", "json")
        .success()
        .stdout(predicate::str::contains("\"full_name\": \"Chanel - Bleu de Chanel\""));
    Ok(())
}

#[test]
fn search_short_query_fails() -> Result<()> {
    cargo_run!("scentsearch", "-d", "tests/data", "search", "a").failure();
    Ok(())
}

#[rstest]
#[case::table("table", "hero\t1\tDior - Sauvage\t90%\tFresh 🍋")]
#[case::json("json", "\"match_score\": 90")]
fn recommend(#[case] format: &str, #[case] expected: &str) -> Result<()> {
    cargo_run!("scentsearch", "-d", "tests/data", "recommend", "0", "--output-format", format)
        .success()
        .stdout(predicate::str::contains(expected));
    Ok(())
}

#[test]
fn recommend_without_neighbors() -> Result<()> {
    cargo_run!("scentsearch", "-d", "tests/data", "recommend", "5")
        .success()
        .stdout(predicate::str::contains("(no recommendations)"));
    Ok(())
}

#[rstest]
#[case("999")]
#[case("-1")]
#[case("4294967296")]
fn recommend_unknown_id_fails(#[case] id: &str) -> Result<()> {
    cargo_run!("scentsearch", "-d", "tests/data", "recommend", id)
        .failure()
        .stderr(predicate::str::contains(format!("Perfume not found: {id}")));
    Ok(())
}

#[test]
fn show_record() -> Result<()> {
    cargo_run!("scentsearch", "-d", "tests/data", "show", "6")
        .success()
        .stdout(predicate::str::contains("\"name\": \"Terre d'Hermes\""))
        .stdout(predicate::str::contains("Bold 🌶️"));
    Ok(())
}

#[test]
fn custom_file_names() -> Result<()> {
    let data_dir = assert_fs::TempDir::new()?;
    fs::copy("tests/data/perfume_metadata.json", data_dir.path().join("meta.json"))?;
    fs::write(
        data_dir.path().join("recs.json"),
        r#"[{"perfume_id": 3, "recommendations": [5], "scores": [0.5]}]"#,
    )?;

    cargo_run!(
        "scentsearch",
        "-d",
        data_dir.path(),
        "--catalog",
        "meta.json",
        "--recommendations",
        "recs.json",
        "recommend",
        "3"
    )
    .success()
    .stdout(predicate::str::contains("hero\t5\tYves Saint Laurent - Black Opium\t50%\tSexy 🔥"));
    Ok(())
}

#[test]
fn corrupt_catalog_fails() -> Result<()> {
    let data_dir = assert_fs::TempDir::new()?;
    fs::write(data_dir.path().join("perfume_metadata.json"), "not json")?;

    cargo_run!("scentsearch", "-d", data_dir.path(), "search", "aventus")
        .failure()
        .stderr(predicate::str::contains("data unavailable"));
    Ok(())
}
