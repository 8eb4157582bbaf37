use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a database file
fn gacha_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("gacha").expect("Failed to find gacha binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Helper function to extract the recipe ID from "Added recipe 'T' (ID: x)"
fn extract_id_from_output(output: &str) -> String {
    let start = output.find("(ID: ").expect("No ID in output") + "(ID: ".len();
    let end = output[start..].find(')').expect("Unterminated ID") + start;
    output[start..end].to_string()
}

#[test]
fn test_cli_lists_sample_recipes_by_default() {
    let temp_dir = create_cli_test_environment();

    gacha_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("### Chili con Carne"))
        .stdout(predicate::str::contains("Pfannkuchen"))
        .stdout(predicate::str::contains("Caesar Salad"));
}

#[test]
fn test_cli_no_samples_starts_empty() {
    let temp_dir = create_cli_test_environment();

    gacha_cmd(&temp_dir)
        .args(["--no-samples", "recipe", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn test_cli_recipe_lifecycle() {
    let temp_dir = create_cli_test_environment();

    let output = gacha_cmd(&temp_dir)
        .args([
            "recipe", "add", "Linsen-Dal", "-m", "35", "-t", "Veggie,Indisch", "-r", "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added recipe 'Linsen-Dal'"))
        .get_output()
        .stdout
        .clone();
    let id = extract_id_from_output(&String::from_utf8(output).expect("Invalid UTF-8"));
    assert!(id.starts_with("uuid-"));

    gacha_cmd(&temp_dir)
        .args(["recipe", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Time: 35 min"))
        .stdout(predicate::str::contains("Veggie, Indisch"));

    gacha_cmd(&temp_dir)
        .args(["recipe", "edit", &id, "--rating", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set rating to 5"))
        .stdout(predicate::str::contains("Legendary"));

    gacha_cmd(&temp_dir)
        .args(["recipe", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted recipe 'Linsen-Dal'"));

    gacha_cmd(&temp_dir)
        .args(["recipe", "show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_rejects_invalid_rating() {
    let temp_dir = create_cli_test_environment();

    gacha_cmd(&temp_dir)
        .args(["recipe", "add", "Toast", "-r", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rating"));
}

#[test]
fn test_cli_search_recipes() {
    let temp_dir = create_cli_test_environment();

    gacha_cmd(&temp_dir)
        .args(["recipe", "list", "--search", "salad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Caesar Salad"))
        .stdout(predicate::str::contains("Chili").not());
}

#[test]
fn test_cli_plan_set_week_and_clear() {
    let temp_dir = create_cli_test_environment();

    gacha_cmd(&temp_dir)
        .args(["plan", "set", "today", "uuid-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Planned 'Chili con Carne'"));

    gacha_cmd(&temp_dir)
        .args(["plan", "week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(this week)"))
        .stdout(predicate::str::contains("(today): Chili con Carne"));

    gacha_cmd(&temp_dir)
        .args(["plan", "clear", "today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Cleared"));

    gacha_cmd(&temp_dir)
        .args(["plan", "clear", "today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ Nothing planned for"));
}

#[test]
fn test_cli_plan_unknown_recipe_fails() {
    let temp_dir = create_cli_test_environment();

    gacha_cmd(&temp_dir)
        .args(["plan", "set", "2030-01-07", "uuid-missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("uuid-missing"));
}

#[test]
fn test_cli_plan_rejects_bad_date() {
    let temp_dir = create_cli_test_environment();

    gacha_cmd(&temp_dir)
        .args(["plan", "set", "07.01.2030", "uuid-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn test_cli_plan_week_offset_out_of_range() {
    let temp_dir = create_cli_test_environment();

    gacha_cmd(&temp_dir)
        .args(["plan", "week", "--offset", "2000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"))
        .stderr(predicate::str::contains("panicked").not());

    gacha_cmd(&temp_dir)
        .args(["plan", "clear-week", "--offset", "-2147483648"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_cli_oracle_respects_filters() {
    let temp_dir = create_cli_test_environment();

    // Pfannkuchen (rating 4, two copies) and Caesar Salad (rating 3, one copy)
    gacha_cmd(&temp_dir)
        .args(["oracle", "--quick", "--veggie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Drawn from a pool of 3"))
        .stdout(predicate::str::contains("Chili").not());
}

#[test]
fn test_cli_oracle_plans_winner() {
    let temp_dir = create_cli_test_environment();

    gacha_cmd(&temp_dir)
        .args(["oracle", "--plan", "2030-01-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Planned '"))
        .stdout(predicate::str::contains("07.01."));
}

#[test]
fn test_cli_oracle_empty_pool() {
    let temp_dir = create_cli_test_environment();

    gacha_cmd(&temp_dir)
        .args(["--no-samples", "oracle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching recipes"));
}

#[test]
fn test_cli_backup_round_trip() {
    let temp_dir = create_cli_test_environment();
    let backup_path = temp_dir.path().join("backup.json");

    gacha_cmd(&temp_dir)
        .args(["plan", "set", "2030-01-07", "uuid-2"])
        .assert()
        .success();

    gacha_cmd(&temp_dir)
        .args(["backup", "export", "--output"])
        .arg(&backup_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let json = std::fs::read_to_string(&backup_path).expect("Backup file missing");
    let value: serde_json::Value = serde_json::from_str(&json).expect("Backup is not JSON");
    assert_eq!(value["recipes"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["mealPlan"]["2030-01-07"], "uuid-2");

    let other_dir = create_cli_test_environment();
    gacha_cmd(&other_dir)
        .args(["--no-samples", "backup", "import"])
        .arg(&backup_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3 recipes and 1 plan entries"));

    gacha_cmd(&other_dir)
        .args(["recipe", "show", "uuid-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pfannkuchen"));
}

#[test]
fn test_cli_import_malformed_backup() {
    let temp_dir = create_cli_test_environment();
    let backup_path = temp_dir.path().join("broken.json");
    std::fs::write(&backup_path, r#"{"mealPlan": {}}"#).expect("Failed to write file");

    gacha_cmd(&temp_dir)
        .args(["backup", "import"])
        .arg(&backup_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed backup"));

    // Nothing was replaced
    gacha_cmd(&temp_dir)
        .args(["recipe", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chili con Carne"));
}

#[test]
fn test_shell_spin_and_plan() {
    let temp_dir = create_cli_test_environment();

    gacha_cmd(&temp_dir)
        .args(["shell", "--reveal-speed", "0"])
        .write_stdin("tab oracle\nspin --veggie\naccept\nchoose 2030-01-07 --replace\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Oracle"))
        .stdout(predicate::str::contains("Pick a day"))
        .stdout(predicate::str::contains("Planned '"))
        .stdout(predicate::str::contains("07.01."));
}

#[test]
fn test_shell_recipe_form_and_errors() {
    let temp_dir = create_cli_test_environment();

    gacha_cmd(&temp_dir)
        .args(["--no-samples", "shell", "--reveal-speed", "0"])
        .write_stdin(concat!(
            "save Nope\n",
            "new\n",
            "save 'Gemüsecurry' -m 30 -t Veggie\n",
            "list\n",
            "dance\n",
            "spin --quick --veggie\n",
            "quit\n",
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 'Gemüsecurry'"))
        .stdout(predicate::str::contains("### Gemüsecurry"))
        .stderr(predicate::str::contains("Open the recipe form"))
        .stderr(predicate::str::contains("dance"));
}

#[test]
fn test_shell_back_past_first_entry_quits() {
    let temp_dir = create_cli_test_environment();

    gacha_cmd(&temp_dir)
        .args(["shell", "--fragment", "#view-weekplan", "--reveal-speed", "0"])
        .write_stdin("back\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye!"))
        .stdout(predicate::str::contains("### Chili").not());
}

#[test]
fn test_shell_day_picker_follows_week_changes() {
    let temp_dir = create_cli_test_environment();

    gacha_cmd(&temp_dir)
        .args(["shell", "--fragment", "#view-oracle", "--reveal-speed", "0"])
        .write_stdin("spin\naccept\nnext\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Pick a day"))
        .stdout(predicate::str::contains("(this week)"))
        .stdout(predicate::str::contains("(next week)"));
}

#[test]
fn test_shell_reports_user_mistakes_as_status() {
    let temp_dir = create_cli_test_environment();

    gacha_cmd(&temp_dir)
        .args(["--no-samples", "shell", "--reveal-speed", "0"])
        .write_stdin("spin\nedit uuid-missing\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ No matching recipes"))
        .stdout(predicate::str::contains("✗ Recipe with ID uuid-missing not found"));
}

#[test]
fn test_shell_rejects_invalid_reveal_speed() {
    let temp_dir = create_cli_test_environment();

    gacha_cmd(&temp_dir)
        .args(["shell", "--reveal-speed=-1"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("speed"));
}
