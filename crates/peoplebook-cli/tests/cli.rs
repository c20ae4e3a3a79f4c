use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

fn run_raw(temp: &TempDir, args: &[&str]) -> Output {
    let db_path = temp.path().join("peoplebook.sqlite3");
    cargo_bin_cmd!("peoplebook")
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env_remove("RUST_LOG")
        .args(["--db-path", db_path.to_str().expect("db path")])
        .args(args)
        .output()
        .expect("run command")
}

fn run_cmd(temp: &TempDir, args: &[&str]) -> String {
    let output = run_raw(temp, args);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(temp: &TempDir, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = run_raw(temp, &full);
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn write_config(temp: &TempDir, contents: &str) {
    let config_dir = temp.path().join("config").join("peoplebook");
    fs::create_dir_all(&config_dir).expect("config dir");
    let config_path = config_dir.join("config.toml");
    fs::write(&config_path, contents).expect("write config");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&config_path, fs::Permissions::from_mode(0o600)).expect("chmod");
    }
}

fn add(temp: &TempDir, name: &str) -> i64 {
    let email = format!("{}@example.com", name.to_ascii_lowercase());
    let created = run_cmd_json(
        temp,
        &["add", "--name", name, "--email", &email, "--phone", "9841000000"],
    );
    created["id"].as_i64().expect("id")
}

#[test]
fn cli_add_edit_show_delete_flow() {
    let temp = TempDir::new().expect("temp dir");

    let created = run_cmd_json(
        &temp,
        &[
            "add",
            "--name",
            "Sita Sharma",
            "--email",
            "sita@example.com",
            "--phone",
            "9841000000",
            "--city",
            "Pokhara",
            "--province",
            "4",
        ],
    );
    let id = created["id"].as_i64().expect("id").to_string();
    assert_eq!(created["country"], "Nepal");
    assert_eq!(created["province"], "4");

    let updated = run_cmd_json(&temp, &["edit", &id, "--name", "Sita Thapa", "--city", ""]);
    assert_eq!(updated["id"].as_i64().expect("id").to_string(), id);
    assert_eq!(updated["name"], "Sita Thapa");
    assert_eq!(updated["city"], "");
    assert_eq!(updated["province"], "4");

    let shown = run_cmd(&temp, &["show", &id]);
    assert!(shown.contains("name: Sita Thapa"));

    let list = run_cmd_json(&temp, &["list"]);
    assert_eq!(list["total"], 1);

    run_cmd(&temp, &["delete", &id, "--yes"]);
    let list = run_cmd_json(&temp, &["list"]);
    assert_eq!(list["total"], 0);
}

#[test]
fn cli_reports_every_invalid_field() {
    let temp = TempDir::new().expect("temp dir");
    let output = run_raw(&temp, &["--json", "add", "--email", "not-an-email", "--phone", "12"]);
    assert_eq!(output.status.code(), Some(3));

    let report: Value = serde_json::from_slice(&output.stdout).expect("parse json");
    assert_eq!(report["valid"], false);
    assert_eq!(report["errors"]["name"], "Name is required");
    assert!(report["errors"]["email"].is_string());
    assert!(report["errors"]["phoneNumber"].is_string());

    let list = run_cmd_json(&temp, &["list"]);
    assert_eq!(list["total"], 0);
}

#[test]
fn cli_validate_accepts_minimal_record() {
    let temp = TempDir::new().expect("temp dir");
    let report = run_cmd_json(
        &temp,
        &["validate", "--name", "A", "--email", "a@b.com", "--phone", "1234567"],
    );
    assert_eq!(report["valid"], true);
}

#[test]
fn cli_list_pages_through_directory() {
    let temp = TempDir::new().expect("temp dir");
    let names = ["Ada", "Bea", "Cal", "Dev", "Eli", "Fay", "Gus"];
    for name in names {
        add(&temp, name);
    }

    let second = run_cmd_json(&temp, &["list", "--page", "2", "--page-size", "5"]);
    let items = second["items"].as_array().expect("items");
    let listed: Vec<&str> = items
        .iter()
        .map(|item| item["name"].as_str().expect("name"))
        .collect();
    assert_eq!(listed, vec!["Fay", "Gus"]);
    assert_eq!(second["has_prev"], true);
    assert_eq!(second["has_next"], false);

    let beyond = run_cmd_json(&temp, &["list", "--page", "99"]);
    assert!(beyond["items"].as_array().expect("items").is_empty());

    let text = run_cmd(&temp, &["list"]);
    assert!(text.contains("page 1 of 2 (7 people)"));
    assert!(text.contains("next: --page 2"));
}

#[test]
fn cli_delete_requires_confirmation_and_existing_id() {
    let temp = TempDir::new().expect("temp dir");
    let id = add(&temp, "Ada").to_string();

    let unconfirmed = run_raw(&temp, &["delete", &id]);
    assert_eq!(unconfirmed.status.code(), Some(3));
    assert_eq!(run_cmd_json(&temp, &["list"])["total"], 1);

    let missing = run_raw(&temp, &["delete", "12345", "--yes"]);
    assert_eq!(missing.status.code(), Some(2));
    assert_eq!(run_cmd_json(&temp, &["list"])["total"], 1);
}

#[test]
fn cli_picture_round_trip_and_png_only() {
    let temp = TempDir::new().expect("temp dir");
    let png_path = temp.path().join("avatar.png");
    let png_bytes = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];
    fs::write(&png_path, &png_bytes).expect("write png");

    let empty = run_cmd_json(&temp, &["picture", "show"]);
    assert_eq!(empty["present"], false);

    run_cmd(&temp, &["picture", "set", png_path.to_str().expect("path")]);

    let jpeg_path = temp.path().join("avatar.jpg");
    fs::write(&jpeg_path, [0xff, 0xd8, 0xff]).expect("write jpeg");
    let rejected = run_raw(&temp, &["picture", "set", jpeg_path.to_str().expect("path")]);
    assert_eq!(rejected.status.code(), Some(3));
    let stderr = String::from_utf8(rejected.stderr).expect("utf8");
    assert!(stderr.contains("Only PNG files are allowed"));

    let shown = run_cmd_json(&temp, &["picture", "show"]);
    assert_eq!(shown["present"], true);
    assert_eq!(shown["media_type"], "image/png");

    let out = temp.path().join("exported.png");
    run_cmd(&temp, &["picture", "export", out.to_str().expect("path")]);
    assert_eq!(fs::read(Path::new(&out)).expect("read export"), png_bytes);
}

#[test]
fn cli_countries_lead_with_default() {
    let temp = TempDir::new().expect("temp dir");
    write_config(&temp, "[countries]\nsource = \"builtin\"\n");
    let options = run_cmd_json(&temp, &["countries"]);
    let options = options.as_array().expect("array");
    assert_eq!(options[0], "Nepal");
    assert!(options.len() > 100);
}

#[test]
fn cli_countries_fall_back_to_default_when_catalog_is_unreachable() {
    let temp = TempDir::new().expect("temp dir");
    write_config(
        &temp,
        "[countries]\nsource = \"remote\"\nurl = \"https://127.0.0.1:9/countries\"\n",
    );
    let output = run_raw(&temp, &["--json", "countries"]);
    assert!(output.status.success(), "command failed: {:?}", output);
    let options: Value = serde_json::from_slice(&output.stdout).expect("parse json");
    assert_eq!(options, serde_json::json!(["Nepal"]));
}

#[test]
fn cli_backup_writes_snapshot() {
    let temp = TempDir::new().expect("temp dir");
    add(&temp, "Ada");

    let out = temp.path().join("backups").join("copy.sqlite3");
    let report = run_cmd_json(&temp, &["backup", "--out", out.to_str().expect("path")]);
    assert!(report["size_bytes"].as_u64().expect("size") > 0);
    assert!(out.exists());

    let live = temp.path().join("peoplebook.sqlite3");
    let rejected = run_raw(&temp, &["backup", "--out", live.to_str().expect("path")]);
    assert_eq!(rejected.status.code(), Some(3));
}

#[test]
fn cli_reads_page_size_and_default_country_from_config() {
    let temp = TempDir::new().expect("temp dir");
    write_config(
        &temp,
        "page_size = 2\ndefault_country = \"India\"\n\n[countries]\nsource = \"builtin\"\n",
    );

    let id = add(&temp, "Ada");
    add(&temp, "Bea");
    add(&temp, "Cal");

    let shown = run_cmd_json(&temp, &["show", &id.to_string()]);
    assert_eq!(shown["country"], "India");

    let first = run_cmd_json(&temp, &["list"]);
    assert_eq!(first["page_size"], 2);
    assert_eq!(first["page_count"], 2);
    assert_eq!(first["items"].as_array().expect("items").len(), 2);

    let countries = run_cmd_json(&temp, &["countries"]);
    assert_eq!(countries[0], "India");
}
