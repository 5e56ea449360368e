mod common;

use common::TestEnv;

#[test]
fn test_emit_writes_manifest_next_to_stats() {
    let env = TestEnv::with_webpack_stats();

    let result = env.run(&["emit", "--stats", "dist/stats.json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("Wrote"), "stdout:\n{}", result.stdout);

    let manifest: serde_json::Value =
        serde_json::from_str(&env.read_file("dist/manifest.json")).unwrap();
    assert_eq!(manifest["src/main.js"], "main.3f9a1c.js");
    assert_eq!(manifest["src/main.js.map"], "main.3f9a1c.js.map");
    assert_eq!(manifest["src/vendor.js"], "vendor.8e21bd.js");
    assert_eq!(manifest["styles.css"], "styles.d41d8c.css");
    assert_eq!(manifest["images/logo.png"], "images/logo.c3d4e5.png");
    assert_eq!(manifest["hero.jpg"], "hero.banner.77aa01.jpg");
    assert!(manifest.get("fonts/inter.woff2").is_none());
}

#[test]
fn test_emit_respects_out_dir_and_overrides() {
    let env = TestEnv::with_webpack_stats();

    let result = env.run(&[
        "emit",
        "--stats",
        "dist/stats.json",
        "--out-dir",
        "public/build",
        "--file-name",
        "assets.json",
        "--strip",
        "^src/",
        "--base-path",
        "/static/",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let manifest: serde_json::Value =
        serde_json::from_str(&env.read_file("public/build/assets.json")).unwrap();
    assert_eq!(manifest["/static/main.js"], "/static/main.3f9a1c.js");
    assert_eq!(manifest["/static/logo.png"], serde_json::Value::Null);
    assert_eq!(
        manifest["/static/images/logo.png"],
        "/static/images/logo.c3d4e5.png"
    );
}

#[test]
fn test_emit_reads_project_config() {
    let env = TestEnv::with_webpack_stats();
    env.write_file(
        "assetmap.toml",
        "[manifest]\nstrip_pattern = \"^src/\"\nfile_name = \"rev-manifest.json\"\n",
    );

    let result = env.run(&["emit", "--stats", "dist/stats.json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let manifest: serde_json::Value =
        serde_json::from_str(&env.read_file("dist/rev-manifest.json")).unwrap();
    assert_eq!(manifest["vendor.js"], "vendor.8e21bd.js");
}

#[test]
fn test_emit_flags_override_env_and_env_overrides_config() {
    let env = TestEnv::with_webpack_stats();
    env.write_file("assetmap.toml", "[manifest]\nbase_path = \"/from-config/\"\n");

    let result = env.run_with_env(
        &["emit", "--stats", "dist/stats.json", "--json"],
        &[("ASSETMAP_BASE_PATH", "/from-env/")],
    );
    assert!(result.success, "stderr:\n{}", result.stderr);
    let event = result.event("manifest");
    assert_eq!(event["manifest"]["/from-env/src/vendor.js"], "/from-env/vendor.8e21bd.js");

    let result = env.run_with_env(
        &["emit", "--stats", "dist/stats.json", "--json", "--base-path", "/from-flag/"],
        &[("ASSETMAP_BASE_PATH", "/from-env/")],
    );
    assert!(result.success, "stderr:\n{}", result.stderr);
    let event = result.event("manifest");
    assert_eq!(event["manifest"]["/from-flag/src/vendor.js"], "/from-flag/vendor.8e21bd.js");
}

#[test]
fn test_emit_warns_about_unknown_config_keys() {
    let env = TestEnv::with_webpack_stats();
    env.write_file("assetmap.toml", "[manifest]\nbase_pth = \"/x/\"\n");

    let result = env.run(&["emit", "--stats", "dist/stats.json"]);

    assert!(result.success);
    assert!(
        result.stderr.contains("unknown config key 'base_pth'")
            && result.stderr.contains("did you mean 'base_path'?"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn test_emit_json_events() {
    let env = TestEnv::with_webpack_stats();

    let result = env.run(&["emit", "--stats", "dist/stats.json", "--json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let events = result.events();
    assert_eq!(events.first().unwrap()["event"], "start");
    assert_eq!(events.last().unwrap()["event"], "complete");
    assert_eq!(events.last().unwrap()["success"], true);

    let manifest = result.event("manifest");
    assert_eq!(manifest["file_name"], "manifest.json");
    assert_eq!(manifest["emitted"], true);
    assert_eq!(
        manifest["size"].as_u64().unwrap() as usize,
        env.read_file("dist/manifest.json").len()
    );
}

#[test]
fn test_emit_dry_run_writes_nothing_and_reports_diff() {
    let env = TestEnv::with_webpack_stats();
    env.write_file(
        "dist/manifest.json",
        "{\n  \"src/vendor.js\": \"vendor.000000.js\",\n  \"gone.css\": \"gone.1.css\"\n}",
    );

    let result = env.run(&["emit", "--stats", "dist/stats.json", "--dry-run", "--json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let diff = result.event("diff");
    assert!(diff["changed"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("src/vendor.js")));
    assert_eq!(diff["removed"], serde_json::json!(["gone.css"]));
    assert_eq!(diff["changes"], true);
    assert_eq!(result.event("manifest")["emitted"], false);
    assert!(env.read_file("dist/manifest.json").contains("vendor.000000.js"));
}

#[test]
fn test_emit_dry_run_human_output_is_a_diff() {
    let env = TestEnv::with_webpack_stats();

    let result = env.run(&["emit", "--stats", "dist/stats.json", "--dry-run"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("+++ b/"), "stdout:\n{}", result.stdout);
    assert!(result.stdout.contains("Would update"));
    assert!(!env.path("dist/manifest.json").exists());
}

#[test]
fn test_emit_twice_is_byte_identical() {
    let env = TestEnv::with_webpack_stats();

    assert!(env.run(&["emit", "--stats", "dist/stats.json"]).success);
    let first = env.read_file("dist/manifest.json");
    assert!(env.run(&["emit", "--stats", "dist/stats.json"]).success);
    let second = env.read_file("dist/manifest.json");

    assert_eq!(first, second);
    assert!(!first.ends_with('\n'));
}

#[test]
fn test_emit_missing_stats_fails() {
    let env = TestEnv::new();

    let result = env.run(&["emit", "--stats", "dist/stats.json"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("stats file not found"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn test_emit_invalid_stats_fails() {
    let env = TestEnv::new();
    env.write_file("stats.json", "{ \"assetsByChunkName\": { \"main\": 42 } }");

    let result = env.run(&["emit", "--stats", "stats.json", "--json"]);

    assert!(!result.success);
    assert_eq!(result.event("error")["command"], "emit");
}

#[test]
fn test_emit_invalid_pattern_fails() {
    let env = TestEnv::with_webpack_stats();

    let result = env.run(&["emit", "--stats", "dist/stats.json", "--image-ext", "(png"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("invalid image_extensions pattern"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn test_emit_dry_run_up_to_date_after_emit() {
    let env = TestEnv::with_webpack_stats();
    assert!(env.run(&["emit", "--stats", "dist/stats.json"]).success);

    let result = env.run(&["emit", "--stats", "dist/stats.json", "--dry-run"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("is up to date"), "stdout:\n{}", result.stdout);
}

#[test]
fn test_emit_dry_run_reports_reformatted_manifest_as_change() {
    let env = TestEnv::with_webpack_stats();
    assert!(env.run(&["emit", "--stats", "dist/stats.json"]).success);
    let published: serde_json::Value =
        serde_json::from_str(&env.read_file("dist/manifest.json")).unwrap();
    let compact = serde_json::to_string(&published).unwrap();
    env.write_file("dist/manifest.json", &compact);

    let result = env.run(&["emit", "--stats", "dist/stats.json", "--dry-run", "--json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let diff = result.event("diff");
    assert_eq!(diff["changes"], true);
    assert_eq!(diff["added"], serde_json::json!([]));
    assert_eq!(diff["changed"], serde_json::json!([]));
    assert_eq!(diff["removed"], serde_json::json!([]));
    assert_eq!(env.read_file("dist/manifest.json"), compact);
}

#[test]
fn test_emit_dry_run_reports_corrupt_manifest_as_change() {
    let env = TestEnv::with_webpack_stats();
    env.write_file("dist/manifest.json", "garbage");

    let result = env.run(&["emit", "--stats", "dist/stats.json", "--dry-run"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("Would update"), "stdout:\n{}", result.stdout);
    assert!(!result.stdout.contains("is up to date"));
}

#[test]
fn test_emit_fails_on_malformed_project_config() {
    let env = TestEnv::with_webpack_stats();
    env.write_file(
        "assetmap.toml",
        "[manifest]\nbase_path = \"/static/\"\nfile_name = 3\n",
    );

    let result = env.run(&["emit", "--stats", "dist/stats.json"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("invalid config in") && result.stderr.contains("assetmap.toml"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(!env.path("dist/manifest.json").exists());
}

#[test]
#[cfg(target_os = "linux")]
fn test_malformed_user_config_fails() {
    let env = TestEnv::with_webpack_stats();
    let user_config = env.config_home.path().join("assetmap").join("config.toml");
    std::fs::create_dir_all(user_config.parent().unwrap()).unwrap();
    std::fs::write(&user_config, "[manifest\nbase_path = ").unwrap();

    let result = env.run(&["show", "--stats", "dist/stats.json", "--json"]);

    assert!(!result.success);
    assert!(result.event("error")["message"]
        .as_str()
        .unwrap()
        .contains("invalid config in"));
}
