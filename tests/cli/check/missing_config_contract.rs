use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn check_fails_without_config_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["check", "--config", "absent.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Config not found"));
}

#[test]
fn provision_rejects_unknown_config_keys() {
    let ctx = TestContext::new();
    std::fs::write(ctx.work_dir().join("wfseed.toml"), "[surprise]\nkey = 1\n").unwrap();

    ctx.cli().arg("provision").assert().failure().stderr(predicate::str::contains("TOML parse error"));
}
