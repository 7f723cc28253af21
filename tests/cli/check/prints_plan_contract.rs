use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn check_prints_planned_addresses_without_network() {
    let ctx = TestContext::new();
    ctx.write_config("http://127.0.0.1:9", "http://127.0.0.1:9/v2");

    ctx.cli()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("POST http://127.0.0.1:9/repos/acme/tmpl/generate"))
        .stdout(predicate::str::contains("(acmehub/wf1)"))
        .stdout(predicate::str::contains("threshold (THRESHOLD)"))
        .stdout(predicate::str::contains("/repos/acme/Wf1/contents/README.md"));

    assert!(!ctx.repository_dir().exists());
}
