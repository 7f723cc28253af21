use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn registry_login_failure_halts_before_creation_and_clone() {
    let ctx = TestContext::new();
    let mut github = mockito::Server::new();
    let mut dockerhub = mockito::Server::new();

    let _generate = github
        .mock("POST", "/repos/acme/tmpl/generate")
        .with_status(201)
        .with_body(r#"{"name": "Wf1", "full_name": "acme/Wf1"}"#)
        .create();
    let _login = dockerhub
        .mock("POST", "/v2/users/login")
        .with_status(401)
        .with_body(r#"{"detail": "Incorrect authentication credentials"}"#)
        .create();
    let create = dockerhub.mock("POST", "/v2/repositories/").with_status(201).expect(0).create();

    ctx.write_config(&github.url(), &format!("{}/v2", dockerhub.url()));

    ctx.cli()
        .arg("provision")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("registry repository stage failed"))
        .stdout(predicate::str::contains("Incorrect authentication credentials"));

    create.assert();
    assert!(!ctx.repository_dir().exists());
}

#[test]
fn template_generation_rejection_reports_source_stage() {
    let ctx = TestContext::new();
    let mut github = mockito::Server::new();
    let dockerhub = mockito::Server::new();

    let _generate = github
        .mock("POST", "/repos/acme/tmpl/generate")
        .with_status(422)
        .with_body(r#"{"message": "Name already exists on this account"}"#)
        .create();

    ctx.write_config(&github.url(), &format!("{}/v2", dockerhub.url()));

    ctx.cli()
        .arg("provision")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("source repository stage failed"))
        .stdout(predicate::str::contains("(HTTP 422)"))
        .stdout(predicate::str::contains("Name already exists on this account"));
}
