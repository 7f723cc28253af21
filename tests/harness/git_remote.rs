//! Local bare repository standing in for the source-control web host.

use std::fs;
use std::path::Path;
use std::process::Command;

pub(crate) const TEMPLATE_DESCRIPTOR: &str = r#"{
    "name": "template",
    "description": "placeholder",
    "tool-version": "0.1.0",
    "container-image": {"type": "docker", "image": "placeholder/template"},
    "command-line": "run.sh",
    "inputs": []
}
"#;

fn git(args: &[&str], dir: &Path) {
    let output = Command::new("git")
        .args(["-c", "user.name=Test User", "-c", "user.email=test@example.com"])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Create `<web_root>/<owner>/<name>.git` holding a template descriptor and README.
pub(crate) fn seed_bare_repository(web_root: &Path, owner: &str, name: &str) {
    let seed = web_root.join(".seed").join(name);
    fs::create_dir_all(&seed).expect("Failed to create seed directory");
    fs::write(seed.join("descriptor.json"), TEMPLATE_DESCRIPTOR).expect("write descriptor");
    fs::write(seed.join("README.md"), "# template\n").expect("write README");

    git(&["init", "--initial-branch=main"], &seed);
    git(&["add", "."], &seed);
    git(&["commit", "-m", "template"], &seed);

    let owner_dir = web_root.join(owner);
    fs::create_dir_all(&owner_dir).expect("Failed to create owner directory");
    let bare = format!("{}.git", name);
    let seed_path = seed.to_string_lossy().into_owned();
    git(&["clone", "--bare", seed_path.as_str(), bare.as_str()], &owner_dir);
}
