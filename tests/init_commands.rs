use assert_cmd::Command;
use predicates::prelude::predicate;

#[test]
fn init_repository_successfully() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let dir_absolute_path = dir.path().canonicalize()?.display().to_string();
    let mut sut = Command::cargo_bin("vit")?;

    sut.arg("init").arg(dir.path());

    sut.assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty vit repository in .+\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    assert!(dir.path().join(".vit/objects").is_dir());
    assert!(dir.path().join(".vit/refs").is_dir());

    let head = std::fs::read_to_string(dir.path().join(".vit/HEAD"))?;
    assert_eq!(head, "ref: refs/heads/main\n");

    Ok(())
}

#[test]
fn init_defaults_to_the_current_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let mut sut = Command::cargo_bin("vit")?;

    sut.current_dir(dir.path()).arg("init");

    sut.assert().success().stdout(predicate::str::contains(
        "Initialized empty vit repository in",
    ));

    assert!(dir.path().join(".vit/objects").is_dir());
    assert!(dir.path().join(".vit/HEAD").is_file());

    Ok(())
}

#[test]
fn reinitializing_an_existing_repository_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;

    let mut cmd = Command::cargo_bin("vit")?;
    cmd.current_dir(dir.path()).arg("init");
    cmd.assert().success();

    let mut sut = Command::cargo_bin("vit")?;
    sut.current_dir(dir.path()).arg("init");
    sut.assert().success();

    let head = std::fs::read_to_string(dir.path().join(".vit/HEAD"))?;
    assert_eq!(head, "ref: refs/heads/main\n");

    Ok(())
}
