mod helpers;

use ankiload::application::{Importer, Provisioner};
use ankiload::domain::DomainError;
use ankiload::util::testing::{Failure, MockAnki, RecordedCall};
use anyhow::Result;
use helpers::ImageDir;

#[test]
fn given_reachable_anki_when_checking_connectivity_then_succeeds() -> Result<()> {
    // Arrange
    let mock = MockAnki::builder().build();
    let provisioner = Provisioner::new(&mock);

    // Act
    provisioner.check_connectivity()?;

    // Assert
    assert_eq!(mock.calls(), vec![RecordedCall::Version]);
    Ok(())
}

#[test]
fn given_api_error_in_version_when_checking_connectivity_then_continues() -> Result<()> {
    // An error string in the version response is reported, not fatal
    let mock = MockAnki::builder()
        .with_version_failure(Failure::api("unsupported"))
        .build();
    let provisioner = Provisioner::new(&mock);

    provisioner.check_connectivity()?;
    Ok(())
}

#[test]
fn given_unreachable_anki_when_checking_connectivity_then_fails() {
    // Arrange
    let mock = MockAnki::builder()
        .with_version_failure(Failure::unreachable("connection refused"))
        .build();
    let provisioner = Provisioner::new(&mock);

    // Act
    let result = provisioner.check_connectivity();

    // Assert - the one hard-fail path before any other operation
    match result.unwrap_err() {
        DomainError::Unreachable(_) => {}
        other => panic!("Expected Unreachable error, got {other:?}"),
    }
    assert_eq!(mock.calls(), vec![RecordedCall::Version]);
}

#[test]
fn given_deck_name_when_ensuring_deck_then_issues_create_deck() -> Result<()> {
    let mock = MockAnki::builder().build();
    let provisioner = Provisioner::new(&mock);

    provisioner.ensure_deck("Screenshots")?;

    assert_eq!(
        mock.calls(),
        vec![RecordedCall::CreateDeck("Screenshots".to_string())]
    );
    Ok(())
}

#[test]
fn given_deck_api_error_when_ensuring_deck_then_run_continues() -> Result<()> {
    let mock = MockAnki::builder()
        .with_deck_failure(Failure::api("deck name invalid"))
        .build();
    let provisioner = Provisioner::new(&mock);

    provisioner.ensure_deck("Bad::Name")?;
    Ok(())
}

#[test]
fn given_existing_deck_when_ensuring_twice_then_same_idempotent_call() -> Result<()> {
    // Anki treats createDeck for an existing deck as a no-op success; the
    // client just issues the same call both times
    let mock = MockAnki::builder().build();
    let provisioner = Provisioner::new(&mock);

    provisioner.ensure_deck("Study")?;
    provisioner.ensure_deck("Study")?;

    assert_eq!(
        mock.calls(),
        vec![
            RecordedCall::CreateDeck("Study".to_string()),
            RecordedCall::CreateDeck("Study".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn given_model_present_when_ensuring_model_then_no_create_call() -> Result<()> {
    // Arrange
    let mock = MockAnki::builder()
        .with_models(&["Basic", "Cloze"])
        .build();
    let provisioner = Provisioner::new(&mock);

    // Act
    provisioner.ensure_model()?;

    // Assert
    assert_eq!(mock.create_model_calls(), 0);
    Ok(())
}

#[test]
fn given_model_absent_when_ensuring_model_then_exactly_one_create_call() -> Result<()> {
    // Arrange
    let mock = MockAnki::builder().with_models(&["Cloze"]).build();
    let provisioner = Provisioner::new(&mock);

    // Act
    provisioner.ensure_model()?;

    // Assert
    assert_eq!(mock.create_model_calls(), 1);
    Ok(())
}

#[test]
fn given_model_names_query_failure_when_ensuring_model_then_fails() {
    // The query itself failing is fatal even at the API level
    let mock = MockAnki::builder()
        .with_model_names_failure(Failure::api("collection is not available"))
        .build();
    let provisioner = Provisioner::new(&mock);

    let result = provisioner.ensure_model();

    assert!(result.is_err());
    assert_eq!(mock.create_model_calls(), 0);
}

#[test]
fn given_missing_model_when_provisioning_and_importing_then_create_precedes_notes() -> Result<()> {
    // Arrange
    let dir = ImageDir::with_files(&["a.jpg", "b.png"])?;
    let mock = MockAnki::builder().with_models(&[]).build();

    // Act - the same order run() wires things in
    let provisioner = Provisioner::new(&mock);
    provisioner.check_connectivity()?;
    provisioner.ensure_deck("Study")?;
    provisioner.ensure_model()?;
    Importer::new(&mock, "Study", dir.path()).import_concurrent(2)?;

    // Assert
    let calls = mock.calls();
    let create_model_pos = calls
        .iter()
        .position(|c| matches!(c, RecordedCall::CreateModel))
        .expect("createModel was never called");
    let first_note_pos = calls
        .iter()
        .position(|c| matches!(c, RecordedCall::AddNote(_)))
        .expect("no notes were added");
    assert!(create_model_pos < first_note_pos);
    Ok(())
}

#[test]
fn given_deck_when_removing_then_issues_delete_deck() -> Result<()> {
    let mock = MockAnki::builder().build();
    let provisioner = Provisioner::new(&mock);

    provisioner.remove_deck("Study")?;

    assert_eq!(
        mock.calls(),
        vec![RecordedCall::DeleteDeck("Study".to_string())]
    );
    Ok(())
}
