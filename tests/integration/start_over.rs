use anyhow::Result;
use repqr_onboarding::orchestration::{ProfessionRequest, UiFlags, WizardEventType};
use repqr_onboarding::profiles::{seed_profile, Environment, ProfessionType, SocialPlatform};
use repqr_onboarding::Phase;
use std::time::Duration;

use crate::support::wizard_fixture::WizardFixture;

#[test]
fn start_over_drops_in_flight_sequences() -> Result<()> {
    let mut fixture = WizardFixture::at_positioning(Environment::Repqr);
    fixture.wizard.build_with_ai();
    fixture.wizard.copy_rep_url();
    fixture.wizard.toggle_social_input(SocialPlatform::Venmo);
    fixture.wizard.advance_clock(Duration::from_millis(700));

    fixture.wizard.start_over();
    assert_eq!(fixture.wizard.phase(), Phase::Commitment);
    assert_eq!(fixture.wizard.ui(), &UiFlags::default());
    assert_eq!(fixture.wizard.next_deadline(), None);

    fixture.wizard.advance_clock(Duration::from_secs(5));
    assert_eq!(fixture.wizard.profile(), &seed_profile());
    assert_eq!(fixture.wizard.phase(), Phase::Commitment);
    assert_eq!(fixture.count(WizardEventType::AiBuildCommitted), 0);
    assert_eq!(
        fixture.wizard.events().last().map(|event| event.event_type),
        Some(WizardEventType::StartedOver)
    );
    Ok(())
}

#[test]
fn start_over_forgets_the_first_selection() -> Result<()> {
    let mut fixture = WizardFixture::at_category(Environment::Scanrep);
    fixture.wizard.select_profession(ProfessionType::Realtor);
    fixture.wizard.select_profession(ProfessionType::Attorney);
    assert!(fixture.wizard.pending_profession().is_some());

    fixture.wizard.start_over();
    assert_eq!(fixture.wizard.pending_profession(), None);
    assert_eq!(fixture.wizard.profile().destination_environment, None);
    assert_eq!(
        fixture.wizard.select_profession(ProfessionType::Attorney),
        ProfessionRequest::Applied
    );
    Ok(())
}

#[test]
fn version_hash_returns_to_seed_value() -> Result<()> {
    let mut fixture = WizardFixture::new();
    let seed_hash = fixture.wizard.version().hash.clone();
    fixture.wizard.select_destination(Environment::Repqr);
    assert_ne!(fixture.wizard.version().hash, seed_hash);

    fixture.wizard.start_over();
    assert_eq!(fixture.wizard.version().hash, seed_hash);
    assert!(fixture.wizard.version().revision >= 2, "revisions never rewind");
    Ok(())
}
