use anyhow::Result;
use repqr_onboarding::orchestration::{CtaEdit, ProfessionRequest, WizardEventType};
use repqr_onboarding::profiles::{Badge, CtaType, Environment, ProfessionType};
use repqr_onboarding::ProfilePatch;

use crate::support::wizard_fixture::WizardFixture;

#[test]
fn badge_values_follow_position_across_layouts() -> Result<()> {
    let mut fixture = WizardFixture::at_category(Environment::Repqr);
    let wizard = &mut fixture.wizard;

    wizard.select_profession(ProfessionType::Realtor);
    assert!(wizard.set_badge_value(0, "A"));
    assert!(wizard.set_badge_value(1, "B"));
    assert!(!wizard.set_badge_value(2, "C"), "realtor has two badge slots");

    wizard.select_profession(ProfessionType::Personal);
    wizard.confirm_profession_change();
    assert!(wizard.profile().badges.is_empty());

    wizard.select_profession(ProfessionType::Realtor);
    wizard.confirm_profession_change();
    assert_eq!(
        wizard.profile().badges,
        vec![Badge::new("License #", ""), Badge::new("Years", "")],
        "values dropped by the personal layout do not come back"
    );
    Ok(())
}

#[test]
fn cancel_keeps_profile_and_clears_prompt() -> Result<()> {
    let mut fixture = WizardFixture::at_category(Environment::Repqr);
    fixture.wizard.select_profession(ProfessionType::Healthcare);
    let before = fixture.wizard.profile().clone();
    let revision = fixture.wizard.version().revision;

    assert_eq!(
        fixture.wizard.select_profession(ProfessionType::Financial),
        ProfessionRequest::ConfirmationRequired
    );
    assert_eq!(
        fixture.wizard.cancel_profession_change(),
        Some(ProfessionType::Financial)
    );
    assert_eq!(fixture.wizard.profile(), &before);
    assert_eq!(fixture.wizard.version().revision, revision);
    assert_eq!(fixture.wizard.pending_profession(), None);
    assert_eq!(fixture.count(WizardEventType::ProfessionChangeCancelled), 1);

    // Nothing pending: both resolutions are no-ops.
    assert_eq!(fixture.wizard.confirm_profession_change(), None);
    assert_eq!(fixture.wizard.cancel_profession_change(), None);
    Ok(())
}

#[test]
fn same_profession_is_a_no_op_even_when_gated() -> Result<()> {
    let mut fixture = WizardFixture::at_category(Environment::Scanrep);
    fixture.wizard.select_profession(ProfessionType::Insurance);
    let events = fixture.wizard.events().len();

    assert_eq!(
        fixture.wizard.select_profession(ProfessionType::Insurance),
        ProfessionRequest::Unchanged
    );
    assert_eq!(fixture.wizard.pending_profession(), None);
    assert_eq!(fixture.wizard.events().len(), events);
    Ok(())
}

#[test]
fn customized_cta_survives_confirmed_switch() -> Result<()> {
    let mut fixture = WizardFixture::at_category(Environment::Repqr);
    let wizard = &mut fixture.wizard;
    wizard.select_profession(ProfessionType::Realtor);
    wizard.edit_cta(CtaEdit {
        label: Some("See Listings".into()),
        cta_type: Some(CtaType::Link),
        value: Some("https://example.com/listings".into()),
    });

    wizard.select_profession(ProfessionType::Attorney);
    wizard.confirm_profession_change();
    assert_eq!(wizard.profile().primary_cta_label, "See Listings");
    assert_eq!(
        wizard.profile().primary_cta_value,
        "https://example.com/listings"
    );
    assert_eq!(wizard.profile().badges[0].label, "Practice Area");
    Ok(())
}

#[test]
fn profession_set_through_field_update_follows_layout_rules() -> Result<()> {
    let mut fixture = WizardFixture::at_category(Environment::Repqr);
    fixture.wizard.update_fields(ProfilePatch {
        profession_type: Some(ProfessionType::Attorney),
        ..Default::default()
    });
    assert_eq!(
        fixture.wizard.profile().primary_cta_label,
        "Schedule Consultation"
    );
    assert_eq!(fixture.count(WizardEventType::ProfessionApplied), 1);
    assert_eq!(
        fixture.wizard.select_profession(ProfessionType::Realtor),
        ProfessionRequest::ConfirmationRequired,
        "later switches still need confirmation"
    );
    assert_eq!(fixture.wizard.profile().profession_type, ProfessionType::Attorney);
    Ok(())
}
