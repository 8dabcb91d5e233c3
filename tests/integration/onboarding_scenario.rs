use anyhow::Result;
use repqr_onboarding::orchestration::{ProfessionRequest, REVEAL_MESSAGES};
use repqr_onboarding::profiles::{Badge, Environment, MediaSlot, ProfessionType, SocialPlatform};
use repqr_onboarding::Phase;
use std::time::Duration;

use crate::support::wizard_fixture::{WizardFixture, PNG_HEADER};

#[test]
fn destination_to_gated_attorney_switch() -> Result<()> {
    let mut fixture = WizardFixture::new();
    let wizard = &mut fixture.wizard;

    wizard.select_destination(Environment::Repqr);
    assert_eq!(wizard.phase(), Phase::Reveal);
    assert_eq!(
        wizard.profile().destination_environment,
        Some(Environment::Repqr)
    );
    assert!(wizard.ui().reveal_loading, "reveal should start loading");
    assert_eq!(wizard.ui().staged_text.as_deref(), Some(REVEAL_MESSAGES[0]));

    wizard.advance_clock(Duration::from_millis(2_000));
    assert!(!wizard.ui().reveal_loading, "loading should clear at 2000ms");
    assert_eq!(wizard.ui().staged_text, None);
    assert_eq!(wizard.phase(), Phase::Reveal, "reveal does not auto-advance");

    wizard.advance();
    assert_eq!(wizard.phase(), Phase::Category);

    assert_eq!(
        wizard.select_profession(ProfessionType::Realtor),
        ProfessionRequest::Applied
    );
    assert_eq!(
        wizard.profile().badges,
        vec![Badge::new("License #", ""), Badge::new("Years", "")]
    );
    assert_eq!(wizard.profile().primary_cta_label, "Schedule Showing");

    let before = wizard.profile().clone();
    assert_eq!(
        wizard.select_profession(ProfessionType::Attorney),
        ProfessionRequest::ConfirmationRequired
    );
    assert_eq!(wizard.profile(), &before, "gated switch must not touch the profile");
    assert!(wizard.view().profession_prompt_visible());

    assert_eq!(
        wizard.confirm_profession_change(),
        Some(ProfessionType::Attorney)
    );
    assert_eq!(
        wizard.profile().badges,
        vec![Badge::new("Practice Area", ""), Badge::new("Jurisdiction", "")]
    );
    assert_eq!(wizard.profile().primary_cta_label, "Schedule Consultation");
    assert!(!wizard.view().profession_prompt_visible());
    Ok(())
}

#[test]
fn completion_reaches_full_after_presence_step() -> Result<()> {
    let mut fixture = WizardFixture::at_category(Environment::Scanrep);
    let wizard = &mut fixture.wizard;
    assert_eq!(wizard.view().completion_percent, 80);

    wizard.attach_image(MediaSlot::ProfilePhoto, PNG_HEADER);
    wizard.update_social_link(
        SocialPlatform::Linkedin.into(),
        "https://linkedin.com/in/miles",
    );
    assert_eq!(wizard.view().completion_percent, 90);
    wizard.update_social_link(
        SocialPlatform::Youtube.into(),
        "https://youtube.com/@miles",
    );

    let view = wizard.view();
    assert_eq!(view.completion_percent, 100);
    assert_eq!(view.display_progress, Some(100));
    assert_eq!(view.preview.social_hint, "Great social coverage");
    Ok(())
}
